//! efetch XML decoding.

use quick_xml::events::Event;
use quick_xml::reader::Reader;
use quick_xml::writer::Writer;

use crate::error::ServiceResult;
use crate::models::PubmedArticleSet;

/// Elements read as plain text whatever markup they contain (`<i>`, `<sup>`, MathML).
const MIXED_CONTENT: &[&[u8]] = &[b"ArticleTitle", b"Affiliation"];

/// Decode an efetch `PubmedArticleSet` document.
///
/// Nested elements inside titles and affiliations are flattened first, so
/// those fields decode as the concatenation of their descendant text.
pub fn parse_article_set(xml: &str) -> ServiceResult<PubmedArticleSet> {
    let xml = flatten_mixed_content(xml).map_err(quick_xml::DeError::from)?;
    Ok(quick_xml::de::from_str(&xml)?)
}

fn flatten_mixed_content(xml: &str) -> Result<String, quick_xml::Error> {
    let mut reader = Reader::from_str(xml);
    let mut writer = Writer::new(Vec::with_capacity(xml.len()));
    // Element depth below the current mixed-content element; 0 when outside one.
    let mut depth = 0usize;

    loop {
        let event = reader.read_event()?;
        match &event {
            Event::Eof => break,
            Event::Start(e) if depth == 0 => {
                if MIXED_CONTENT.contains(&e.name().as_ref()) {
                    depth = 1;
                }
            }
            Event::Start(_) => {
                depth += 1;
                continue;
            }
            Event::End(_) if depth > 1 => {
                depth -= 1;
                continue;
            }
            Event::End(_) if depth == 1 => depth = 0,
            Event::Empty(_) | Event::Comment(_) | Event::PI(_) if depth > 0 => continue,
            _ => {}
        }
        writer.write_event(event)?;
    }

    Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn single_article(title: &str, affiliation: &str) -> String {
        format!(
            "<PubmedArticleSet><PubmedArticle><MedlineCitation><PMID>5</PMID><Article>\
             {title}<AuthorList><Author><LastName>Doe</LastName>\
             <AffiliationInfo>{affiliation}</AffiliationInfo></Author></AuthorList>\
             </Article></MedlineCitation></PubmedArticle></PubmedArticleSet>"
        )
    }

    #[test]
    fn test_flatten_keeps_descendant_text() {
        let flat = flatten_mixed_content(
            "<ArticleTitle>Role of <i>E. coli</i> in CO<sub>2</sub></ArticleTitle><Other><i>kept</i></Other>",
        )
        .unwrap();
        assert_eq!(flat, "<ArticleTitle>Role of E. coli in CO2</ArticleTitle><Other><i>kept</i></Other>");
    }

    #[test]
    fn test_parse_title_with_mathml() {
        let xml = single_article(
            "<ArticleTitle>Effect of <mml:math xmlns:mml=\"http://www.w3.org/1998/Math/MathML\">\
             <mml:mi>x</mml:mi><mml:mo>+</mml:mo><mml:mn>1</mml:mn></mml:math> on y</ArticleTitle>",
            "<Affiliation>Novartis<sup>1</sup>, Basel<br/></Affiliation>",
        );

        let set = parse_article_set(&xml).unwrap();
        let article = &set.articles[0];
        assert_eq!(article.title(), "Effect of x+1 on y");
        assert_eq!(article.authors()[0].first_affiliation(), Some("Novartis1, Basel"));
    }

    #[test]
    fn test_parse_empty_and_escaped_titles() {
        let set = parse_article_set(&single_article("<ArticleTitle/>", "<Affiliation/>")).unwrap();
        assert_eq!(set.articles[0].title(), "");

        let xml = single_article(
            "<ArticleTitle>Na<sup>+</sup>/K<sup>+</sup> &amp; cells</ArticleTitle>",
            "<Affiliation>Lilly &amp; Co, IN</Affiliation>",
        );
        let set = parse_article_set(&xml).unwrap();
        assert_eq!(set.articles[0].title(), "Na+/K+ & cells");
        assert_eq!(set.articles[0].authors()[0].first_affiliation(), Some("Lilly & Co, IN"));
    }

    #[test]
    fn test_parse_title_with_inline_markup() {
        let xml = r#"<?xml version="1.0" ?>
<!DOCTYPE PubmedArticleSet PUBLIC "-//NLM//DTD PubMedArticle, 1st January 2024//EN" "https://dtd.nlm.nih.gov/ncbi/pubmed/out/pubmed_240101.dtd">
<PubmedArticleSet>
  <PubmedArticle>
    <MedlineCitation Status="MEDLINE" Owner="NLM">
      <PMID Version="1">100</PMID>
      <Article PubModel="Print">
        <Journal>
          <JournalIssue CitedMedium="Internet">
            <Volume>3</Volume>
            <PubDate><Year>2021</Year><Month>Mar</Month></PubDate>
          </JournalIssue>
          <Title>Journal of Tests</Title>
        </Journal>
        <ArticleTitle>Growth of <i>E. coli</i> under CO<sub>2</sub>.</ArticleTitle>
        <AuthorList CompleteYN="Y">
          <Author ValidYN="Y">
            <LastName>Doe</LastName>
            <ForeName>Jane</ForeName>
            <Initials>J</Initials>
            <AffiliationInfo><Affiliation>Pfizer Inc., NY</Affiliation></AffiliationInfo>
          </Author>
        </AuthorList>
      </Article>
    </MedlineCitation>
    <PubmedData><PublicationStatus>ppublish</PublicationStatus></PubmedData>
  </PubmedArticle>
</PubmedArticleSet>"#;

        let set = parse_article_set(xml).unwrap();
        let article = &set.articles[0];
        assert_eq!(article.pmid(), "100");
        assert_eq!(article.title(), "Growth of E. coli under CO2.");
        assert_eq!(article.publication_year(), "2021");
        assert_eq!(article.authors()[0].first_affiliation(), Some("Pfizer Inc., NY"));
    }

    #[test]
    fn test_book_articles_are_skipped() {
        let xml = r#"<PubmedArticleSet>
  <PubmedArticle><MedlineCitation><PMID>1</PMID><Article><ArticleTitle>One</ArticleTitle></Article></MedlineCitation></PubmedArticle>
  <PubmedBookArticle><BookDocument><PMID>2</PMID></BookDocument></PubmedBookArticle>
  <PubmedArticle><MedlineCitation><PMID>3</PMID><Article><ArticleTitle>Three</ArticleTitle></Article></MedlineCitation></PubmedArticle>
</PubmedArticleSet>"#;

        let set = parse_article_set(xml).unwrap();
        let ids: Vec<&str> = set.articles.iter().map(|a| a.pmid()).collect();
        assert_eq!(ids, vec!["1", "3"]);
    }

    #[test]
    fn test_empty_set() {
        let set = parse_article_set("<PubmedArticleSet></PubmedArticleSet>").unwrap();
        assert!(set.articles.is_empty());
    }
}
