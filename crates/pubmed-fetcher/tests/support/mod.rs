//! Shared fixtures: E-utilities payload builders and mock mounting.
#![allow(dead_code)]

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Author fixture: (fore name, last name, affiliation).
pub type AuthorFixture<'a> = (&'a str, &'a str, Option<&'a str>);

/// esearch JSON reply listing `ids`.
pub fn esearch_json(ids: &[&str]) -> serde_json::Value {
    json!({
        "header": {"type": "esearch", "version": "0.3"},
        "esearchresult": {
            "count": ids.len().to_string(),
            "retmax": ids.len().to_string(),
            "retstart": "0",
            "idlist": ids,
            "translationset": [],
            "querytranslation": "test"
        }
    })
}

/// One `<PubmedArticle>` element.
pub fn article_xml(pmid: &str, title: &str, year: Option<&str>, authors: &[AuthorFixture<'_>]) -> String {
    let pub_date = year.map_or_else(String::new, |y| format!("<PubDate><Year>{y}</Year></PubDate>"));

    let author_list = if authors.is_empty() {
        String::new()
    } else {
        let items: String = authors
            .iter()
            .map(|(fore, last, affiliation)| {
                let affiliation = affiliation.map_or_else(String::new, |a| {
                    format!("<AffiliationInfo><Affiliation>{a}</Affiliation></AffiliationInfo>")
                });
                format!(
                    "<Author ValidYN=\"Y\"><LastName>{last}</LastName><ForeName>{fore}</ForeName>{affiliation}</Author>"
                )
            })
            .collect();
        format!("<AuthorList CompleteYN=\"Y\">{items}</AuthorList>")
    };

    format!(
        "<PubmedArticle><MedlineCitation Status=\"MEDLINE\"><PMID Version=\"1\">{pmid}</PMID>\
         <Article><Journal><JournalIssue>{pub_date}</JournalIssue></Journal>\
         <ArticleTitle>{title}</ArticleTitle>{author_list}</Article>\
         </MedlineCitation></PubmedArticle>"
    )
}

/// Full efetch document wrapping `articles`.
pub fn article_set_xml(articles: &[String]) -> String {
    format!(
        "<?xml version=\"1.0\" ?>\n<PubmedArticleSet>{}</PubmedArticleSet>",
        articles.concat()
    )
}

/// The two-record scenario: PMID 1 has a Pfizer author, PMID 2 only an MIT author.
pub fn scenario_xml() -> String {
    article_set_xml(&[
        article_xml("1", "Kinase inhibitor trial", Some("2023"), &[("Jane", "Doe", Some("Pfizer Inc., NY"))]),
        article_xml("2", "Campus study", Some("2022"), &[("John", "Smith", Some("MIT, Cambridge"))]),
    ])
}

/// Mount an esearch reply.
pub async fn mount_esearch(server: &MockServer, ids: &[&str]) {
    Mock::given(method("GET"))
        .and(path("/esearch.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_json(esearch_json(ids)))
        .mount(server)
        .await;
}

/// Mount an efetch reply.
pub async fn mount_efetch(server: &MockServer, xml: String) {
    Mock::given(method("GET"))
        .and(path("/efetch.fcgi"))
        .respond_with(ResponseTemplate::new(200).set_body_raw(xml, "text/xml"))
        .mount(server)
        .await;
}
