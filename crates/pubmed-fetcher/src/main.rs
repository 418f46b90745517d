//! pubmed-fetcher - Entry Point
//!
//! Searches PubMed and lists papers with at least one author at a
//! pharmaceutical or biotech company.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use pubmed_fetcher::formatters::ConsoleFormat;
use pubmed_fetcher::{AffiliationFilter, Config, EntrezClient, ServiceError, export, pipeline};

#[derive(Parser, Debug)]
#[command(name = "pubmed-fetcher")]
#[command(about = "Fetch PubMed papers with non-academic authors")]
#[command(version)]
struct Cli {
    /// PubMed search query
    query: String,

    /// Output CSV filename
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Print debug info
    #[arg(short, long)]
    debug: bool,

    /// Maximum number of PMIDs to request
    #[arg(long, default_value_t = pubmed_fetcher::config::api::DEFAULT_MAX_RESULTS)]
    max_results: usize,

    /// Contact email sent to NCBI with every request
    #[arg(long, env = "NCBI_EMAIL")]
    email: Option<String>,

    /// NCBI API key (optional, enables higher rate limits)
    #[arg(long, env = "NCBI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Affiliation keyword; repeat to replace the built-in list
    #[arg(long = "keyword", env = "PUBMED_FETCHER_KEYWORDS", value_delimiter = ',')]
    keywords: Vec<String>,

    /// Console output format (ignored with --file)
    #[arg(long, value_enum, default_value_t = ConsoleFormat::Text)]
    format: ConsoleFormat,

    /// E-utilities base URL
    #[arg(long, env = "NCBI_EUTILS_URL", hide = true)]
    eutils_url: Option<String>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)).init();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().compact().with_writer(std::io::stderr))
            .init();
    }
}

fn build_config(cli: &Cli) -> anyhow::Result<Config> {
    let mut config =
        Config::new(cli.email.clone(), cli.api_key.clone()).with_max_results(cli.max_results)?;

    if !cli.keywords.is_empty() {
        config = config.with_keywords(&cli.keywords)?;
    }

    if let Some(url) = &cli.eutils_url {
        config = config.with_eutils_url(url);
    }

    Ok(config)
}

async fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let config = build_config(cli)?;
    if config.email.is_none() {
        tracing::warn!("no contact email configured; set NCBI_EMAIL or pass --email");
    }

    let filter = AffiliationFilter::new(&config.keywords);
    tracing::debug!(keywords = filter.keywords().len(), "affiliation filter ready");
    let client = EntrezClient::new(config.clone())?;

    let ids = pipeline::search(&client, &cli.query, config.max_results).await?;
    if ids.is_empty() {
        println!("No papers found for the query.");
        return Ok(ExitCode::FAILURE);
    }

    if cli.debug {
        println!("Found {} papers", ids.len());
    }

    let papers = pipeline::fetch_and_filter(&client, &filter, &ids).await?;
    if papers.is_empty() {
        println!("No papers with non-academic authors found.");
        return Ok(ExitCode::FAILURE);
    }

    match &cli.file {
        Some(path) => {
            export::export_to_csv(&papers, path)?;
            println!("Results saved to {}", path.display());
        }
        None => export::print_papers(&papers, cli.format, &mut std::io::stdout().lock())?,
    }

    Ok(ExitCode::SUCCESS)
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    let log_level = if cli.debug { "debug" } else { cli.log_level.as_str() };
    init_tracing(log_level, cli.json_logs);

    tracing::info!(version = env!("CARGO_PKG_VERSION"), "Starting pubmed-fetcher");

    if cli.debug {
        println!("Query: {}", cli.query);
    }

    match run(&cli).await {
        Ok(code) => code,
        Err(e) => {
            if let Some(status) = e.downcast_ref::<ServiceError>().and_then(ServiceError::status_code) {
                tracing::debug!(status, "request failed");
            }
            println!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
