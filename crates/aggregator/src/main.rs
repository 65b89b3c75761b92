//! Main entry point for the gazette search.

use aggregator::{AggregateResult, SearchService, SEARCH_TERM};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use gazette_sources::{GazetteClient, Origin, SourceFetcher};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build a source client, honoring a base-URL override from the environment.
fn build_client(origin: Origin, env_var: &str) -> GazetteClient {
    match std::env::var(env_var) {
        Ok(url) => GazetteClient::with_base_url(origin, url),
        Err(_) => GazetteClient::for_origin(origin),
    }
}

fn print_result(result: &AggregateResult, date: NaiveDate) {
    if result.records.is_empty() {
        if result.failures.is_empty() {
            println!("No {} entries found for {}.", SEARCH_TERM, date);
        } else {
            println!("No results.");
        }
    } else {
        let noun = if result.records.len() == 1 {
            "entry"
        } else {
            "entries"
        };
        println!(
            "Found {} {} {} for {}.",
            result.records.len(),
            SEARCH_TERM,
            noun,
            date
        );
    }

    if !result.failures.is_empty() {
        println!("Some sources failed:");
        for failure in &result.failures {
            println!("  {}: {}", failure.origin, failure.message);
        }
    }

    for record in &result.records {
        println!();
        println!("[{}] {}", record.origin, record.title);
        println!("  Identificador: {}", record.identifier);
        if let Some(control) = &record.control {
            println!("  Control: {}", control);
        }
        if let Some(pdf) = &record.pdf {
            if let Some(text) = &pdf.text {
                match (&pdf.size_kbytes, pdf.size_bytes) {
                    (Some(kbytes), _) => println!("  PDF: {} ({} KB)", text, kbytes),
                    (None, Some(bytes)) => {
                        println!("  PDF: {} ({} KB)", text, (bytes as f64 / 1024.0).round())
                    }
                    (None, None) => println!("  PDF: {}", text),
                }
            }
        }
        if let Some(url) = &record.html_url {
            println!("  HTML: {}", url);
        }
        if let Some(url) = &record.xml_url {
            println!("  XML: {}", url);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Date from the first argument (YYYY-MM-DD), defaulting to today.
    let date = match std::env::args().nth(1) {
        Some(arg) => NaiveDate::parse_from_str(&arg, "%Y-%m-%d")?,
        None => Local::now().date_naive(),
    };

    info!("Searching BOE + BORME for {:?} on {}", SEARCH_TERM, date);

    let boe = build_client(Origin::Boe, "BOE_API_BASE_URL");
    let borme = build_client(Origin::Borme, "BORME_API_BASE_URL");
    let sources: Vec<Arc<dyn SourceFetcher>> = vec![Arc::new(boe), Arc::new(borme)];

    let service = SearchService::new(sources);
    let result = service.search(date).await;

    print_result(&result, date);

    Ok(())
}
