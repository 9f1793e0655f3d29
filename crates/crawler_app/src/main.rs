mod logging;

use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use chrono::Local;

use crawl_logging::{harvest_error, harvest_info};
use crawler_core::CrawlPlan;
use crawler_engine::{
    export_csv, BatchCrawler, FetchSettings, ReqwestFetcher, SelectorRuleExtractor,
};

// The invocation surface is exactly these four values; there is no CLI and
// no environment configuration.
const RANGE_START: u64 = 7028222;
const RANGE_END: u64 = 7028321;
const BATCH_SIZE: usize = 25;
const DELAY_MS: u64 = 200;

/// Requests allowed in flight at once.
const MAX_IN_FLIGHT: usize = 5;

const OUTPUT_DIR: &str = ".";

#[tokio::main]
async fn main() -> ExitCode {
    logging::initialize(logging::LogDestination::Both);

    let plan = match CrawlPlan::new(
        RANGE_START,
        RANGE_END,
        BATCH_SIZE,
        Duration::from_millis(DELAY_MS),
    ) {
        Ok(plan) => plan,
        Err(err) => {
            harvest_error!("invalid crawl parameters: {err}");
            return ExitCode::FAILURE;
        }
    };

    let fetcher = match ReqwestFetcher::new(FetchSettings::default()) {
        Ok(fetcher) => Arc::new(fetcher),
        Err(err) => {
            harvest_error!("could not build http client: {}: {}", err.kind, err.message);
            return ExitCode::FAILURE;
        }
    };

    let crawler = BatchCrawler::new(fetcher, Arc::new(SelectorRuleExtractor))
        .with_max_in_flight(MAX_IN_FLIGHT);

    let started = Local::now();
    let records = crawler.run(&plan).await;
    let elapsed = Local::now() - started;
    harvest_info!(
        "crawled {} records in {} ms",
        records.len(),
        elapsed.num_milliseconds()
    );

    match export_csv(Path::new(OUTPUT_DIR), &records) {
        Ok(summary) => {
            harvest_info!(
                "wrote {} rows ({} bytes) to {}",
                summary.row_count,
                summary.bytes_written,
                summary.output_path.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            harvest_error!("export failed: {err}");
            ExitCode::FAILURE
        }
    }
}
