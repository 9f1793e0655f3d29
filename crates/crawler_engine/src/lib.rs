//! Crawler engine: IO pipeline for batched recipe retrieval.
mod crawl;
mod export;
mod extract;
mod fetch;
mod persist;

pub use crawl::BatchCrawler;
pub use export::{export_csv, ExportError, ExportSummary, EXPORT_FILENAME};
pub use extract::{FieldExtractor, SelectorRuleExtractor};
pub use fetch::{
    FailureKind, FetchError, FetchSettings, Fetcher, RecipePayload, ReqwestFetcher,
};
pub use persist::{ensure_output_dir, AtomicFileWriter, PersistError};
