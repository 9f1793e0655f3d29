//! Crawler core: pure data model, window arithmetic, and CSV encoding.
mod encode;
mod plan;
mod session;
mod types;

pub use encode::encode_csv;
pub use plan::{CrawlPlan, PlanError, Window};
pub use session::CrawlSession;
pub use types::{Record, RecordId};
