use std::sync::Arc;
use std::time::Duration;

use tokio::sync::Semaphore;
use tokio::task::JoinHandle;

use crawl_logging::{harvest_debug, harvest_info, harvest_warn};
use crawler_core::{CrawlPlan, CrawlSession, Record, RecordId, Window};

use crate::extract::FieldExtractor;
use crate::fetch::Fetcher;

/// Drives one crawl run: windows in ascending order, one spawned request per
/// ID with a pacing pause between consecutive issues, and a full await of
/// every handle before the next window starts. A window is closed only once
/// all of its requests have settled, in whatever order the network produced.
pub struct BatchCrawler {
    fetcher: Arc<dyn Fetcher>,
    extractor: Arc<dyn FieldExtractor>,
    limiter: Option<Arc<Semaphore>>,
}

impl BatchCrawler {
    pub fn new(fetcher: Arc<dyn Fetcher>, extractor: Arc<dyn FieldExtractor>) -> Self {
        Self {
            fetcher,
            extractor,
            limiter: None,
        }
    }

    /// Caps how many requests may be in flight at once. Without a cap a
    /// whole window can be outstanding simultaneously when the delay is
    /// small relative to request latency.
    pub fn with_max_in_flight(mut self, max: usize) -> Self {
        self.limiter = Some(Arc::new(Semaphore::new(max.max(1))));
        self
    }

    /// Runs the whole plan and returns one record per requested ID, sorted
    /// by ID. Individual request failures degrade to blank records; the run
    /// itself cannot fail.
    pub async fn run(&self, plan: &CrawlPlan) -> Vec<Record> {
        harvest_info!(
            "starting crawl of {} ids in {}..={}",
            plan.len(),
            plan.start(),
            plan.end()
        );
        let mut session = CrawlSession::new(plan.len());

        for window in plan.windows() {
            self.run_window(window, plan.delay(), &mut session).await;
            harvest_debug!(
                "window {}..={} settled ({}/{} collected)",
                window.start,
                window.end,
                session.len(),
                plan.len()
            );
        }

        debug_assert!(session.is_complete());
        harvest_info!("crawl complete: {} records", session.len());
        session.finish()
    }

    async fn run_window(&self, window: Window, delay: Duration, session: &mut CrawlSession) {
        let mut handles: Vec<(RecordId, JoinHandle<Record>)> = Vec::with_capacity(window.len());
        for id in window.ids() {
            if id > window.start && !delay.is_zero() {
                tokio::time::sleep(delay).await;
            }
            handles.push((id, self.spawn_request(id)));
        }

        // Every issued request settles exactly once; a panicked task counts
        // as a failure for its ID rather than wedging the window.
        for (id, handle) in handles {
            let record = match handle.await {
                Ok(record) => record,
                Err(err) => {
                    harvest_warn!("request task for id {id} did not settle cleanly: {err}");
                    Record::blank(id)
                }
            };
            session.push(record);
        }
    }

    fn spawn_request(&self, id: RecordId) -> JoinHandle<Record> {
        let fetcher = Arc::clone(&self.fetcher);
        let extractor = Arc::clone(&self.extractor);
        let limiter = self.limiter.clone();
        tokio::spawn(async move {
            let _permit = match &limiter {
                Some(semaphore) => semaphore.acquire().await.ok(),
                None => None,
            };
            match fetcher.fetch(id).await {
                Ok(payload) => extractor.extract(id, &payload),
                Err(err) => {
                    harvest_warn!("fetch failed for id {}: {}: {}", id, err.kind, err.message);
                    Record::blank(id)
                }
            }
        })
    }
}
