use std::time::Duration;

use crate::types::RecordId;

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("range start {start} is past range end {end}")]
    InvertedRange { start: RecordId, end: RecordId },
    #[error("batch size must be at least 1")]
    ZeroBatchSize,
}

/// A contiguous run of IDs processed together before advancing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: RecordId,
    pub end: RecordId,
}

impl Window {
    pub fn ids(&self) -> impl Iterator<Item = RecordId> {
        self.start..=self.end
    }

    pub fn len(&self) -> usize {
        (self.end - self.start + 1) as usize
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

/// Validated parameters for one crawl run: an inclusive ID range, the number
/// of requests issued per window, and the pause between consecutive issues.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlPlan {
    start: RecordId,
    end: RecordId,
    batch_size: usize,
    delay: Duration,
}

impl CrawlPlan {
    /// Rejects inverted ranges and zero batch sizes up front instead of
    /// letting them degenerate into an empty or endless run.
    pub fn new(
        start: RecordId,
        end: RecordId,
        batch_size: usize,
        delay: Duration,
    ) -> Result<Self, PlanError> {
        if start > end {
            return Err(PlanError::InvertedRange { start, end });
        }
        if batch_size == 0 {
            return Err(PlanError::ZeroBatchSize);
        }
        Ok(Self {
            start,
            end,
            batch_size,
            delay,
        })
    }

    pub fn start(&self) -> RecordId {
        self.start
    }

    pub fn end(&self) -> RecordId {
        self.end
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Number of IDs the run will request.
    pub fn len(&self) -> usize {
        (self.end - self.start + 1) as usize
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Ascending, non-overlapping windows covering the range exactly once.
    /// The final window is clamped to the range end, so a batch size larger
    /// than the range yields a single window.
    pub fn windows(&self) -> impl Iterator<Item = Window> {
        let step = self.batch_size as RecordId;
        let end = self.end;
        (self.start..=end)
            .step_by(self.batch_size)
            .map(move |ws| Window {
                start: ws,
                end: ws.saturating_add(step - 1).min(end),
            })
    }
}
