use crate::types::{Record, RecordId};

/// Accumulator for one crawl run. Records arrive in settlement order, which
/// is not ID order; the session only promises that the run is done once it
/// holds exactly one record per requested ID.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlSession {
    expected: usize,
    records: Vec<Record>,
}

impl CrawlSession {
    pub fn new(expected: usize) -> Self {
        Self {
            expected,
            records: Vec::with_capacity(expected),
        }
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.records.len() == self.expected
    }

    /// IDs collected so far, unordered.
    pub fn collected_ids(&self) -> impl Iterator<Item = RecordId> + '_ {
        self.records.iter().map(|r| r.material_number)
    }

    /// Consumes the session, sorting by ID so the export is deterministic
    /// regardless of settlement order.
    pub fn finish(mut self) -> Vec<Record> {
        self.records.sort_unstable_by_key(|r| r.material_number);
        self.records
    }
}
