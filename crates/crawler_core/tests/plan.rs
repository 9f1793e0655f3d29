use std::time::Duration;

use crawler_core::{CrawlPlan, PlanError, Window};

fn plan(start: u64, end: u64, batch_size: usize) -> CrawlPlan {
    CrawlPlan::new(start, end, batch_size, Duration::ZERO).unwrap()
}

#[test]
fn inverted_range_is_rejected() {
    let err = CrawlPlan::new(10, 5, 3, Duration::ZERO).unwrap_err();
    assert_eq!(err, PlanError::InvertedRange { start: 10, end: 5 });
}

#[test]
fn zero_batch_size_is_rejected() {
    let err = CrawlPlan::new(1, 5, 0, Duration::ZERO).unwrap_err();
    assert_eq!(err, PlanError::ZeroBatchSize);
}

#[test]
fn len_counts_inclusive_bounds() {
    assert_eq!(plan(1, 1, 1).len(), 1);
    assert_eq!(plan(3, 7, 2).len(), 5);
    assert_eq!(plan(100, 199, 50).len(), 100);
}

#[test]
fn windows_cover_the_range_exactly_once_in_order() {
    let windows: Vec<Window> = plan(1, 10, 4).windows().collect();
    assert_eq!(
        windows,
        vec![
            Window { start: 1, end: 4 },
            Window { start: 5, end: 8 },
            Window { start: 9, end: 10 },
        ]
    );

    // Flattened window IDs are the full range, ascending, no duplicates.
    let ids: Vec<u64> = windows.iter().flat_map(|w| w.ids()).collect();
    assert_eq!(ids, (1..=10).collect::<Vec<_>>());
}

#[test]
fn oversized_batch_clamps_to_a_single_window() {
    let windows: Vec<Window> = plan(1, 3, 100).windows().collect();
    assert_eq!(windows, vec![Window { start: 1, end: 3 }]);
    assert_eq!(windows[0].len(), 3);
}

#[test]
fn exact_multiple_produces_full_windows_only() {
    let windows: Vec<Window> = plan(1, 6, 3).windows().collect();
    assert_eq!(windows.len(), 2);
    assert!(windows.iter().all(|w| w.len() == 3));
}

#[test]
fn single_id_range_is_one_window_of_one() {
    let windows: Vec<Window> = plan(42, 42, 5).windows().collect();
    assert_eq!(windows, vec![Window { start: 42, end: 42 }]);
}
