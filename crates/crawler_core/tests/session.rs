use crawler_core::{CrawlSession, Record};

fn titled(id: u64, title: &str) -> Record {
    Record {
        title: title.to_string(),
        ..Record::blank(id)
    }
}

#[test]
fn session_completes_when_every_id_has_settled() {
    let mut session = CrawlSession::new(3);
    assert!(!session.is_complete());

    session.push(Record::blank(2));
    session.push(titled(3, "three"));
    assert_eq!(session.len(), 2);
    assert!(!session.is_complete());

    session.push(titled(1, "one"));
    assert!(session.is_complete());
}

#[test]
fn finish_sorts_by_material_number() {
    let mut session = CrawlSession::new(4);
    for id in [3, 1, 4, 2] {
        session.push(titled(id, "t"));
    }

    let records = session.finish();
    let ids: Vec<u64> = records.iter().map(|r| r.material_number).collect();
    assert_eq!(ids, vec![1, 2, 3, 4]);
}

#[test]
fn blanks_and_successes_mix_without_gaps_or_duplicates() {
    let mut session = CrawlSession::new(5);
    session.push(titled(5, "five"));
    session.push(Record::blank(1));
    session.push(titled(3, "three"));
    session.push(Record::blank(4));
    session.push(Record::blank(2));
    assert!(session.is_complete());

    let mut ids: Vec<u64> = session.collected_ids().collect();
    ids.sort_unstable();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);

    let records = session.finish();
    assert!(records[0].is_blank());
    assert_eq!(records[2].title, "three");
}
