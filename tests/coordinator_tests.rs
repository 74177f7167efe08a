use chrono::Duration;

use rcheckin::core::{Coordinator, RunOutcome};
use rcheckin::models::record::DailyRecord;
use rcheckin::store::{JsonFileStore, LogStore, MemoryStore, RecordStore};

mod common;
use common::{FakeApi, at, date, token};

fn one_hour() -> Duration {
    Duration::hours(1)
}

fn store_with(day: &str, record: DailyRecord) -> MemoryStore {
    let mut log = LogStore::new();
    log.upsert(date(day), record);
    MemoryStore::new(log)
}

#[test]
fn test_no_record_signs_in() {
    let store = MemoryStore::new(LogStore::new());
    let api = FakeApi::succeeding();
    let now = at("2025-09-10 07:00");

    let outcome = Coordinator::new(&store, &api, one_hour()).run_at(&token(), now);

    assert_eq!(
        outcome,
        RunOutcome::SignedIn {
            at: now,
            persisted: true
        }
    );
    assert_eq!(api.sign_ins.get(), 1);
    assert_eq!(api.sign_outs.get(), 0);
    assert_eq!(
        store.snapshot().get(date("2025-09-10")),
        Some(&DailyRecord::signed_in(now))
    );
}

#[test]
fn test_too_early_takes_no_action() {
    let t = at("2025-09-10 07:00");
    let store = store_with("2025-09-10", DailyRecord::signed_in(t));
    let api = FakeApi::succeeding();
    let now = at("2025-09-10 07:30");

    let outcome = Coordinator::new(&store, &api, one_hour()).run_at(&token(), now);

    assert_eq!(
        outcome,
        RunOutcome::TooEarly {
            since: t,
            elapsed: Duration::minutes(30),
            remaining: Duration::minutes(30),
        }
    );
    assert!(!outcome.remote_called());
    assert_eq!(api.sign_ins.get() + api.sign_outs.get(), 0);
    assert_eq!(store.save_count(), 0);
}

#[test]
fn test_elapsed_minimum_signs_out() {
    let t = at("2025-09-10 07:00");
    let store = store_with("2025-09-10", DailyRecord::signed_in(t));
    let api = FakeApi::succeeding();
    let now = at("2025-09-10 08:30");

    let outcome = Coordinator::new(&store, &api, one_hour()).run_at(&token(), now);

    assert_eq!(
        outcome,
        RunOutcome::SignedOut {
            at: now,
            elapsed: Duration::minutes(90),
            persisted: true
        }
    );
    assert_eq!(api.sign_outs.get(), 1);
    assert_eq!(
        store.snapshot().get(date("2025-09-10")),
        Some(&DailyRecord {
            sign_in_at: Some(t),
            sign_out_at: Some(now),
        })
    );
}

#[test]
fn test_exactly_minimum_duration_signs_out() {
    let t = at("2025-09-10 07:00");
    let store = store_with("2025-09-10", DailyRecord::signed_in(t));
    let api = FakeApi::succeeding();

    let outcome =
        Coordinator::new(&store, &api, one_hour()).run_at(&token(), at("2025-09-10 08:00"));

    assert!(matches!(outcome, RunOutcome::SignedOut { .. }));
}

#[test]
fn test_signed_out_day_takes_no_action() {
    let out = at("2025-09-10 08:15");
    let store = store_with(
        "2025-09-10",
        DailyRecord {
            sign_in_at: Some(at("2025-09-10 07:00")),
            sign_out_at: Some(out),
        },
    );
    let api = FakeApi::succeeding();

    for now in ["2025-09-10 08:16", "2025-09-10 12:00", "2025-09-10 23:59"] {
        let outcome = Coordinator::new(&store, &api, one_hour()).run_at(&token(), at(now));
        assert_eq!(outcome, RunOutcome::AlreadyComplete { signed_out_at: out });
    }
    assert_eq!(api.sign_ins.get() + api.sign_outs.get(), 0);
}

#[test]
fn test_failed_sign_in_leaves_log_and_retries_next_run() {
    let store = MemoryStore::new(LogStore::new());
    let api = FakeApi::failing();
    let coordinator = Coordinator::new(&store, &api, one_hour());

    let first = coordinator.run_at(&token(), at("2025-09-10 07:00"));
    assert_eq!(first, RunOutcome::SignInFailed);
    assert!(store.snapshot().get(date("2025-09-10")).is_none());
    assert_eq!(store.save_count(), 0);

    api.sign_in_ok.set(true);
    let second = coordinator.run_at(&token(), at("2025-09-10 08:00"));
    assert!(matches!(second, RunOutcome::SignedIn { .. }));
    assert_eq!(api.sign_ins.get(), 2);
}

#[test]
fn test_failed_sign_out_leaves_record_signed_in() {
    let t = at("2025-09-10 07:00");
    let store = store_with("2025-09-10", DailyRecord::signed_in(t));
    let api = FakeApi::failing();

    let outcome =
        Coordinator::new(&store, &api, one_hour()).run_at(&token(), at("2025-09-10 09:00"));

    assert_eq!(
        outcome,
        RunOutcome::SignOutFailed {
            elapsed: Duration::hours(2)
        }
    );
    assert_eq!(
        store.snapshot().get(date("2025-09-10")),
        Some(&DailyRecord::signed_in(t))
    );
}

#[test]
fn test_other_days_are_ignored() {
    // Yesterday was left signed in; today starts from scratch.
    let store = store_with("2025-09-09", DailyRecord::signed_in(at("2025-09-09 07:00")));
    let api = FakeApi::succeeding();

    let outcome =
        Coordinator::new(&store, &api, one_hour()).run_at(&token(), at("2025-09-10 07:00"));

    assert!(matches!(outcome, RunOutcome::SignedIn { .. }));
    let log = store.snapshot();
    assert_eq!(log.len(), 2);
    assert_eq!(
        log.get(date("2025-09-09")),
        Some(&DailyRecord::signed_in(at("2025-09-09 07:00")))
    );
}

#[test]
fn test_hourly_schedule_signs_in_and_out_once() {
    let store = MemoryStore::new(LogStore::new());
    let api = FakeApi::succeeding();
    let coordinator = Coordinator::new(&store, &api, one_hour());

    let mut outcomes = Vec::new();
    for minute in (0..24 * 60).step_by(20) {
        let now = date("2025-09-10").and_hms_opt(minute / 60, minute % 60, 0).unwrap();
        outcomes.push(coordinator.run_at(&token(), now));
    }

    let sign_ins = outcomes
        .iter()
        .filter(|o| matches!(o, RunOutcome::SignedIn { .. }))
        .count();
    let sign_outs = outcomes
        .iter()
        .filter(|o| matches!(o, RunOutcome::SignedOut { .. }))
        .count();

    assert_eq!((sign_ins, sign_outs), (1, 1));
    assert_eq!(api.sign_ins.get(), 1);
    assert_eq!(api.sign_outs.get(), 1);

    let record = *store.snapshot().get(date("2025-09-10")).unwrap();
    assert_eq!(record.sign_in_at, Some(at("2025-09-10 00:00")));
    assert_eq!(record.sign_out_at, Some(at("2025-09-10 01:00")));
}

#[test]
fn test_flaky_remote_never_double_submits() {
    let store = MemoryStore::new(LogStore::new());
    let api = FakeApi::default();
    let coordinator = Coordinator::new(&store, &api, one_hour());

    let mut successes_in = 0;
    let mut successes_out = 0;
    for (i, minute) in (0..24 * 60).step_by(15).enumerate() {
        api.sign_in_ok.set(i % 3 == 2);
        api.sign_out_ok.set(i % 4 == 3);
        let now = date("2025-09-10").and_hms_opt(minute / 60, minute % 60, 0).unwrap();
        match coordinator.run_at(&token(), now) {
            RunOutcome::SignedIn { .. } => successes_in += 1,
            RunOutcome::SignedOut { .. } => successes_out += 1,
            _ => {}
        }
    }

    assert_eq!(successes_in, 1);
    assert_eq!(successes_out, 1);
    let record = *store.snapshot().get(date("2025-09-10")).unwrap();
    assert!(record.sign_out_at >= record.sign_in_at);
}

#[test]
fn test_save_failure_is_reported_in_outcome() {
    let store = MemoryStore::new(LogStore::new());
    store.set_fail_saves(true);
    let api = FakeApi::succeeding();
    let now = at("2025-09-10 07:00");

    let outcome = Coordinator::new(&store, &api, one_hour()).run_at(&token(), now);

    assert_eq!(
        outcome,
        RunOutcome::SignedIn {
            at: now,
            persisted: false
        }
    );
}

#[test]
fn test_zero_minimum_duration_allows_immediate_sign_out() {
    let t = at("2025-09-10 07:00");
    let store = store_with("2025-09-10", DailyRecord::signed_in(t));
    let api = FakeApi::succeeding();

    let outcome = Coordinator::new(&store, &api, Duration::zero()).run_at(&token(), t);
    assert!(matches!(outcome, RunOutcome::SignedOut { .. }));
}

#[test]
fn test_full_cycle_persists_across_runs_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("check_in_log.json");
    let api = FakeApi::succeeding();

    {
        let store = JsonFileStore::new(&path);
        Coordinator::new(&store, &api, one_hour()).run_at(&token(), at("2025-09-10 07:00"));
    }
    {
        // A fresh process: new store handle, same file.
        let store = JsonFileStore::new(&path);
        let outcome =
            Coordinator::new(&store, &api, one_hour()).run_at(&token(), at("2025-09-10 08:05"));
        assert!(matches!(outcome, RunOutcome::SignedOut { .. }));
    }

    let record = *JsonFileStore::new(&path)
        .load()
        .get(date("2025-09-10"))
        .unwrap();
    assert_eq!(record.sign_in_at, Some(at("2025-09-10 07:00")));
    assert_eq!(record.sign_out_at, Some(at("2025-09-10 08:05")));
}

#[test]
fn test_inconsistent_record_does_not_erase_history() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("check_in_log.json");
    std::fs::write(
        &path,
        r#"{
    "2025-09-01": { "sign_in": "2025-09-01T07:00:00", "sign_out": "2025-09-01T08:10:00" },
    "2025-09-02": { "sign_in": "2025-09-02T07:00:00", "sign_out": "2025-09-02T08:05:00" },
    "2025-09-03": { "sign_in": "2025-09-03T09:00:00", "sign_out": "2025-09-03T08:00:00" }
}"#,
    )
    .unwrap();

    let store = JsonFileStore::new(&path);
    let api = FakeApi::succeeding();
    let outcome =
        Coordinator::new(&store, &api, one_hour()).run_at(&token(), at("2025-09-10 07:00"));
    assert!(matches!(outcome, RunOutcome::SignedIn { .. }));

    let log = JsonFileStore::new(&path).load();
    assert_eq!(log.len(), 4);
    assert_eq!(
        log.get(date("2025-09-01")).unwrap().sign_out_at,
        Some(at("2025-09-01 08:10"))
    );
    assert!(log.get(date("2025-09-02")).is_some());
    assert!(log.get(date("2025-09-03")).is_some());
}

#[test]
fn test_inconsistent_record_for_today_counts_as_complete() {
    let store = store_with(
        "2025-09-10",
        DailyRecord {
            sign_in_at: None,
            sign_out_at: Some(at("2025-09-10 08:00")),
        },
    );
    let api = FakeApi::succeeding();

    let outcome =
        Coordinator::new(&store, &api, one_hour()).run_at(&token(), at("2025-09-10 09:00"));

    assert!(matches!(outcome, RunOutcome::AlreadyComplete { .. }));
    assert_eq!(api.sign_ins.get() + api.sign_outs.get(), 0);
}
