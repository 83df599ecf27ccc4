mod common;
use common::setup_test_db;

use chrono::{DateTime, Local, NaiveDate};
use rtabletimer::core::{batch, clock, seats};
use rtabletimer::core::seats::SeatUp;
use rtabletimer::errors::AppError;
use rtabletimer::models::{BuyInValue, SeatStatus, Table, TransferNote};
use rtabletimer::store;
use rtabletimer::store::state::{load_tables, save_tables};

/// Fixed local timestamp on a quiet June afternoon
fn ts(h: u32, m: u32) -> DateTime<Local> {
    NaiveDate::from_ymd_opt(2025, 6, 1)
        .unwrap()
        .and_hms_opt(h, m, 0)
        .unwrap()
        .and_local_timezone(Local)
        .unwrap()
}

fn seat_applied(table: &Table, seat: u8, now: DateTime<Local>) -> Table {
    match seats::seat_up(table, seat, now).expect("seat up") {
        SeatUp::Applied(t) => t,
        SeatUp::TransferPending { .. } => panic!("unexpected transfer"),
    }
}

/// A running table with Alice seated on seat 1 since 12:00
fn table_with_alice() -> Table {
    let t = Table::fresh("T1", "Table 1");
    let t = clock::start_or_resume(&t, ts(12, 0));
    let t = seats::set_member(&t, 1, "Alice").expect("set member");
    seat_applied(&t, 1, ts(12, 0))
}

#[test]
fn test_clock_accumulates_across_pauses() {
    let t = Table::fresh("T1", "Table 1");
    assert_eq!(t.elapsed_at(ts(12, 0)), 0);

    let t = clock::start_or_resume(&t, ts(12, 0));
    assert!(t.is_running);
    assert_eq!(t.opened_at.as_deref(), Some("2025-06-01 12:00:00"));
    assert_eq!(t.elapsed_at(ts(12, 30)), 1800);

    let t = clock::pause(&t, ts(12, 30)).expect("pause");
    assert!(!t.is_running);
    assert_eq!(t.elapsed_seconds, 1800);
    // frozen: the projection no longer moves
    assert_eq!(t.elapsed_at(ts(13, 0)), 1800);

    let t = clock::start_or_resume(&t, ts(13, 0));
    assert_eq!(t.elapsed_at(ts(13, 10)), 2400);
    // resuming keeps the original opening timestamp
    assert_eq!(t.opened_at.as_deref(), Some("2025-06-01 12:00:00"));

    let t = clock::stop(&t, ts(13, 10)).expect("stop");
    assert!(!t.is_running);
    assert_eq!(t.elapsed_seconds, 2400);
    assert_eq!(t.closed_at.as_deref(), Some("2025-06-01 13:10:00"));
}

#[test]
fn test_clock_never_goes_backwards() {
    let t = Table::fresh("T1", "Table 1");
    let t = clock::start_or_resume(&t, ts(12, 0));

    // a clock step backwards projects as zero, not as a negative value
    assert_eq!(t.elapsed_at(ts(11, 0)), 0);

    let t = clock::pause(&t, ts(11, 0)).expect("pause");
    assert_eq!(t.elapsed_seconds, 0);
}

#[test]
fn test_pause_rejected_while_seated() {
    let t = table_with_alice();

    let err = clock::pause(&t, ts(13, 0)).unwrap_err();
    assert!(matches!(
        err,
        AppError::SeatedSeatsBlockPause { seated: 1, .. }
    ));

    // resting seats do not block the pause
    let t = seats::rest(&t, 1, ts(12, 30)).expect("rest");
    let t = clock::pause(&t, ts(13, 0)).expect("pause with resting seat");
    assert_eq!(t.elapsed_seconds, 3600);
}

#[test]
fn test_seat_lifecycle_produces_one_record() {
    let t = table_with_alice();
    let t = seats::rest(&t, 1, ts(12, 30)).expect("rest");
    let t = seat_applied(&t, 1, ts(12, 40));
    let t = seats::leave(&t, 1, ts(13, 0)).expect("leave");

    assert_eq!(t.ledger.len(), 1);
    let r = &t.ledger[0];
    assert_eq!(r.table_id, "T1");
    assert_eq!(r.table_name, "Table 1");
    assert_eq!(r.seat_id, 1);
    assert_eq!(r.member, "Alice");
    assert_eq!(r.started_at, "2025-06-01 12:00:00");
    assert_eq!(r.ended_at, "2025-06-01 13:00:00");
    assert_eq!(r.active_seconds, 3000);
    assert_eq!(r.rest_seconds, 600);
    assert_eq!(r.duration_seconds(), 3600);
    assert_eq!(r.ended_date(), "2025-06-01");
    assert_eq!(r.buy_in, BuyInValue::Amount(0.0));
    assert_eq!(r.transfer, None);

    // the seat is back to its idle defaults
    let s = t.seat(1).expect("seat 1");
    assert_eq!(s.status, SeatStatus::Idle);
    assert!(s.member.is_empty());
    assert_eq!(s.buy_in, 0.0);
    assert_eq!(s.session_start, None);
    assert_eq!(s.last_active_start, None);
}

#[test]
fn test_seat_projections_freeze_and_grow() {
    let t = table_with_alice();
    let s = t.seat(1).expect("seat 1");
    assert_eq!(s.active_seconds_at(ts(12, 30)), 1800);
    assert_eq!(s.rest_seconds_at(ts(12, 30)), 0);

    let t = seats::rest(&t, 1, ts(12, 30)).expect("rest");
    let s = t.seat(1).expect("seat 1");
    // active frozen at the fold, rest growing from its anchor
    assert_eq!(s.active_seconds_at(ts(12, 45)), 1800);
    assert_eq!(s.rest_seconds_at(ts(12, 45)), 900);
    assert_eq!(s.session_seconds_at(ts(12, 45)), 2700);

    // negative skew clamps to the frozen counters
    assert_eq!(s.active_seconds_at(ts(11, 0)), 1800);
    assert_eq!(s.rest_seconds_at(ts(12, 20)), 0);
}

#[test]
fn test_seat_up_again_keeps_the_anchor() {
    let t = table_with_alice();
    let t = seat_applied(&t, 1, ts(12, 30));

    let s = t.seat(1).expect("seat 1");
    assert_eq!(s.last_active_start, Some(ts(12, 0)));
    assert_eq!(s.active_seconds_at(ts(13, 0)), 3600);
    assert!(t.ledger.is_empty());
}

#[test]
fn test_seat_up_preconditions() {
    let stopped = Table::fresh("T1", "Table 1");
    let err = seats::seat_up(&stopped, 1, ts(12, 0)).unwrap_err();
    assert!(matches!(err, AppError::TableNotRunning(_)));

    let running = clock::start_or_resume(&stopped, ts(12, 0));
    let err = seats::seat_up(&running, 1, ts(12, 0)).unwrap_err();
    assert!(matches!(err, AppError::EmptyMember { seat: 1, .. }));

    let err = seats::seat_up(&running, 10, ts(12, 0)).unwrap_err();
    assert!(matches!(err, AppError::InvalidSeat(_)));
}

#[test]
fn test_duplicate_member_reports_a_pending_transfer() {
    let t = table_with_alice();
    let t = seats::set_member(&t, 3, "Alice").expect("set member");

    match seats::seat_up(&t, 3, ts(12, 30)).expect("seat up") {
        SeatUp::TransferPending {
            member,
            from_seat,
            to_seat,
        } => {
            assert_eq!(member, "Alice");
            assert_eq!(from_seat, 1);
            assert_eq!(to_seat, 3);
        }
        SeatUp::Applied(_) => panic!("expected a pending transfer"),
    }
}

#[test]
fn test_commit_transfer_annotates_both_sides() {
    let t = table_with_alice();
    let t = seats::add_buy_in(&t, 1, 100.0).expect("buy in");
    let t = seats::set_member(&t, 3, "Alice").expect("set member");

    let t = seats::commit_transfer(&t, 1, 3, ts(12, 30)).expect("transfer");

    // the closing record points at the destination and moves the chips
    assert_eq!(t.ledger.len(), 1);
    let r = &t.ledger[0];
    assert_eq!(r.seat_id, 1);
    assert_eq!(r.active_seconds, 1800);
    assert_eq!(r.buy_in, BuyInValue::TransferOut(3));
    assert_eq!(r.transfer, Some(TransferNote::To(3)));

    // source is cleared, destination carries the member and the chips
    let from = t.seat(1).expect("seat 1");
    assert_eq!(from.status, SeatStatus::Idle);
    assert!(from.member.is_empty());
    assert_eq!(from.buy_in, 0.0);

    let to = t.seat(3).expect("seat 3");
    assert_eq!(to.status, SeatStatus::Seated);
    assert_eq!(to.member, "Alice");
    assert_eq!(to.buy_in, 100.0);
    assert_eq!(to.transfer_from, Some(1));
    assert_eq!(to.session_start, Some(ts(12, 30)));

    // the eventual leave points back at the source
    let t = seats::leave(&t, 3, ts(13, 0)).expect("leave");
    let r = &t.ledger[1];
    assert_eq!(r.seat_id, 3);
    assert_eq!(r.active_seconds, 1800);
    assert_eq!(r.buy_in, BuyInValue::Amount(100.0));
    assert_eq!(r.transfer, Some(TransferNote::From(1)));
}

#[test]
fn test_commit_transfer_conflicts() {
    let t = table_with_alice();

    let err = seats::commit_transfer(&t, 1, 1, ts(12, 30)).unwrap_err();
    assert!(matches!(err, AppError::TransferConflict(_)));

    // destination already taken
    let occupied = seats::set_member(&t, 3, "Bob").expect("set member");
    let occupied = seat_applied(&occupied, 3, ts(12, 10));
    let err = seats::commit_transfer(&occupied, 1, 3, ts(12, 30)).unwrap_err();
    assert!(matches!(err, AppError::TransferConflict(_)));

    // source no longer occupied
    let err = seats::commit_transfer(&t, 5, 3, ts(12, 30)).unwrap_err();
    assert!(matches!(err, AppError::TransferConflict(_)));
}

#[test]
fn test_ledger_is_append_only_and_ordered() {
    let t = table_with_alice();
    let t = seats::set_member(&t, 2, "Bob").expect("set member");
    let t = seat_applied(&t, 2, ts(12, 10));

    let t = seats::leave(&t, 1, ts(12, 40)).expect("leave");
    let first = t.ledger[0].clone();

    let t = seats::leave(&t, 2, ts(12, 50)).expect("leave");
    assert_eq!(t.ledger.len(), 2);
    // earlier records are untouched by later closings
    assert_eq!(t.ledger[0], first);
    assert_eq!(t.ledger[1].member, "Bob");
    assert!(t.ledger[0].ended_at <= t.ledger[1].ended_at);
}

#[test]
fn test_batch_seat_handles_every_state() {
    let t = table_with_alice();
    let t = seats::add_buy_in(&t, 1, 100.0).expect("buy in");

    let t = seats::set_member(&t, 2, "Bob").expect("set member");
    let t = seat_applied(&t, 2, ts(12, 5));
    let t = seats::rest(&t, 2, ts(12, 20)).expect("rest");

    let t = seats::set_member(&t, 3, "Carol").expect("set member");

    // seat 1 seated, seat 2 resting, seat 3 idle
    let t = batch::batch_seat(&t, &[1, 2, 3], 25.0, ts(12, 40)).expect("batch seat");

    let s1 = t.seat(1).expect("seat 1");
    assert_eq!(s1.status, SeatStatus::Seated);
    assert_eq!(s1.buy_in, 125.0);
    // untouched anchor: the session still counts from 12:00
    assert_eq!(s1.last_active_start, Some(ts(12, 0)));

    let s2 = t.seat(2).expect("seat 2");
    assert_eq!(s2.status, SeatStatus::Seated);
    assert_eq!(s2.buy_in, 25.0);
    // the rest interval was folded and the same session continues
    assert_eq!(s2.rest_seconds, 1200);
    assert_eq!(s2.session_start, Some(ts(12, 5)));
    assert_eq!(s2.last_active_start, Some(ts(12, 40)));

    let s3 = t.seat(3).expect("seat 3");
    assert_eq!(s3.status, SeatStatus::Seated);
    assert_eq!(s3.buy_in, 25.0);
    assert_eq!(s3.session_start, Some(ts(12, 40)));
    assert_eq!(s3.active_seconds, 0);

    assert_eq!(t.seats.iter().filter(|s| s.selected).count(), 3);
    assert!(t.ledger.is_empty());
}

#[test]
fn test_batch_seat_rejections() {
    let t = table_with_alice();
    let t = seats::set_member(&t, 2, "Bob").expect("set member");

    // seat 3 carries no name: the whole batch is rejected
    let err = batch::batch_seat(&t, &[2, 3], 0.0, ts(12, 30)).unwrap_err();
    assert!(matches!(err, AppError::EmptyMember { seat: 3, .. }));

    // a selected name colliding with a seated member is rejected
    let dup = seats::set_member(&t, 4, "Alice").expect("set member");
    let err = batch::batch_seat(&dup, &[4], 0.0, ts(12, 30)).unwrap_err();
    assert!(matches!(
        err,
        AppError::DuplicateMember { seat: 1, .. }
    ));

    // two co-selected seats with the same name are rejected too
    let twins = seats::set_member(&t, 5, "Dave").expect("set member");
    let twins = seats::set_member(&twins, 6, "Dave").expect("set member");
    let err = batch::batch_seat(&twins, &[5, 6], 0.0, ts(12, 30)).unwrap_err();
    assert!(matches!(err, AppError::DuplicateMember { .. }));

    let err = batch::batch_seat(&t, &[], 0.0, ts(12, 30)).unwrap_err();
    assert!(matches!(err, AppError::NothingSelected));

    let stopped = Table::fresh("T2", "Table 2");
    let err = batch::batch_seat(&stopped, &[1], 0.0, ts(12, 30)).unwrap_err();
    assert!(matches!(err, AppError::TableNotRunning(_)));
}

#[test]
fn test_batch_leave_skips_idle_seats() {
    let t = table_with_alice();
    let t = seats::set_member(&t, 2, "Bob").expect("set member");
    let t = seat_applied(&t, 2, ts(12, 10));

    let t = batch::batch_leave(&t, &[1, 2, 5], ts(13, 0)).expect("batch leave");

    assert_eq!(t.ledger.len(), 2);
    assert!(t.seats.iter().all(|s| s.status == SeatStatus::Idle));
    assert_eq!(t.occupied_count(), 0);
}

#[test]
fn test_store_round_trip_preserves_the_room() {
    let db_path = setup_test_db("store_round_trip");

    let mut pool = store::open(&db_path).expect("open store");
    let mut tables = load_tables(&mut pool).expect("load");

    // shape a table with a closed session and a custom name
    let t = table_with_alice();
    let t = seats::add_buy_in(&t, 1, 75.0).expect("buy in");
    let mut t = seats::leave(&t, 1, ts(13, 0)).expect("leave");
    t.name = "Feature Table".to_string();
    t.blinds = "2/5".to_string();
    tables[0] = t;

    save_tables(&mut pool, &tables).expect("save");
    drop(pool);

    let mut pool = store::open(&db_path).expect("reopen store");
    let reloaded = load_tables(&mut pool).expect("reload");

    assert_eq!(
        serde_json::to_string(&tables).expect("serialize original"),
        serde_json::to_string(&reloaded).expect("serialize reloaded"),
    );
    assert_eq!(reloaded[0].name, "Feature Table");
    assert_eq!(reloaded[0].ledger.len(), 1);
    assert_eq!(reloaded[0].ledger[0].buy_in, BuyInValue::Amount(75.0));
}

#[test]
fn test_missing_snapshot_yields_the_default_room() {
    let db_path = setup_test_db("store_default_room");

    let mut pool = store::open(&db_path).expect("open store");
    let tables = load_tables(&mut pool).expect("load");

    assert_eq!(tables.len(), 4);
    for (i, t) in tables.iter().enumerate() {
        assert_eq!(t.id, format!("T{}", i + 1));
        assert_eq!(t.name, format!("Table {}", i + 1));
        assert!(!t.is_running);
        assert_eq!(t.seats.len(), 9);
        assert!(t.seats.iter().all(|s| s.status == SeatStatus::Idle));
        assert!(t.ledger.is_empty());
    }
}

#[test]
fn test_unreadable_snapshot_falls_back_to_defaults() {
    let db_path = setup_test_db("store_garbage");

    let mut pool = store::open(&db_path).expect("open store");
    pool.conn
        .execute(
            "INSERT INTO app_state (key, value, updated_at) VALUES (?1, ?2, ?3)",
            rusqlite::params!["tables/v1", "definitely not json", "2025-06-01T12:00:00+02:00"],
        )
        .expect("insert garbage");

    let tables = load_tables(&mut pool).expect("load");
    assert_eq!(tables.len(), 4);
    assert_eq!(tables[0].name, "Table 1");
}

#[test]
fn test_malformed_room_shape_falls_back_to_defaults() {
    let db_path = setup_test_db("store_bad_shape");

    let mut pool = store::open(&db_path).expect("open store");
    let mut tables = load_tables(&mut pool).expect("load");

    // a table with a missing seat is not a usable snapshot
    tables[2].seats.pop();
    save_tables(&mut pool, &tables).expect("save");

    let reloaded = load_tables(&mut pool).expect("reload");
    assert_eq!(reloaded.len(), 4);
    assert_eq!(reloaded[2].seats.len(), 9);
}
