#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rtt() -> Command {
    cargo_bin_cmd!("rtabletimer")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rtabletimer.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Initialize the DB and close two sessions on T1, useful for many tests
pub fn init_db_with_data(db_path: &str) {
    // init DB (creates schema and the default room)
    rtt()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rtt()
        .args(["--db", db_path, "open", "T1", "--at", "2025-06-01 12:00:00"])
        .assert()
        .success();

    // two members play and leave, leaving two ledger records behind
    rtt()
        .args(["--db", db_path, "member", "T1", "1", "Alice"])
        .assert()
        .success();
    rtt()
        .args(["--db", db_path, "member", "T1", "2", "Bob"])
        .assert()
        .success();
    rtt()
        .args(["--db", db_path, "sit", "T1", "1", "--at", "2025-06-01 12:05:00"])
        .assert()
        .success();
    rtt()
        .args(["--db", db_path, "sit", "T1", "2", "--at", "2025-06-01 12:10:00"])
        .assert()
        .success();
    rtt()
        .args(["--db", db_path, "buyin", "T1", "1", "100"])
        .assert()
        .success();
    rtt()
        .args(["--db", db_path, "leave", "T1", "1", "--at", "2025-06-01 13:05:00"])
        .assert()
        .success();
    rtt()
        .args(["--db", db_path, "leave", "T1", "2", "--at", "2025-06-01 13:10:00"])
        .assert()
        .success();
}

/// Push many ledger records directly via the library API for performance tests
pub fn populate_many_records(db_path: &str, n: usize) {
    use rtabletimer::models::{BuyInValue, SessionRecord};
    use rtabletimer::store;
    use rtabletimer::store::state::{load_tables, save_tables};

    let mut pool = store::open(db_path).expect("open db");
    let mut tables = load_tables(&mut pool).expect("load tables");
    for i in 0..n {
        let day = (i % 28) + 1;
        tables[0].ledger.push(SessionRecord {
            table_id: "T1".into(),
            table_name: "Table 1".into(),
            seat_id: ((i % 9) + 1) as u8,
            member: format!("Member {}", i % 40),
            started_at: format!("2025-11-{day:02} 20:00:00"),
            ended_at: format!("2025-11-{day:02} 22:30:00"),
            active_seconds: 7200,
            rest_seconds: 1800,
            buy_in: BuyInValue::Amount(50.0),
            transfer: None,
        });
    }
    save_tables(&mut pool, &tables).expect("save tables");
}
