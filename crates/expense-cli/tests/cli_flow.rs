use std::path::{Path, PathBuf};
use std::process::{Command, Output};
use std::time::{SystemTime, UNIX_EPOCH};

use rusqlite::Connection;

fn bin() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_expenses"))
}

fn temp_base(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("system time")
        .as_nanos();
    let base = std::env::temp_dir().join(format!(
        "expenses_{}_{}_{}",
        prefix,
        std::process::id(),
        nanos
    ));
    std::fs::create_dir_all(&base).expect("create temp dir");
    base
}

struct Sandbox {
    base: PathBuf,
}

impl Sandbox {
    fn new(prefix: &str) -> Self {
        let base = temp_base(prefix);
        std::fs::create_dir_all(base.join("c")).expect("create config dir");
        std::fs::create_dir_all(base.join("d")).expect("create data dir");
        Self { base }
    }

    fn db(&self) -> PathBuf {
        self.base.join("expenses.db")
    }

    fn config_home(&self) -> PathBuf {
        self.base.join("c")
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new(bin());
        cmd.current_dir(&self.base)
            .env("XDG_CONFIG_HOME", self.config_home())
            .env("XDG_DATA_HOME", self.base.join("d"))
            .env("NO_COLOR", "1")
            .env_remove("EXPENSES_DB")
            .env_remove("EXPENSES_CONFIG")
            .env_remove("EXPENSES_LOG");
        cmd
    }

    fn run(&self, args: &[&str]) -> Output {
        let db = self.db();
        self.command()
            .arg("--db")
            .arg(&db)
            .args(args)
            .output()
            .expect("run expenses")
    }
}

impl Drop for Sandbox {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.base);
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "expected success, stderr: {}",
        stderr(output)
    );
}

fn row_count(db: &Path) -> i64 {
    let conn = Connection::open(db).expect("open db");
    conn.query_row("SELECT COUNT(*) FROM expenses", [], |row| row.get(0))
        .expect("count rows")
}

fn list_json(sandbox: &Sandbox, filter: Option<&str>) -> Vec<serde_json::Value> {
    let mut args = vec!["list", "--json"];
    if let Some(f) = filter {
        args.push(f);
    }
    let output = sandbox.run(&args);
    assert_success(&output);
    serde_json::from_str(&stdout(&output)).expect("parse list json")
}

fn seed(sandbox: &Sandbox) {
    for args in [
        ["add", "12.50", "-c", "Food", "-m", "lunch", "--date", "2024-05-01"],
        ["add", "20", "-c", "Food", "-m", "groceries", "--date", "2024-05-15"],
        ["add", "100", "-c", "Rent", "-m", "april", "--date", "2024-04-30"],
    ] {
        assert_success(&sandbox.run(&args));
    }
}

#[test]
fn test_add_list_summary_export_delete_flow() {
    let sandbox = Sandbox::new("flow");

    let added = sandbox.run(&["add", "12.50", "-c", "Food", "-m", "lunch", "--date", "2024-05-01"]);
    assert_success(&added);
    assert_eq!(stdout(&added).trim(), "Added expense 1");
    assert_success(&sandbox.run(&["add", "20", "-c", "Food", "--date", "2024-05-15"]));
    assert_success(&sandbox.run(&["add", "100", "-c", "Rent", "--date", "2024-04-30"]));

    let all = list_json(&sandbox, None);
    assert_eq!(all.len(), 3);
    assert_eq!(all[0]["date"], "2024-05-15");
    assert_eq!(all[2]["date"], "2024-04-30");

    let may = list_json(&sandbox, Some("2024-05"));
    assert_eq!(may.len(), 2);

    let summary = sandbox.run(&["summary", "2024-05", "--json"]);
    assert_success(&summary);
    let value: serde_json::Value = serde_json::from_str(&stdout(&summary)).expect("summary json");
    assert_eq!(value["month"], "2024-05");
    assert_eq!(value["categories"]["Food"], 32.5);
    assert!(value["categories"].get("Rent").is_none());
    assert_eq!(value["total"], 32.5);

    let text = sandbox.run(&["summary", "2024-05"]);
    assert_success(&text);
    assert_eq!(stdout(&text), "Food: 32.50\nTotal: 32.50\n");

    let csv_path = sandbox.base.join("out.csv");
    let export = sandbox.run(&["export", csv_path.to_str().expect("utf8 path")]);
    assert_success(&export);
    assert_eq!(stdout(&export).trim(), "Saved 3 rows to out.csv");
    let contents = std::fs::read_to_string(&csv_path).expect("read export");
    let mut lines = contents.lines();
    assert_eq!(
        lines.next(),
        Some("id,date,category,description,amount,created_at")
    );
    assert_eq!(lines.count(), 3);

    let deleted = sandbox.run(&["delete", "1", "--yes"]);
    assert_success(&deleted);
    assert_eq!(stdout(&deleted).trim(), "Deleted expense 1");
    let remaining = list_json(&sandbox, None);
    assert_eq!(remaining.len(), 2);
    assert!(remaining.iter().all(|e| e["id"] != 1));
}

#[test]
fn test_ids_are_not_reused_after_delete() {
    let sandbox = Sandbox::new("ids");
    seed(&sandbox);
    assert_success(&sandbox.run(&["delete", "3", "--yes"]));

    let added = sandbox.run(&["add", "1", "--date", "2024-06-01"]);
    assert_success(&added);
    assert_eq!(stdout(&added).trim(), "Added expense 4");
}

#[test]
fn test_add_json_reports_defaults() {
    let sandbox = Sandbox::new("addjson");
    let output = sandbox.run(&["add", "-5", "--date", "2024-05-02", "--json"]);
    assert_success(&output);
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).expect("add json");
    assert_eq!(value["id"], 1);
    assert_eq!(value["category"], "Other");
    assert_eq!(value["amount"], -5.0);
}

#[test]
fn test_add_defaults_date_to_today() {
    let sandbox = Sandbox::new("today");
    assert_success(&sandbox.run(&["add", "3.25"]));
    let all = list_json(&sandbox, None);
    let date = all[0]["date"].as_str().expect("date string");
    assert_eq!(date.len(), 10);
    assert_eq!(&date[4..5], "-");
}

#[test]
fn test_validation_failures_exit_4_and_store_nothing() {
    let sandbox = Sandbox::new("invalid");
    seed(&sandbox);

    let bad_amount = sandbox.run(&["add", "abc", "--date", "2024-05-01"]);
    assert_eq!(bad_amount.status.code(), Some(4));
    assert!(stderr(&bad_amount).contains("Enter valid amount"));

    let bad_date = sandbox.run(&["add", "5", "--date", "2024-13-01"]);
    assert_eq!(bad_date.status.code(), Some(4));
    assert!(stderr(&bad_date).contains("Date format YYYY-MM-DD"));

    let bad_month = sandbox.run(&["summary", "2024-13"]);
    assert_eq!(bad_month.status.code(), Some(4));
    assert!(stderr(&bad_month).contains("Use YYYY-MM"));

    assert_eq!(row_count(&sandbox.db()), 3);
}

#[test]
fn test_delete_unknown_id_is_noop() {
    let sandbox = Sandbox::new("delmiss");
    seed(&sandbox);

    let output = sandbox.run(&["delete", "99", "--yes"]);
    assert_success(&output);
    assert!(stderr(&output).contains("No expense with ID 99"));
    assert_eq!(row_count(&sandbox.db()), 3);
}

#[test]
fn test_empty_export_writes_no_file() {
    let sandbox = Sandbox::new("empty");
    let csv_path = sandbox.base.join("empty.csv");

    let output = sandbox.run(&["export", csv_path.to_str().expect("utf8 path")]);
    assert_success(&output);
    assert!(stderr(&output).contains("No rows to export"));
    assert!(!csv_path.exists());
}

#[test]
fn test_export_to_stdout() {
    let sandbox = Sandbox::new("stdout");
    seed(&sandbox);

    let output = sandbox.run(&["export", "-"]);
    assert_success(&output);
    let text = stdout(&output);
    assert!(text.starts_with("id,date,category,description,amount,created_at\n"));
    assert_eq!(text.lines().count(), 4);
}

#[test]
fn test_list_substring_filter_plain() {
    let sandbox = Sandbox::new("search");
    seed(&sandbox);

    let output = sandbox.run(&["list", "groc"]);
    assert_success(&output);
    let text = stdout(&output);
    assert_eq!(text.lines().count(), 1);
    assert!(text.contains("groceries"));
    assert!(text.contains("20.00"));
}

#[test]
fn test_init_writes_config_used_by_later_commands() {
    let sandbox = Sandbox::new("init");
    let db = sandbox.base.join("store").join("mine.db");

    let init = sandbox
        .command()
        .arg("init")
        .arg(&db)
        .output()
        .expect("run init");
    assert_success(&init);
    assert!(db.exists());
    let config_path = sandbox.config_home().join("expenses").join("config.toml");
    let config = std::fs::read_to_string(&config_path).expect("read config");
    assert!(config.contains("[store]"));

    let add = sandbox
        .command()
        .args(["add", "7", "-c", "Books", "--date", "2024-05-03"])
        .output()
        .expect("run add");
    assert_success(&add);
    assert_eq!(row_count(&db), 1);

    let again = sandbox
        .command()
        .arg("init")
        .arg(&db)
        .output()
        .expect("run init again");
    assert_eq!(again.status.code(), Some(4));

    let forced = sandbox
        .command()
        .args(["init", "--force"])
        .arg(&db)
        .output()
        .expect("run init --force");
    assert_success(&forced);
    assert_eq!(row_count(&db), 1);
}

#[test]
fn test_missing_explicit_config_exits_3() {
    let sandbox = Sandbox::new("nocfg");
    let output = sandbox
        .command()
        .env("EXPENSES_CONFIG", sandbox.base.join("missing.toml"))
        .args(["list"])
        .output()
        .expect("run list");
    assert_eq!(output.status.code(), Some(3));
    assert!(stderr(&output).contains("No config found"));
}

#[test]
fn test_format_misuse_exits_4() {
    let sandbox = Sandbox::new("format");
    seed(&sandbox);

    let mixed = sandbox.run(&["list", "--json", "--format", "plain"]);
    assert_eq!(mixed.status.code(), Some(4));
    assert!(stderr(&mixed).contains("--format cannot be used with --json"));

    let unknown = sandbox.run(&["list", "--format", "xml"]);
    assert_eq!(unknown.status.code(), Some(4));
    assert!(stderr(&unknown).contains("Unsupported format: xml"));
}

#[test]
fn test_db_flag_ignores_missing_explicit_config() {
    let sandbox = Sandbox::new("dbwins");
    seed(&sandbox);

    let output = sandbox
        .command()
        .env("EXPENSES_CONFIG", sandbox.base.join("missing.toml"))
        .arg("--db")
        .arg(sandbox.db())
        .args(["list", "--json"])
        .output()
        .expect("run list");
    assert_success(&output);
    let expenses: Vec<serde_json::Value> =
        serde_json::from_str(&stdout(&output)).expect("parse list json");
    assert_eq!(expenses.len(), 3);
}

#[test]
fn test_export_keeps_stored_timestamp_text() {
    let sandbox = Sandbox::new("verbatim");
    seed(&sandbox);

    let stored: String = Connection::open(sandbox.db())
        .expect("open db")
        .query_row("SELECT created_at FROM expenses WHERE id = 1", [], |row| {
            row.get(0)
        })
        .expect("read created_at");

    let output = sandbox.run(&["export", "-"]);
    assert_success(&output);
    let text = stdout(&output);
    let row = text
        .lines()
        .find(|line| line.starts_with("1,"))
        .expect("row for id 1");
    assert!(row.ends_with(&format!(",{}", stored)));
}
