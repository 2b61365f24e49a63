use std::fs;
use std::path::Path;
use std::process::{Command, Output};

use serde_json::json;
use tempfile::TempDir;

/// A working directory and a home directory, both disposable.
struct Sandbox {
    work: TempDir,
    home: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            work: TempDir::new().expect("failed to create working dir"),
            home: TempDir::new().expect("failed to create home dir"),
        }
    }

    fn run_in(&self, dir: &Path, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_products"))
            .args(args)
            .current_dir(dir)
            .env("HOME", self.home.path())
            .env_remove("RUST_LOG")
            .env_remove("PRICELIST_LOG_FORMAT")
            .output()
            .expect("failed to run products binary")
    }

    fn run(&self, args: &[&str]) -> Output {
        self.run_in(self.work.path(), args)
    }

    fn run_from_home(&self, args: &[&str]) -> Output {
        self.run_in(self.home.path(), args)
    }

    fn write_work_file(&self, name: &str, contents: &str) {
        fs::write(self.work.path().join(name), contents).expect("failed to seed data file");
    }

    fn home_json(&self, name: &str) -> serde_json::Value {
        let data = fs::read_to_string(self.home.path().join(name)).expect("missing home file");
        serde_json::from_str(&data).expect("home file is not JSON")
    }
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

#[test]
fn add_to_absent_file_lands_in_home_dir() {
    let sandbox = Sandbox::new();

    let output = sandbox.run(&["add", "data.json", "-n", "Milk", "-p", "3.2", "-sh", "Mart"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert!(stdout(&output).is_empty());
    assert!(!sandbox.work.path().join("data.json").exists());
    assert_eq!(
        sandbox.home_json("data.json"),
        json!([{"name": "Milk", "price": 3.2, "shope": "Mart"}])
    );
}

#[test]
fn add_without_price_writes_null() {
    let sandbox = Sandbox::new();

    let output = sandbox.run(&["add", "data.json", "--name", "Salt", "--shope", "Mart"]);

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    assert_eq!(
        sandbox.home_json("data.json"),
        json!([{"name": "Salt", "price": null, "shope": "Mart"}])
    );
}

#[test]
fn add_keeps_existing_records_from_working_dir() {
    let sandbox = Sandbox::new();
    sandbox.write_work_file(
        "data.json",
        r#"[{"name": "Хлеб", "price": 40.0, "shope": "Магнит"}]"#,
    );

    let output = sandbox.run(&["add", "data.json", "-n", "Milk", "-sh", "Mart"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    assert_eq!(
        sandbox.home_json("data.json"),
        json!([
            {"name": "Хлеб", "price": 40.0, "shope": "Магнит"},
            {"name": "Milk", "price": null, "shope": "Mart"}
        ])
    );
    let raw = fs::read_to_string(sandbox.home.path().join("data.json")).unwrap();
    assert!(raw.contains("Магнит"));
    assert!(raw.contains("\n    {\n        \"name\""));
}

#[test]
fn repeated_adds_from_home_dir_accumulate() {
    let sandbox = Sandbox::new();

    for name in ["Milk", "Bread", "Milk"] {
        let output = sandbox.run_from_home(&["add", "list.json", "-n", name, "-sh", "Mart"]);
        assert!(output.status.success(), "stderr: {}", stderr(&output));
    }

    let output = sandbox.run_from_home(&["select", "list.json", "-s", "Milk"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).lines().count(), 4 + 2);
}

#[test]
fn display_prints_table() {
    let sandbox = Sandbox::new();
    sandbox.write_work_file("data.json", r#"[{"name": "Bread", "price": 2.5, "shope": "CoOp"}]"#);

    let output = sandbox.run(&["display", "data.json"]);

    assert!(output.status.success());
    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(
        lines[3],
        "|     1 | Bread                | 2.50           |              CoOp |"
    );
}

#[test]
fn display_of_absent_file_reports_empty_list() {
    let sandbox = Sandbox::new();

    let output = sandbox.run(&["display", "nothing.json"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "The product list is empty.\n");
    assert!(!sandbox.home.path().join("nothing.json").exists());
}

#[test]
fn select_filters_by_exact_name() {
    let sandbox = Sandbox::new();
    sandbox.write_work_file(
        "data.json",
        r#"[
            {"name": "Milk", "price": 3.2, "shope": "Mart"},
            {"name": "Milkshake", "price": 5.0, "shope": "Cafe"},
            {"name": "Milk", "price": 2.9, "shope": "Corner"}
        ]"#,
    );

    let output = sandbox.run(&["select", "data.json", "--select", "Milk"]);

    assert!(output.status.success());
    let out = stdout(&output);
    assert_eq!(out.lines().count(), 6);
    assert!(!out.contains("Milkshake"));
    assert!(out.contains("Corner"));
}

#[test]
fn select_is_read_only() {
    let sandbox = Sandbox::new();
    sandbox.write_work_file("data.json", "[]");

    let output = sandbox.run(&["select", "data.json", "-s", "Milk"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "The product list is empty.\n");
    assert!(sandbox.work.path().join("data.json").exists());
    assert!(!sandbox.home.path().join("data.json").exists());
}

#[test]
fn missing_required_flag_is_a_usage_error() {
    let sandbox = Sandbox::new();

    let output = sandbox.run(&["add", "data.json", "-sh", "Mart"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("--name"));
    assert!(!sandbox.home.path().join("data.json").exists());
}

#[test]
fn non_numeric_price_is_a_usage_error() {
    let sandbox = Sandbox::new();

    let output = sandbox.run(&["add", "data.json", "-n", "Milk", "-p", "cheap", "-sh", "Mart"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(!sandbox.home.path().join("data.json").exists());
}

#[test]
fn non_finite_price_is_a_usage_error() {
    let sandbox = Sandbox::new();

    let output = sandbox.run(&["add", "data.json", "-n", "Milk", "-p", "NaN", "-sh", "Mart"]);

    assert_eq!(output.status.code(), Some(2));
    assert!(stderr(&output).contains("finite"));
    assert!(!sandbox.home.path().join("data.json").exists());
}

#[test]
fn malformed_data_file_aborts_before_mutation() {
    let sandbox = Sandbox::new();
    sandbox.write_work_file("data.json", "{ not json");

    let output = sandbox.run(&["add", "data.json", "-n", "Milk", "-sh", "Mart"]);

    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("ERROR"), "stderr: {err}");
    assert!(err.contains("failed to parse product data"), "stderr: {err}");
    assert_eq!(
        fs::read_to_string(sandbox.work.path().join("data.json")).unwrap(),
        "{ not json"
    );
    assert!(!sandbox.home.path().join("data.json").exists());
}

#[test]
fn version_flag_prints_name_and_version() {
    let sandbox = Sandbox::new();

    let output = sandbox.run(&["--version"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "products 0.1.0\n");
}

#[test]
fn no_arguments_prints_help_and_fails() {
    let sandbox = Sandbox::new();

    let output = sandbox.run(&[]);

    assert!(!output.status.success());
    assert!(stderr(&output).contains("Usage"));
}
