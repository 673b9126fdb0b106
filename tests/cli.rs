use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;
use predicates::str::contains;

// Every run gets its own settings file so a user config can't change the
// label under test.
fn junkdrawer(tmp: &TempDir) -> Command {
    let settings = tmp.child("settings.toml");
    settings.write_str("label = \"JD\"\n").unwrap();
    let mut cmd = Command::cargo_bin("junkdrawer").unwrap();
    cmd.arg("--config")
        .arg(settings.path())
        .arg("--quiet")
        .current_dir(tmp.path());
    cmd
}

#[test]
fn show_uses_configured_label() {
    let tmp = TempDir::new().unwrap();
    junkdrawer(&tmp)
        .args(["show", "hello"])
        .assert()
        .success()
        .stdout("[JD]: hello\n")
        .stderr("");
}

#[test]
fn error_goes_to_stderr() {
    let tmp = TempDir::new().unwrap();
    junkdrawer(&tmp)
        .args(["error", "oops"])
        .assert()
        .success()
        .stdout("")
        .stderr("[JD][Error]: oops\n");
}

#[test]
fn abort_exits_only_when_asked() {
    let tmp = TempDir::new().unwrap();
    junkdrawer(&tmp)
        .args(["abort", "soft"])
        .assert()
        .success()
        .stderr("[JD][Abort]: soft\n");
    junkdrawer(&tmp)
        .args(["abort", "hard", "--exit"])
        .assert()
        .failure()
        .code(1)
        .stderr("[JD][Abort]: hard\n");
}

#[test]
fn copy_into_missing_directory_aborts() {
    let tmp = TempDir::new().unwrap();
    tmp.child("src.txt").write_str("data").unwrap();
    junkdrawer(&tmp)
        .args(["copy", "src.txt", "missing/dir/dst.txt"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("[JD][Abort]: Can't copy file: src.txt to missing/dir/dst.txt"));
    tmp.child("missing").assert(predicate::path::missing());
}

#[test]
fn copy_into_existing_directory() {
    let tmp = TempDir::new().unwrap();
    tmp.child("src.txt").write_str("data").unwrap();
    tmp.child("out").create_dir_all().unwrap();
    junkdrawer(&tmp)
        .args(["copy", "src.txt", "out/dst.txt"])
        .assert()
        .success();
    tmp.child("out/dst.txt").assert("data");
}

#[test]
fn write_json_creates_directories_and_sorts_keys() {
    let tmp = TempDir::new().unwrap();
    junkdrawer(&tmp)
        .args(["write", "x/y/out.json", r#"{"b": 2, "a": {"d": 1, "c": 0}}"#, "--json"])
        .assert()
        .success();
    tmp.child("x/y/out.json").assert(
        "{\n    \"a\": {\n        \"c\": 0,\n        \"d\": 1\n    },\n    \"b\": 2\n}",
    );
    junkdrawer(&tmp)
        .args(["cat", "x/y/out.json", "--json"])
        .assert()
        .success()
        .stdout(contains("\"c\": 0"));
}

#[test]
fn write_rejects_invalid_json() {
    let tmp = TempDir::new().unwrap();
    junkdrawer(&tmp)
        .args(["write", "out.json", "{nope", "--json"])
        .assert()
        .failure()
        .stderr(contains("[JD][Error]: content is not valid JSON"));
    tmp.child("out.json").assert(predicate::path::missing());
}

#[test]
fn cat_missing_file_aborts() {
    let tmp = TempDir::new().unwrap();
    junkdrawer(&tmp)
        .args(["cat", "nope.txt"])
        .assert()
        .failure()
        .code(1)
        .stderr(contains("[JD][Abort]: Can't read file: nope.txt"));
}

#[test]
fn cat_prints_text_verbatim() {
    let tmp = TempDir::new().unwrap();
    tmp.child("t.txt").write_str("line one\nline two\n").unwrap();
    junkdrawer(&tmp)
        .args(["cat", "t.txt"])
        .assert()
        .success()
        .stdout("line one\nline two\n");
}

#[test]
fn directory_lifecycle() {
    let tmp = TempDir::new().unwrap();
    junkdrawer(&tmp).args(["mkdir", "a/b/c"]).assert().success();
    junkdrawer(&tmp).args(["mkdir", "a/b/c"]).assert().success();
    junkdrawer(&tmp)
        .args(["exists", "a/b/c", "--dir"])
        .assert()
        .success()
        .stdout("true\n");
    junkdrawer(&tmp)
        .args(["exists", "a/b/c"])
        .assert()
        .success()
        .stdout("false\n");
    junkdrawer(&tmp).args(["rmdir", "a"]).assert().success();
    junkdrawer(&tmp).args(["rmdir", "a"]).assert().success();
    tmp.child("a").assert(predicate::path::missing());
}

#[test]
fn rm_file_is_idempotent() {
    let tmp = TempDir::new().unwrap();
    tmp.child("gone.txt").write_str("x").unwrap();
    junkdrawer(&tmp).args(["rm", "gone.txt"]).assert().success();
    junkdrawer(&tmp).args(["rm", "gone.txt"]).assert().success();
    tmp.child("gone.txt").assert(predicate::path::missing());
}

#[test]
fn info_reports_parts_and_size() {
    let tmp = TempDir::new().unwrap();
    tmp.child("docs/report.final.txt").write_str("12345").unwrap();
    junkdrawer(&tmp)
        .args(["info", "docs/report.final.txt"])
        .assert()
        .success()
        .stdout(contains("name: \"report.final\""))
        .stdout(contains("extension: \"txt\""))
        .stdout(contains("size_bytes: 5"));
}

#[test]
fn info_on_missing_file_is_an_error_not_an_abort() {
    let tmp = TempDir::new().unwrap();
    junkdrawer(&tmp)
        .args(["info", "missing.txt"])
        .assert()
        .failure()
        .stderr(contains("[JD][Error]: can't stat missing.txt"))
        .stderr(contains("[Abort]").not());
}

#[test]
fn timestamps_convert_both_ways_in_utc() {
    let tmp = TempDir::new().unwrap();
    junkdrawer(&tmp)
        .env("TZ", "UTC")
        .args(["to-timestamp", "86400"])
        .assert()
        .success()
        .stdout("1970-01-02T00:00:00+0000\n");
    junkdrawer(&tmp)
        .env("TZ", "UTC")
        .args(["to-epoch", "1970-01-02T00:00:00+0000"])
        .assert()
        .success()
        .stdout("86400\n");
}

#[test]
fn malformed_timestamp_is_reported() {
    let tmp = TempDir::new().unwrap();
    junkdrawer(&tmp)
        .args(["to-epoch", "yesterday"])
        .assert()
        .failure()
        .stderr(contains("[JD][Error]: timestamp `yesterday` does not match"));
}

#[test]
fn now_epoch_is_a_number() {
    let tmp = TempDir::new().unwrap();
    junkdrawer(&tmp)
        .args(["now", "--epoch"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"^\d+\n$").unwrap());
}

#[cfg(unix)]
#[test]
fn find_ls_on_path() {
    let tmp = TempDir::new().unwrap();
    junkdrawer(&tmp)
        .args(["find", "ls"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?m)^/.*/ls$").unwrap());
}

#[test]
fn find_unknown_name_fails() {
    let tmp = TempDir::new().unwrap();
    junkdrawer(&tmp)
        .args(["find", "no-such-tool-anywhere-1234"])
        .assert()
        .failure()
        .stderr("[JD][Error]: no-such-tool-anywhere-1234 not found\n");
}

#[test]
fn find_sees_files_in_working_directory() {
    let tmp = TempDir::new().unwrap();
    tmp.child("local-tool").write_str("#!/bin/sh\n").unwrap();
    junkdrawer(&tmp)
        .args(["find", "local-tool"])
        .assert()
        .success()
        .stdout(contains("/local-tool\n"));
}

#[cfg(unix)]
#[test]
fn time_echoes_and_reports_elapsed() {
    let tmp = TempDir::new().unwrap();
    junkdrawer(&tmp)
        .args(["time", "true"])
        .assert()
        .success()
        .stdout(contains("[JD][Exe]: true\n"))
        .stdout(contains("[JD]: true finished in "));
}

#[cfg(unix)]
#[test]
fn time_passes_exit_status_through() {
    let tmp = TempDir::new().unwrap();
    junkdrawer(&tmp)
        .args(["time", "sh", "-c", "exit 3"])
        .assert()
        .code(3);
}

#[test]
fn missing_explicit_config_fails() {
    let tmp = TempDir::new().unwrap();
    Command::cargo_bin("junkdrawer")
        .unwrap()
        .args(["--config", "does-not-exist.toml", "show", "x"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .stderr(contains("can't read settings"));
}

#[test]
fn unopenable_log_file_is_reported_not_panicked() {
    let tmp = TempDir::new().unwrap();
    tmp.child("blocker").write_str("x").unwrap();
    tmp.child("settings.toml").write_str("label = \"JD\"\n").unwrap();
    Command::cargo_bin("junkdrawer")
        .unwrap()
        .args(["--config", "settings.toml", "--log-file", "blocker/jd.log", "show", "hi"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .code(1)
        .stdout("")
        .stderr(contains("[JD][Error]: can't open log file blocker/jd.log"));
}

#[test]
fn log_file_path_without_a_name_is_rejected() {
    let tmp = TempDir::new().unwrap();
    tmp.child("settings.toml").write_str("label = \"JD\"\n").unwrap();
    Command::cargo_bin("junkdrawer")
        .unwrap()
        .args(["--config", "settings.toml", "--log-file", "..", "show", "hi"])
        .current_dir(tmp.path())
        .assert()
        .failure()
        .code(1)
        .stderr(contains("[JD][Error]: log file path has no file name"));
}

#[test]
fn log_file_is_created_with_its_directory() {
    let tmp = TempDir::new().unwrap();
    tmp.child("settings.toml").write_str("label = \"JD\"\n").unwrap();
    Command::cargo_bin("junkdrawer")
        .unwrap()
        .args(["--config", "settings.toml", "--log-file", "logs/jd.log", "-v", "show", "hi"])
        .current_dir(tmp.path())
        .assert()
        .success()
        .stdout("[JD]: hi\n");
    tmp.child("logs/jd.log").assert(predicate::path::is_file());
}

#[test]
fn find_does_not_search_for_paths() {
    let tmp = TempDir::new().unwrap();
    tmp.child("bin/tool").write_str("x").unwrap();
    let abs = tmp.child("bin/tool").path().to_string_lossy().into_owned();
    junkdrawer(&tmp)
        .args(["find", &abs])
        .assert()
        .failure()
        .stdout("")
        .stderr(format!("[JD][Error]: {abs} not found\n"));
}
