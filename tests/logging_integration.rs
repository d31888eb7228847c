//! Log output formats and destinations of the binary.

use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn json_verbose_lines_are_valid_json() {
    let td = tempdir().unwrap();
    let file = td.path().join("j.txt");
    fs::write(&file, b"json").unwrap();

    let me = assert_cmd::cargo::cargo_bin!("filerewrite");
    let out = Command::new(me)
        .args(["--json", "-v"])
        .arg(&file)
        .output()
        .expect("spawn binary");
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    let events: Vec<serde_json::Value> = stdout
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| serde_json::from_str(l).expect("each line should be JSON"))
        .collect();
    assert!(!events.is_empty(), "expected verbose events on stdout");

    let read = events
        .iter()
        .find(|e| e["fields"]["message"].as_str().is_some_and(|m| m.starts_with("Read 4 from")))
        .expect("read event present");
    assert_eq!(read["level"], "INFO");
    assert_eq!(read["fields"]["offset"], 0);
    assert_eq!(read["fields"]["bytes"], 4);
}

#[test]
fn json_errors_go_to_stderr() {
    let td = tempdir().unwrap();
    let missing = td.path().join("missing.bin");

    let me = assert_cmd::cargo::cargo_bin!("filerewrite");
    let out = Command::new(me)
        .arg("--json")
        .arg(&missing)
        .output()
        .expect("spawn binary");
    assert_eq!(out.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&out.stderr);
    let line = stderr.lines().find(|l| !l.trim().is_empty()).expect("an error line");
    let event: serde_json::Value = serde_json::from_str(line).expect("JSON error line");
    assert_eq!(event["level"], "ERROR");
    assert_eq!(event["fields"]["kind"], "open");
    assert_eq!(event["fields"]["code"], 10);
}

#[test]
fn quiet_hides_verbose_traces() {
    let td = tempdir().unwrap();
    let file = td.path().join("q.txt");
    fs::write(&file, b"quiet").unwrap();

    let me = assert_cmd::cargo::cargo_bin!("filerewrite");
    let out = Command::new(me)
        .args(["-q", "-v"])
        .arg(&file)
        .output()
        .expect("spawn binary");
    assert!(out.status.success());
    assert!(out.stdout.is_empty(), "stdout: {}", String::from_utf8_lossy(&out.stdout));
}

#[test]
fn log_file_receives_events() {
    let td = tempdir().unwrap();
    let base = fs::canonicalize(td.path()).unwrap(); // avoid ambient symlinks in ancestors
    let file = base.join("data.txt");
    fs::write(&file, b"logged").unwrap();
    let log = base.join("logs").join("run.log");

    let me = assert_cmd::cargo::cargo_bin!("filerewrite");
    let out = Command::new(me)
        .arg("-v")
        .arg("--log-file")
        .arg(&log)
        .arg(&file)
        .output()
        .expect("spawn binary");
    assert!(out.status.success());

    let contents = fs::read_to_string(&log).expect("log file written");
    assert!(contents.contains("Restored access and modification times"), "log: {contents}");
}

#[cfg(unix)]
#[test]
fn log_file_under_symlinked_dir_is_refused() {
    use std::os::unix::fs as unix_fs;

    let td = tempdir().unwrap();
    let base = fs::canonicalize(td.path()).unwrap();
    let real = base.join("real_logs");
    fs::create_dir_all(&real).unwrap();
    let link = base.join("logs");
    unix_fs::symlink(&real, &link).unwrap();
    let file = base.join("data.txt");
    fs::write(&file, b"x").unwrap();

    let me = assert_cmd::cargo::cargo_bin!("filerewrite");
    let out = Command::new(me)
        .arg("--log-file")
        .arg(link.join("run.log"))
        .arg(&file)
        .output()
        .expect("spawn binary");

    // File logging is refused, the rewrite itself still succeeds.
    assert!(out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Refusing to enable file logging"), "stderr: {stderr}");
    assert!(!real.join("run.log").exists());
}

#[test]
fn compact_output_splits_streams_without_color_on_pipes() {
    let td = tempdir().unwrap();
    let file = td.path().join("c.txt");
    fs::write(&file, b"plain").unwrap();
    let missing = td.path().join("gone.txt");

    let me = assert_cmd::cargo::cargo_bin!("filerewrite");
    let out = Command::new(me)
        .arg("-v")
        .arg(&file)
        .arg(&missing)
        .output()
        .expect("spawn binary");
    assert_eq!(out.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&out.stdout);
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stdout.contains("Rewriting"), "stdout: {stdout}");
    assert!(!stdout.contains("ERROR"), "stdout: {stdout}");
    assert!(stderr.contains("Unable to open"), "stderr: {stderr}");
    assert!(!stderr.contains("Rewriting"), "stderr: {stderr}");
    // Neither stream is a terminal here, so neither may carry escape codes.
    assert!(!out.stdout.contains(&0x1b), "stdout: {stdout}");
    assert!(!out.stderr.contains(&0x1b), "stderr: {stderr}");
}
