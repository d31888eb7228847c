use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn no_paths_prints_usage_and_fails() {
    let me = assert_cmd::cargo::cargo_bin!("filerewrite");
    let out = Command::new(me).output().expect("spawn binary");

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Usage:"), "unexpected stderr: {stderr}");
    assert!(out.stdout.is_empty(), "usage must not go to stdout");
}

#[test]
fn help_flag_prints_usage_and_skips_files() {
    let td = tempdir().unwrap();
    let file = td.path().join("untouched.txt");
    fs::write(&file, b"data").unwrap();
    let mt = filetime::FileTime::from_unix_time(1_000_000_000, 0);
    filetime::set_file_times(&file, mt, mt).unwrap();

    let me = assert_cmd::cargo::cargo_bin!("filerewrite");
    let out = Command::new(me)
        .arg("-h")
        .arg(&file)
        .output()
        .expect("spawn binary");

    assert_eq!(out.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("Usage:"), "unexpected stderr: {stderr}");
    let meta = fs::metadata(&file).unwrap();
    assert_eq!(filetime::FileTime::from_last_modification_time(&meta), mt);
}

#[test]
fn unknown_flag_fails_with_status_one() {
    let me = assert_cmd::cargo::cargo_bin!("filerewrite");
    let out = Command::new(me)
        .arg("--no-such-flag")
        .arg("x")
        .output()
        .expect("spawn binary");
    assert_eq!(out.status.code(), Some(1));
    assert!(!out.stderr.is_empty());
}
