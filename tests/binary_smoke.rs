// use macro form directly; no import needed
use std::process::Command;

#[test]
fn binary_version_succeeds() {
    let me = assert_cmd::cargo::cargo_bin!("filerewrite");
    let out = Command::new(me)
        .arg("--version")
        .output()
        .expect("spawn binary");
    assert!(out.status.success(), "binary should succeed with --version");
    assert!(String::from_utf8_lossy(&out.stdout).contains("filerewrite"));
}
