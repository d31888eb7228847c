use filerewrite::cli::{interpret, usage, Args, Invocation};
use filerewrite::config::types::LogLevel;
use filerewrite::Durability;
use clap::Parser;
use std::path::PathBuf;

#[test]
fn paths_are_kept_in_order() {
    let args = Args::parse_from(["filerewrite", "-v", "b.bin", "a.bin", "c.bin"]);
    assert!(args.verbose);
    assert_eq!(
        args.paths,
        vec![
            PathBuf::from("b.bin"),
            PathBuf::from("a.bin"),
            PathBuf::from("c.bin")
        ]
    );
}

#[test]
fn empty_path_list_is_usage() {
    assert!(matches!(interpret(["filerewrite"]), Invocation::Usage));
    assert!(matches!(interpret(["filerewrite", "-v"]), Invocation::Usage));
}

#[test]
fn help_wins_over_paths() {
    assert!(matches!(interpret(["filerewrite", "-h", "file"]), Invocation::Usage));
    assert!(matches!(interpret(["filerewrite", "--help"]), Invocation::Usage));
}

#[test]
fn bad_log_level_is_a_clap_error() {
    assert!(matches!(
        interpret(["filerewrite", "--log-level", "loud", "file"]),
        Invocation::Clap(_)
    ));
}

#[test]
fn effective_log_level_precedence() {
    let args = Args::parse_from(["filerewrite", "-q", "--log-level", "debug", "f"]);
    assert_eq!(args.effective_log_level(), LogLevel::Debug); // --log-level wins

    let args = Args::parse_from(["filerewrite", "-q", "f"]);
    assert_eq!(args.effective_log_level(), LogLevel::Quiet);

    let args = Args::parse_from(["filerewrite", "f"]);
    assert_eq!(args.effective_log_level(), LogLevel::Normal);
}

#[test]
fn to_config_carries_flags() {
    let args = Args::parse_from([
        "filerewrite",
        "-v",
        "--json",
        "--sync",
        "--log-file",
        "/var/log/filerewrite.log",
        "f",
    ]);
    let cfg = args.to_config();
    assert!(cfg.verbose);
    assert!(cfg.json);
    assert_eq!(cfg.durability, Durability::Sync);
    assert_eq!(cfg.log_file, Some(PathBuf::from("/var/log/filerewrite.log")));
    assert_eq!(cfg.rewrite_options().durability, Durability::Sync);
    assert_eq!(cfg.rewrite_options().chunk_size, filerewrite::CHUNK_SIZE);
}

#[test]
fn double_dash_allows_dash_prefixed_paths() {
    match interpret(["filerewrite", "-v", "--", "-x", "-h"]) {
        Invocation::Run(args) => {
            assert!(args.verbose);
            assert!(!args.help);
            assert_eq!(args.paths, vec![PathBuf::from("-x"), PathBuf::from("-h")]);
        }
        other => panic!("expected a run, got {other:?}"),
    }
    assert!(matches!(interpret(["filerewrite", "-x"]), Invocation::Clap(_)));

    let text = usage();
    assert!(text.contains("[--] <FILE>..."), "usage was: {text}");
    assert!(text.contains("start with a dash"), "usage was: {text}");
}
