//! End-to-end runs of the `phrasewheel` binary

use crate::common::{Sandbox, layout_phrases};

#[test]
fn arrange_reads_stdin() {
    let sandbox = Sandbox::new();
    let run = sandbox.run(&["arrange", "--capacity", "2"], "go\nGO\nstop\n");
    assert!(run.status.success(), "{}", run.stderr);
    assert_eq!(layout_phrases(&run.stdout), ["Go", "Stop", "???", "???"]);
    assert!(run.stderr.contains("2 phrases for 4 slots"), "{}", run.stderr);
}

#[test]
fn arrange_reads_file_with_seed() {
    let sandbox = Sandbox::new();
    let file = sandbox.write_file("phrases.txt", "Go\nStop\n");
    let run = sandbox.run(
        &["arrange", file.to_str().unwrap(), "--capacity", "2", "--seed", "1"],
        "",
    );
    assert!(run.status.success(), "{}", run.stderr);
    assert_eq!(layout_phrases(&run.stdout), ["Go", "???", "Stop", "???"]);
    assert!(run.stdout.starts_with("Front (seed 1)"));
}

#[test]
fn arrange_accepts_negative_seed() {
    let sandbox = Sandbox::new();
    let run = sandbox.run(&["arrange", "--capacity", "1", "--seed", "-7"], "a\nb\n");
    assert!(run.status.success(), "{}", run.stderr);
    assert!(run.stdout.starts_with("Front (seed -7)"));
}

#[test]
fn arrange_with_random_seed_reports_it() {
    let sandbox = Sandbox::new();
    let run = sandbox.run(&["arrange", "--capacity", "3", "--shuffle"], "one\ntwo\n");
    assert!(run.status.success(), "{}", run.stderr);
    assert!(run.stdout.starts_with("Front (seed "));

    let mut phrases = layout_phrases(&run.stdout);
    phrases.sort();
    assert_eq!(phrases, ["???", "???", "???", "???", "One", "Two"]);
}

#[test]
fn seed_and_shuffle_conflict() {
    let sandbox = Sandbox::new();
    let run = sandbox.run(&["arrange", "--seed", "1", "--shuffle"], "");
    assert!(!run.status.success());
}

#[test]
fn zero_capacity_is_rejected() {
    let sandbox = Sandbox::new();
    let run = sandbox.run(&["arrange", "--capacity", "0"], "go\n");
    assert!(!run.status.success());
    assert!(run.stderr.contains("greater than zero"), "{}", run.stderr);
}

#[test]
fn capacity_comes_from_config() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[card]\ncapacity = 3\n");
    let run = sandbox.run(&["arrange"], "");
    assert!(run.status.success(), "{}", run.stderr);
    assert_eq!(layout_phrases(&run.stdout).len(), 6);
}

#[test]
fn broken_explicit_config_is_fatal() {
    let sandbox = Sandbox::new();
    sandbox.write_config("[card\n");
    let run = sandbox.run(&["arrange"], "");
    assert!(!run.status.success());
}

#[test]
fn extra_phrases_are_dropped_with_warning() {
    let sandbox = Sandbox::new();
    let run = sandbox.run(&["arrange", "--capacity", "1"], "a\nb\nc\n");
    assert!(run.status.success(), "{}", run.stderr);
    assert_eq!(layout_phrases(&run.stdout), ["A", "B"]);
    assert!(run.stderr.contains("3 phrases for 2 slots"));
    assert!(run.stderr.contains("WARN"), "{}", run.stderr);
}

#[test]
fn arrange_json_output() {
    let sandbox = Sandbox::new();
    let run = sandbox.run(&["arrange", "--capacity", "1", "--format", "json"], "go\n");
    assert!(run.status.success(), "{}", run.stderr);

    let value: serde_json::Value = serde_json::from_str(&run.stdout).unwrap();
    assert_eq!(value["capacity"], 1);
    assert_eq!(value["faces"][0]["slots"][0]["phrase"], "Go");
    assert_eq!(value["faces"][1]["slots"][0]["phrase"], "???");
    assert!(value.get("seed").is_none());
}

#[test]
fn suggest_prints_requested_count() {
    let sandbox = Sandbox::new();
    let run = sandbox.run(&["suggest", "--count", "12"], "");
    assert!(run.status.success(), "{}", run.stderr);
    assert_eq!(run.stdout.lines().count(), 12);
}

#[test]
fn suggest_with_missing_corpus_prints_nothing() {
    let sandbox = Sandbox::new();
    let missing = sandbox.path().join("nope.json");
    let run = sandbox.run(&["suggest", "--corpus", missing.to_str().unwrap()], "");
    assert!(run.status.success(), "{}", run.stderr);
    assert!(run.stdout.is_empty());
    assert!(run.stderr.contains("Suggestions unavailable"), "{}", run.stderr);
}

#[test]
fn suggest_output_feeds_arrange() {
    let sandbox = Sandbox::new();
    let suggested = sandbox.run(&["suggest", "--count", "8"], "");
    let run = sandbox.run(&["arrange", "--capacity", "4"], &suggested.stdout);
    assert!(run.status.success(), "{}", run.stderr);
    assert!(!layout_phrases(&run.stdout).iter().any(|p| p == "???"));
}

#[test]
fn title_from_args_and_stdin() {
    let sandbox = Sandbox::new();
    let run = sandbox.run(&["title", "u.s. v. smith", "the lord of the rings"], "");
    assert_eq!(run.stdout, "U.S. v. Smith\nThe Lord of the Rings\n");

    let run = sandbox.run(&["title"], "at&t\n\nq&a with the team\n");
    assert_eq!(run.stdout, "AT&T\nQ&A With the Team\n");
}

#[test]
fn rust_log_enables_debug_output() {
    let sandbox = Sandbox::new();
    let quiet = sandbox.run(&["arrange", "--capacity", "1"], "go\n");
    assert!(!quiet.stderr.contains("Arranged card"), "{}", quiet.stderr);

    let verbose = sandbox.run_with_log(&["arrange", "--capacity", "1"], "go\n", Some("debug"));
    assert!(verbose.status.success(), "{}", verbose.stderr);
    assert!(verbose.stderr.contains("Arranged card"), "{}", verbose.stderr);
}

#[test]
fn oversized_capacity_is_rejected() {
    let sandbox = Sandbox::new();
    let run = sandbox.run(&["arrange", "--capacity", "18446744073709551615"], "go\n");
    assert!(!run.status.success());
    assert!(run.stderr.contains("exceeds the maximum"), "{}", run.stderr);
    assert!(run.stdout.is_empty());
}
