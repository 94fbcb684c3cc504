mod common;

use cipherforge::cache::KeyCache;
use common::{cache_of, PuzzleBuilder, TestFiles};
use regex::Regex;
use std::process::{Command, Output};

fn context() -> TestFiles {
    // "the cat sat" with t=1 h=2 e=3 c=4 a=5 s=6
    let puzzle = PuzzleBuilder::new()
        .word(&[1, 2, 3])
        .word(&[4, 5, 1])
        .word(&[6, 5, 1])
        .build();
    TestFiles::new(&puzzle, &["the", "cat", "sat", "a", "at"], &[])
}

fn run(ctx: &TestFiles, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_cipherforge"))
        .args(args)
        .arg("--puzzle")
        .arg(&ctx.puzzle)
        .arg("--dictionary")
        .arg(&ctx.dictionary)
        .arg("--cache")
        .arg(&ctx.cache)
        .output()
        .expect("Failed to execute binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

#[test]
fn test_cli_search_writes_cache() {
    let ctx = context();
    let output = run(
        &ctx,
        &["search", "--iterations", "40", "--key-length", "6", "--seed", "7"],
    );

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let cache = KeyCache::load(&ctx.cache).unwrap();
    assert!(!cache.is_empty());
    assert!(cache.len() <= 40);
    assert!(stdout(&output).contains("Keys scored"));
}

#[test]
fn test_cli_rank_table() {
    let ctx = context();
    cache_of(&[
        ("((1, 't'), (5, 'a'), (2, 'h'), (3, 'e'), (4, 'c'), (6, 's'))", 1.0),
        ("((1, 't'), (5, 'a'))", 0.25),
        ("((1, 'x'),)", 0.0),
    ])
    .save(&ctx.cache)
    .unwrap();

    let output = run(&ctx, &["rank", "-n", "3"]);
    assert!(output.status.success());
    let text = stdout(&output);

    // | 1 | 1.0000 | ((1, 't'), ...) |
    let row = Regex::new(r"\|\s*(\d+)\s*\|\s*([0-9.]+)\s*\|\s*(\S.*?)\s*\|").unwrap();
    let rows: Vec<(usize, f64, String)> = row
        .captures_iter(&text)
        .map(|c| (c[1].parse().unwrap(), c[2].parse().unwrap(), c[3].to_string()))
        .collect();

    assert_eq!(rows.len(), 3, "output:\n{}", text);
    assert_eq!(rows[0].1, 1.0);
    assert!(rows[0].2.starts_with("((1, 't'), (5, 'a'), (2, 'h')"));
    assert_eq!(rows[1].1, 0.25);
    assert_eq!(rows[2], (3, 0.0, "-".to_string()));

    assert!(text.contains("the cat sat"));
}

#[test]
fn test_cli_rank_json() {
    let ctx = context();
    cache_of(&[("((1, 't'),)", 0.5), ("((1, 'a'),)", 0.75)])
        .save(&ctx.cache)
        .unwrap();

    let output = run(&ctx, &["rank", "-n", "3", "--json"]);
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value,
        serde_json::json!([
            {"key": "((1, 'a'),)", "score": 0.75},
            {"key": "((1, 't'),)", "score": 0.5},
            {"key": null, "score": 0.0},
        ])
    );
}

#[test]
fn test_cli_rank_words_only() {
    let ctx = context();
    cache_of(&[("((1, 't'), (5, 'a'), (2, 'h'), (3, 'e'))", 1.0 / 3.0)])
        .save(&ctx.cache)
        .unwrap();

    let output = run(&ctx, &["rank", "-n", "1", "--words-only"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("[\"the\"]"));
}

#[test]
fn test_cli_render_given_key() {
    let ctx = context();
    let output = run(&ctx, &["render", "--key", "((1, 't'), (2, 'h'), (3, 'e'))"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "((1, 't'), (2, 'h'), (3, 'e'))\nthe ??t ??t\n");
}

#[test]
fn test_cli_render_show_symbols() {
    let ctx = context();
    let output = run(&ctx, &["render", "-s", "--key", "((5, 'a'),)"]);

    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "((5, 'a'),)\n.1.2.3   4.a.1   6.a.1.\n"
    );
}

#[test]
fn test_cli_render_defaults_to_empty_key() {
    let ctx = context();
    let output = run(&ctx, &["render"]);

    assert!(output.status.success());
    assert_eq!(stdout(&output), "()\n??? ??? ???\n");
}

#[test]
fn test_cli_bad_key_fails() {
    let ctx = context();
    let output = run(&ctx, &["render", "--key", "((1, 'ab'),)"]);
    assert!(!output.status.success());
}

#[test]
fn test_cli_corrupt_cache_fails_without_overwriting() {
    let ctx = context();
    ctx.write_cache("{ broken");

    let output = run(&ctx, &["search", "--iterations", "5"]);

    assert!(!output.status.success());
    assert_eq!(std::fs::read_to_string(&ctx.cache).unwrap(), "{ broken");
}
