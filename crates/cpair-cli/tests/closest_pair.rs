//! End-to-end tests driving the real `cpair` binary over its pipes.
//!
//! Each case feeds a point set to the spawned executable's standard input
//! and checks stdout plus the exit status, the same way the orchestrator's
//! own parent processes do.

use std::io::Write;
use std::process::{Command, Output, Stdio};

const EXIT_FORMAT: i32 = 65;
const EXIT_USAGE: i32 = 64;

/// Run the binary with the given stdin and extra environment variables.
fn run_cpair(input: &str, envs: &[(&str, &str)]) -> Output {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_cpair"));
    cmd.stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .env_remove("CPAIR_ENGINE")
        .env_remove("CPAIR_DEPTH");
    for (key, value) in envs {
        cmd.env(key, value);
    }
    let mut child = cmd.spawn().expect("spawn cpair");
    // A run that fails fast may exit before draining its input; the broken
    // pipe is expected there, the exit status is what the test asserts.
    let _ = child
        .stdin
        .take()
        .expect("stdin piped")
        .write_all(input.as_bytes());
    child.wait_with_output().expect("collect output")
}

fn stdout_of(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).expect("utf-8 stdout")
}

/// Parse `"x y"` result lines back into coordinate pairs.
fn parse_output(stdout: &str) -> Vec<(f64, f64)> {
    stdout
        .lines()
        .map(|line| {
            let mut tokens = line.split_whitespace();
            let x = tokens.next().unwrap().parse().unwrap();
            let y = tokens.next().unwrap().parse().unwrap();
            (x, y)
        })
        .collect()
}

fn euclidean(a: (f64, f64), b: (f64, f64)) -> f64 {
    ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
}

/// O(n²) reference over the original input.
fn brute_force_distance(points: &[(f64, f64)]) -> f64 {
    let mut best = f64::INFINITY;
    for (i, a) in points.iter().enumerate() {
        for b in &points[i + 1..] {
            best = best.min(euclidean(*a, *b));
        }
    }
    best
}

/// Deterministic point cloud on a 3-decimal grid, so the root's rounded
/// output preserves coordinates exactly.
fn pseudo_random_points(count: usize, seed: u64) -> Vec<(f64, f64)> {
    let mut state = seed;
    let mut next = move || {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((state >> 33) % 20_001) as f64 / 1000.0 - 10.0
    };
    (0..count).map(|_| (next(), next())).collect()
}

fn to_input(points: &[(f64, f64)]) -> String {
    let mut input = String::new();
    for (x, y) in points {
        input.push_str(&format!("{x} {y}\n"));
    }
    input
}

#[test]
fn test_empty_input_succeeds_with_no_output() {
    let output = run_cpair("", &[]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_single_point_succeeds_with_no_output() {
    let output = run_cpair("4.25 -1.5\n", &[]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_two_points_print_in_canonical_order() {
    let output = run_cpair("1.0 2.0\n3.0 0.0\n", &[]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "1.000 2.000\n3.000 0.000\n");
}

#[test]
fn test_two_points_with_equal_x_order_by_y() {
    let output = run_cpair("1.0 5.0\n1.0 -2.0\n", &[]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "1.000 -2.000\n1.000 5.000\n");
}

#[test]
fn test_five_identical_points_report_zero_distance() {
    let output = run_cpair("0.0 0.0\n0.0 0.0\n0.0 0.0\n0.0 0.0\n0.0 0.0\n", &[]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "0.000 0.000\n0.000 0.000\n");
}

#[test]
fn test_vertical_line_finds_true_minimum() {
    let output = run_cpair("2.0 0.0\n2.0 9.0\n2.0 3.5\n2.0 4.0\n2.0 -5.0\n", &[]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "2.000 3.500\n2.000 4.000\n");
}

#[test]
fn test_blank_line_marks_end_of_input() {
    let output = run_cpair("1.0 2.0\n3.0 0.0\n\n", &[]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "1.000 2.000\n3.000 0.000\n");
}

#[test]
fn test_data_after_marker_fails_without_output() {
    let output = run_cpair("1.0 2.0\n\n3.0 0.0\n", &[]);
    assert_eq!(output.status.code(), Some(EXIT_FORMAT));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_malformed_line_fails_without_output() {
    let output = run_cpair("abc\n", &[]);
    assert_eq!(output.status.code(), Some(EXIT_FORMAT));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_extra_tokens_fail_without_output() {
    let output = run_cpair("1.0 2.0 3.0\n", &[]);
    assert_eq!(output.status.code(), Some(EXIT_FORMAT));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_unknown_engine_is_a_usage_error() {
    let output = run_cpair("1.0 2.0\n", &[("CPAIR_ENGINE", "threads")]);
    assert_eq!(output.status.code(), Some(EXIT_USAGE));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_ordering_holds_when_right_branch_finds_the_pair() {
    let output = run_cpair("-10.0 0.0\n-8.0 1.0\n9.1 0.0\n9.0 0.0\n", &[]);
    assert!(output.status.success());
    assert_eq!(stdout_of(&output), "9.000 0.000\n9.100 0.000\n");
}

#[test]
fn test_process_tree_matches_brute_force() {
    for (count, seed) in [(3, 11), (5, 12), (9, 13), (16, 14), (24, 15)] {
        let points = pseudo_random_points(count, seed);
        let output = run_cpair(&to_input(&points), &[]);
        assert!(
            output.status.success(),
            "count={count} seed={seed} stderr: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        let reported = parse_output(&stdout_of(&output));
        assert_eq!(reported.len(), 2, "count={count} seed={seed}");
        assert_eq!(
            euclidean(reported[0], reported[1]),
            brute_force_distance(&points),
            "count={count} seed={seed}"
        );
        assert!(reported[0].0 <= reported[1].0);
    }
}

#[test]
fn test_in_process_engine_matches_brute_force() {
    for (count, seed) in [(8, 21), (60, 22), (150, 23)] {
        let points = pseudo_random_points(count, seed);
        let output = run_cpair(&to_input(&points), &[("CPAIR_ENGINE", "in-process")]);
        assert!(output.status.success(), "count={count} seed={seed}");
        let reported = parse_output(&stdout_of(&output));
        assert_eq!(reported.len(), 2);
        assert_eq!(
            euclidean(reported[0], reported[1]),
            brute_force_distance(&points),
            "count={count} seed={seed}"
        );
    }
}

#[test]
fn test_engines_agree_on_the_same_input() {
    let points = pseudo_random_points(20, 31);
    let input = to_input(&points);
    let process = run_cpair(&input, &[("CPAIR_ENGINE", "process")]);
    let in_process = run_cpair(&input, &[("CPAIR_ENGINE", "in-process")]);
    assert!(process.status.success());
    assert!(in_process.status.success());
    assert_eq!(stdout_of(&process), stdout_of(&in_process));
}

#[test]
fn test_internal_invocations_keep_full_precision() {
    // A process started at depth > 0 behaves like a child of the tree: it
    // writes its result in round-trip form instead of rounding to 3
    // decimals.
    let output = run_cpair("0.0001 0.0\n0.0002 0.0\n", &[("CPAIR_DEPTH", "1")]);
    assert!(output.status.success());
    let reported = parse_output(&stdout_of(&output));
    assert_eq!(reported, vec![(0.0001, 0.0), (0.0002, 0.0)]);
}
