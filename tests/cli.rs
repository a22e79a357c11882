use std::io::Write;
use std::process::{Command, Output, Stdio};

fn poker_hand(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_poker-hand"))
        .args(args)
        .env_remove("POKER_HAND_MIN_CONFIDENCE")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn poker-hand");
    // the child may exit before reading, e.g. on a usage error
    let _ = child.stdin.take().unwrap().write_all(stdin.as_bytes());
    child.wait_with_output().expect("wait for poker-hand")
}

fn stdout(out: &Output) -> String {
    String::from_utf8_lossy(&out.stdout).into_owned()
}

fn stderr(out: &Output) -> String {
    String::from_utf8_lossy(&out.stderr).into_owned()
}

#[test]
fn grade_prints_name_and_score() {
    let out = poker_hand(&["grade", "KH", "AH", "QH", "JH", "10H"], "");
    assert!(out.status.success());
    assert_eq!(stdout(&out), "Royal Flush (score: 10)\n");

    let out = poker_hand(&["grade", "2D", "2S", "9C", "KD", "10C"], "");
    assert!(out.status.success());
    assert_eq!(stdout(&out), "Pair (score: 2)\n");
}

#[test]
fn grade_fails_on_a_bad_token() {
    let out = poker_hand(&["grade", "1H", "2S", "3D", "4H", "5C"], "");
    assert!(!out.status.success());
    assert!(stdout(&out).is_empty());
    let err = stderr(&out);
    assert_eq!(err.matches("invalid rank: '1'").count(), 1, "{err}");
}

#[test]
fn grade_fails_on_wrong_hand_size() {
    let out = poker_hand(&["grade", "KH", "AH", "QH", "JH"], "");
    assert!(!out.status.success());
    assert!(stderr(&out).contains("expected exactly five cards, got 4"));
}

#[test]
fn grade_honours_fold_case() {
    let out = poker_hand(&["grade", "kh", "ah", "qh", "jh", "10h"], "");
    assert!(!out.status.success());

    let out = poker_hand(&["--fold-case", "grade", "kh", "ah", "qh", "jh", "10h"], "");
    assert!(out.status.success());
    assert_eq!(stdout(&out), "Royal Flush (score: 10)\n");
}

#[test]
fn frames_are_read_from_stdin() {
    let input = "\
KH:0.9 KH:0.8 AH:0.7 QH:0.95 2C:0.2 JH:0.6 10H:0.5
AS:0.9 2S:0.9
5C:0.9 5S:0.9 5H:0.9 5D:0.9 QH:0.9 9C:0.9
";
    let out = poker_hand(&["frames"], input);
    assert!(out.status.success(), "{}", stderr(&out));
    assert_eq!(
        stdout(&out),
        "1: Royal Flush (score: 10) [KH AH QH JH 10H]\n\
         3: Four of a Kind (score: 8) [5C 5S 5H 5D QH]\n"
    );
}

#[test]
fn frames_fail_on_an_invalid_hand() {
    let input = "\
1H:0.9 2S:0.9 3D:0.9 4H:0.9 5C:0.9
AS:0.9 2S:0.9 3D:0.9 4H:0.9 5C:0.9
";
    let out = poker_hand(&["frames"], input);
    assert!(!out.status.success());
    // later frames are still graded
    assert_eq!(stdout(&out), "2: Straight (score: 5) [AS 2S 3D 4H 5C]\n");
    let err = stderr(&out);
    assert_eq!(err.matches("invalid rank: '1'").count(), 1, "{err}");
    assert!(err.contains("1 frame(s) did not form a valid hand"));
}

#[test]
fn frames_fail_on_malformed_input() {
    let out = poker_hand(&["frames"], "AS-0.9\n");
    assert!(!out.status.success());
    assert!(stderr(&out).contains("expected LABEL:CONFIDENCE"));
}

#[test]
fn min_confidence_is_a_global_flag() {
    let input = "AS:0.9 2S:0.8 3D:0.7 4H:0.6 5C:0.55\n";

    let out = poker_hand(&["frames"], input);
    assert!(out.status.success());
    assert_eq!(stdout(&out), "1: Straight (score: 5) [AS 2S 3D 4H 5C]\n");

    for args in [["--min-confidence", "0.6", "frames"], ["frames", "--min-confidence", "0.6"]] {
        let out = poker_hand(&args, input);
        assert!(out.status.success(), "{}", stderr(&out));
        assert!(stdout(&out).is_empty());
    }

    let out = poker_hand(&["--min-confidence", "1.5", "frames"], input);
    assert!(!out.status.success());
}

#[test]
fn min_confidence_reads_the_environment() {
    let input = "AS:0.9 2S:0.8 3D:0.7 4H:0.6 5C:0.55\n";
    let mut child = Command::new(env!("CARGO_BIN_EXE_poker-hand"))
        .arg("frames")
        .env("POKER_HAND_MIN_CONFIDENCE", "0.6")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::null())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(input.as_bytes()).unwrap();
    let out = child.wait_with_output().unwrap();
    assert!(out.status.success());
    assert!(stdout(&out).is_empty());
}

#[test]
fn seeded_deal_is_reproducible() {
    let first = poker_hand(&["deal", "--seed", "42", "--count", "3"], "");
    let second = poker_hand(&["deal", "--seed", "42", "--count", "3"], "");
    assert!(first.status.success());
    assert_eq!(stdout(&first), stdout(&second));

    let text = stdout(&first);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    for line in lines {
        let (hand, eval) = line.split_once(": ").expect("HAND: EVALUATION");
        assert_eq!(hand.split(' ').count(), 5);
        assert!(eval.ends_with(')') && eval.contains("(score: "), "{line}");
    }

    let other = poker_hand(&["deal", "--seed", "43", "--count", "3"], "");
    assert_ne!(stdout(&first), stdout(&other));
}

#[test]
fn deal_count_is_bounded() {
    let out = poker_hand(&["deal", "--count", "11"], "");
    assert!(!out.status.success());
}
