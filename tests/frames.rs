use poker_hand::cards::ParseOptions;
use poker_hand::detection::{select_hand, Detection, FrameGrader};
use poker_hand::evaluator::Category;

fn detections(items: &[(&str, f32)]) -> Vec<Detection> {
    items.iter().map(|&(label, conf)| Detection::new(label, conf)).collect()
}

#[test]
fn noisy_frame_yields_royal_flush() {
    let frame = detections(&[
        ("KH", 0.92),
        ("KH", 0.88),
        ("9C", 0.31),
        ("AH", 0.77),
        ("QH", 0.64),
        ("AH", 0.71),
        ("JH", 0.58),
        ("10H", 0.5),
    ]);
    let report = FrameGrader::default().grade(&frame).unwrap().expect("five labels");
    assert_eq!(report.labels, vec!["KH", "AH", "QH", "JH", "10H"]);
    assert_eq!(report.evaluation.as_pair(), (10, "Royal Flush"));
}

#[test]
fn frames_are_independent() {
    let grader = FrameGrader::default();
    let partial = detections(&[("2D", 0.9), ("KD", 0.9), ("7D", 0.9)]);
    let full = detections(&[("2D", 0.9), ("KD", 0.9), ("7D", 0.9), ("6D", 0.9), ("5D", 0.9)]);

    assert!(grader.grade(&partial).unwrap().is_none());
    let report = grader.grade(&full).unwrap().expect("a hand");
    assert_eq!(report.evaluation.category, Category::Flush);
    // the earlier partial frame contributes nothing
    assert!(grader.grade(&partial).unwrap().is_none());
}

#[test]
fn normalized_grader_reads_lower_case_labels() {
    let frame = detections(&[("5c", 0.9), ("5s", 0.9), ("5h", 0.9), ("5d", 0.9), ("qh", 0.9)]);
    assert!(FrameGrader::default().grade(&frame).is_err());
    let report = FrameGrader::new(0.5, ParseOptions::normalized()).grade(&frame).unwrap().unwrap();
    assert_eq!(report.evaluation.category, Category::FourOfAKind);
}

#[test]
fn empty_frame_has_no_hand() {
    assert_eq!(select_hand(&[], 0.5), None);
}
