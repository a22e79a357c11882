//! Turning one frame of card detections into a hand.
//!
//! A card detector reports labels such as `"10H"` with a confidence. Labels
//! under the threshold are dropped, repeated labels keep their first
//! occurrence, and the first five that remain are graded. A frame with fewer
//! than five has no hand. Frames are independent; nothing is carried from one
//! call to the next.

use crate::cards::ParseOptions;
use crate::evaluator::{classify, Evaluation};
use crate::hand::{HandError, HAND_SIZE};
use log::{debug, trace};
use std::collections::HashSet;

/// Default minimum confidence for a detection to count.
pub const DEFAULT_MIN_CONFIDENCE: f32 = 0.5;

/// A single labelled detection from the upstream recogniser.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub label: String,
    pub confidence: f32,
}

impl Detection {
    pub fn new(label: impl Into<String>, confidence: f32) -> Self {
        Self { label: label.into(), confidence }
    }
}

/// Labels at or above `min_confidence`, first occurrence only, in order seen.
pub fn qualifying_labels(detections: &[Detection], min_confidence: f32) -> Vec<&str> {
    let mut seen = HashSet::new();
    detections
        .iter()
        .filter(|d| d.confidence >= min_confidence)
        .map(|d| d.label.as_str())
        .filter(|label| seen.insert(*label))
        .collect()
}

/// The first five distinct qualifying labels, or `None` if the frame holds
/// fewer than five.
///
/// ```
/// use poker_hand::detection::{select_hand, Detection};
///
/// let frame = [
///     Detection::new("KH", 0.9),
///     Detection::new("KH", 0.8),
///     Detection::new("AH", 0.7),
///     Detection::new("QH", 0.95),
///     Detection::new("2C", 0.2),
///     Detection::new("JH", 0.6),
///     Detection::new("10H", 0.5),
/// ];
/// assert_eq!(select_hand(&frame, 0.5), Some(vec!["KH", "AH", "QH", "JH", "10H"]));
/// ```
pub fn select_hand(detections: &[Detection], min_confidence: f32) -> Option<Vec<&str>> {
    let mut labels = qualifying_labels(detections, min_confidence);
    trace!("{} of {} detections qualify", labels.len(), detections.len());
    if labels.len() < HAND_SIZE {
        return None;
    }
    labels.truncate(HAND_SIZE);
    Some(labels)
}

/// A graded frame.
#[derive(Debug, Clone)]
pub struct FrameReport {
    pub labels: Vec<String>,
    pub evaluation: Evaluation,
}

/// Grades frames of detections with a fixed threshold and parse policy.
#[derive(Debug, Clone, Copy)]
pub struct FrameGrader {
    pub min_confidence: f32,
    pub options: ParseOptions,
}

impl Default for FrameGrader {
    fn default() -> Self {
        Self { min_confidence: DEFAULT_MIN_CONFIDENCE, options: ParseOptions::default() }
    }
}

impl FrameGrader {
    pub fn new(min_confidence: f32, options: ParseOptions) -> Self {
        Self { min_confidence, options }
    }

    /// `Ok(None)` when the frame has no hand; an error when the five labels do
    /// not form a valid hand.
    pub fn grade(&self, detections: &[Detection]) -> Result<Option<FrameReport>, HandError> {
        let Some(labels) = select_hand(detections, self.min_confidence) else {
            return Ok(None);
        };
        let evaluation = classify(labels.as_slice(), self.options)?;
        debug!("frame {labels:?} => {evaluation}");
        Ok(Some(FrameReport { labels: labels.into_iter().map(String::from).collect(), evaluation }))
    }
}
