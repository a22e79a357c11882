//! poker-hand: five-card poker hand classifier
//!
//! Goals:
//! - Classify exactly five cards into one of ten categories with a fixed score
//! - Deterministic and order independent; no state between calls
//! - No panics for invalid input; use `Result` for recoverable errors
//!
//! ## Quick start
//! ```
//! use poker_hand::cards::ParseOptions;
//! use poker_hand::evaluator::{classify, Category};
//!
//! let eval = classify(&["2H", "2D", "2S", "10H", "10C"], ParseOptions::default()).unwrap();
//! assert_eq!(eval.category, Category::FullHouse);
//! assert_eq!(eval.score(), 7);
//! assert_eq!(eval.name(), "Full House");
//! ```
//!
//! ## CLI
//! ```sh
//! cargo run --bin poker-hand -- grade KH AH QH JH 10H
//! ```

pub mod cards;
pub mod deck;
pub mod detection;
pub mod evaluator;
pub mod hand;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
