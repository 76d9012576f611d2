//! Beat tracking evaluation for Rust.
//!
//! Beat-eval scores estimated beat times against ground-truth annotations
//! with the standard measures of the beat tracking literature, as collected
//! in the Davies, Degara and Plumbley evaluation toolbox.
//!
//! # Features
//!
//! - **Window based**: Dixon F-Measure with precision, recall and accuracy
//! - **Error functions**: Cemgil accuracy and its allowed-metrical-level form
//! - **Continuity**: CMLc, CMLt, AMLc, AMLt (Hainsworth, Klapuri)
//! - **Binary**: Goto and Muraoka's accuracy
//! - **Correlation**: McKinney P-Score
//! - **Entropy**: Davies Information Gain, with the beat-error histogram
//! - **Downbeats**: downbeat accuracy against annotated bar starts
//! - **Databases**: per-track and mean scores over many tracks
//!
//! # Quick Start
//!
//! ```rust
//! use beat_eval::{evaluate, evaluate::SCORE_NAMES};
//!
//! // Annotations at 120 BPM, beats 20 ms late
//! let annotations: Vec<f64> = (11..=120).map(|i| i as f64 * 0.5).collect();
//! let beats: Vec<f64> = annotations.iter().map(|a| a + 0.02).collect();
//!
//! let scores = evaluate(&beats, &annotations).unwrap();
//! assert_eq!(SCORE_NAMES[2], "f_measure");
//! assert_eq!(scores[2], 100.0);
//! ```
//!
//! # Conventions
//!
//! Times are in seconds and ascending. Every measure ignores beats and
//! annotations before [`preprocess::MIN_BEAT_TIME`] (5 s). Input containing a
//! time above [`preprocess::MAX_BEAT_TIME`] is rejected as not being in
//! seconds. Inputs are never modified.
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`evaluate`] | All measures at once, database evaluation of beats and downbeats |
//! | [`metrics`] | The individual measures and their configurations |
//! | [`metrical`] | Double tempo, off-beat and half tempo variants |
//! | [`preprocess`] | Lead-in trimming and unit validation |
//! | [`utils`] | Matching, nearest neighbours, impulse trains, histograms |
//!
//! # Error Handling
//!
//! All fallible operations return [`Result<T>`], which is an alias for
//! `std::result::Result<T, Error>`. The [`Error`] enum covers times in the
//! wrong units, invalid parameters and mismatched database sizes.
//!
//! # Safety
//!
//! This crate uses `#![forbid(unsafe_code)]`.
//!
//! # Feature Flags
//!
//! | Flag | Description |
//! |------|-------------|
//! | `parallel` | Evaluate database tracks in parallel with rayon |

#![forbid(unsafe_code)]

pub mod error;
pub use error::{Error, Result};

pub mod evaluate;
pub mod metrical;
pub mod metrics;
pub mod preprocess;
pub mod utils;

pub use evaluate::{
    BeatScores, DatabaseScores, EvaluationConfig, downbeat_db, evaluate, evaluate_db,
    evaluate_scores,
};
