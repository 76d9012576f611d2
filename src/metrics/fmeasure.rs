//! Dixon's F-Measure (Dixon 2006, 2007) and related accuracy (Dixon 2001).

use crate::Result;
use crate::preprocess::prepare;
use crate::utils::{MatchCounts, check_non_negative, count_window_matches};

/// Default half-width of the tolerance window in seconds.
pub const DEFAULT_TOLERANCE_WINDOW: f64 = 0.07;

/// Configuration for F-Measure evaluation.
///
/// # Example
/// ```
/// use beat_eval::metrics::FMeasureConfig;
///
/// let config = FMeasureConfig::new().with_tolerance_window(0.05);
/// assert_eq!(config.tolerance_window, 0.05);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FMeasureConfig {
    /// Half-width of the tolerance window in seconds
    pub tolerance_window: f64,
}

impl FMeasureConfig {
    /// Create a configuration with the standard 70 ms window.
    pub fn new() -> Self {
        Self {
            tolerance_window: DEFAULT_TOLERANCE_WINDOW,
        }
    }

    /// Set the tolerance window half-width.
    pub fn with_tolerance_window(mut self, tolerance_window: f64) -> Self {
        self.tolerance_window = tolerance_window;
        self
    }

    /// Evaluate beats with this configuration.
    pub fn evaluate(&self, beats: &[f64], annotations: &[f64]) -> Result<FMeasureResult> {
        fmeasure_detailed(beats, annotations, self)
    }
}

impl Default for FMeasureConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// F-Measure with its components, all in percent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FMeasureResult {
    pub f_measure: f64,
    pub precision: f64,
    pub recall: f64,
    /// Dixon's accuracy: hits over hits plus all errors.
    pub accuracy: f64,
}

impl FMeasureResult {
    /// Derive the scores from match counts. Empty denominators give 0.
    pub fn from_counts(counts: MatchCounts) -> Self {
        let hits = counts.true_positives as f64;
        let fp = counts.false_positives as f64;
        let fn_ = counts.false_negatives as f64;

        let precision = percentage(hits, hits + fp);
        let recall = percentage(hits, hits + fn_);
        let f_measure = if precision + recall > 0.0 {
            2.0 * precision * recall / (precision + recall)
        } else {
            0.0
        };
        let accuracy = percentage(hits, hits + fp + fn_);

        Self {
            f_measure,
            precision,
            recall,
            accuracy,
        }
    }
}

fn percentage(num: f64, denom: f64) -> f64 {
    if denom > 0.0 { 100.0 * (num / denom) } else { 0.0 }
}

/// F-Measure of `beats` against `annotations` with the default window.
///
/// # Example
/// ```
/// use beat_eval::metrics::fmeasure;
///
/// let annotations: Vec<f64> = (11..=40).map(|i| i as f64 * 0.5).collect();
/// assert_eq!(fmeasure(&annotations, &annotations).unwrap(), 100.0);
/// ```
pub fn fmeasure(beats: &[f64], annotations: &[f64]) -> Result<f64> {
    fmeasure_detailed(beats, annotations, &FMeasureConfig::default()).map(|r| r.f_measure)
}

/// F-Measure, precision, recall and Dixon accuracy.
///
/// Beats and annotations before five seconds are ignored. An empty beat
/// sequence scores zero on every component.
///
/// # Errors
/// - [`crate::Error::InvalidUnits`] if times are not in seconds
/// - [`crate::Error::InvalidParameter`] for a negative or non-finite window
pub fn fmeasure_detailed(
    beats: &[f64],
    annotations: &[f64],
    config: &FMeasureConfig,
) -> Result<FMeasureResult> {
    check_non_negative("tolerance_window", config.tolerance_window)?;
    let (beats, annotations) = prepare(beats, annotations)?;

    if beats.is_empty() {
        log::warn!("beat sequence is empty, f-measure scores zero");
        return Ok(FMeasureResult::default());
    }

    let counts = count_window_matches(&beats, &annotations, config.tolerance_window);
    let result = FMeasureResult::from_counts(counts);

    log::debug!(
        "f-measure {:.3} (tp={}, fp={}, fn={})",
        result.f_measure,
        counts.true_positives,
        counts.false_positives,
        counts.false_negatives
    );

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn from_counts_guards_denominators() {
        assert_eq!(
            FMeasureResult::from_counts(MatchCounts::default()),
            FMeasureResult::default()
        );

        let only_fp = FMeasureResult::from_counts(MatchCounts {
            true_positives: 0,
            false_positives: 4,
            false_negatives: 0,
        });
        assert_eq!(only_fp.f_measure, 0.0);
        assert_eq!(only_fp.recall, 0.0);
    }

    #[test]
    fn from_counts_values() {
        let r = FMeasureResult::from_counts(MatchCounts {
            true_positives: 6,
            false_positives: 2,
            false_negatives: 4,
        });
        assert_relative_eq!(r.precision, 75.0);
        assert_relative_eq!(r.recall, 60.0);
        assert_relative_eq!(r.f_measure, 2.0 * 75.0 * 60.0 / 135.0);
        assert_relative_eq!(r.accuracy, 50.0);
    }

    #[test]
    fn negative_window_rejected() {
        let config = FMeasureConfig::new().with_tolerance_window(-0.01);
        assert!(config.evaluate(&[6.0], &[6.0]).is_err());
    }
}
