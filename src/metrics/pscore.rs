//! McKinney et al.'s P-Score (McKinney 2007).
//!
//! Beats and annotations are quantized into impulse trains and
//! cross-correlated within a small lag window derived from the median
//! inter-annotation interval.

use crate::Result;
use crate::preprocess::prepare;
use crate::utils::{
    check_non_negative, correlate_impulses, impulse_train, median, nonzero_indices,
};

/// Default lag window, as a fraction of the median inter-annotation interval.
pub const DEFAULT_PSCORE_THRESHOLD: f64 = 0.2;

/// Resolution of the impulse trains in bins per second.
pub const IMPULSE_RATE: f64 = 100.0;

/// Configuration for P-Score evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PScoreConfig {
    /// Size of the lag window relative to the median annotation interval
    pub threshold: f64,
}

impl PScoreConfig {
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_PSCORE_THRESHOLD,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }
}

impl Default for PScoreConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// P-Score with the default lag window.
///
/// # Example
/// ```
/// use beat_eval::metrics::pscore;
///
/// let annotations: Vec<f64> = (11..=40).map(|i| i as f64 * 0.5).collect();
/// assert_eq!(pscore(&annotations, &annotations).unwrap(), 100.0);
/// ```
pub fn pscore(beats: &[f64], annotations: &[f64]) -> Result<f64> {
    pscore_with_config(beats, annotations, &PScoreConfig::default())
}

/// P-Score with a custom lag window threshold.
pub fn pscore_with_threshold(beats: &[f64], annotations: &[f64], threshold: f64) -> Result<f64> {
    pscore_with_config(beats, annotations, &PScoreConfig::new().with_threshold(threshold))
}

/// P-Score in percent.
///
/// Both sequences become 100 Hz impulse trains. The lag window is
/// `round(threshold * median inter-annotation interval)` bins. The
/// cross-correlation summed over the window is divided by the larger of the
/// two impulse counts and capped at 100.
///
/// A beat can correlate with more than one annotation when the annotations
/// are irregular, so the raw ratio may exceed one.
pub fn pscore_with_config(
    beats: &[f64],
    annotations: &[f64],
    config: &PScoreConfig,
) -> Result<f64> {
    check_non_negative("threshold", config.threshold)?;
    let (beats, annotations) = prepare(beats, annotations)?;

    if beats.is_empty() {
        log::warn!("beat sequence is empty, p-score is zero");
        return Ok(0.0);
    }
    if annotations.is_empty() {
        log::warn!("annotation sequence is empty, p-score is zero");
        return Ok(0.0);
    }

    let last = beats
        .iter()
        .chain(annotations.iter())
        .copied()
        .fold(0.0f64, f64::max);
    let len = last.ceil() as usize * IMPULSE_RATE as usize;

    let beat_train = impulse_train(&beats, IMPULSE_RATE, len);
    let annotation_train = impulse_train(&annotations, IMPULSE_RATE, len);

    let annotation_bins = nonzero_indices(&annotation_train);
    let beat_bins = nonzero_indices(&beat_train);

    let intervals: Vec<f64> = annotation_bins
        .windows(2)
        .map(|w| (w[1] - w[0]) as f64)
        .collect();
    let max_lag = median(&intervals)
        .map(|m| (config.threshold * m).round() as usize)
        .unwrap_or(0);

    let correlation = correlate_impulses(&beat_bins, &annotation_bins, max_lag) as f64;
    let denom = beat_bins.len().max(annotation_bins.len()) as f64;
    let score = if denom > 0.0 {
        (100.0 * correlation / denom).min(100.0)
    } else {
        0.0
    };

    log::debug!("p-score {score:.3} (lag window {max_lag} bins)");
    Ok(score)
}
