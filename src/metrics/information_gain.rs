//! Davies et al.'s Information Gain (Davies 2009).
//!
//! Beat errors, normalized by the local inter-annotation interval, are
//! histogrammed over one beat period. A beat tracker whose errors cluster
//! tightly, at any consistent offset, has a low-entropy histogram and a high
//! information gain. The score is measured in bits, not percent.

use crate::Result;
use crate::preprocess::prepare;
use crate::utils::{bin_edges, check_at_least, histogram, histogram_bin_centres, nearest};

/// Default number of histogram bins.
pub const DEFAULT_NUM_BINS: usize = 40;

/// Configuration for information gain.
///
/// # Example
/// ```
/// use beat_eval::metrics::InformationGainConfig;
///
/// let config = InformationGainConfig::new().with_num_bins(20);
/// assert_eq!(config.num_bins, 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InformationGainConfig {
    pub num_bins: usize,
}

impl InformationGainConfig {
    pub fn new() -> Self {
        Self {
            num_bins: DEFAULT_NUM_BINS,
        }
    }

    pub fn with_num_bins(mut self, num_bins: usize) -> Self {
        self.num_bins = num_bins;
        self
    }
}

impl Default for InformationGainConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Information gain with the beat-error histogram it was derived from.
#[derive(Debug, Clone, PartialEq)]
pub struct InformationGainResult {
    /// Information gain in bits, `0..=log2(num_bins)`
    pub information_gain: f64,
    /// Beat-error counts of the direction with the higher entropy
    pub histogram: Vec<f64>,
}

/// Information gain in bits with 40 bins.
///
/// # Example
/// ```
/// use beat_eval::metrics::information_gain;
///
/// let annotations: Vec<f64> = (11..=40).map(|i| i as f64 * 0.5).collect();
/// let ig = information_gain(&annotations, &annotations).unwrap();
/// assert!((ig - 40f64.log2()).abs() < 1e-9);
/// ```
pub fn information_gain(beats: &[f64], annotations: &[f64]) -> Result<f64> {
    information_gain_detailed(beats, annotations, DEFAULT_NUM_BINS).map(|r| r.information_gain)
}

/// Information gain and histogram with `num_bins` bins.
///
/// Errors are computed in both directions, beats against annotations and
/// annotations against beats. The direction with the higher entropy
/// determines the score, `log2(num_bins) - entropy`.
///
/// Fewer than two beats or annotations after the lead-in trim score zero,
/// with a flat histogram.
///
/// # Errors
/// - [`crate::Error::InvalidParameter`] if `num_bins < 2`
/// - [`crate::Error::InvalidUnits`] if times are not in seconds
pub fn information_gain_detailed(
    beats: &[f64],
    annotations: &[f64],
    num_bins: usize,
) -> Result<InformationGainResult> {
    check_at_least("num_bins", num_bins, 2)?;
    let (beats, annotations) = prepare(beats, annotations)?;

    if beats.len() < 2 || annotations.len() < 2 {
        log::warn!("beat or annotation sequence too short, information gain is zero");
        let height = annotations.len() as f64 / num_bins as f64;
        return Ok(InformationGainResult {
            information_gain: 0.0,
            histogram: vec![height; num_bins],
        });
    }

    let centres = histogram_bin_centres(num_bins);

    let forward_errors = beat_errors(&annotations, &beats);
    let (forward_entropy, forward_histogram) = entropy(&forward_errors, &centres);

    let backward_errors = beat_errors(&beats, &annotations);
    let (backward_entropy, backward_histogram) = entropy(&backward_errors, &centres);

    let (max_entropy, histogram) = if forward_entropy > backward_entropy {
        (forward_entropy, forward_histogram)
    } else {
        (backward_entropy, backward_histogram)
    };

    let information_gain = (num_bins as f64).log2() - max_entropy;
    log::debug!(
        "information gain {information_gain:.4} bits (forward H={forward_entropy:.4}, backward H={backward_entropy:.4})"
    );

    Ok(InformationGainResult {
        information_gain,
        histogram,
    })
}

/// Error of each point relative to its nearest reference, as a fraction of
/// the reference interval it falls into.
///
/// Positive errors use the following interval, negative errors the
/// preceding one. The first reference always uses the following interval,
/// the last one the preceding interval. Errors are rounded to four decimals.
/// `reference` needs at least two elements; otherwise no errors are
/// produced.
///
/// # Example
/// ```
/// use beat_eval::metrics::beat_errors;
///
/// let reference = [10.0, 11.0, 13.0];
/// assert_eq!(beat_errors(&reference, &[10.5, 11.5, 10.75]), vec![0.5, 0.25, -0.25]);
/// ```
pub fn beat_errors(reference: &[f64], points: &[f64]) -> Vec<f64> {
    if reference.len() < 2 {
        return Vec::new();
    }
    let last = reference.len() - 1;

    points
        .iter()
        .filter_map(|&p| {
            let (j, _) = nearest(reference, p)?;
            let error = p - reference[j];
            let interval = if j == 0 || (error >= 0.0 && j < last) {
                reference[j + 1] - reference[j]
            } else {
                reference[j] - reference[j - 1]
            };
            Some(round4(error / interval))
        })
        .collect()
}

/// Entropy in bits of the wrapped beat-error histogram.
///
/// Errors are wrapped into `(-0.5, 0.5]` and histogrammed on `centres`
/// (one more centre than bins, see
/// [`histogram_bin_centres`](crate::utils::histogram_bin_centres)). The
/// `+0.5` bin is folded into the `-0.5` bin since both describe the same
/// phase. Returns the entropy and the folded counts.
pub fn entropy(errors: &[f64], centres: &[f64]) -> (f64, Vec<f64>) {
    let wrapped: Vec<f64> = errors.iter().map(|&e| wrap_error(e)).collect();
    let edges = bin_edges(centres);
    let mut counts: Vec<f64> = histogram(&wrapped, &edges)
        .into_iter()
        .map(|c| c as f64)
        .collect();

    if let Some(last) = counts.pop() {
        if let Some(first) = counts.first_mut() {
            *first += last;
        }
    }

    let total: f64 = counts.iter().sum();
    let entropy = if total > 0.0 {
        -counts
            .iter()
            .map(|&c| c / total)
            .filter(|&p| p > 0.0)
            .map(|p| p * p.log2())
            .sum::<f64>()
    } else {
        0.0
    };

    (entropy, counts)
}

fn wrap_error(error: f64) -> f64 {
    let r = (error + 0.5).rem_euclid(1.0);
    if r == 0.0 { 0.5 } else { r - 0.5 }
}

fn round4(x: f64) -> f64 {
    (x * 10000.0).round_ties_even() / 10000.0
}
