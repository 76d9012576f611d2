//! Goto and Muraoka's binary accuracy (Goto 1997).

use crate::Result;
use crate::preprocess::prepare;
use crate::utils::{check_non_negative, events_in_window, longest_run};

/// Default limit on the absolute normalized error of a correct annotation.
pub const DEFAULT_GOTO_THRESHOLD: f64 = 0.35;

/// Default limit on the mean absolute error of correct annotations.
pub const DEFAULT_GOTO_MU: f64 = 0.2;

/// Default limit on the standard deviation of errors of correct annotations.
pub const DEFAULT_GOTO_SIGMA: f64 = 0.2;

// Minimum share of the track the longest correct run has to cover.
const MIN_RUN_SHARE: f64 = 0.25;

/// Configuration for Goto accuracy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GotoConfig {
    pub threshold: f64,
    pub mu: f64,
    pub sigma: f64,
}

impl GotoConfig {
    pub fn new() -> Self {
        Self {
            threshold: DEFAULT_GOTO_THRESHOLD,
            mu: DEFAULT_GOTO_MU,
            sigma: DEFAULT_GOTO_SIGMA,
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_mu(mut self, mu: f64) -> Self {
        self.mu = mu;
        self
    }

    pub fn with_sigma(mut self, sigma: f64) -> Self {
        self.sigma = sigma;
        self
    }
}

impl Default for GotoConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Goto accuracy with default parameters: either 100 or 0.
pub fn goto(beats: &[f64], annotations: &[f64]) -> Result<f64> {
    goto_with_config(beats, annotations, &GotoConfig::default())
}

/// Goto accuracy, 100 if the beats track a continuous stretch of the
/// annotations closely enough, 0 otherwise.
///
/// Every interior annotation gets a normalized error from the single beat in
/// its half-open window (half an interval either side). Annotations with no
/// beat or several beats keep error 1, as do the first and last annotation.
/// An annotation is correct when its absolute error is below `threshold`.
/// The score is 100 when
/// - the longest run of correct annotations spans more than a quarter of
///   the track (measured up to the last annotation),
/// - the mean absolute error of correct annotations is below `mu`,
/// - the sample standard deviation of their errors is below `sigma`.
///
/// # Example
/// ```
/// use beat_eval::metrics::goto;
///
/// let annotations: Vec<f64> = (11..=120).map(|i| i as f64 * 0.5).collect();
/// let late: Vec<f64> = annotations.iter().map(|a| a + 0.02).collect();
/// assert_eq!(goto(&late, &annotations).unwrap(), 100.0);
///
/// let off_beat: Vec<f64> = annotations.iter().map(|a| a + 0.25).collect();
/// assert_eq!(goto(&off_beat, &annotations).unwrap(), 0.0);
/// ```
pub fn goto_with_config(beats: &[f64], annotations: &[f64], config: &GotoConfig) -> Result<f64> {
    check_non_negative("threshold", config.threshold)?;
    check_non_negative("mu", config.mu)?;
    check_non_negative("sigma", config.sigma)?;
    let (beats, annotations) = prepare(beats, annotations)?;

    if beats.is_empty() {
        log::warn!("beat sequence is empty, goto accuracy scores zero");
        return Ok(0.0);
    }
    if annotations.len() < 3 {
        log::warn!("fewer than three annotations, goto accuracy scores zero");
        return Ok(0.0);
    }

    let errors = beat_errors(&beats, &annotations);
    let correct: Vec<bool> = errors.iter().map(|e| e.abs() < config.threshold).collect();
    let correct_errors: Vec<f64> = errors
        .iter()
        .zip(&correct)
        .filter(|&(_, &ok)| ok)
        .map(|(&e, _)| e)
        .collect();

    if correct_errors.len() < 2 {
        log::debug!("goto accuracy 0 ({} correct annotations)", correct_errors.len());
        return Ok(0.0);
    }

    let (start, len) = longest_run(&correct);
    let run_span = annotations[start + len - 1] - annotations[start];
    let track_end = annotations[annotations.len() - 1];
    let continuous = run_span > MIN_RUN_SHARE * track_end;

    let n = correct_errors.len() as f64;
    let mean_abs = correct_errors.iter().map(|e| e.abs()).sum::<f64>() / n;
    let mean = correct_errors.iter().sum::<f64>() / n;
    let variance = correct_errors
        .iter()
        .map(|e| (e - mean).powi(2))
        .sum::<f64>()
        / (n - 1.0);
    let std_dev = variance.sqrt();

    let score = if continuous && mean_abs < config.mu && std_dev < config.sigma {
        100.0
    } else {
        0.0
    };

    log::debug!(
        "goto accuracy {score} (run span {run_span:.2}s, mean |e| {mean_abs:.3}, std {std_dev:.3})"
    );

    Ok(score)
}

// Normalized error per annotation, 1.0 where no single beat is paired.
fn beat_errors(beats: &[f64], annotations: &[f64]) -> Vec<f64> {
    let mut errors = vec![1.0; annotations.len()];

    for k in 1..annotations.len().saturating_sub(1) {
        let prev_half = 0.5 * (annotations[k] - annotations[k - 1]);
        let next_half = 0.5 * (annotations[k + 1] - annotations[k]);
        let in_window = events_in_window(beats, annotations[k] - prev_half, annotations[k] + next_half);

        if let [only] = in_window[..] {
            let offset = beats[only] - annotations[k];
            errors[k] = if offset < 0.0 {
                offset / prev_half
            } else {
                offset / next_half
            };
        }
    }

    errors
}
