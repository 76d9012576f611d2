//! Downbeat accuracy.
//!
//! Estimated downbeats are compared against bar-level annotations. Each
//! annotated bar is subdivided into `beats_per_bar` beats by linear
//! interpolation, which yields one candidate downbeat sequence per beat
//! position in the bar. Double-time (two downbeats per bar) and half-time
//! (every other bar) candidates are added. Scoring uses the total accuracy
//! of the continuity measure with sixteenth-note tolerances.

use crate::Result;
use crate::metrical::{every_other, interpolate_at};
use crate::metrics::continuity::continuity_scores;
use crate::preprocess::prepare;
use crate::utils::{argmax, check_at_least};

/// Default number of beats in a bar.
pub const DEFAULT_BEATS_PER_BAR: usize = 4;

// Downbeat scoring needs a few bars on both sides.
const MIN_EVENTS: usize = 3;

/// Configuration for downbeat evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DownbeatConfig {
    pub beats_per_bar: usize,
}

impl DownbeatConfig {
    pub fn new() -> Self {
        Self {
            beats_per_bar: DEFAULT_BEATS_PER_BAR,
        }
    }

    pub fn with_beats_per_bar(mut self, beats_per_bar: usize) -> Self {
        self.beats_per_bar = beats_per_bar;
        self
    }

    /// Phase and period tolerance: one sixteenth note of a bar.
    pub fn tolerance(&self) -> f64 {
        1.0 / (self.beats_per_bar as f64 * 4.0)
    }
}

impl Default for DownbeatConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Downbeat accuracies per interpretation, in percent.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DownbeatResult {
    /// Best of the annotated phase, double time and half time
    pub score: f64,
    /// Accuracy against each beat position of the bar, first is the annotated one
    pub phase_accuracies: Vec<f64>,
    pub double_time: f64,
    /// Best of the two half-time interpretations
    pub half_time: f64,
    /// Beat position in the bar with the highest accuracy
    pub best_phase: usize,
}

/// Downbeat accuracy with four beats per bar.
pub fn downbeat(downbeats: &[f64], annotations: &[f64]) -> Result<f64> {
    downbeat_with_config(downbeats, annotations, &DownbeatConfig::default())
}

/// Downbeat accuracy with a custom bar length.
pub fn downbeat_with_config(
    downbeats: &[f64],
    annotations: &[f64],
    config: &DownbeatConfig,
) -> Result<f64> {
    downbeat_detailed(downbeats, annotations, config).map(|r| r.score)
}

/// Accuracy of `downbeats` against annotated bar starts, for every
/// interpretation.
///
/// Fewer than three downbeats or annotations after the lead-in trim give the
/// all-zero result.
///
/// # Example
/// ```
/// use beat_eval::metrics::{DownbeatConfig, downbeat_detailed};
///
/// let bars: Vec<f64> = (0..40).map(|k| 6.0 + 2.0 * k as f64).collect();
/// let result = downbeat_detailed(&bars, &bars, &DownbeatConfig::default()).unwrap();
/// assert_eq!(result.score, 100.0);
/// assert_eq!(result.best_phase, 0);
/// ```
pub fn downbeat_detailed(
    downbeats: &[f64],
    annotations: &[f64],
    config: &DownbeatConfig,
) -> Result<DownbeatResult> {
    check_at_least("beats_per_bar", config.beats_per_bar, 1)?;
    let (downbeats, annotations) = prepare(downbeats, annotations)?;
    let bpb = config.beats_per_bar;

    if downbeats.len() < MIN_EVENTS || annotations.len() < MIN_EVENTS {
        log::warn!("downbeat or annotation sequence is empty or too short, downbeat accuracy is zero");
        return Ok(DownbeatResult {
            phase_accuracies: vec![0.0; bpb],
            ..Default::default()
        });
    }

    let tolerance = config.tolerance();
    let accuracy = |candidate: &[f64]| {
        continuity_scores(&downbeats, candidate, tolerance, tolerance).total_accuracy
    };

    let n = annotations.len();
    let beats = interpolate_at(&annotations, (0..n * bpb).map(|k| k as f64 / bpb as f64));
    let phase_accuracies: Vec<f64> = (0..bpb)
        .map(|phase| {
            let candidate: Vec<f64> = beats.iter().skip(phase).step_by(bpb).copied().collect();
            accuracy(&candidate)
        })
        .collect();

    let step = 2.0 / bpb as f64;
    let num_double = (n as f64 / step).ceil() as usize;
    let double = interpolate_at(&annotations, (0..num_double).map(|k| k as f64 * step));
    let double_time = accuracy(&double);

    let half_time = accuracy(&every_other(&annotations, 0))
        .max(accuracy(&every_other(&annotations, 1)));

    let best_phase = argmax(&phase_accuracies).unwrap_or(0);
    let score = phase_accuracies[0].max(double_time).max(half_time);

    log::debug!(
        "downbeat accuracy {score:.3} (double {double_time:.3}, half {half_time:.3}, best phase {best_phase})"
    );

    Ok(DownbeatResult {
        score,
        phase_accuracies,
        double_time,
        half_time,
        best_phase,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bars(n: usize) -> Vec<f64> {
        (0..n).map(|k| 6.0 + 2.0 * k as f64).collect()
    }

    #[test]
    fn second_beat_of_bar_is_not_a_downbeat() {
        let annotations = bars(30);
        let estimated: Vec<f64> = annotations.iter().map(|d| d + 0.5).collect();
        let result = downbeat_detailed(&estimated, &annotations, &DownbeatConfig::default()).unwrap();
        assert_eq!(result.score, 0.0);
        assert_eq!(result.best_phase, 1);
        assert!(result.phase_accuracies[1] > 90.0);
    }

    #[test]
    fn half_time_downbeats_accepted() {
        let annotations = bars(30);
        let estimated = every_other(&annotations, 1);
        let result = downbeat_detailed(&estimated, &annotations, &DownbeatConfig::default()).unwrap();
        assert_eq!(result.half_time, 100.0);
        assert_eq!(result.score, 100.0);
    }

    #[test]
    fn short_input_scores_zero() {
        let result = downbeat_detailed(&[6.0, 8.0], &bars(10), &DownbeatConfig::default()).unwrap();
        assert_eq!(result.score, 0.0);
        assert_eq!(result.phase_accuracies, vec![0.0; 4]);
    }

    #[test]
    fn zero_beats_per_bar_rejected() {
        let config = DownbeatConfig::new().with_beats_per_bar(0);
        assert!(downbeat_with_config(&bars(10), &bars(10), &config).is_err());
    }

    #[test]
    fn tolerance_is_a_sixteenth() {
        assert_eq!(DownbeatConfig::new().tolerance(), 1.0 / 16.0);
        assert_eq!(DownbeatConfig::new().with_beats_per_bar(3).tolerance(), 1.0 / 12.0);
    }
}
