//! Continuity-based accuracy (Hainsworth 2004; Klapuri et al. 2006).
//!
//! A beat is correct when it is close to an annotation in phase *and* the
//! local inter-beat interval agrees with the inter-annotation interval. The
//! "C" scores reward the longest unbroken run of correct beats, the "T"
//! scores the total number. "CML" scores are taken at the annotated metrical
//! level; "AML" scores take the best of the allowed metrical levels.

use crate::Result;
use crate::metrical::MetricalVariants;
use crate::preprocess::prepare;
use crate::utils::{check_non_negative, longest_run, max_element, nearest};

/// Default phase tolerance, as a fraction of the inter-annotation interval.
pub const DEFAULT_PHASE_THRESHOLD: f64 = 0.175;

/// Default period tolerance, as a relative interval error.
pub const DEFAULT_PERIOD_THRESHOLD: f64 = 0.175;

/// Configuration for continuity-based evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContinuityConfig {
    /// Maximum phase error, relative to the inter-annotation interval
    pub phase_threshold: f64,
    /// Maximum relative difference between beat and annotation intervals
    pub period_threshold: f64,
}

impl ContinuityConfig {
    pub fn new() -> Self {
        Self {
            phase_threshold: DEFAULT_PHASE_THRESHOLD,
            period_threshold: DEFAULT_PERIOD_THRESHOLD,
        }
    }

    pub fn with_phase_threshold(mut self, phase_threshold: f64) -> Self {
        self.phase_threshold = phase_threshold;
        self
    }

    pub fn with_period_threshold(mut self, period_threshold: f64) -> Self {
        self.period_threshold = period_threshold;
        self
    }
}

impl Default for ContinuityConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// The four continuity scores, in percent.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContinuityResult {
    /// Longest correct run, correct metrical level
    pub cml_c: f64,
    /// Total correct, correct metrical level
    pub cml_t: f64,
    /// Longest correct run, allowed metrical levels
    pub aml_c: f64,
    /// Total correct, allowed metrical levels
    pub aml_t: f64,
}

/// Scores of one beat sequence against one annotation sequence.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ContinuityScores {
    /// Percentage of correct beats
    pub total_accuracy: f64,
    /// Longest run of consecutive correct beats, as a percentage of all beats
    pub continuity_accuracy: f64,
}

/// Continuity scores with the default thresholds.
///
/// # Example
/// ```
/// use beat_eval::metrics::continuity;
///
/// let annotations: Vec<f64> = (11..=60).map(|i| i as f64 * 0.5).collect();
/// let result = continuity(&annotations, &annotations).unwrap();
/// assert_eq!(result.cml_c, 100.0);
/// assert_eq!(result.aml_t, 100.0);
/// ```
pub fn continuity(beats: &[f64], annotations: &[f64]) -> Result<ContinuityResult> {
    continuity_with_config(beats, annotations, &ContinuityConfig::default())
}

/// CMLc, CMLt, AMLc and AMLt of `beats` against `annotations`.
///
/// CML scores come from the annotations as given; AML scores are the maxima
/// over the five metrical variants. Fewer than two beats after the lead-in
/// trim gives the all-zero result.
pub fn continuity_with_config(
    beats: &[f64],
    annotations: &[f64],
    config: &ContinuityConfig,
) -> Result<ContinuityResult> {
    check_non_negative("phase_threshold", config.phase_threshold)?;
    check_non_negative("period_threshold", config.period_threshold)?;
    let (beats, annotations) = prepare(beats, annotations)?;

    if beats.len() < 2 {
        log::warn!("beat sequence is empty or too short, continuity scores zero");
        return Ok(ContinuityResult::default());
    }

    let variants = MetricalVariants::new(&annotations);
    let scores: Vec<ContinuityScores> = variants
        .iter()
        .map(|(_, variant)| {
            continuity_scores(
                &beats,
                variant,
                config.phase_threshold,
                config.period_threshold,
            )
        })
        .collect();

    let continuity: Vec<f64> = scores.iter().map(|s| s.continuity_accuracy).collect();
    let total: Vec<f64> = scores.iter().map(|s| s.total_accuracy).collect();

    let result = ContinuityResult {
        cml_c: scores[0].continuity_accuracy,
        cml_t: scores[0].total_accuracy,
        aml_c: max_element(&continuity).unwrap_or(0.0),
        aml_t: max_element(&total).unwrap_or(0.0),
    };

    log::debug!(
        "continuity cmlC={:.3} cmlT={:.3} amlC={:.3} amlT={:.3}",
        result.cml_c,
        result.cml_t,
        result.aml_c,
        result.aml_t
    );

    Ok(result)
}

/// Classify each beat as correct or not and aggregate.
///
/// For beat `i` the nearest annotation `j` is found. An annotation can only
/// validate one beat. Phase error is the distance to `j` over the
/// inter-annotation interval; period error is `|1 - IBI / IAI|`. Both
/// intervals look forward from the first beat or the first annotation and
/// backward otherwise. At the last annotation the backward annotation
/// interval is used.
///
/// Inputs are used as given (no lead-in trim). Fewer than two beats or two
/// annotations score zero.
pub fn continuity_scores(
    beats: &[f64],
    annotations: &[f64],
    phase_threshold: f64,
    period_threshold: f64,
) -> ContinuityScores {
    if beats.len() < 2 || annotations.len() < 2 {
        return ContinuityScores::default();
    }

    let mut annotation_used = vec![false; annotations.len()];
    let mut correct = vec![false; beats.len()];

    for (i, &beat) in beats.iter().enumerate() {
        let Some((j, distance)) = nearest(annotations, beat) else {
            continue;
        };
        if annotation_used[j] {
            continue;
        }

        let forward = i == 0 || j == 0;
        let annotation_interval = interval(annotations, j, forward);
        let beat_interval = interval(beats, i, forward);

        let phase = (distance / annotation_interval).abs();
        let period = (1.0 - beat_interval / annotation_interval).abs();

        if phase < phase_threshold && period < period_threshold {
            annotation_used[j] = true;
            correct[i] = true;
        }
    }

    let n = beats.len() as f64;
    let num_correct = correct.iter().filter(|&&c| c).count();
    let (_, longest) = longest_run(&correct);

    ContinuityScores {
        total_accuracy: 100.0 * (num_correct as f64 / n),
        continuity_accuracy: 100.0 * (longest as f64 / n),
    }
}

// Interval at `index`, forward if requested and available. `seq` has at
// least two elements.
fn interval(seq: &[f64], index: usize, forward: bool) -> f64 {
    if (forward && index + 1 < seq.len()) || index == 0 {
        seq[index + 1] - seq[index]
    } else {
        seq[index] - seq[index - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(n: usize) -> Vec<f64> {
        (0..n).map(|i| 10.0 + i as f64 * 0.5).collect()
    }

    #[test]
    fn identical_sequences_all_correct() {
        let a = grid(20);
        let s = continuity_scores(&a, &a, 0.175, 0.175);
        assert_eq!(s.total_accuracy, 100.0);
        assert_eq!(s.continuity_accuracy, 100.0);
    }

    #[test]
    fn gap_breaks_continuity() {
        let a = grid(20);
        let mut beats = a.clone();
        // beat 10 far off in phase
        beats[10] += 0.2;
        let s = continuity_scores(&beats, &a, 0.175, 0.175);
        // beat 10 fails on phase, beat 11 on period
        assert_eq!(s.total_accuracy, 90.0);
        assert_eq!(s.continuity_accuracy, 50.0);
    }

    #[test]
    fn annotation_validates_one_beat() {
        let a = grid(4);
        let beats = vec![10.0, 10.01, 10.5, 11.0];
        let s = continuity_scores(&beats, &a, 0.175, 1.0);
        // the second beat reuses annotation 0
        assert_eq!(s.total_accuracy, 75.0);
    }

    #[test]
    fn short_sequences_score_zero() {
        let a = grid(4);
        assert_eq!(continuity_scores(&[10.0], &a, 0.175, 0.175), ContinuityScores::default());
        assert_eq!(continuity_scores(&a, &[10.0], 0.175, 0.175), ContinuityScores::default());
    }

    #[test]
    fn first_beat_nearest_last_annotation() {
        // forward annotation interval does not exist for the last annotation
        let annotations = vec![10.0, 10.5, 11.0];
        let beats = vec![11.0, 11.5];
        let s = continuity_scores(&beats, &annotations, 0.175, 0.175);
        assert_eq!(s.total_accuracy, 50.0);
    }

    #[test]
    fn interval_directions() {
        let seq = vec![1.0, 2.0, 4.0];
        assert_eq!(interval(&seq, 0, false), 1.0);
        assert_eq!(interval(&seq, 1, true), 2.0);
        assert_eq!(interval(&seq, 1, false), 1.0);
        assert_eq!(interval(&seq, 2, true), 2.0);
    }
}
