//! All beat tracking measures at once, per track and over a database, and
//! downbeat accuracy over a database.

use crate::metrics::{
    CemgilConfig, ContinuityConfig, DownbeatConfig, FMeasureConfig, GotoConfig, PScoreConfig,
    aml_cemgil_with_config, cemgil_with_config, continuity_with_config, downbeat_with_config,
    fmeasure_detailed, goto_with_config, information_gain_detailed, pscore_with_config,
};
use crate::{Error, Result};

/// Number of scores produced by [`evaluate`].
pub const NUM_SCORES: usize = 10;

/// Names of the scores, in the order of [`BeatScores::to_array`].
pub const SCORE_NAMES: [&str; NUM_SCORES] = [
    "cemgil",
    "aml_cemgil",
    "f_measure",
    "p_score",
    "goto",
    "information_gain",
    "cml_c",
    "cml_t",
    "aml_c",
    "aml_t",
];

/// Parameters for every measure computed by [`evaluate_scores`].
///
/// # Example
/// ```
/// use beat_eval::evaluate::EvaluationConfig;
/// use beat_eval::metrics::FMeasureConfig;
///
/// let config = EvaluationConfig::new()
///     .with_fmeasure(FMeasureConfig::new().with_tolerance_window(0.05))
///     .with_num_bins(20);
/// assert_eq!(config.num_bins, 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EvaluationConfig {
    pub fmeasure: FMeasureConfig,
    pub cemgil: CemgilConfig,
    pub goto: GotoConfig,
    pub pscore: PScoreConfig,
    pub continuity: ContinuityConfig,
    /// Histogram bins for information gain
    pub num_bins: usize,
}

impl EvaluationConfig {
    /// Literature defaults for every measure.
    pub fn new() -> Self {
        Self {
            fmeasure: FMeasureConfig::default(),
            cemgil: CemgilConfig::default(),
            goto: GotoConfig::default(),
            pscore: PScoreConfig::default(),
            continuity: ContinuityConfig::default(),
            num_bins: crate::metrics::information_gain::DEFAULT_NUM_BINS,
        }
    }

    pub fn with_fmeasure(mut self, fmeasure: FMeasureConfig) -> Self {
        self.fmeasure = fmeasure;
        self
    }

    pub fn with_cemgil(mut self, cemgil: CemgilConfig) -> Self {
        self.cemgil = cemgil;
        self
    }

    pub fn with_goto(mut self, goto: GotoConfig) -> Self {
        self.goto = goto;
        self
    }

    pub fn with_pscore(mut self, pscore: PScoreConfig) -> Self {
        self.pscore = pscore;
        self
    }

    pub fn with_continuity(mut self, continuity: ContinuityConfig) -> Self {
        self.continuity = continuity;
        self
    }

    pub fn with_num_bins(mut self, num_bins: usize) -> Self {
        self.num_bins = num_bins;
        self
    }

    /// Evaluate one track with this configuration.
    pub fn evaluate(&self, beats: &[f64], annotations: &[f64]) -> Result<BeatScores> {
        evaluate_scores(beats, annotations, self)
    }
}

impl Default for EvaluationConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Every beat tracking score for one track.
///
/// All scores are percentages except `information_gain`, which is in bits.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BeatScores {
    pub cemgil: f64,
    pub aml_cemgil: f64,
    pub f_measure: f64,
    pub p_score: f64,
    pub goto: f64,
    pub information_gain: f64,
    pub cml_c: f64,
    pub cml_t: f64,
    pub aml_c: f64,
    pub aml_t: f64,
}

impl BeatScores {
    /// Scores in the fixed order of [`SCORE_NAMES`].
    pub fn to_array(&self) -> [f64; NUM_SCORES] {
        [
            self.cemgil,
            self.aml_cemgil,
            self.f_measure,
            self.p_score,
            self.goto,
            self.information_gain,
            self.cml_c,
            self.cml_t,
            self.aml_c,
            self.aml_t,
        ]
    }

    /// Pairs of score name and value.
    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> {
        SCORE_NAMES.into_iter().zip(self.to_array())
    }

    fn from_array(values: [f64; NUM_SCORES]) -> Self {
        let [
            cemgil,
            aml_cemgil,
            f_measure,
            p_score,
            goto,
            information_gain,
            cml_c,
            cml_t,
            aml_c,
            aml_t,
        ] = values;
        Self {
            cemgil,
            aml_cemgil,
            f_measure,
            p_score,
            goto,
            information_gain,
            cml_c,
            cml_t,
            aml_c,
            aml_t,
        }
    }
}

/// Evaluate `beats` against `annotations` with default parameters.
///
/// Returns `[cemgil, aml_cemgil, f_measure, p_score, goto, information_gain,
/// cml_c, cml_t, aml_c, aml_t]`.
///
/// # Example
/// ```
/// use beat_eval::evaluate;
///
/// let annotations: Vec<f64> = (11..=120).map(|i| i as f64 * 0.5).collect();
/// let scores = evaluate(&annotations, &annotations).unwrap();
/// assert_eq!(scores[2], 100.0); // f-measure
/// assert_eq!(scores[6], 100.0); // cmlC
/// ```
pub fn evaluate(beats: &[f64], annotations: &[f64]) -> Result<[f64; NUM_SCORES]> {
    evaluate_scores(beats, annotations, &EvaluationConfig::default()).map(|s| s.to_array())
}

/// Evaluate one track, returning named scores.
///
/// Every measure works on its own copy of the inputs, so the order in which
/// they run does not matter.
///
/// # Errors
/// The first error raised by any measure: invalid units or an invalid
/// parameter in `config`.
pub fn evaluate_scores(
    beats: &[f64],
    annotations: &[f64],
    config: &EvaluationConfig,
) -> Result<BeatScores> {
    let cemgil = cemgil_with_config(beats, annotations, &config.cemgil)?;
    let aml_cemgil = aml_cemgil_with_config(beats, annotations, &config.cemgil)?;
    let f_measure = fmeasure_detailed(beats, annotations, &config.fmeasure)?.f_measure;
    let p_score = pscore_with_config(beats, annotations, &config.pscore)?;
    let goto = goto_with_config(beats, annotations, &config.goto)?;
    let information_gain =
        information_gain_detailed(beats, annotations, config.num_bins)?.information_gain;
    let continuity = continuity_with_config(beats, annotations, &config.continuity)?;

    Ok(BeatScores {
        cemgil,
        aml_cemgil,
        f_measure,
        p_score,
        goto,
        information_gain,
        cml_c: continuity.cml_c,
        cml_t: continuity.cml_t,
        aml_c: continuity.aml_c,
        aml_t: continuity.aml_t,
    })
}

/// Scores for every track of a database.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DatabaseScores {
    pub per_track: Vec<BeatScores>,
}

impl DatabaseScores {
    pub fn len(&self) -> usize {
        self.per_track.len()
    }

    pub fn is_empty(&self) -> bool {
        self.per_track.is_empty()
    }

    /// Mean of each score over all tracks; all zero for an empty database.
    pub fn mean(&self) -> BeatScores {
        if self.per_track.is_empty() {
            return BeatScores::default();
        }

        let mut sums = [0.0; NUM_SCORES];
        for scores in &self.per_track {
            for (sum, value) in sums.iter_mut().zip(scores.to_array()) {
                *sum += value;
            }
        }

        let n = self.per_track.len() as f64;
        BeatScores::from_array(sums.map(|sum| sum / n))
    }
}

/// Evaluate a database of tracks.
///
/// Track `i` of `beats` is scored against track `i` of `annotations`. Extra
/// annotation tracks are ignored.
///
/// # Errors
/// - [`Error::LengthMismatch`] if there are fewer annotation tracks than beat
///   tracks
/// - the first error of any track
pub fn evaluate_db<B, A>(
    beats: &[B],
    annotations: &[A],
    config: &EvaluationConfig,
) -> Result<DatabaseScores>
where
    B: AsRef<[f64]> + Sync,
    A: AsRef<[f64]> + Sync,
{
    if annotations.len() < beats.len() {
        return Err(Error::LengthMismatch {
            beats: beats.len(),
            annotations: annotations.len(),
        });
    }

    let per_track = map_tracks(beats.len(), |index| {
        let scores = evaluate_scores(beats[index].as_ref(), annotations[index].as_ref(), config)?;
        log::debug!("track {}: f-measure {:.3}", index, scores.f_measure);
        Ok(scores)
    })?;

    let scores = DatabaseScores { per_track };
    let mean = scores.mean();
    log::info!("evaluated {} tracks", scores.len());
    for (name, value) in mean.named() {
        log::info!("  {name}: {value:.4}");
    }

    Ok(scores)
}

/// Downbeat accuracy for every track of a database.
///
/// Track `i` of `downbeats` is scored against the bar starts in track `i` of
/// `annotations`. Extra annotation tracks are ignored.
///
/// # Errors
/// - [`Error::LengthMismatch`] if there are fewer annotation tracks than
///   downbeat tracks
/// - the first error of any track
pub fn downbeat_db<D, A>(
    downbeats: &[D],
    annotations: &[A],
    config: &DownbeatConfig,
) -> Result<Vec<f64>>
where
    D: AsRef<[f64]> + Sync,
    A: AsRef<[f64]> + Sync,
{
    if annotations.len() < downbeats.len() {
        return Err(Error::LengthMismatch {
            beats: downbeats.len(),
            annotations: annotations.len(),
        });
    }

    let scores = map_tracks(downbeats.len(), |index| {
        let score =
            downbeat_with_config(downbeats[index].as_ref(), annotations[index].as_ref(), config)?;
        log::debug!("track {index}: downbeat accuracy {score:.3}");
        Ok(score)
    })?;

    if !scores.is_empty() {
        let mean = scores.iter().sum::<f64>() / scores.len() as f64;
        log::info!("evaluated {} tracks, mean downbeat accuracy {mean:.4}", scores.len());
    }

    Ok(scores)
}

fn map_tracks<T, F>(num_tracks: usize, evaluate_track: F) -> Result<Vec<T>>
where
    T: Send,
    F: Fn(usize) -> Result<T> + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        (0..num_tracks).into_par_iter().map(evaluate_track).collect()
    }
    #[cfg(not(feature = "parallel"))]
    {
        (0..num_tracks).map(evaluate_track).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn array_order_matches_names() {
        let scores = BeatScores::from_array([0.0, 1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(scores.f_measure, 2.0);
        assert_eq!(scores.information_gain, 5.0);
        assert_eq!(scores.aml_t, 9.0);
        let named: Vec<(&str, f64)> = scores.named().collect();
        assert_eq!(named[4], ("goto", 4.0));
    }

    #[test]
    fn mean_of_empty_database() {
        assert_eq!(DatabaseScores::default().mean(), BeatScores::default());
    }

    #[test]
    fn mean_per_score() {
        let db = DatabaseScores {
            per_track: vec![
                BeatScores {
                    f_measure: 100.0,
                    goto: 100.0,
                    ..Default::default()
                },
                BeatScores {
                    f_measure: 50.0,
                    ..Default::default()
                },
            ],
        };
        let mean = db.mean();
        assert_eq!(mean.f_measure, 75.0);
        assert_eq!(mean.goto, 50.0);
        assert_eq!(mean.cemgil, 0.0);
    }
}
