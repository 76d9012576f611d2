//! Alternative metrical interpretations of an annotation sequence.
//!
//! A beat tracker that taps at twice the annotated tempo, on the off-beat, or
//! at half the tempo is often considered to have tracked the music at an
//! "allowed metrical level" (AML). AML scores evaluate the beats against each
//! variant produced here and keep the best result.

/// Number of metrical variants considered by AML scores.
pub const NUM_METRICAL_VARIANTS: usize = 5;

/// One metrical interpretation of the annotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricalLevel {
    /// The annotations as given.
    Original,
    /// Annotations plus the midpoint between every neighbouring pair.
    DoubleTempo,
    /// Only the midpoints.
    OffBeat,
    /// Every other annotation, starting with the first.
    HalfTempoOdd,
    /// Every other annotation, starting with the second.
    HalfTempoEven,
}

impl MetricalLevel {
    /// All levels, in the order AML maxima are taken.
    pub const ALL: [MetricalLevel; NUM_METRICAL_VARIANTS] = [
        MetricalLevel::Original,
        MetricalLevel::DoubleTempo,
        MetricalLevel::OffBeat,
        MetricalLevel::HalfTempoOdd,
        MetricalLevel::HalfTempoEven,
    ];
}

/// Owned copies of the five metrical variants of one annotation sequence.
///
/// # Example
/// ```
/// use beat_eval::metrical::{MetricalLevel, MetricalVariants};
///
/// let variants = MetricalVariants::new(&[5.0, 6.0, 7.0]);
/// assert_eq!(variants.get(MetricalLevel::DoubleTempo), &[5.0, 5.5, 6.0, 6.5, 7.0]);
/// assert_eq!(variants.get(MetricalLevel::OffBeat), &[5.5, 6.5]);
/// assert_eq!(variants.get(MetricalLevel::HalfTempoOdd), &[5.0, 7.0]);
/// assert_eq!(variants.get(MetricalLevel::HalfTempoEven), &[6.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct MetricalVariants {
    pub original: Vec<f64>,
    pub double_tempo: Vec<f64>,
    pub off_beat: Vec<f64>,
    pub half_tempo_odd: Vec<f64>,
    pub half_tempo_even: Vec<f64>,
}

impl MetricalVariants {
    /// Derive all variants from `annotations`.
    pub fn new(annotations: &[f64]) -> Self {
        let double_tempo = double_tempo(annotations);
        Self {
            original: annotations.to_vec(),
            off_beat: every_other(&double_tempo, 1),
            double_tempo,
            half_tempo_odd: every_other(annotations, 0),
            half_tempo_even: every_other(annotations, 1),
        }
    }

    /// The sequence for one metrical level.
    pub fn get(&self, level: MetricalLevel) -> &[f64] {
        match level {
            MetricalLevel::Original => &self.original,
            MetricalLevel::DoubleTempo => &self.double_tempo,
            MetricalLevel::OffBeat => &self.off_beat,
            MetricalLevel::HalfTempoOdd => &self.half_tempo_odd,
            MetricalLevel::HalfTempoEven => &self.half_tempo_even,
        }
    }

    /// Iterate over the variants in [`MetricalLevel::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (MetricalLevel, &[f64])> + '_ {
        MetricalLevel::ALL
            .into_iter()
            .map(move |level| (level, self.get(level)))
    }
}

/// Insert the midpoint between each pair of neighbours.
///
/// A sequence of length `n` becomes `2n - 1` long; empty and single-element
/// input is returned unchanged.
pub fn double_tempo(seq: &[f64]) -> Vec<f64> {
    if seq.len() < 2 {
        return seq.to_vec();
    }
    let positions = (0..2 * seq.len() - 1).map(|k| k as f64 / 2.0);
    interpolate_at(seq, positions)
}

/// Every second element starting at `start`.
///
/// # Example
/// ```
/// use beat_eval::metrical::every_other;
///
/// assert_eq!(every_other(&[1.0, 2.0, 3.0, 4.0, 5.0], 1), vec![2.0, 4.0]);
/// ```
pub fn every_other(seq: &[f64], start: usize) -> Vec<f64> {
    seq.iter().skip(start).step_by(2).copied().collect()
}

/// Linearly interpolate `seq` at fractional index positions.
///
/// Positions before the first index or past the last one clamp to the end
/// values.
///
/// # Example
/// ```
/// use beat_eval::metrical::interpolate_at;
///
/// let seq = [5.0, 6.0, 8.0];
/// assert_eq!(interpolate_at(&seq, [0.5, 1.25, 9.0]), vec![5.5, 6.5, 8.0]);
/// ```
pub fn interpolate_at(seq: &[f64], positions: impl IntoIterator<Item = f64>) -> Vec<f64> {
    if seq.is_empty() {
        return Vec::new();
    }
    let last = seq.len() - 1;

    positions
        .into_iter()
        .map(|p| {
            if p <= 0.0 {
                seq[0]
            } else if p >= last as f64 {
                seq[last]
            } else {
                let j = p.floor() as usize;
                let frac = p - j as f64;
                seq[j] + (seq[j + 1] - seq[j]) * frac
            }
        })
        .collect()
}
