//! Sequence preparation shared by every metric.
//!
//! All scores ignore the first five seconds of a performance (the "5-second
//! rule"), and all of them refuse input whose timestamps are clearly not in
//! seconds.

use crate::utils::max_element;
use crate::{Error, Result};

/// Timestamps strictly below this time (seconds) are discarded before scoring.
pub const MIN_BEAT_TIME: f64 = 5.0;

/// Largest timestamp (seconds) accepted by the unit check.
pub const MAX_BEAT_TIME: f64 = 10000.0;

/// Remove every element strictly below [`MIN_BEAT_TIME`].
///
/// Returns an owned copy; the input is left untouched. Applying the trim to an
/// already trimmed sequence is a no-op.
///
/// # Example
/// ```
/// use beat_eval::preprocess::trim_lead_in;
///
/// let trimmed = trim_lead_in(&[1.0, 4.99, 5.0, 6.5]);
/// assert_eq!(trimmed, vec![5.0, 6.5]);
/// ```
pub fn trim_lead_in(seq: &[f64]) -> Vec<f64> {
    seq.iter().copied().filter(|&t| t >= MIN_BEAT_TIME).collect()
}

/// Check that both sequences look like times in seconds.
///
/// Empty sequences always pass.
///
/// # Errors
/// [`Error::InvalidUnits`] if the maximum of either sequence exceeds
/// [`MAX_BEAT_TIME`].
pub fn validate_units(beats: &[f64], annotations: &[f64]) -> Result<()> {
    check_seconds("beats", beats)?;
    check_seconds("annotations", annotations)
}

fn check_seconds(sequence: &'static str, seq: &[f64]) -> Result<()> {
    match max_element(seq) {
        Some(max_value) if max_value > MAX_BEAT_TIME => Err(Error::InvalidUnits {
            sequence,
            max_value,
            limit: MAX_BEAT_TIME,
        }),
        _ => Ok(()),
    }
}

/// Trim the lead-in from both sequences and validate their units.
///
/// This is the first step of every metric in the crate.
pub fn prepare(beats: &[f64], annotations: &[f64]) -> Result<(Vec<f64>, Vec<f64>)> {
    let beats = trim_lead_in(beats);
    let annotations = trim_lead_in(annotations);
    validate_units(&beats, &annotations)?;
    Ok((beats, annotations))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trim_drops_lead_in_only() {
        let seq = vec![0.5, 2.0, 4.999, 5.0, 7.25];
        assert_eq!(trim_lead_in(&seq), vec![5.0, 7.25]);
        assert_eq!(seq.len(), 5);
    }

    #[test]
    fn trim_all_excluded() {
        assert!(trim_lead_in(&[0.1, 1.0, 4.0]).is_empty());
        assert!(trim_lead_in(&[]).is_empty());
    }

    #[test]
    fn trim_is_idempotent() {
        let seq: Vec<f64> = (0..40).map(|i| i as f64 * 0.37).collect();
        let once = trim_lead_in(&seq);
        assert_eq!(trim_lead_in(&once), once);
    }

    #[test]
    fn validate_rejects_sample_units() {
        let beats = vec![220500.0, 441000.0];
        let annotations = vec![5.0, 6.0];
        let err = validate_units(&beats, &annotations).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidUnits {
                sequence: "beats",
                ..
            }
        ));

        let err = validate_units(&annotations, &beats).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidUnits {
                sequence: "annotations",
                ..
            }
        ));
    }

    #[test]
    fn validate_accepts_boundary_and_empty() {
        assert!(validate_units(&[5.0, MAX_BEAT_TIME], &[]).is_ok());
        assert!(validate_units(&[], &[]).is_ok());
    }

    #[test]
    fn prepare_trims_before_validating() {
        let (beats, annotations) = prepare(&[1.0, 6.0], &[2.0, 3.0, 8.0]).unwrap();
        assert_eq!(beats, vec![6.0]);
        assert_eq!(annotations, vec![8.0]);
    }
}
