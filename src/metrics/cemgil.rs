//! Cemgil et al.'s accuracy (Cemgil 2001) and its allowed-metrical-level form.

use crate::Result;
use crate::metrical::MetricalVariants;
use crate::preprocess::prepare;
use crate::utils::{check_positive, max_element, nearest};

/// Default standard deviation of the Gaussian error function in seconds.
pub const DEFAULT_CEMGIL_SIGMA: f64 = 0.04;

/// Configuration for Cemgil accuracy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CemgilConfig {
    /// Width of the Gaussian error function in seconds
    pub sigma: f64,
}

impl CemgilConfig {
    pub fn new() -> Self {
        Self {
            sigma: DEFAULT_CEMGIL_SIGMA,
        }
    }

    /// Set the Gaussian width.
    pub fn with_sigma(mut self, sigma: f64) -> Self {
        self.sigma = sigma;
        self
    }
}

impl Default for CemgilConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Cemgil accuracy with the default sigma.
///
/// # Example
/// ```
/// use beat_eval::metrics::cemgil;
///
/// let annotations: Vec<f64> = (11..=40).map(|i| i as f64 * 0.5).collect();
/// assert_eq!(cemgil(&annotations, &annotations).unwrap(), 100.0);
/// ```
pub fn cemgil(beats: &[f64], annotations: &[f64]) -> Result<f64> {
    cemgil_with_config(beats, annotations, &CemgilConfig::default())
}

/// Cemgil accuracy with a custom Gaussian width.
pub fn cemgil_with_sigma(beats: &[f64], annotations: &[f64], sigma: f64) -> Result<f64> {
    cemgil_with_config(beats, annotations, &CemgilConfig::new().with_sigma(sigma))
}

/// Cemgil accuracy in percent.
///
/// Each annotation contributes `exp(-d² / 2σ²)`, where `d` is the distance to
/// its closest beat. The sum is divided by the mean of the beat and
/// annotation counts and capped at 100, since several annotations may share
/// one beat.
pub fn cemgil_with_config(
    beats: &[f64],
    annotations: &[f64],
    config: &CemgilConfig,
) -> Result<f64> {
    check_positive("sigma", config.sigma)?;
    let (beats, annotations) = prepare(beats, annotations)?;

    if beats.is_empty() {
        log::warn!("beat sequence is empty, cemgil accuracy scores zero");
        return Ok(0.0);
    }

    let score = gaussian_accuracy(&beats, &annotations, config.sigma);
    log::debug!("cemgil accuracy {score:.3}");
    Ok(score)
}

/// Cemgil accuracy at allowed metrical levels, default sigma.
pub fn aml_cemgil(beats: &[f64], annotations: &[f64]) -> Result<f64> {
    aml_cemgil_with_config(beats, annotations, &CemgilConfig::default())
}

/// Best Cemgil accuracy over the five metrical variants of the annotations.
///
/// # Example
/// ```
/// use beat_eval::metrics::{aml_cemgil, cemgil};
///
/// let annotations: Vec<f64> = (11..=40).map(|i| i as f64 * 0.5).collect();
/// // Tapping every other beat is only partly right at the annotated level...
/// let half: Vec<f64> = annotations.iter().step_by(2).copied().collect();
/// assert!(cemgil(&half, &annotations).unwrap() < 70.0);
/// // ...but perfect at half tempo.
/// assert_eq!(aml_cemgil(&half, &annotations).unwrap(), 100.0);
/// ```
pub fn aml_cemgil_with_config(
    beats: &[f64],
    annotations: &[f64],
    config: &CemgilConfig,
) -> Result<f64> {
    check_positive("sigma", config.sigma)?;
    let (beats, annotations) = prepare(beats, annotations)?;

    if beats.is_empty() {
        log::warn!("beat sequence is empty, aml cemgil accuracy scores zero");
        return Ok(0.0);
    }

    let variants = MetricalVariants::new(&annotations);
    let scores: Vec<f64> = variants
        .iter()
        .map(|(_, variant)| gaussian_accuracy(&beats, variant, config.sigma))
        .collect();

    let score = max_element(&scores).unwrap_or(0.0);
    log::debug!("aml cemgil accuracy {score:.3}");
    Ok(score)
}

fn gaussian_accuracy(beats: &[f64], annotations: &[f64], sigma: f64) -> f64 {
    let two_sigma_sq = 2.0 * sigma * sigma;

    let sum: f64 = annotations
        .iter()
        .filter_map(|&a| nearest(beats, a))
        .map(|(_, d)| (-(d * d) / two_sigma_sq).exp())
        .sum();

    let mean_count = 0.5 * (beats.len() + annotations.len()) as f64;
    if mean_count > 0.0 {
        (100.0 * sum / mean_count).min(100.0)
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn single_offset_value() {
        // one beat 40 ms late: exp(-0.5)
        let score = gaussian_accuracy(&[6.04], &[6.0], 0.04);
        assert_relative_eq!(score, 100.0 * (-0.5f64).exp(), max_relative = 1e-9);
    }

    #[test]
    fn normalized_by_mean_count() {
        // two exact beats for one annotation
        let score = gaussian_accuracy(&[6.0, 6.0], &[6.0], 0.04);
        assert_relative_eq!(score, 100.0 / 1.5, max_relative = 1e-12);
    }

    #[test]
    fn annotations_sharing_a_beat_are_capped() {
        let score = gaussian_accuracy(&[6.0], &[6.0, 6.001, 6.002], 0.04);
        assert_eq!(score, 100.0);
    }

    #[test]
    fn empty_annotations_score_zero() {
        assert_eq!(cemgil(&[6.0, 7.0], &[]).unwrap(), 0.0);
        assert_eq!(aml_cemgil(&[6.0, 7.0], &[]).unwrap(), 0.0);
    }

    #[test]
    fn zero_sigma_rejected() {
        let config = CemgilConfig::new().with_sigma(0.0);
        assert!(cemgil_with_config(&[6.0], &[6.0], &config).is_err());
    }
}
