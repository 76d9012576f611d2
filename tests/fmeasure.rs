use approx::assert_relative_eq;
use beat_eval::metrics::{FMeasureConfig, fmeasure, fmeasure_detailed};
use rand::Rng;

// 120 BPM from 5.5 s to 180 s
fn annotations() -> Vec<f64> {
    (11..=360).map(|i| i as f64 / 2.0).collect()
}

fn double_speed(annotations: &[f64]) -> Vec<f64> {
    annotations.iter().flat_map(|&a| [a, a + 0.25]).collect()
}

#[test]
fn identical_sequences_are_perfect() {
    let a = annotations();
    let r = fmeasure_detailed(&a, &a, &FMeasureConfig::default()).unwrap();
    assert_eq!(r.f_measure, 100.0);
    assert_eq!(r.precision, 100.0);
    assert_eq!(r.recall, 100.0);
    assert_eq!(r.accuracy, 100.0);
}

#[test]
fn double_speed_halves_precision() {
    let a = annotations();
    let r = fmeasure_detailed(&double_speed(&a), &a, &FMeasureConfig::default()).unwrap();
    assert_relative_eq!(r.precision, 50.0);
    assert_relative_eq!(r.recall, 100.0);
    assert_relative_eq!(r.f_measure, 200.0 / 3.0, max_relative = 1e-12);
    assert_relative_eq!(r.accuracy, 50.0);
}

#[test]
fn half_speed_halves_recall() {
    let a = annotations();
    let beats: Vec<f64> = a.iter().step_by(2).copied().collect();
    let r = fmeasure_detailed(&beats, &a, &FMeasureConfig::default()).unwrap();
    assert_relative_eq!(r.precision, 100.0);
    assert_relative_eq!(r.recall, 50.0);
    assert_relative_eq!(r.f_measure, 200.0 / 3.0, max_relative = 1e-12);
    assert_relative_eq!(r.accuracy, 50.0);
}

#[test]
fn jitter_inside_window_is_ignored() {
    let a = annotations();
    let mut rng = rand::thread_rng();
    let beats: Vec<f64> = a.iter().map(|&t| t + rng.gen_range(-0.06..0.06)).collect();
    let r = fmeasure_detailed(&beats, &a, &FMeasureConfig::default()).unwrap();
    assert_eq!(r.f_measure, 100.0);
    assert_eq!(r.precision, 100.0);
    assert_eq!(r.recall, 100.0);
    assert_eq!(r.accuracy, 100.0);
}

#[test]
fn off_beat_scores_zero() {
    let a = annotations();
    let beats: Vec<f64> = a.iter().map(|t| t + 0.25).collect();
    assert_eq!(fmeasure(&beats, &a).unwrap(), 0.0);
}

#[test]
fn three_beats_in_one_window_leave_one_unused() {
    let r = fmeasure_detailed(&[5.99, 6.0, 6.01], &[6.0], &FMeasureConfig::default()).unwrap();
    assert_relative_eq!(r.precision, 100.0 / 3.0, max_relative = 1e-12);
    assert_relative_eq!(r.recall, 100.0);
    assert_relative_eq!(r.f_measure, 50.0, max_relative = 1e-12);
    assert_relative_eq!(r.accuracy, 100.0 / 3.0, max_relative = 1e-12);
}

#[test]
fn multiple_correct_beats_per_annotation() {
    let a: Vec<f64> = (11..=370).map(|i| i as f64 / 2.0).collect();
    let beats: Vec<f64> = a.iter().flat_map(|&t| [t, t + 0.01, t - 0.01]).collect();
    let r = fmeasure_detailed(&beats, &a, &FMeasureConfig::default()).unwrap();
    assert_relative_eq!(r.f_measure, 50.0, max_relative = 1e-4);
    assert_relative_eq!(r.precision, 33.333333333, max_relative = 1e-4);
    assert_eq!(r.recall, 100.0);
    assert_relative_eq!(r.accuracy, 33.333333333, max_relative = 1e-4);
}

#[test]
fn narrower_window_rejects_late_beats() {
    let a = annotations();
    let late: Vec<f64> = a.iter().map(|t| t + 0.06).collect();
    assert_eq!(fmeasure(&late, &a).unwrap(), 100.0);

    let strict = FMeasureConfig::new().with_tolerance_window(0.03);
    assert_eq!(strict.evaluate(&late, &a).unwrap().f_measure, 0.0);
}

#[test]
fn lead_in_is_ignored() {
    let a = annotations();
    let mut beats = vec![0.5, 1.0, 2.5, 4.99];
    beats.extend(&a);
    assert_eq!(fmeasure(&beats, &a).unwrap(), 100.0);

    let only_lead_in = [0.5, 1.0, 2.5, 4.99];
    let r = fmeasure_detailed(&only_lead_in, &a, &FMeasureConfig::default()).unwrap();
    assert_eq!(r.f_measure, 0.0);
    assert_eq!(r.recall, 0.0);
}
