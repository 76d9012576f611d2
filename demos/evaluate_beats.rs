//! Beat Evaluation Example
//!
//! This example scores a few synthetic beat trackers against one annotated
//! track, then evaluates them together as a small database.
//!
//! Run with `RUST_LOG=info cargo run --example evaluate_beats`.

use beat_eval::metrics::{DownbeatConfig, downbeat_detailed, information_gain_detailed};
use beat_eval::{EvaluationConfig, downbeat_db, evaluate_db, evaluate_scores};
use log::{error, info};

fn main() {
    env_logger::init();
    info!("Beat Evaluation Example");

    // 120 BPM annotations from 5.5 s to 60 s
    let annotations: Vec<f64> = (11..=120).map(|i| i as f64 * 0.5).collect();
    info!("{} annotated beats\n", annotations.len());

    let trackers: Vec<(&str, Vec<f64>)> = vec![
        ("perfect", annotations.clone()),
        (
            "late by 30 ms",
            annotations.iter().map(|t| t + 0.03).collect(),
        ),
        (
            "double tempo",
            annotations.iter().flat_map(|&t| [t, t + 0.25]).collect(),
        ),
        (
            "half tempo",
            annotations.iter().step_by(2).copied().collect(),
        ),
        (
            "off-beat",
            annotations.iter().map(|t| t + 0.25).collect(),
        ),
    ];

    // Per-track evaluation
    let config = EvaluationConfig::default();
    for (name, beats) in &trackers {
        match evaluate_scores(beats, &annotations, &config) {
            Ok(scores) => {
                info!("{name}");
                for (measure, value) in scores.named() {
                    info!("  {measure:>16}: {value:8.3}");
                }
            }
            Err(e) => error!("{name}: {e}"),
        }
    }

    // Beat-error histogram of the late tracker
    let late = &trackers[1].1;
    if let Ok(result) = information_gain_detailed(late, &annotations, 40) {
        let peak = result
            .histogram
            .iter()
            .enumerate()
            .max_by(|a, b| a.1.total_cmp(b.1))
            .map(|(bin, _)| bin)
            .unwrap_or(0);
        info!(
            "\nlate tracker: information gain {:.3} bits, histogram peak in bin {peak}",
            result.information_gain
        );
    }

    // Downbeats, four beats per bar
    let bars: Vec<f64> = annotations.iter().step_by(4).copied().collect();
    let shifted: Vec<f64> = annotations.iter().skip(1).step_by(4).copied().collect();
    match downbeat_detailed(&shifted, &bars, &DownbeatConfig::default()) {
        Ok(result) => info!(
            "downbeats on beat two: score {:.1}, best phase {}",
            result.score, result.best_phase
        ),
        Err(e) => error!("downbeat evaluation failed: {e}"),
    }
    let downbeat_tracks = vec![bars.clone(), shifted];
    match downbeat_db(&downbeat_tracks, &[bars.clone(), bars], &DownbeatConfig::default()) {
        Ok(scores) => info!("downbeat database: {scores:?}"),
        Err(e) => error!("downbeat database evaluation failed: {e}"),
    }

    // Database evaluation
    let beats: Vec<Vec<f64>> = trackers.iter().map(|(_, b)| b.clone()).collect();
    let anns = vec![annotations.clone(); beats.len()];
    match evaluate_db(&beats, &anns, &config) {
        Ok(db) => {
            let mean = db.mean();
            info!(
                "\ndatabase of {} tracks: mean F-measure {:.2}, mean AMLt {:.2}",
                db.len(),
                mean.f_measure,
                mean.aml_t
            );
        }
        Err(e) => error!("database evaluation failed: {e}"),
    }

    info!("Beat evaluation example completed!");
}
