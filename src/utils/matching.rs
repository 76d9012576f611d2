/// Outcome counts of tolerance-window matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MatchCounts {
    pub true_positives: usize,
    pub false_positives: usize,
    pub false_negatives: usize,
}

/// Match estimated beats to annotations with a fixed tolerance window.
///
/// Annotations are visited in order. For each one, the still unused beats in
/// `[annotation - window, annotation + window]` are collected:
///
/// - no beat: one false negative
/// - one beat: one true positive, the beat is consumed
/// - several beats: one true positive *and* one false positive, consuming
///   the first two beats of the window
///
/// Beats never consumed, including any further beats of a crowded window,
/// count as one false positive each.
///
/// # Arguments
/// * `beats` - Estimated beat times in seconds
/// * `annotations` - Ground-truth beat times in seconds
/// * `window` - Half-width of the tolerance window in seconds
///
/// # Example
/// ```
/// use beat_eval::utils::count_window_matches;
///
/// let annotations = [5.0, 5.5, 6.0, 6.5];
/// let beats = [5.02, 5.48, 6.3];
/// let counts = count_window_matches(&beats, &annotations, 0.07);
/// assert_eq!(counts.true_positives, 2);
/// assert_eq!(counts.false_negatives, 2);
/// assert_eq!(counts.false_positives, 1);
/// ```
pub fn count_window_matches(beats: &[f64], annotations: &[f64], window: f64) -> MatchCounts {
    let mut counts = MatchCounts::default();
    let mut used = vec![false; beats.len()];

    for &annotation in annotations {
        let window_min = annotation - window;
        let window_max = annotation + window;

        let in_window: Vec<usize> = beats
            .iter()
            .enumerate()
            .filter(|&(i, &beat)| !used[i] && beat >= window_min && beat <= window_max)
            .map(|(i, _)| i)
            .collect();

        match in_window[..] {
            [] => counts.false_negatives += 1,
            [hit] => {
                used[hit] = true;
                counts.true_positives += 1;
            }
            [hit, extra, ..] => {
                used[hit] = true;
                used[extra] = true;
                counts.true_positives += 1;
                counts.false_positives += 1;
            }
        }
    }

    counts.false_positives += used.iter().filter(|&&u| !u).count();
    counts
}

/// Indices of the events inside the half-open interval `[start, end)`.
///
/// # Example
/// ```
/// use beat_eval::utils::events_in_window;
///
/// let beats = [5.0, 5.25, 5.5, 5.75];
/// assert_eq!(events_in_window(&beats, 5.25, 5.75), vec![1, 2]);
/// ```
pub fn events_in_window(events: &[f64], start: f64, end: f64) -> Vec<usize> {
    events
        .iter()
        .enumerate()
        .filter(|&(_, &t)| t >= start && t < end)
        .map(|(i, _)| i)
        .collect()
}
