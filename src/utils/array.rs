/// Largest element of a slice, or `None` if it is empty.
///
/// Works for any partially ordered copyable value (times, scores, run
/// lengths). Elements that do not compare (NaN) never replace the running
/// maximum.
///
/// # Example
/// ```
/// use beat_eval::utils::max_element;
///
/// assert_eq!(max_element(&[3.0, 7.5, 1.0]), Some(7.5));
/// assert_eq!(max_element(&[4usize, 9, 2]), Some(9));
/// assert_eq!(max_element::<f64>(&[]), None);
/// ```
pub fn max_element<T: PartialOrd + Copy>(values: &[T]) -> Option<T> {
    argmax(values).map(|i| values[i])
}

/// Index of the largest element. On ties the first maximum wins.
pub fn argmax<T: PartialOrd + Copy>(values: &[T]) -> Option<usize> {
    let mut iter = values.iter().enumerate();
    let (mut best_idx, mut best) = iter.next().map(|(i, &v)| (i, v))?;
    for (i, &v) in iter {
        if v > best {
            best = v;
            best_idx = i;
        }
    }
    Some(best_idx)
}

/// Nearest element of `seq` to `target`.
///
/// Returns `(index, absolute distance)`, the first index on ties.
///
/// # Example
/// ```
/// use beat_eval::utils::nearest;
///
/// let annotations = [5.0, 5.5, 6.0];
/// assert_eq!(nearest(&annotations, 5.6).map(|(i, _)| i), Some(1));
/// // Exactly halfway: the earlier element wins.
/// assert_eq!(nearest(&annotations, 5.25).map(|(i, _)| i), Some(0));
/// ```
pub fn nearest(seq: &[f64], target: f64) -> Option<(usize, f64)> {
    let mut best: Option<(usize, f64)> = None;
    for (i, &v) in seq.iter().enumerate() {
        let distance = (v - target).abs();
        match best {
            Some((_, d)) if distance >= d => {}
            _ => best = Some((i, distance)),
        }
    }
    best
}

/// Median of a slice (mean of the two middle values for even lengths).
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));
    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some(0.5 * (sorted[mid - 1] + sorted[mid]))
    } else {
        Some(sorted[mid])
    }
}

/// Longest run of consecutive `true` values.
///
/// Returns `(start, length)`; the earliest run wins on ties and
/// `(0, 0)` means there is no `true` value at all.
///
/// # Example
/// ```
/// use beat_eval::utils::longest_run;
///
/// let flags = [true, false, true, true, true, false, true, true];
/// assert_eq!(longest_run(&flags), (2, 3));
/// ```
pub fn longest_run(flags: &[bool]) -> (usize, usize) {
    let mut best = (0, 0);
    let mut start = 0;
    let mut len = 0;

    for (i, &flag) in flags.iter().enumerate() {
        if flag {
            if len == 0 {
                start = i;
            }
            len += 1;
            if len > best.1 {
                best = (start, len);
            }
        } else {
            len = 0;
        }
    }

    best
}
