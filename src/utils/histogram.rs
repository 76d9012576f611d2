/// Bin centres of the beat-error histogram.
///
/// Returns `num_bins + 1` centres on `[-0.5, 0.5]`: an extra bin sits exactly
/// on -0.5 and another exactly on +0.5. Both represent the same wrap-around
/// point of a relative beat error and are merged after counting.
///
/// `num_bins` must be at least 2.
///
/// # Example
/// ```
/// use beat_eval::utils::histogram_bin_centres;
///
/// let centres = histogram_bin_centres(40);
/// assert_eq!(centres.len(), 41);
/// assert_eq!(centres[0], -0.5);
/// assert_eq!(centres[40], 0.5);
/// ```
pub fn histogram_bin_centres(num_bins: usize) -> Vec<f64> {
    let step = 1.0 / (num_bins as f64 - 1.0);
    let first = -0.5 + 0.5 * step;

    let mut centres = Vec::with_capacity(num_bins + 1);
    centres.push(-0.5);
    centres.extend((0..num_bins - 1).map(|k| first + k as f64 * step));
    centres.push(0.5);
    centres
}

/// Bin edges for a set of bin centres.
///
/// Interior edges are the midpoints between neighbouring centres; the outer
/// edges extend the first and last spacing outwards. The result has one more
/// element than `centres`.
pub fn bin_edges(centres: &[f64]) -> Vec<f64> {
    if centres.len() < 2 {
        return Vec::new();
    }

    let mut edges = Vec::with_capacity(centres.len() + 1);
    edges.push(centres[0] - (centres[0].abs() - centres[1].abs()));
    edges.extend(centres.windows(2).map(|w| 0.5 * (w[0] + w[1])));

    let n = edges.len();
    let last = edges[n - 1] + (edges[n - 1] - edges[n - 2]);
    edges.push(last);
    edges
}

/// Count values per bin.
///
/// Bins are half-open `[edges[i], edges[i + 1])` except the last, which also
/// includes its right edge. Values outside the edges are ignored.
///
/// # Example
/// ```
/// use beat_eval::utils::histogram;
///
/// let counts = histogram(&[0.0, 0.5, 1.0, 1.5, 2.0, 7.0], &[0.0, 1.0, 2.0]);
/// assert_eq!(counts, vec![2, 3]);
/// ```
pub fn histogram(values: &[f64], edges: &[f64]) -> Vec<usize> {
    if edges.len() < 2 {
        return Vec::new();
    }

    let num_bins = edges.len() - 1;
    let first = edges[0];
    let last = edges[num_bins];
    let mut counts = vec![0usize; num_bins];

    for &v in values {
        if !(v >= first && v <= last) {
            continue;
        }
        let bin = if v == last {
            num_bins - 1
        } else {
            edges.partition_point(|&e| e <= v) - 1
        };
        counts[bin] += 1;
    }

    counts
}
