use ndarray::Array1;

/// Quantize event times into a unit impulse train.
///
/// An event at `t` seconds sets bin `ceil(t * rate) - 1`. Events falling
/// outside `0..len` are dropped; several events in one bin still give 1.
///
/// # Arguments
/// * `times` - Event times in seconds
/// * `rate` - Bins per second
/// * `len` - Length of the train
///
/// # Example
/// ```
/// use beat_eval::utils::impulse_train;
///
/// let train = impulse_train(&[0.25, 0.5], 100.0, 60);
/// assert_eq!(train[24], 1.0);
/// assert_eq!(train[49], 1.0);
/// assert_eq!(train.sum(), 2.0);
/// ```
pub fn impulse_train(times: &[f64], rate: f64, len: usize) -> Array1<f64> {
    let mut train = Array1::<f64>::zeros(len);
    for &t in times {
        let idx = (t * rate).ceil() as i64 - 1;
        if idx >= 0 && (idx as usize) < len {
            train[idx as usize] = 1.0;
        }
    }
    train
}

/// Indices of the non-zero entries of a train.
pub fn nonzero_indices(train: &Array1<f64>) -> Vec<usize> {
    train
        .iter()
        .enumerate()
        .filter(|&(_, &v)| v != 0.0)
        .map(|(i, _)| i)
        .collect()
}

/// Cross-correlation of two impulse trains, summed over lags
/// `-max_lag..=max_lag`.
///
/// Takes the sorted non-zero bin indices of each train and counts the pairs
/// of impulses at most `max_lag` bins apart. This is the sum of
/// `x[n] * y[n + lag]` over all `n` and lags in the window, without visiting
/// the empty bins.
///
/// # Example
/// ```
/// use beat_eval::utils::correlate_impulses;
///
/// // lags -2, 0 and +1 each pair one impulse
/// assert_eq!(correlate_impulses(&[1, 4], &[2, 4], 2), 3);
/// assert_eq!(correlate_impulses(&[1, 4], &[2, 4], 0), 1);
/// ```
pub fn correlate_impulses(x: &[usize], y: &[usize], max_lag: usize) -> usize {
    x.iter()
        .map(|&i| {
            let start = y.partition_point(|&j| j.saturating_add(max_lag) < i);
            let end = y.partition_point(|&j| j <= i.saturating_add(max_lag));
            end - start
        })
        .sum()
}
