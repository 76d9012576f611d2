mod array;
mod correlation;
mod histogram;
mod matching;
mod validation;

// Array helpers: maxima, nearest neighbour, runs
pub use array::{argmax, longest_run, max_element, median, nearest};

// Impulse trains and cross-correlation
pub use correlation::{correlate_impulses, impulse_train, nonzero_indices};

// Beat-error histogram grid
pub use histogram::{bin_edges, histogram, histogram_bin_centres};

// Tolerance-window matching
pub use matching::{MatchCounts, count_window_matches, events_in_window};

// Parameter validation
pub use validation::{check_at_least, check_non_negative, check_positive};
