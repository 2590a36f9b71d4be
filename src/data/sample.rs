//! Sample timing data.
//! Sorting times recorded from a separate C benchmark run; treated as fixed fixtures.

use super::{Dataset, DatasetError, Series};

/// Input sizes (number of elements).
pub const N_VALUES: [u32; 5] = [1000, 5000, 10000, 20000, 50000];

/// Insertion sort elapsed time in seconds, per entry of `N_VALUES`.
pub const INSERTION_TIMES: [f64; 5] = [0.002345, 0.058973, 0.214385, 0.845972, 5.672345];

/// Heap sort elapsed time in seconds, per entry of `N_VALUES`.
pub const HEAP_TIMES: [f64; 5] = [0.000678, 0.004892, 0.012678, 0.026543, 0.098543];

pub const INSERTION_LABEL: &str = "Insertion Sort";
pub const HEAP_LABEL: &str = "Heap Sort";

/// Insertion sort vs. heap sort timings.
pub fn sorting_comparison() -> Result<Dataset, DatasetError> {
    let x = N_VALUES.iter().map(|&n| f64::from(n)).collect();
    Dataset::new(
        x,
        vec![
            Series::new(INSERTION_LABEL, INSERTION_TIMES.to_vec()),
            Series::new(HEAP_LABEL, HEAP_TIMES.to_vec()),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_dataset_shape() {
        let ds = sorting_comparison().unwrap();
        assert_eq!(ds.x(), &[1000.0, 5000.0, 10000.0, 20000.0, 50000.0]);
        assert_eq!(ds.series().len(), 2);
        for s in ds.series() {
            assert_eq!(s.values().len(), 5);
        }
        assert_eq!(ds.series()[0].label(), "Insertion Sort");
        assert_eq!(ds.series()[1].label(), "Heap Sort");
        assert_eq!(ds.series()[1].values()[4], 0.098543);
    }

    #[test]
    fn x_ascending() {
        assert!(N_VALUES.windows(2).all(|w| w[0] < w[1]));
    }
}
