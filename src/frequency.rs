use std::collections::HashMap;

/// Occurrence count of every distinct value in a data set.
///
/// Values are keyed by their bit pattern; `-0.0` is folded into `0.0` first
/// so numerically equal values share one entry.
#[derive(Debug)]
pub(crate) struct FrequencyTable {
    counts: HashMap<u64, usize>,
    total: usize,
}

impl FrequencyTable {
    pub fn from_values(values: &[f64]) -> Self {
        let mut counts = HashMap::new();
        for &value in values {
            *counts.entry(key(value)).or_insert(0) += 1;
        }

        FrequencyTable {
            counts,
            total: values.len(),
        }
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn max_count(&self) -> usize {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// Distinct values occurring exactly `count` times, in no particular order.
    pub fn values_with_count(&self, count: usize) -> Vec<f64> {
        self.counts
            .iter()
            .filter(|&(_, &occurrences)| occurrences == count)
            .map(|(&bits, _)| f64::from_bits(bits))
            .collect()
    }
}

fn key(value: f64) -> u64 {
    (value + 0.0).to_bits()
}
