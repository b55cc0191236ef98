/// Fixed-bucket histogram of response times in milliseconds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Histogram {
    buckets: &'static [u64],
    counts: Vec<u64>,
}

impl Histogram {
    pub fn new(buckets: &'static [u64]) -> Self {
        Self {
            buckets,
            counts: vec![0; buckets.len() + 1], // +∞ bucket
        }
    }

    pub fn record(&mut self, value: u64) {
        let idx = self
            .buckets
            .iter()
            .position(|upper| value <= *upper)
            .unwrap_or(self.buckets.len());
        self.counts[idx] += 1;
    }

    /// Add another histogram built over the same bucket bounds.
    pub fn merge(&mut self, other: &Histogram) {
        debug_assert_eq!(self.buckets, other.buckets);
        for (mine, theirs) in self.counts.iter_mut().zip(&other.counts) {
            *mine += theirs;
        }
    }

    pub fn total(&self) -> u64 {
        self.counts.iter().sum()
    }

    pub fn labeled(&self) -> Vec<(String, u64)> {
        self.counts
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let label = match (i, self.buckets.get(i)) {
                    (0, Some(upper)) => format!("0–{upper}ms"),
                    (_, Some(upper)) => format!("{}–{upper}ms", self.buckets[i - 1] + 1),
                    (_, None) => match self.buckets.last() {
                        Some(last) => format!(">{last}ms"),
                        None => "all".to_string(),
                    },
                };
                (label, *c)
            })
            .collect()
    }

    pub fn counts(&self) -> &[u64] {
        &self.counts
    }

    /// Upper bound of the bucket holding the `pct` quantile. Samples past the
    /// last bound report that bound plus one; an empty histogram reports 0.
    pub fn percentile(&self, pct: f64) -> u64 {
        let total = self.total();
        if total == 0 {
            return 0;
        }

        let target = ((total as f64 * pct).ceil() as u64).clamp(1, total);
        let mut seen = 0;
        let idx = self
            .counts
            .iter()
            .position(|count| {
                seen += count;
                seen >= target
            })
            .unwrap_or(self.buckets.len());

        match self.buckets.get(idx) {
            Some(upper) => *upper,
            None => self.buckets.last().map_or(0, |last| last.saturating_add(1)),
        }
    }
}
