use crate::aggregate::bucket::ErrorTally;
use crate::aggregate::top_k::top_k;
use crate::aggregate::SummaryStats;
use crate::record::LogRecord;
use ahash::{AHashMap, AHashSet};

/// Single-pass summary state. Memory grows with distinct users and distinct
/// paths, never with the number of records.
#[derive(Debug, Clone, Default)]
pub struct SummaryAccumulator {
    tally: ErrorTally,
    users: AHashSet<String>,
    response_time_sum: u128,
    path_counts: AHashMap<String, u64>,
}

impl SummaryAccumulator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, record: &LogRecord) {
        self.tally.record(record);
        self.response_time_sum += u128::from(record.response_time_ms);

        if !self.users.contains(record.user_id.as_str()) {
            self.users.insert(record.user_id.clone());
        }

        match self.path_counts.get_mut(record.path.as_str()) {
            Some(count) => *count += 1,
            None => {
                self.path_counts.insert(record.path.clone(), 1);
            }
        }
    }

    /// Fold in an accumulator built over a disjoint slice of records.
    pub fn merge(&mut self, other: SummaryAccumulator) {
        self.tally.merge(&other.tally);
        self.response_time_sum += other.response_time_sum;
        self.users.extend(other.users);
        for (path, count) in other.path_counts {
            *self.path_counts.entry(path).or_insert(0) += count;
        }
    }

    pub fn total_requests(&self) -> u64 {
        self.tally.requests
    }

    pub fn finish(&self, top_paths: usize) -> SummaryStats {
        let avg_response_time_ms = if self.tally.requests == 0 {
            0.0
        } else {
            self.response_time_sum as f64 / self.tally.requests as f64
        };

        SummaryStats {
            total_requests: self.tally.requests,
            unique_users: self.users.len() as u64,
            avg_response_time_ms,
            error_rate: self.tally.error_rate(),
            top_paths: top_k(
                self.path_counts.iter().map(|(p, c)| (p.as_str(), *c)),
                top_paths,
            ),
        }
    }
}
