use crate::aggregate::{ErrorTally, bucket_width, minute_floor};
use crate::record::LogRecord;
use crate::window::WindowDataPoint;
use crate::window::histogram::Histogram;
use chrono::{NaiveDateTime, TimeDelta};
use std::collections::VecDeque;

const RESPONSE_TIME_BUCKETS_MS: &[u64] = &[50, 100, 250, 500, 1000, 2000, 5000];

#[derive(Debug, Clone)]
struct LiveBucket {
    start: NaiveDateTime,
    tally: ErrorTally,
    latency: Histogram,
    status: (u64, u64, u64), // 2xx, 4xx, 5xx
}

impl LiveBucket {
    fn empty(start: NaiveDateTime) -> Self {
        Self {
            start,
            tally: ErrorTally::default(),
            latency: Histogram::new(RESPONSE_TIME_BUCKETS_MS),
            status: (0, 0, 0),
        }
    }

    fn record(&mut self, record: &LogRecord) {
        self.tally.record(record);
        self.latency.record(record.response_time_ms);
        match record.status_code {
            200..=299 => self.status.0 += 1,
            400..=499 => self.status.1 += 1,
            500..=599 => self.status.2 += 1,
            _ => {}
        }
    }
}

/// Incremental trailing window over a record stream.
///
/// Holds exactly `window_minutes` minute buckets ending at the newest minute
/// seen so far. Records older than the oldest bucket are counted as late and
/// otherwise ignored.
#[derive(Debug, Clone)]
pub struct LiveWindow {
    window_minutes: usize,
    buckets: VecDeque<LiveBucket>,
    late_records: u64,
}

impl LiveWindow {
    pub fn new(window_minutes: usize) -> Self {
        let window_minutes = window_minutes.max(1);
        Self {
            window_minutes,
            buckets: VecDeque::with_capacity(window_minutes),
            late_records: 0,
        }
    }

    pub fn push(&mut self, record: &LogRecord) {
        let minute = minute_floor(record.timestamp);

        let Some(newest) = self.buckets.back().map(|b| b.start) else {
            self.reset(minute);
            self.record_at(minute, record);
            return;
        };

        if minute > newest {
            self.advance(newest, minute);
        }
        self.record_at(minute, record);
    }

    fn reset(&mut self, newest: NaiveDateTime) {
        self.buckets.clear();
        for back in (0..self.window_minutes).rev() {
            let start = newest - TimeDelta::minutes(back as i64);
            self.buckets.push_back(LiveBucket::empty(start));
        }
    }

    fn advance(&mut self, newest: NaiveDateTime, minute: NaiveDateTime) {
        let steps = (minute - newest).num_minutes();
        if steps >= self.window_minutes as i64 {
            self.reset(minute);
            return;
        }

        let mut start = newest;
        for _ in 0..steps {
            start += bucket_width();
            self.buckets.pop_front();
            self.buckets.push_back(LiveBucket::empty(start));
        }
    }

    fn record_at(&mut self, minute: NaiveDateTime, record: &LogRecord) {
        match self.buckets.iter_mut().find(|b| b.start == minute) {
            Some(bucket) => bucket.record(record),
            None => self.late_records += 1,
        }
    }

    pub fn snapshot(&self) -> LiveSnapshot {
        let mut total = ErrorTally::default();
        let mut latency = Histogram::new(RESPONSE_TIME_BUCKETS_MS);
        let mut status = (0, 0, 0);

        for bucket in &self.buckets {
            total.merge(&bucket.tally);
            latency.merge(&bucket.latency);
            status.0 += bucket.status.0;
            status.1 += bucket.status.1;
            status.2 += bucket.status.2;
        }

        LiveSnapshot {
            window_minutes: self.window_minutes as u64,
            data_points: self
                .buckets
                .iter()
                .map(|b| WindowDataPoint::from_tally(b.start, &b.tally))
                .collect(),
            requests: total.requests,
            error_rate: total.error_rate(),
            requests_per_minute: total.requests as f64 / self.window_minutes as f64,
            latency: latency.labeled(),
            p95_ms: latency.percentile(0.95),
            p99_ms: latency.percentile(0.99),
            status,
            late_records: self.late_records,
        }
    }
}

pub struct LiveSnapshot {
    pub window_minutes: u64,
    pub data_points: Vec<WindowDataPoint>,

    pub requests: u64,
    pub error_rate: f64,
    pub requests_per_minute: f64,

    pub latency: Vec<(String, u64)>,
    pub p95_ms: u64,
    pub p99_ms: u64,

    pub status: (u64, u64, u64), // 2xx, 4xx, 5xx
    pub late_records: u64,
}
