use chrono::NaiveDateTime;
use pretty_assertions::assert_eq;
use serde_json::json;
use shoplog_core::aggregate::{SummaryAccumulator, summarize};
use shoplog_core::api::Api;
use shoplog_core::record::{TimeRange, parse_timestamp};
use shoplog_core::session::BreakPoint;
use shoplog_core::store::RecordStore;
use shoplog_core::window::realtime;

mod common;

fn ts(s: &str) -> NaiveDateTime {
    parse_timestamp(s).unwrap()
}

#[test]
fn summary_over_fixture() {
    // Arrange
    let config = common::fixture_config();
    let (store, _) = common::load_access_log(&config);

    // Act
    let res = Api::new(&store, &config).summary(None, None).unwrap();

    // Assert
    assert_eq!(res.total_requests, 14);
    assert_eq!(res.unique_users, 4);
    assert_eq!(res.error_rate, 3.0 / 14.0);
    assert_eq!(
        serde_json::to_value(&res.top_paths).unwrap(),
        json!([
            {"path": "/product/12345", "count": 4},
            {"path": "/cart/add", "count": 3},
            {"path": "/checkout", "count": 2},
        ])
    );
}

/// Summaries over a partition of the timeline add up to the full summary
#[test]
fn summary_is_consistent_across_partitions() {
    let config = common::fixture_config();
    let (store, _) = common::load_access_log(&config);
    let whole = summarize(&store, None, None).unwrap();

    let cut = ts("2024-01-15 10:02:00");
    let left = summarize(&store, None, Some(cut)).unwrap();
    let right = summarize(&store, Some(cut + chrono::TimeDelta::seconds(1)), None).unwrap();

    assert_eq!(left.total_requests + right.total_requests, whole.total_requests);
    let weighted = (left.avg_response_time_ms * left.total_requests as f64
        + right.avg_response_time_ms * right.total_requests as f64)
        / whole.total_requests as f64;
    assert!((weighted - whole.avg_response_time_ms).abs() < 1e-9);

    // merging the raw accumulators reproduces the exact summary
    let mut a = SummaryAccumulator::new();
    let mut b = SummaryAccumulator::new();
    store
        .scan(TimeRange::new(None, Some(cut)), &mut |r| a.push(r))
        .unwrap();
    store
        .scan(TimeRange::new(Some(cut + chrono::TimeDelta::seconds(1)), None), &mut |r| b.push(r))
        .unwrap();
    a.merge(b);
    assert_eq!(a.finish(5), whole);
}

#[test]
fn empty_range_summary() {
    let config = common::fixture_config();
    let (store, _) = common::load_access_log(&config);

    let res = Api::new(&store, &config)
        .summary(Some("2024-02-01 00:00:00"), Some("2024-02-02 00:00:00"))
        .unwrap();

    assert_eq!(
        serde_json::to_value(&res).unwrap(),
        json!({
            "total_requests": 0,
            "unique_users": 0,
            "avg_response_time": 0.0,
            "error_rate": 0.0,
            "top_paths": []
        })
    );
}

#[test]
fn realtime_uses_config_window() {
    let config = common::fixture_config();
    let (store, _) = common::load_access_log(&config);

    let res = Api::new(&store, &config).realtime(None).unwrap();

    assert_eq!(res.window_minutes, 10);
    assert_eq!(res.data_points.len(), 10);
    // newest record is 10:43:00, so the window is [10:33, 10:43)
    let requests: Vec<u64> = res.data_points.iter().map(|p| p.requests).collect();
    assert_eq!(requests, vec![0, 0, 0, 0, 0, 0, 0, 1, 2, 2]);
}

#[test]
fn realtime_always_returns_window_points() {
    let config = common::fixture_config();
    let (store, _) = common::load_access_log(&config);

    for w in 1..=90 {
        let points = realtime(&store, w, None).unwrap();
        assert_eq!(points.len(), w as usize);
        assert!(points.iter().all(|p| (0.0..=1.0).contains(&p.error_rate)));
    }
}

#[test]
fn journeys_over_fixture() {
    let config = common::fixture_config();
    let (store, _) = common::load_access_log(&config);
    let api = Api::new(&store, &config);

    // user_1001 buys in the first session, then comes back 39 minutes later
    let u1 = api.journey("user_1001").unwrap();
    assert_eq!(u1.sessions.len(), 2);
    assert!(u1.sessions[0].completed_purchase);
    assert_eq!(u1.sessions[1].break_point, Some(BreakPoint::None));

    // user_1002 leaves a cart with a 404, then checks out after the gap
    let u2 = api.journey("user_1002").unwrap();
    assert_eq!(u2.sessions.len(), 2);
    assert_eq!(u2.sessions[0].break_point, Some(BreakPoint::Cart));
    assert_eq!(u2.sessions[1].path_sequence, vec!["/checkout".to_string()]);
    assert!(!u2.sessions[1].completed_purchase);

    // user_1003: 10:03:05 -> 10:41:00 splits
    let u3 = api.journey("user_1003").unwrap();
    assert_eq!(u3.sessions.len(), 2);
    assert_eq!(u3.sessions[1].break_point, Some(BreakPoint::Cart));

    assert!(api.journey("user_0000").unwrap().sessions.is_empty());
}
