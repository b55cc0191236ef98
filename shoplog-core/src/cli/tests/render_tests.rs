use crate::api::{ImportResponse, JourneyResponse, RealtimeResponse, SummaryResponse};
use crate::cli::render::{render_import, render_journey, render_realtime, render_summary};
use crate::aggregate::PathCount;

#[test]
fn import_mentions_both_counts() {
    let out = render_import(&ImportResponse {
        success: 12,
        errors: 3,
    });

    assert!(out.contains("12 records imported"));
    assert!(out.contains("3 malformed"));
}

#[test]
fn summary_lists_top_paths_in_order() {
    let out = render_summary(&SummaryResponse {
        total_requests: 10,
        unique_users: 4,
        avg_response_time: 123.46,
        error_rate: 0.1,
        top_paths: vec![
            PathCount {
                path: "/product/1".into(),
                count: 6,
            },
            PathCount {
                path: "/cart/add".into(),
                count: 4,
            },
        ],
    });

    assert!(out.contains("requests: 10"));
    assert!(out.contains("avg: 123.5ms"));
    assert!(out.contains("errors: 10.00%"));
    let first = out.find("/product/1").unwrap();
    let second = out.find("/cart/add").unwrap();
    assert!(first < second);
}

#[test]
fn empty_results_render_placeholders() {
    let summary = render_summary(&SummaryResponse {
        total_requests: 0,
        unique_users: 0,
        avg_response_time: 0.0,
        error_rate: 0.0,
        top_paths: Vec::new(),
    });
    let realtime = render_realtime(&RealtimeResponse {
        window_minutes: 5,
        data_points: Vec::new(),
    });
    let journey = render_journey(&JourneyResponse {
        user_id: "nobody".into(),
        sessions: Vec::new(),
    });

    assert!(summary.contains("<no requests>"));
    assert!(realtime.contains("<no data>"));
    assert!(journey.contains("<no sessions>"));
}
