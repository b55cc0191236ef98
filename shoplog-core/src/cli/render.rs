use crate::api::{ImportResponse, JourneyResponse, RealtimeResponse, SummaryResponse};
use crate::cli::constants::BAR_WIDTH;
use crate::record::format_timestamp;
use crate::session::BreakPoint;
use crate::window::LiveSnapshot;
use owo_colors::OwoColorize;
use std::io::{self, Write};

fn bar(value: u64, max: u64) -> String {
    if max == 0 || value == 0 {
        return String::new();
    }
    let width = ((value as f64 / max as f64) * BAR_WIDTH as f64).ceil() as usize;
    "█".repeat(width.max(1))
}

pub fn render_import(res: &ImportResponse) -> String {
    format!(
        "{} {} records imported, {} malformed lines skipped\n",
        "✔".green(),
        res.success,
        res.errors
    )
}

pub fn render_summary(res: &SummaryResponse) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Summary\n\
         =======\n\
         requests: {} | users: {} | avg: {:.1}ms | errors: {:.2}%\n\n",
        res.total_requests,
        res.unique_users,
        res.avg_response_time,
        res.error_rate * 100.0
    ));

    if res.top_paths.is_empty() {
        out.push_str("Top paths: <no requests>\n");
        return out;
    }

    out.push_str("Top paths:\n");
    let max = res.top_paths.first().map(|p| p.count).unwrap_or(0);
    for (i, p) in res.top_paths.iter().enumerate() {
        out.push_str(&format!(
            "  {}. {:<24} {:>8}  {}\n",
            i + 1,
            p.path,
            p.count,
            bar(p.count, max).cyan()
        ));
    }
    out
}

pub fn render_realtime(res: &RealtimeResponse) -> String {
    let mut out = format!("Traffic (last {} minutes)\n", res.window_minutes);

    if res.data_points.is_empty() {
        out.push_str("  <no data>\n");
        return out;
    }

    let max = res.data_points.iter().map(|p| p.requests).max().unwrap_or(0);
    for p in &res.data_points {
        let errors = format!("{:>5.1}%", p.error_rate * 100.0);
        let errors = if p.error_rate > 0.0 {
            errors.red().to_string()
        } else {
            errors
        };
        out.push_str(&format!(
            "  {}  {:>6} req  {}  {}\n",
            format_timestamp(&p.timestamp),
            p.requests,
            errors,
            bar(p.requests, max)
        ));
    }
    out
}

pub fn render_journey(res: &JourneyResponse) -> String {
    let mut out = format!("Journey of {}\n", res.user_id);

    if res.sessions.is_empty() {
        out.push_str("  <no sessions>\n");
        return out;
    }

    for (i, s) in res.sessions.iter().enumerate() {
        let outcome = match s.break_point {
            None => "purchased".green().to_string(),
            Some(BreakPoint::None) => "no funnel activity".dimmed().to_string(),
            Some(BreakPoint::Browse) => "left after browsing".yellow().to_string(),
            Some(BreakPoint::Cart) => "left with items in cart".red().to_string(),
        };
        out.push_str(&format!(
            "\nSession {} ({} → {}): {}\n  {}\n",
            i + 1,
            format_timestamp(&s.start_time),
            format_timestamp(&s.end_time),
            outcome,
            s.path_sequence.join(" → ")
        ));
    }
    out
}

pub fn render_stats(snapshot: &LiveSnapshot, rejected: u64) -> String {
    let mut out = String::new();

    let (_ok, client, server) = snapshot.status;

    out.push_str(&format!(
        "Shoplog Stats ({}m window)\n\
         ==========================\n\
         RPM: {:.1} | requests: {} | errors: {:.1}% | 4xx: {} | 5xx: {}\n\n",
        snapshot.window_minutes,
        snapshot.requests_per_minute,
        snapshot.requests,
        snapshot.error_rate * 100.0,
        client,
        server
    ));

    let max = snapshot
        .data_points
        .iter()
        .map(|p| p.request_count)
        .max()
        .unwrap_or(0);
    for p in &snapshot.data_points {
        out.push_str(&format!(
            "  {}  {:>6}  {:>5.1}%  {}\n",
            p.bucket_start.format("%H:%M"),
            p.request_count,
            p.error_rate * 100.0,
            bar(p.request_count, max)
        ));
    }
    out.push('\n');

    let total_latency: u64 = snapshot.latency.iter().map(|(_, c)| *c).sum();
    if total_latency > 0 {
        out.push_str("Response time (window):\n");
        for (label, count) in &snapshot.latency {
            let pct = (*count as f64 / total_latency as f64) * 100.0;
            let bars = ((pct / 5.0).floor() as usize).max(1);
            out.push_str(&format!(
                "  {:<12} {:<20} {:>5.1}%\n",
                label,
                "█".repeat(bars),
                pct
            ));
        }
        out.push('\n');
    } else {
        out.push_str("Response time (window): <no samples>\n\n");
    }

    out.push_str(&format!(
        "Response time p95 ≈ {}ms | p99 ≈ {}ms\n",
        snapshot.p95_ms, snapshot.p99_ms
    ));

    out.push_str(&format!(
        "Late records: {} | rejected lines: {}\n",
        snapshot.late_records, rejected
    ));

    out
}

pub fn redraw(output: &str) {
    print!("\x1b[2J\x1b[H");
    println!("{output}");
    let _ = io::stdout().flush();
}
