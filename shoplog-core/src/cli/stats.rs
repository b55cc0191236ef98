use crate::cli::CliContext;
use crate::cli::constants::{LOOP_IDLE_SLEEP, RENDER_TICK};
use crate::cli::render::{redraw, render_stats};
use crate::error::QueryError;
use crate::parse::parse_line;
use crate::record::LogRecord;
use crate::window::LiveWindow;
use anyhow::Result;
use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Instant;

enum Line {
    Record(LogRecord),
    Rejected,
}

/// Window sizes are validated like the `realtime` query does.
pub(crate) fn live_window_size(window_minutes: i64) -> Result<usize, QueryError> {
    usize::try_from(window_minutes)
        .ok()
        .filter(|w| *w > 0)
        .ok_or(QueryError::InvalidWindow { window_minutes })
}

/// Live dashboard over log lines arriving on stdin.
pub fn run_stats(ctx: &CliContext, window_minutes: Option<i64>) -> Result<()> {
    let window = live_window_size(
        window_minutes.unwrap_or(ctx.config.realtime.default_window_minutes),
    )?;

    // Channel from reader thread -> stats loop.
    let (tx, rx) = mpsc::channel::<Line>();

    // Reader thread: stdin -> parse -> send
    let reader_handle = thread::spawn(move || {
        let stdin = io::stdin();
        let reader = stdin.lock();

        for line in reader.lines().map_while(|l| l.ok()) {
            let msg = match parse_line(&line) {
                Ok(record) => Line::Record(record),
                Err(err) if err.is_blank() => continue,
                Err(_) => Line::Rejected,
            };
            // If receiver is gone, stop early.
            if tx.send(msg).is_err() {
                break;
            }
        }
        // tx is dropped here, which will disconnect rx.
    });

    print!("\x1b[?25l");
    let _ = io::stdout().flush();

    let mut live = LiveWindow::new(window);
    let mut rejected = 0u64;
    let mut last_render = Instant::now();

    loop {
        let mut disconnected = false;

        // Drain
        loop {
            match rx.try_recv() {
                Ok(Line::Record(record)) => live.push(&record),
                Ok(Line::Rejected) => rejected += 1,
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => {
                    disconnected = true;
                    break;
                }
            }
        }

        if disconnected || last_render.elapsed() >= RENDER_TICK {
            redraw(&render_stats(&live.snapshot(), rejected));
            last_render = Instant::now();
        }

        if disconnected {
            break;
        }

        thread::sleep(LOOP_IDLE_SLEEP);
    }

    // Restore cursor
    print!("\x1b[?25h");
    let _ = io::stdout().flush();

    let _ = reader_handle.join();

    Ok(())
}
