use crate::record::{TIMESTAMP_FORMAT, parse_timestamp};
use anyhow::{Context, Result};
use chrono::{NaiveDateTime, TimeDelta};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

const PATHS: &[&str] = &[
    "/product/12345",
    "/product/67890",
    "/product/11111",
    "/product/22222",
    "/product/33333",
    "/product/44444",
    "/cart/add",
    "/cart/remove",
    "/cart/view",
    "/checkout",
    "/payment",
    "/order/confirm",
    "/user/profile",
    "/user/orders",
    "/search",
];

/// Weighted towards success: 8 of 11 draws are 200.
const STATUS_CODES: &[u16] = &[200, 200, 200, 200, 200, 200, 200, 200, 404, 500, 503];

const MALFORMED_LINE: &str = "# ERROR LINE";

#[derive(Debug, Clone)]
pub struct GenerateOptions {
    pub count: usize,
    pub seed: Option<u64>,
    /// Probability of a malformed line after each record.
    pub malformed_rate: f64,
    pub start: NaiveDateTime,
    pub spacing_secs: i64,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            count: 10_000,
            seed: None,
            malformed_rate: 0.001,
            start: parse_timestamp("2024-01-15 10:00:00").unwrap_or_default(),
            spacing_secs: 2,
        }
    }
}

/// Write synthetic access log lines. Returns the number of valid lines written.
pub fn generate_to<W: Write>(out: &mut W, opts: &GenerateOptions) -> io::Result<usize> {
    let mut rng = match opts.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let malformed_rate = opts.malformed_rate.clamp(0.0, 1.0);

    for i in 0..opts.count {
        let ts = opts.start + TimeDelta::seconds(i as i64 * opts.spacing_secs);
        let user = rng.random_range(1000..=1100);
        let path = PATHS[rng.random_range(0..PATHS.len())];
        let response_time = rng.random_range(50..=2000);
        let status = STATUS_CODES[rng.random_range(0..STATUS_CODES.len())];

        writeln!(
            out,
            "{} | user_{user} | {path} | {response_time}ms | {status}",
            ts.format(TIMESTAMP_FORMAT)
        )?;

        if rng.random_bool(malformed_rate) {
            writeln!(out, "{MALFORMED_LINE}")?;
        }
    }
    Ok(opts.count)
}

/// Generate into `output`, or stdout when it is `None`.
pub fn generate(output: Option<&Path>, opts: &GenerateOptions) -> Result<()> {
    let written = match output {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("failed to create {}", path.display()))?;
            let mut w = BufWriter::new(file);
            let n = generate_to(&mut w, opts)?;
            w.flush()?;
            n
        }
        None => {
            let stdout = io::stdout();
            let mut w = BufWriter::new(stdout.lock());
            let n = generate_to(&mut w, opts)?;
            w.flush()?;
            n
        }
    };

    tracing::info!(lines = written, output = ?output, "synthetic logs generated");
    Ok(())
}
