use crate::api::Api;
use crate::cli::CliContext;
use crate::cli::render;
use crate::ingest::{ImportResult, Ingestor};
use crate::logging::OutputMode;
use crate::store::MemoryStore;
use anyhow::{Context, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// `-` reads from stdin.
fn open_input(path: &Path) -> Result<Box<dyn BufRead>> {
    if path.as_os_str() == "-" {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }
    let file =
        File::open(path).with_context(|| format!("failed to open log file {}", path.display()))?;
    Ok(Box::new(BufReader::new(file)))
}

pub(crate) fn load_store(ctx: &CliContext, path: &Path) -> Result<(MemoryStore, ImportResult)> {
    let store = MemoryStore::new();
    let counts = Ingestor::new(&store)
        .with_batch_size(ctx.config.ingest.batch_size)
        .import_reader(open_input(path)?)
        .with_context(|| format!("failed to import {}", path.display()))?;
    Ok((store, counts))
}

fn emit<T: Serialize>(ctx: &CliContext, value: &T, pretty: impl FnOnce(&T) -> String) -> Result<()> {
    match ctx.output {
        OutputMode::Json => println!("{}", serde_json::to_string_pretty(value)?),
        OutputMode::Pretty => print!("{}", pretty(value)),
    }
    Ok(())
}

pub fn run_import(ctx: &CliContext, path: &Path) -> Result<()> {
    let (_, counts) = load_store(ctx, path)?;
    emit(ctx, &crate::api::ImportResponse::from(counts), render::render_import)
}

pub fn run_summary(
    ctx: &CliContext,
    path: &Path,
    start: Option<&str>,
    end: Option<&str>,
) -> Result<()> {
    let (store, _) = load_store(ctx, path)?;
    let res = Api::new(&store, &ctx.config).summary(start, end)?;
    emit(ctx, &res, render::render_summary)
}

pub fn run_realtime(
    ctx: &CliContext,
    path: &Path,
    window_minutes: Option<i64>,
    as_of: Option<&str>,
) -> Result<()> {
    let (store, _) = load_store(ctx, path)?;
    let res = Api::new(&store, &ctx.config).realtime_as_of(window_minutes, as_of)?;
    emit(ctx, &res, render::render_realtime)
}

pub fn run_journey(ctx: &CliContext, path: &Path, user_id: &str) -> Result<()> {
    let (store, _) = load_store(ctx, path)?;
    let res = Api::new(&store, &ctx.config).journey(user_id)?;
    emit(ctx, &res, render::render_journey)
}
