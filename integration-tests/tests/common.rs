use shoplog_core::conf::{EngineConfig, load_config};
use shoplog_core::ingest::{ImportResult, Ingestor};
use shoplog_core::store::MemoryStore;
use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

pub fn fixture(file: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("fixtures")
        .join(file)
}

#[allow(dead_code)]
pub fn fixture_config() -> EngineConfig {
    load_config(&fixture("shoplog.toml")).expect("failed to load shoplog.toml fixture")
}

/// Import `access.log` into a fresh store.
#[allow(dead_code)]
pub fn load_access_log(config: &EngineConfig) -> (MemoryStore, ImportResult) {
    let store = MemoryStore::new();
    let file = File::open(fixture("access.log")).expect("missing access.log fixture");

    let result = Ingestor::new(&store)
        .with_batch_size(config.ingest.batch_size)
        .import_reader(BufReader::new(file))
        .expect("import failed");

    (store, result)
}
