use crate::ingest::ImportResult;
use crate::store::StoreError;
use thiserror::Error;

/// An import that stopped early. Every variant carries the counts reached
/// before stopping: records in `partial.success_count` are durably appended,
/// nothing after them is.
#[derive(Debug, Error)]
pub enum ImportError {
    #[error("import aborted after {} stored records: {source}", partial.success_count)]
    Store {
        partial: ImportResult,
        #[source]
        source: StoreError,
    },

    #[error("failed to read input after {} stored records: {source}", partial.success_count)]
    Read {
        partial: ImportResult,
        #[source]
        source: std::io::Error,
    },

    #[error("import cancelled after {} stored records", partial.success_count)]
    Cancelled { partial: ImportResult },
}

impl ImportError {
    pub fn partial(&self) -> ImportResult {
        match self {
            ImportError::Store { partial, .. }
            | ImportError::Read { partial, .. }
            | ImportError::Cancelled { partial } => *partial,
        }
    }
}
