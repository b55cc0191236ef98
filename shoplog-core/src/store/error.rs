use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("record store unavailable: {reason}")]
    Unavailable { reason: String },

    #[error("record store scan failed: {reason}")]
    Scan { reason: String },
}

impl StoreError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn scan(reason: impl Into<String>) -> Self {
        Self::Scan {
            reason: reason.into(),
        }
    }
}
