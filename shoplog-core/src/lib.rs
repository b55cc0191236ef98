pub mod aggregate;
pub mod api;
pub mod cli;
pub mod conf;
pub mod error;
pub mod ingest;
pub mod logging;
pub mod parse;
pub mod record;
pub mod session;
pub mod store;
pub mod window;

#[cfg(test)]
mod test_support;

pub use error::QueryError;
pub use record::{LogRecord, TimeRange};
