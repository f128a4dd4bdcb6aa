pub mod analyzer;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod ledger;
pub mod model;
pub mod tracing;
pub mod utils;

pub use engine::Muraqib;
pub use error::ConfigError;
pub use error::LedgerError;
pub use error::Result;
