pub mod config;
pub mod error;
pub mod topics;
pub mod types;

pub use config::Config;
pub use error::TrendcastError;
pub use topics::TopicsFile;
pub use types::*;
