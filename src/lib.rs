pub mod config;
pub mod error;
pub mod sparql;
pub mod classify;
pub mod store;
pub mod upload;
pub mod output;
pub mod pipeline;

pub use config::Config;
pub use error::{NidmError, Result};
pub use classify::{classify, Category, Classification};
pub use sparql::{parse_results, DataElementRecord, Field};
pub use store::StoreClient;
