pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::cli::LocalStorage;

pub use core::directory::IbgeDirectory;
pub use core::export::{ExportPipeline, RasterCapture};
pub use core::store::QuoteStore;
pub use utils::error::{QuoteError, Result};
