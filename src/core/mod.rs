pub mod card;
pub mod directory;
pub mod export;
pub mod format;
pub mod store;

pub use crate::domain::model::{CardBlock, CardSurface, City, FieldChange, QuoteRecord, Region};
pub use crate::domain::ports::{DownloadSink, RegionDirectory, SurfaceCapture};
pub use crate::utils::error::Result;
