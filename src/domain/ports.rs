use crate::domain::model::{CaptureOptions, CardSurface, City, Region};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read-only client for the remote region/city directory.
#[async_trait]
pub trait RegionDirectory: Send + Sync {
    async fn list_regions(&self) -> Result<Vec<Region>>;
    async fn list_cities(&self, region_short_code: &str) -> Result<Vec<City>>;
}

/// Rasterizes a card surface into an encoded image. Injected so tests can
/// stub the capture facility.
#[async_trait]
pub trait SurfaceCapture: Send + Sync {
    async fn capture(&self, surface: &CardSurface, options: &CaptureOptions) -> Result<Vec<u8>>;
}

/// Client-side download trigger: receives a filename and the encoded payload.
pub trait DownloadSink: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}
