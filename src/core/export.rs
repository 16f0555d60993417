use crate::core::card::compose_card;
use crate::domain::model::{CaptureOptions, CardBlock, CardSurface, ExportArtifact, QuoteRecord};
use crate::domain::ports::{DownloadSink, SurfaceCapture};
use crate::utils::error::Result;
use async_trait::async_trait;
use image::codecs::jpeg::JpegEncoder;
use image::{Rgb, RgbImage};

/// Section accents of the card styling.
const HEADER_BAND: Rgb<u8> = Rgb([37, 99, 235]);
const CLIENT_ACCENT: Rgb<u8> = Rgb([59, 130, 246]);
const ROUTE_PANEL: Rgb<u8> = Rgb([249, 250, 251]);
const DATE_PANEL: Rgb<u8> = Rgb([239, 246, 255]);
const PRICE_PANEL: Rgb<u8> = Rgb([17, 24, 39]);
const NOTES_PANEL: Rgb<u8> = Rgb([254, 252, 232]);
const FOOTER_PANEL: Rgb<u8> = Rgb([243, 244, 246]);

const BAND_HEIGHT: u32 = 8;
const MARGIN: u32 = 32;
const BLOCK_GAP: u32 = 20;

/// Bundled capture facility: renders the structural card surface (background,
/// header band, one panel per block) and encodes it as JPEG. Glyph shaping is
/// the layout system's job, so panels stand in for text content here.
pub struct RasterCapture;

fn block_style(block: &CardBlock) -> (Rgb<u8>, u32) {
    match block {
        CardBlock::Client { .. } => (CLIENT_ACCENT, 64),
        CardBlock::Route { .. } => (ROUTE_PANEL, 140),
        CardBlock::ServiceDate { .. } => (DATE_PANEL, 72),
        CardBlock::Price { .. } => (PRICE_PANEL, 96),
        CardBlock::Notes { .. } => (NOTES_PANEL, 64),
        CardBlock::Footer { .. } => (FOOTER_PANEL, 88),
    }
}

fn fill_rect(canvas: &mut RgbImage, x: u32, y: u32, width: u32, height: u32, color: Rgb<u8>) {
    let x_end = x.saturating_add(width).min(canvas.width());
    let y_end = y.saturating_add(height).min(canvas.height());
    for py in y..y_end {
        for px in x..x_end {
            canvas.put_pixel(px, py, color);
        }
    }
}

#[async_trait]
impl SurfaceCapture for RasterCapture {
    async fn capture(&self, surface: &CardSurface, options: &CaptureOptions) -> Result<Vec<u8>> {
        // opaque background regardless of the surface's own transparency
        let mut canvas =
            RgbImage::from_pixel(surface.width, surface.height, Rgb(options.background));

        fill_rect(&mut canvas, 0, 0, surface.width, BAND_HEIGHT, HEADER_BAND);

        let mut y = BAND_HEIGHT + MARGIN;
        for block in &surface.blocks {
            let (color, height) = block_style(block);
            fill_rect(
                &mut canvas,
                MARGIN,
                y,
                surface.width.saturating_sub(2 * MARGIN),
                height,
                color,
            );
            y += height + BLOCK_GAP;
        }

        let quality = (options.quality.clamp(0.0, 1.0) * 100.0).round() as u8;
        let mut encoded = Vec::new();
        JpegEncoder::new_with_quality(&mut encoded, quality).encode_image(&canvas)?;
        Ok(encoded)
    }
}

/// Derives the download filename from the client name; a blank name falls
/// back to the generic tag.
pub fn export_filename(client_name: &str) -> String {
    let client = client_name.trim();
    let tag = if client.is_empty() { "frete" } else { client };
    format!("quote-{}.jpg", tag)
}

/// Compose → capture → sink. Capture and sink are injected, so the whole
/// pipeline runs against stubs in tests.
pub struct ExportPipeline<C: SurfaceCapture, S: DownloadSink> {
    capture: C,
    sink: S,
    options: CaptureOptions,
}

impl<C: SurfaceCapture, S: DownloadSink> ExportPipeline<C, S> {
    pub fn new(capture: C, sink: S) -> Self {
        Self {
            capture,
            sink,
            options: CaptureOptions::default(),
        }
    }

    pub fn with_options(capture: C, sink: S, options: CaptureOptions) -> Self {
        Self {
            capture,
            sink,
            options,
        }
    }

    /// Captures the composed card and writes the artifact through the sink.
    /// Fails with an error the caller reports as a notification; no state is
    /// touched on failure.
    pub async fn export(&self, record: &QuoteRecord) -> Result<ExportArtifact> {
        let surface = CardSurface::new(compose_card(record));
        tracing::debug!("Capturing card surface with {} blocks", surface.blocks.len());

        let encoded = self.capture.capture(&surface, &self.options).await?;
        let filename = export_filename(&record.client_name);
        self.sink.write_file(&filename, &encoded).await?;

        tracing::info!("Card exported as {} ({} bytes)", filename, encoded.len());
        Ok(ExportArtifact {
            filename,
            size_bytes: encoded.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::QuoteError;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::Mutex;

    #[derive(Clone, Default)]
    struct MockSink {
        files: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    }

    impl MockSink {
        async fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            self.files.lock().await.get(path).cloned()
        }

        async fn len(&self) -> usize {
            self.files.lock().await.len()
        }
    }

    impl DownloadSink for MockSink {
        async fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            self.files.lock().await.insert(path.to_string(), data.to_vec());
            Ok(())
        }
    }

    struct FailingCapture;

    #[async_trait]
    impl SurfaceCapture for FailingCapture {
        async fn capture(&self, _: &CardSurface, _: &CaptureOptions) -> Result<Vec<u8>> {
            Err(QuoteError::CaptureError {
                message: "unsupported visual content".to_string(),
            })
        }
    }

    #[test]
    fn test_export_filename() {
        assert_eq!(export_filename("Maria"), "quote-Maria.jpg");
        assert_eq!(export_filename(""), "quote-frete.jpg");
        assert_eq!(export_filename("   "), "quote-frete.jpg");
    }

    #[tokio::test]
    async fn test_raster_capture_encodes_jpeg() {
        let record = QuoteRecord {
            client_name: "Maria".to_string(),
            ..QuoteRecord::default()
        };
        let surface = CardSurface::new(compose_card(&record));
        let encoded = RasterCapture
            .capture(&surface, &CaptureOptions::default())
            .await
            .unwrap();

        // JPEG SOI marker
        assert!(encoded.starts_with(&[0xFF, 0xD8]));
        assert!(!encoded.is_empty());
    }

    #[tokio::test]
    async fn test_export_writes_named_artifact() {
        let sink = MockSink::default();
        let pipeline = ExportPipeline::new(RasterCapture, sink.clone());
        let record = QuoteRecord {
            client_name: "Maria".to_string(),
            ..QuoteRecord::default()
        };

        let artifact = pipeline.export(&record).await.unwrap();

        assert_eq!(artifact.filename, "quote-Maria.jpg");
        let data = sink.get_file("quote-Maria.jpg").await.unwrap();
        assert_eq!(data.len(), artifact.size_bytes);
        assert!(data.starts_with(&[0xFF, 0xD8]));
    }

    #[tokio::test]
    async fn test_capture_failure_surfaces_and_writes_nothing() {
        let sink = MockSink::default();
        let pipeline = ExportPipeline::new(FailingCapture, sink.clone());

        let result = pipeline.export(&QuoteRecord::default()).await;

        assert!(matches!(result, Err(QuoteError::CaptureError { .. })));
        assert_eq!(sink.len().await, 0);
    }
}
