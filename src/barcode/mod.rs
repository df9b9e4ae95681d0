//! Barcode rendering: the renderer seam and its QR implementation.

use image::codecs::png::PngEncoder;
use image::{ExtendedColorType, ImageEncoder, Luma};
use qrcode::QrCode;

use crate::util::video::{new_video_id, watch_url};

/// Width and height, in pixels, requested for every rendered barcode.
pub const RENDER_SIZE: u32 = 300;

#[derive(thiserror::Error, Debug)]
pub enum RenderError {
    #[error("payload does not fit a QR code: {0}")]
    Encode(#[from] qrcode::types::QrError),
    #[error("PNG encoding failed: {0}")]
    Png(#[from] image::ImageError),
}

/// Anything that can draw a payload string into a PNG barcode.
///
/// Production uses [`QrPngRenderer`]; tests substitute recording fakes.
pub trait BarcodeRenderer: Send + Sync {
    fn render(&self, payload: &str, width: u32, height: u32) -> Result<Vec<u8>, RenderError>;
}

/// QR renderer producing grayscale PNGs.
pub struct QrPngRenderer;

impl BarcodeRenderer for QrPngRenderer {
    fn render(&self, payload: &str, width: u32, height: u32) -> Result<Vec<u8>, RenderError> {
        let code = QrCode::new(payload.as_bytes())?;
        // Requested size is a floor; the module grid rounds up to whole
        // pixels per module.
        let img = code
            .render::<Luma<u8>>()
            .min_dimensions(width, height)
            .build();

        let mut png = Vec::new();
        let encoder = PngEncoder::new(&mut png);
        encoder.write_image(img.as_raw(), img.width(), img.height(), ExtendedColorType::L8)?;
        Ok(png)
    }
}

/// A freshly generated barcode and what went into it.
#[derive(Debug, Clone)]
pub struct WatchBarcode {
    pub video_id: String,
    pub url: String,
    pub png: Vec<u8>,
}

/// Mint a random video id, compose its watch URL and render the URL as a
/// [`RENDER_SIZE`]-pixel barcode.
pub fn render_random_watch_barcode<R: BarcodeRenderer + ?Sized>(
    renderer: &R,
) -> Result<WatchBarcode, RenderError> {
    let video_id = new_video_id();
    let url = watch_url(&video_id);
    let png = renderer.render(&url, RENDER_SIZE, RENDER_SIZE)?;
    Ok(WatchBarcode { video_id, url, png })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::util::video::{VIDEO_ID_ALPHABET, VIDEO_ID_LEN, WATCH_URL_PREFIX};
    use std::sync::Mutex;

    #[test]
    fn renders_a_square_png_at_least_the_requested_size() {
        let png = QrPngRenderer
            .render("https://www.youtube.com/watch?v=dQw4w9WgXcQ", 300, 300)
            .unwrap();
        // PNG magic bytes
        assert_eq!(&png[..4], &[0x89, b'P', b'N', b'G']);

        let img = image::load_from_memory(&png).unwrap();
        assert_eq!(img.width(), img.height());
        assert!(img.width() >= 300);
    }

    struct RecordingRenderer {
        calls: Mutex<Vec<(String, u32, u32)>>,
    }

    impl BarcodeRenderer for RecordingRenderer {
        fn render(&self, payload: &str, width: u32, height: u32) -> Result<Vec<u8>, RenderError> {
            self.calls.lock().unwrap().push((payload.to_string(), width, height));
            Ok(vec![0xAB])
        }
    }

    #[test]
    fn random_barcode_hands_the_renderer_exactly_the_composed_url() {
        let renderer = RecordingRenderer { calls: Mutex::new(Vec::new()) };
        let barcode = render_random_watch_barcode(&renderer).unwrap();

        let calls = renderer.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        let (payload, width, height) = &calls[0];
        assert_eq!(payload, &barcode.url);
        assert_eq!((*width, *height), (RENDER_SIZE, RENDER_SIZE));

        assert_eq!(barcode.url, format!("{WATCH_URL_PREFIX}{}", barcode.video_id));
        assert_eq!(barcode.video_id.len(), VIDEO_ID_LEN);
        assert!(barcode.video_id.bytes().all(|b| VIDEO_ID_ALPHABET.contains(&b)));
        assert_eq!(barcode.png, vec![0xAB]);
    }
}
