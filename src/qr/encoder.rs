//! QR code encoder

use crate::error::{Error, Result};
use crate::qr::QrPayload;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::{ImageBuffer, Rgb, RgbImage};
use qrcode::{EcLevel, QrCode};
use serde::{Deserialize, Serialize};

/// Rendering configuration for locally encoded QR images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EncoderConfig {
    /// Target image width (and height) in pixels
    pub width: u32,
    /// Quiet-zone margin around the code, in modules
    pub margin: u32,
    /// Foreground (dark module) color as RGB
    pub dark: [u8; 3],
    /// Background (light module) color as RGB
    pub light: [u8; 3],
}

impl Default for EncoderConfig {
    fn default() -> Self {
        Self {
            width: 320,
            margin: 4,
            dark: [0, 0, 0],
            light: [255, 255, 255],
        }
    }
}

/// QR code encoder with a fixed rendering configuration
pub struct QrEncoder {
    config: EncoderConfig,
    ecc_level: EcLevel,
}

impl QrEncoder {
    /// Create an encoder with the given rendering configuration (Medium ECC)
    pub fn new(config: EncoderConfig) -> Self {
        Self {
            config,
            ecc_level: EcLevel::M,
        }
    }

    /// Override the error correction level
    pub fn with_ecc_level(mut self, ecc_level: EcLevel) -> Self {
        self.ecc_level = ecc_level;
        self
    }

    /// Encode a payment payload into a QR image
    pub fn encode(&self, payload: &QrPayload) -> Result<RgbImage> {
        self.encode_str(&payload.to_json()?)
    }

    /// Encode an arbitrary string into a QR image
    pub fn encode_str(&self, data: &str) -> Result<RgbImage> {
        let code = QrCode::with_error_correction_level(data, self.ecc_level)
            .map_err(|e| Error::QrEncode(format!("Failed to create QR code: {e}")))?;

        let modules = code.width() as u32 + 2 * self.config.margin;
        // At least one pixel per module; small widths upscale rather than clip
        let scale = (self.config.width / modules).max(1);
        let size = modules * scale;

        let dark = Rgb(self.config.dark);
        let light = Rgb(self.config.light);
        let mut img: RgbImage = ImageBuffer::from_pixel(size, size, light);

        for y in 0..code.width() {
            for x in 0..code.width() {
                if code[(x, y)] != qrcode::Color::Dark {
                    continue;
                }
                let px = (x as u32 + self.config.margin) * scale;
                let py = (y as u32 + self.config.margin) * scale;
                for dy in 0..scale {
                    for dx in 0..scale {
                        img.put_pixel(px + dx, py + dy, dark);
                    }
                }
            }
        }

        Ok(img)
    }

    /// Encode a payment payload as PNG bytes
    pub fn encode_png(&self, payload: &QrPayload) -> Result<Vec<u8>> {
        let img = self.encode(payload)?;
        png_bytes(&img)
    }

    /// Encode a payment payload as a `data:image/png;base64,...` data URL
    pub fn encode_data_url(&self, payload: &QrPayload) -> Result<String> {
        let png = self.encode_png(payload)?;
        Ok(format!("data:image/png;base64,{}", STANDARD.encode(png)))
    }
}

impl Default for QrEncoder {
    fn default() -> Self {
        Self::new(EncoderConfig::default())
    }
}

fn png_bytes(img: &RgbImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    let encoder = image::codecs::png::PngEncoder::new(&mut bytes);
    image::ImageEncoder::write_image(
        encoder,
        img.as_raw(),
        img.width(),
        img.height(),
        image::ExtendedColorType::Rgb8,
    )
    .map_err(|e| Error::Image(format!("Failed to encode PNG: {e}")))?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload() -> QrPayload {
        QrPayload {
            amount: 50000,
            message: "Tra tien com".to_string(),
        }
    }

    #[test]
    fn test_encode_produces_square_image() {
        let encoder = QrEncoder::default();
        let img = encoder.encode(&payload()).unwrap();
        assert_eq!(img.width(), img.height());
        assert!(img.width() > 0);
    }

    #[test]
    fn test_png_magic_bytes() {
        let encoder = QrEncoder::default();
        let png = encoder.encode_png(&payload()).unwrap();
        assert!(png.len() > 8);
        assert_eq!(&png[..4], &[0x89, b'P', b'N', b'G']);
    }

    #[test]
    fn test_data_url_prefix() {
        let encoder = QrEncoder::default();
        let data_url = encoder.encode_data_url(&payload()).unwrap();
        assert!(data_url.starts_with("data:image/png;base64,"));
    }

    #[test]
    fn test_data_url_deterministic() {
        let encoder = QrEncoder::default();
        let first = encoder.encode_data_url(&payload()).unwrap();
        let second = encoder.encode_data_url(&payload()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_custom_palette() {
        let config = EncoderConfig {
            dark: [20, 20, 80],
            light: [250, 250, 250],
            ..Default::default()
        };
        let encoder = QrEncoder::new(config);
        let img = encoder.encode(&payload()).unwrap();
        // Corner of the quiet zone carries the background color
        assert_eq!(img.get_pixel(0, 0), &Rgb([250, 250, 250]));
    }

    #[test]
    fn test_tiny_width_still_renders() {
        let config = EncoderConfig {
            width: 10,
            ..Default::default()
        };
        let encoder = QrEncoder::new(config);
        let img = encoder.encode_str("hello").unwrap();
        assert!(img.width() >= 10);
    }
}
