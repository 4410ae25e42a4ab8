//! QR rasterization for the code cells.

use qrcode::types::QrError;
use qrcode::{Color, EcLevel, QrCode};

use crate::sheet::layout::{ACCENT_RGB, BACKGROUND_RGB, QR_SOURCE_PX};

/// Standard quiet zone around a QR symbol, in modules.
pub const QUIET_ZONE_MODULES: u32 = 4;

/// Square RGB8 bitmap of one QR code, palette applied.
pub struct QrRaster {
    /// Side length in pixels.
    pub size: u32,
    /// Row-major RGB triplets, `size * size * 3` bytes.
    pub pixels: Vec<u8>,
}

impl QrRaster {
    #[cfg(test)]
    fn pixel_at(&self, x: u32, y: u32) -> (u8, u8, u8) {
        let i = ((y * self.size + x) * 3) as usize;
        (self.pixels[i], self.pixels[i + 1], self.pixels[i + 2])
    }
}

/// Encodes `url` at the maximum error-correction level and rasterizes it
/// with the card palette: accent modules on the dark cell background, quiet
/// zone included.
pub fn encode(url: &str) -> Result<QrRaster, QrError> {
    let code = QrCode::with_error_correction_level(url, EcLevel::H)?;
    Ok(rasterize(&code))
}

fn rasterize(code: &QrCode) -> QrRaster {
    let modules = code.width() as u32;
    let colors = code.to_colors();
    let total = modules + 2 * QUIET_ZONE_MODULES;
    let size = QR_SOURCE_PX;

    let mut pixels = Vec::with_capacity((size * size * 3) as usize);
    for y in 0..size {
        for x in 0..size {
            // nearest-module sampling, like a scaled PNG export
            let gx = x * total / size;
            let gy = y * total / size;

            let in_symbol = (QUIET_ZONE_MODULES..QUIET_ZONE_MODULES + modules).contains(&gx)
                && (QUIET_ZONE_MODULES..QUIET_ZONE_MODULES + modules).contains(&gy);
            let dark_module = in_symbol
                && colors[((gy - QUIET_ZONE_MODULES) * modules + (gx - QUIET_ZONE_MODULES))
                    as usize]
                    == Color::Dark;

            let (r, g, b) = if dark_module {
                ACCENT_RGB
            } else {
                BACKGROUND_RGB
            };
            pixels.extend_from_slice(&[r, g, b]);
        }
    }

    QrRaster { size, pixels }
}
