//! QR code rendering and PNG export

use super::App;
use crate::constants::{QR_CODE_SIZE, QR_EXPORT_SIZE, QR_FILE_NAME};
use eframe::egui;
use qrcode::QrCode;
use tracing::{info, warn};

/// Encode `text` as a QR code rasterized to at least `size` pixels per edge
/// (quiet zone included). Pixels are 0 (module) or 255 (background).
fn render_qr(text: &str, size: u32) -> Result<image::GrayImage, qrcode::types::QrError> {
    let code = QrCode::new(text.as_bytes())?;
    Ok(code
        .render::<image::Luma<u8>>()
        .quiet_zone(true)
        .min_dimensions(size, size)
        .build())
}

impl App {
    /// On-screen QR texture for the shortened URL, cached per value so the
    /// code is only re-encoded when the result changes.
    pub fn qr_texture(
        &mut self,
        ctx: &egui::Context,
        shortened: &str,
    ) -> Option<egui::TextureHandle> {
        if let Some((cached_for, texture)) = &self.qr_cache {
            if cached_for == shortened {
                return Some(texture.clone());
            }
        }

        let image = match render_qr(shortened, QR_CODE_SIZE) {
            Ok(image) => image,
            Err(e) => {
                warn!(error = %e, "Failed to encode QR code");
                return None;
            }
        };
        let (w, h) = image.dimensions();
        let color_image = egui::ColorImage::from_gray([w as usize, h as usize], image.as_raw());
        let texture = ctx.load_texture("qr_code", color_image, egui::TextureOptions::NEAREST);
        self.qr_cache = Some((shortened.to_string(), texture.clone()));
        Some(texture)
    }

    /// Save the QR code as a PNG, rendered at twice the on-screen size.
    /// Opens a save dialog pre-filled with the fixed filename.
    pub fn save_qr_code(&self, shortened: &str) {
        let Some(path) = rfd::FileDialog::new()
            .set_file_name(QR_FILE_NAME)
            .add_filter("PNG image", &["png"])
            .save_file()
        else {
            return;
        };

        let image = match render_qr(shortened, QR_EXPORT_SIZE) {
            Ok(image) => image,
            Err(e) => {
                warn!(error = %e, "Failed to encode QR code for export");
                return;
            }
        };
        match image.save_with_format(&path, image::ImageFormat::Png) {
            Ok(()) => info!(path = %path.display(), "QR code saved"),
            Err(e) => warn!(error = %e, path = %path.display(), "Failed to save QR code"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rendered_qr_is_square_and_at_least_requested_size() {
        let image = render_qr("https://sho.rt/ab12cd", QR_CODE_SIZE).unwrap();
        let (w, h) = image.dimensions();
        assert_eq!(w, h);
        assert!(w >= QR_CODE_SIZE);
    }

    #[test]
    fn rendered_qr_is_binary() {
        let image = render_qr("https://sho.rt/ab12cd", 64).unwrap();
        assert!(image.pixels().all(|p| p.0[0] == 0 || p.0[0] == 255));
    }

    #[test]
    fn export_render_is_larger_than_display_render() {
        let display = render_qr("https://sho.rt/ab12cd", QR_CODE_SIZE).unwrap();
        let export = render_qr("https://sho.rt/ab12cd", QR_EXPORT_SIZE).unwrap();
        assert!(export.width() >= display.width() * 2);
    }
}
