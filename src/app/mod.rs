//! App module - contains the main application state and logic

pub(crate) mod form;
mod qr;
pub(crate) mod submit;

use crate::api::ApiClient;
use crate::constants::COPY_FEEDBACK_MS;
use crate::settings::Settings;
use crate::theme;
use crate::types::RequestState;
use eframe::egui;
use form::FormState;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};
use submit::SubmitOutcome;
use tokio_util::sync::CancellationToken;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) api: ApiClient,
    pub(crate) runtime: tokio::runtime::Runtime,
    // Form
    pub(crate) form: FormState,
    pub(crate) focus_url_field: bool,
    // Request lifecycle (component-local, no global singleton)
    pub(crate) request_state: RequestState,
    pub(crate) request_seq: u64,
    pub(crate) submit_outcome: Arc<Mutex<Option<SubmitOutcome>>>,
    pub(crate) cancel_token: Option<CancellationToken>,
    // Result conveniences
    pub(crate) copied_at: Option<Instant>,
    pub(crate) qr_cache: Option<(String, egui::TextureHandle)>,
    // Branding
    pub(crate) logo_texture: Option<egui::TextureHandle>,
    // Window/session
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
    // Persisted base URL as loaded; written back unchanged so an env-var
    // override never leaks into settings.json
    saved_api_base: Option<String>,
}

// ============================================================================
// APP INITIALIZATION & HELPERS
// ============================================================================

impl App {
    pub fn new(cc: &eframe::CreationContext<'_>, settings: Settings, data_dir: PathBuf) -> Self {
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        theme::apply_visuals(&cc.egui_ctx);

        let api = ApiClient::new(settings.resolve_api_base());

        Self {
            api,
            runtime: tokio::runtime::Runtime::new().unwrap(),
            form: FormState::default(),
            focus_url_field: true,
            request_state: RequestState::Idle,
            request_seq: 0,
            submit_outcome: Arc::new(Mutex::new(None)),
            cancel_token: None,
            copied_at: None,
            qr_cache: None,
            logo_texture: None,
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
            saved_api_base: settings.api_base_url,
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            api_base_url: self.saved_api_base.clone(),
        };
        settings.save(&self.data_dir);
    }

    /// Shortened URL for the current success payload, if any.
    pub fn shortened_url(&self) -> Option<String> {
        self.request_state
            .data()
            .map(|data| compose_short_url(self.api.origin(), &data.alias))
    }

    /// Whether the "Copied" indicator is still within its 2-second window.
    /// Clears the timestamp once the window has passed.
    pub fn copied_indicator_active(&mut self) -> bool {
        match self.copied_at {
            Some(at) if at.elapsed() < Duration::from_millis(COPY_FEEDBACK_MS) => true,
            Some(_) => {
                self.copied_at = None;
                false
            }
            None => false,
        }
    }
}

/// `{origin}/{alias}`
pub fn compose_short_url(origin: &str, alias: &str) -> String {
    format!("{}/{}", origin.trim_end_matches('/'), alias)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_url_is_origin_slash_alias() {
        assert_eq!(
            compose_short_url("https://sho.rt", "ab12cd"),
            "https://sho.rt/ab12cd"
        );
    }

    #[test]
    fn trailing_slash_on_origin_does_not_double() {
        assert_eq!(
            compose_short_url("https://sho.rt/", "ab12cd"),
            "https://sho.rt/ab12cd"
        );
    }
}
