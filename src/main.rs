#![windows_subsystem = "windows"]
//! Shortly - Main entry point

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

mod api;
mod app;
mod constants;
mod settings;
mod theme;
mod types;
mod ui;
mod utils;

use app::App;
use constants::*;
use eframe::egui;
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;
use ui::components;

/// Initialize file logging. Returns a guard that must be held for the app lifetime.
fn init_logging(data_dir: &std::path::Path) -> tracing_appender::non_blocking::WorkerGuard {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let logs_dir = data_dir.join("logs");
    std::fs::create_dir_all(&logs_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&logs_dir, "shortly.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,shortly=debug"));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true)
                .with_thread_ids(false)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    guard
}

fn main() -> eframe::Result<()> {
    let data_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("Shortly");

    std::fs::create_dir_all(&data_dir).ok();

    // Initialize logging - guard must live for entire app lifetime
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "Shortly starting");

    // Load saved window position/size
    let settings = settings::Settings::load(&data_dir);
    let win_pos = match (settings.window_x, settings.window_y) {
        (Some(x), Some(y)) => Some(egui::pos2(x, y)),
        _ => None,
    };
    let win_size = match (settings.window_w, settings.window_h) {
        (Some(w), Some(h)) => Some(egui::vec2(w, h)),
        _ => None,
    };

    let mut viewport = egui::ViewportBuilder::default()
        .with_inner_size(win_size.unwrap_or(egui::vec2(560.0, 780.0)))
        .with_min_inner_size([520.0, 640.0])
        .with_title("Shortly");

    // Window/taskbar icon rasterized from the inline SVG
    {
        let (rgba, w, h) = utils::rasterize_icon_square(64);
        let icon = egui::IconData {
            rgba,
            width: w,
            height: h,
        };
        viewport = viewport.with_icon(std::sync::Arc::new(icon));
    }

    let needs_center = win_pos.is_none();

    if let Some(pos) = win_pos {
        viewport = viewport.with_position(pos);
    }

    let options = eframe::NativeOptions {
        viewport,
        ..Default::default()
    };

    eframe::run_native(
        "Shortly",
        options,
        Box::new(move |cc| {
            let mut app = App::new(cc, settings, data_dir);
            app.needs_center = needs_center;
            Ok(Box::new(app))
        }),
    )
}

// ============================================================================
// MAIN UPDATE LOOP & UI RENDERING
// ============================================================================

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Track window position/size for saving on exit
        ctx.input(|i| {
            if let Some(rect) = i.viewport().outer_rect {
                self.window_pos = Some(rect.min);
            }
            if let Some(rect) = i.viewport().inner_rect {
                self.window_size = Some(rect.size());
            }
        });

        // Center window on first launch
        if self.needs_center {
            self.needs_center = false;
            if let Some(cmd) = egui::ViewportCommand::center_on_screen(ctx) {
                ctx.send_viewport_cmd(cmd);
            }
        }

        // Fold any finished submission into the request state
        self.poll_submit_outcome();

        egui::CentralPanel::default()
            .frame(
                egui::Frame::new()
                    .fill(theme::BG_BASE)
                    .inner_margin(egui::Margin::same(16)),
            )
            .show(ctx, |ui| {
                egui::ScrollArea::vertical()
                    .auto_shrink([false; 2])
                    .show(ui, |ui| {
                        ui.vertical_centered(|ui| {
                            ui.set_max_width(theme::CONTENT_MAX_WIDTH);
                            ui.with_layout(
                                egui::Layout::top_down(egui::Align::Min),
                                |ui| {
                                    self.render_hero(ui);
                                    self.render_info_banner(ui);
                                    ui.add_space(theme::SPACING_LG);
                                    self.render_form(ui, ctx);
                                    ui.add_space(theme::SPACING_LG);
                                    self.render_result(ui, ctx);
                                },
                            );
                        });
                    });
            });
    }

    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        info!("Application shutting down");
        self.save_settings();
    }
}

// ============================================================================
// HOME VIEW SECTIONS
// ============================================================================

impl App {
    /// Hero graphic and wordmark above the form
    fn render_hero(&mut self, ui: &mut egui::Ui) {
        ui.with_layout(egui::Layout::top_down(egui::Align::Center), |ui| {
            ui.add_space(theme::SPACING_XL);

            let texture = self.logo_texture.get_or_insert_with(|| {
                let (pixels, w, h) = utils::rasterize_logo(240);
                ui.ctx().load_texture(
                    "logo",
                    egui::ColorImage::from_rgba_unmultiplied([w as usize, h as usize], &pixels),
                    egui::TextureOptions::LINEAR,
                )
            });

            let aspect = texture.size()[1] as f32 / texture.size()[0] as f32;
            let logo_w = 120.0;
            let logo_size = egui::vec2(logo_w, logo_w * aspect);
            ui.image(egui::load::SizedTexture::new(texture.id(), logo_size));

            ui.add_space(theme::SPACING_SM);
            ui.add(
                egui::Label::new(
                    egui::RichText::new("SHORTLY")
                        .size(theme::FONT_LABEL)
                        .color(theme::TEXT_DIM),
                )
                .selectable(false),
            );
            ui.add_space(theme::SPACING_XL);
        });
    }

    fn render_info_banner(&mut self, ui: &mut egui::Ui) {
        components::alert(ui, theme::STATUS_INFO, egui_phosphor::regular::INFO, |ui| {
            ui.add(
                egui::Label::new(
                    egui::RichText::new("Based on")
                        .size(theme::FONT_BODY)
                        .color(theme::TEXT_SECONDARY),
                )
                .selectable(false),
            );
            components::external_link(ui, "OnURL", "https://onurl.vercel.app/", true);
        });
    }

    /// URL + custom alias inputs and the submit control
    fn render_form(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        let request_focus = std::mem::take(&mut self.focus_url_field);

        let url_error = if self.form.url_touched {
            self.form.url_error()
        } else {
            None
        };
        let url_out = components::text_field(
            ui,
            "url_field",
            &mut self.form.url,
            "URL",
            true,
            Some(egui_phosphor::regular::LINK),
            url_error,
            request_focus,
        );
        if url_out.lost_focus {
            self.form.url_touched = true;
        }

        ui.add_space(theme::SPACING_MD);

        let alias_error = if self.form.alias_touched {
            self.form.alias_error()
        } else {
            None
        };
        let alias_out = components::text_field(
            ui,
            "alias_field",
            &mut self.form.custom_alias,
            "Custom Alias (Optional)",
            false,
            None,
            alias_error,
            false,
        );
        if alias_out.lost_focus {
            self.form.alias_touched = true;
        }

        ui.add_space(theme::SPACING_MD);

        let requesting = self.request_state.is_requesting();
        let enabled = self.form.is_valid() && !requesting;
        let submit_requested = url_out.submitted || alias_out.submitted;

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let clicked = components::painted_button(
                ui,
                egui::vec2(110.0, theme::BUTTON_HEIGHT),
                theme::BTN_ACCENT,
                "Submit",
                theme::TEXT_PRIMARY,
                enabled,
            );
            if requesting {
                ui.add(egui::Spinner::new().size(18.0).color(theme::ACCENT_LIGHT));
            }
            if clicked || (submit_requested && enabled) {
                self.submit(ctx);
            }
        });
    }

    /// Error alert or the success card (links, copy, QR code)
    fn render_result(&mut self, ui: &mut egui::Ui, ctx: &egui::Context) {
        if let Some(message) = self.request_state.error().map(str::to_string) {
            components::alert(
                ui,
                theme::STATUS_ERROR,
                egui_phosphor::regular::WARNING_CIRCLE,
                |ui| {
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new(message)
                                .size(theme::FONT_BODY)
                                .color(theme::TEXT_SECONDARY),
                        )
                        .selectable(false),
                    );
                },
            );
            return;
        }

        let Some(data) = self.request_state.data().cloned() else {
            return;
        };
        let Some(shortened) = self.shortened_url() else {
            return;
        };

        theme::result_card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());

            ui.add(
                egui::Label::new(
                    egui::RichText::new("ORIGINAL")
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_DIM),
                )
                .selectable(false),
            );
            components::external_link(ui, &utils::truncate_url(&data.url, 56), &data.url, false);

            ui.add_space(theme::SPACING_MD);

            ui.add(
                egui::Label::new(
                    egui::RichText::new("SHORTENED")
                        .size(theme::FONT_SMALL)
                        .color(theme::TEXT_DIM),
                )
                .selectable(false),
            );
            ui.horizontal(|ui| {
                components::external_link(ui, &shortened, &shortened, false);

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let copied = self.copied_indicator_active();
                    let label = if copied {
                        format!("{} Copied", egui_phosphor::regular::CHECK)
                    } else {
                        format!("{} Copy", egui_phosphor::regular::COPY)
                    };
                    let fill = if copied {
                        theme::STATUS_SUCCESS
                    } else {
                        theme::BTN_ACCENT
                    };
                    if components::painted_button(
                        ui,
                        egui::vec2(92.0, 26.0),
                        fill,
                        &label,
                        theme::TEXT_PRIMARY,
                        true,
                    ) {
                        ctx.copy_text(shortened.clone());
                        self.copied_at = Some(Instant::now());
                        ctx.request_repaint_after(std::time::Duration::from_millis(
                            COPY_FEEDBACK_MS,
                        ));
                    }
                });
            });
        });

        ui.add_space(theme::SPACING_LG);
        self.render_qr_panel(ui, ctx, &shortened);
    }

    /// Blue QR panel: title, white-bordered code, full-width save button
    fn render_qr_panel(&mut self, ui: &mut egui::Ui, ctx: &egui::Context, shortened: &str) {
        let Some(texture) = self.qr_texture(ctx, shortened) else {
            return;
        };

        let panel_width = QR_CODE_SIZE as f32;
        ui.allocate_ui(egui::vec2(panel_width, 0.0), |ui| {
            ui.set_width(panel_width);
            theme::qr_panel_frame().show(ui, |ui| {
                ui.spacing_mut().item_spacing.y = 0.0;
                ui.with_layout(egui::Layout::top_down(egui::Align::Center), |ui| {
                    ui.add_space(5.0);
                    ui.add(
                        egui::Label::new(
                            egui::RichText::new("QR Code")
                                .size(theme::FONT_BODY)
                                .strong()
                                .color(theme::TEXT_PRIMARY),
                        )
                        .selectable(false),
                    );
                    ui.add_space(5.0);

                    // White border around the code (the quiet zone is white too)
                    egui::Frame::new()
                        .fill(theme::QR_BORDER)
                        .inner_margin(egui::Margin::same(3))
                        .show(ui, |ui| {
                            let img_size = panel_width - 6.0;
                            ui.image(egui::load::SizedTexture::new(
                                texture.id(),
                                egui::vec2(img_size, img_size),
                            ));
                        });

                    let save_label =
                        format!("{} Save", egui_phosphor::regular::CLOUD_ARROW_DOWN);
                    if components::painted_button(
                        ui,
                        egui::vec2(panel_width, 34.0),
                        theme::BG_BASE,
                        &save_label,
                        theme::TEXT_PRIMARY,
                        true,
                    ) {
                        self.save_qr_code(shortened);
                    }
                });
            });
        });
    }
}
