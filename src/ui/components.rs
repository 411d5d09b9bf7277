//! Reusable UI components
//!
//! Standalone widgets shared by the home view: labeled text fields with
//! helper text, painted buttons, outlined alerts and external links.

use crate::theme;
use eframe::egui;
use tracing::warn;

/// What happened to a text field this frame.
pub struct TextFieldOutput {
    pub lost_focus: bool,
    /// Enter was pressed while the field had focus
    pub submitted: bool,
}

/// Labeled single-line text field with an optional leading icon and an
/// optional helper error line underneath.
#[allow(clippy::too_many_arguments)]
pub fn text_field(
    ui: &mut egui::Ui,
    id_salt: &str,
    value: &mut String,
    label: &str,
    required: bool,
    leading_icon: Option<&str>,
    error: Option<&str>,
    request_focus: bool,
) -> TextFieldOutput {
    let field_id = ui.make_persistent_id(id_salt);
    let focused = ui.memory(|m| m.has_focus(field_id));

    let label_text = if required {
        format!("{label} *")
    } else {
        label.to_string()
    };
    ui.add(
        egui::Label::new(
            egui::RichText::new(label_text)
                .size(theme::FONT_LABEL)
                .color(theme::TEXT_MUTED),
        )
        .selectable(false),
    );
    ui.add_space(2.0);

    let mut output = TextFieldOutput {
        lost_focus: false,
        submitted: false,
    };

    theme::input_frame(focused).show(ui, |ui| {
        ui.spacing_mut().item_spacing.x = 6.0;
        ui.horizontal(|ui| {
            if let Some(icon) = leading_icon {
                ui.add(
                    egui::Label::new(
                        egui::RichText::new(icon)
                            .size(15.0)
                            .color(theme::TEXT_DIM),
                    )
                    .selectable(false),
                );
            }
            let response = ui.add(
                egui::TextEdit::singleline(value)
                    .id(field_id)
                    .frame(false)
                    .desired_width(ui.available_width())
                    .font(egui::FontId::proportional(theme::FONT_BODY)),
            );
            if request_focus {
                response.request_focus();
            }
            output.lost_focus = response.lost_focus();
            output.submitted =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        });
    });

    if let Some(msg) = error {
        ui.add_space(2.0);
        ui.add(
            egui::Label::new(
                egui::RichText::new(msg)
                    .size(theme::FONT_SMALL)
                    .color(theme::STATUS_ERROR),
            )
            .selectable(false),
        );
    }

    output
}

/// Custom-painted button with hover/press effects. Returns true if clicked
/// while enabled.
pub fn painted_button(
    ui: &mut egui::Ui,
    size: egui::Vec2,
    base_fill: egui::Color32,
    text: &str,
    text_color: egui::Color32,
    enabled: bool,
) -> bool {
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());
    let (fill, text_color) = if enabled {
        (base_fill, text_color)
    } else {
        (theme::BTN_DISABLED, theme::BTN_DISABLED_TEXT)
    };
    if response.hovered() {
        ui.ctx().set_cursor_icon(if enabled {
            egui::CursorIcon::PointingHand
        } else {
            egui::CursorIcon::NotAllowed
        });
    }
    if ui.is_rect_visible(rect) {
        let (fill, draw_rect) = if enabled {
            theme::button_visual(&response, fill, rect)
        } else {
            (fill, rect)
        };
        ui.painter()
            .rect_filled(draw_rect, theme::RADIUS_DEFAULT, fill);
        ui.painter().text(
            draw_rect.center(),
            egui::Align2::CENTER_CENTER,
            text,
            egui::FontId::proportional(theme::FONT_LABEL),
            text_color,
        );
    }
    enabled && response.clicked()
}

/// Outlined alert with a severity-colored icon, MUI-style. The closure
/// renders the alert body so callers can mix labels and links.
pub fn alert(
    ui: &mut egui::Ui,
    severity: egui::Color32,
    icon: &str,
    add_contents: impl FnOnce(&mut egui::Ui),
) {
    theme::alert_frame(severity).show(ui, |ui| {
        ui.set_width(ui.available_width());
        ui.horizontal_wrapped(|ui| {
            ui.add(
                egui::Label::new(egui::RichText::new(icon).size(16.0).color(severity))
                    .selectable(false),
            );
            add_contents(ui);
        });
    });
}

/// Link that opens in the system browser. Optionally suffixed with an
/// open-in-new icon.
pub fn external_link(ui: &mut egui::Ui, text: &str, href: &str, has_icon: bool) {
    let label = if has_icon {
        format!("{text} {}", egui_phosphor::regular::ARROW_SQUARE_OUT)
    } else {
        text.to_string()
    };
    let response = ui.add(
        egui::Label::new(
            egui::RichText::new(label)
                .size(theme::FONT_BODY)
                .color(theme::ACCENT_LIGHT),
        )
        .sense(egui::Sense::click()),
    );
    if response.hovered() {
        ui.ctx().set_cursor_icon(egui::CursorIcon::PointingHand);
        let rect = response.rect;
        ui.painter().line_segment(
            [rect.left_bottom(), rect.right_bottom()],
            egui::Stroke::new(1.0, theme::ACCENT_LIGHT),
        );
    }
    let response = response.on_hover_text(href);
    if response.clicked() {
        if let Err(e) = open::that(href) {
            warn!(error = %e, url = href, "Failed to open link in browser");
        }
    }
}
