//! Centralized theme constants for Shortly
//! All colors, sizes, and styling should reference these constants

use egui::Color32;

// =============================================================================
// COLORS - Backgrounds
// =============================================================================
pub const BG_BASE: Color32 = Color32::from_rgb(0x0f, 0x17, 0x2a); // slate-900
pub const BG_ELEVATED: Color32 = Color32::from_rgb(0x1e, 0x29, 0x3b); // slate-800
pub const BG_INPUT: Color32 = Color32::from_rgb(0x1e, 0x29, 0x3b); // input field background
pub const BG_INPUT_FOCUS: Color32 = Color32::from_rgb(0x33, 0x41, 0x55); // slate-700
pub const BG_CARD: Color32 = Color32::from_rgb(0x16, 0x20, 0x33);

// =============================================================================
// COLORS - Accent (Blue)
// =============================================================================
pub const ACCENT: Color32 = Color32::from_rgb(0x00, 0x7f, 0xff); // brand blue
pub const ACCENT_LIGHT: Color32 = Color32::from_rgb(0x38, 0xbd, 0xf8); // sky-400

// =============================================================================
// COLORS - Text
// =============================================================================
pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(0xe2, 0xe8, 0xf0); // slate-200
pub const TEXT_MUTED: Color32 = Color32::from_rgb(0x94, 0xa3, 0xb8); // slate-400
pub const TEXT_DIM: Color32 = Color32::from_rgb(0x64, 0x74, 0x8b); // slate-500

// =============================================================================
// COLORS - Borders
// =============================================================================
pub const BORDER_SUBTLE: Color32 = Color32::from_rgb(0x1e, 0x29, 0x3b); // slate-800
pub const BORDER_DEFAULT: Color32 = Color32::from_rgb(0x33, 0x41, 0x55); // slate-700

// =============================================================================
// COLORS - Status
// =============================================================================
pub const STATUS_INFO: Color32 = Color32::from_rgb(0x38, 0xbd, 0xf8); // sky-400
pub const STATUS_ERROR: Color32 = Color32::from_rgb(0xf8, 0x71, 0x71); // red-400
pub const STATUS_SUCCESS: Color32 = Color32::from_rgb(0x34, 0xd3, 0x99); // emerald-400

// =============================================================================
// COLORS - Buttons
// =============================================================================
pub const BTN_ACCENT: Color32 = ACCENT;
pub const BTN_DISABLED: Color32 = Color32::from_rgb(0x1e, 0x29, 0x3b);
pub const BTN_DISABLED_TEXT: Color32 = TEXT_DIM;

// =============================================================================
// COLORS - QR panel
// =============================================================================
pub const QR_PANEL_BG: Color32 = ACCENT; // blue card behind the QR code
pub const QR_BORDER: Color32 = Color32::WHITE;

// =============================================================================
// TYPOGRAPHY - Font Sizes
// =============================================================================
pub const FONT_BODY: f32 = 14.0;
pub const FONT_LABEL: f32 = 13.0;
pub const FONT_SMALL: f32 = 11.0;

// =============================================================================
// DIMENSIONS
// =============================================================================
pub const CONTENT_MAX_WIDTH: f32 = 480.0;
pub const BUTTON_HEIGHT: f32 = 32.0;

// =============================================================================
// CORNER RADIUS
// =============================================================================
pub const RADIUS_DEFAULT: f32 = 6.0;
pub const RADIUS_CARD: f32 = 10.0;

// =============================================================================
// STROKE WIDTHS
// =============================================================================
pub const STROKE_DEFAULT: f32 = 1.0;

// =============================================================================
// SPACING
// =============================================================================
pub const SPACING_SM: f32 = 4.0;
pub const SPACING_MD: f32 = 8.0;
pub const SPACING_LG: f32 = 12.0;
pub const SPACING_XL: f32 = 16.0;

// =============================================================================
// HELPER - Apply global visuals
// =============================================================================
pub fn apply_visuals(ctx: &egui::Context) {
    ctx.set_visuals(egui::Visuals {
        dark_mode: true,
        panel_fill: BG_BASE,
        window_fill: BG_ELEVATED,
        extreme_bg_color: BG_BASE,
        faint_bg_color: BG_ELEVATED,
        hyperlink_color: ACCENT_LIGHT,
        selection: egui::style::Selection {
            bg_fill: Color32::from_rgb(0x33, 0x41, 0x55),
            stroke: egui::Stroke::NONE,
        },
        interact_cursor: Some(egui::CursorIcon::PointingHand),
        window_stroke: egui::Stroke::new(STROKE_DEFAULT, BORDER_DEFAULT),
        window_corner_radius: egui::CornerRadius::same(8),
        menu_corner_radius: egui::CornerRadius::same(8),
        ..egui::Visuals::dark()
    });

    ctx.style_mut(|style| {
        style.interaction.selectable_labels = false;
        style.spacing.item_spacing = egui::vec2(8.0, 6.0);
        style.spacing.button_padding = egui::vec2(12.0, 6.0);
    });
}

// =============================================================================
// HELPER - Frames
// =============================================================================

/// Card behind the submission result (original + shortened URL rows)
pub fn result_card_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(BG_CARD)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, BORDER_SUBTLE))
        .corner_radius(RADIUS_CARD)
        .inner_margin(egui::Margin::same(SPACING_XL as i8))
}

/// Blue panel that hosts the QR code and its save button
pub fn qr_panel_frame() -> egui::Frame {
    egui::Frame::new()
        .fill(QR_PANEL_BG)
        .corner_radius(RADIUS_CARD)
        .inner_margin(egui::Margin::same(0))
}

/// Outlined alert frame, MUI-style; stroke carries the severity color
pub fn alert_frame(severity: Color32) -> egui::Frame {
    egui::Frame::new()
        .fill(Color32::TRANSPARENT)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, severity))
        .corner_radius(RADIUS_DEFAULT)
        .inner_margin(egui::Margin::symmetric(12, 10))
}

/// Bordered frame around a text input
pub fn input_frame(focused: bool) -> egui::Frame {
    let fill = if focused { BG_INPUT_FOCUS } else { BG_INPUT };
    let stroke = if focused { ACCENT } else { BORDER_DEFAULT };
    egui::Frame::new()
        .fill(fill)
        .stroke(egui::Stroke::new(STROKE_DEFAULT, stroke))
        .corner_radius(RADIUS_DEFAULT)
        .inner_margin(egui::Margin::symmetric(10, 8))
}

// =============================================================================
// HELPER - Buttons
// =============================================================================

/// Returns (fill, draw_rect) for a custom-painted button with hover/press
/// effects. Lightens on hover, slightly lightens + shrinks on press.
pub fn button_visual(
    response: &egui::Response,
    base_fill: Color32,
    rect: egui::Rect,
) -> (Color32, egui::Rect) {
    if response.is_pointer_button_down_on() {
        (lighten(base_fill, 0.06), rect.shrink(1.5))
    } else if response.hovered() {
        (lighten(base_fill, 0.12), rect)
    } else {
        (base_fill, rect)
    }
}

fn lighten(c: Color32, amount: f32) -> Color32 {
    let r = (c.r() as f32 + (255.0 - c.r() as f32) * amount) as u8;
    let g = (c.g() as f32 + (255.0 - c.g() as f32) * amount) as u8;
    let b = (c.b() as f32 + (255.0 - c.b() as f32) * amount) as u8;
    Color32::from_rgb(r, g, b)
}
