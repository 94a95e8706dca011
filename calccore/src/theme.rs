//! Calculator theme
//!
//! Light grey window, white display, square-ish buttons with 10px gaps.

use crate::storage::Preferences;
use egui::{Color32, FontFamily, FontId, Rounding, Stroke, Style, TextStyle, Visuals};

pub struct CalcColors;

impl CalcColors {
    pub const BACKGROUND: Color32 = Color32::from_rgb(0xf0, 0xf0, 0xf0);
    pub const DISPLAY: Color32 = Color32::from_rgb(255, 255, 255);
    pub const BUTTON: Color32 = Color32::from_rgb(0xfa, 0xfa, 0xfa);
    pub const BUTTON_HOVER: Color32 = Color32::from_rgb(0xe4, 0xe4, 0xe4);
    pub const BUTTON_PRESSED: Color32 = Color32::from_rgb(0xd0, 0xd0, 0xd0);
    pub const OUTLINE: Color32 = Color32::from_rgb(0xa0, 0xa0, 0xa0);
    pub const TEXT: Color32 = Color32::from_rgb(0x20, 0x20, 0x20);
}

/// Theme configuration for the calculator window
#[derive(Debug, Clone, PartialEq)]
pub struct CalcTheme {
    pub font_size_body: f32,
    pub font_size_display: f32,
    pub font_size_button: f32,
    pub button_size: f32,
    /// Space between buttons, and between display and grid
    pub gap: f32,
    /// Margin around the whole window content
    pub padding: f32,
    pub display_height: f32,
}

impl Default for CalcTheme {
    fn default() -> Self {
        Self::from_preferences(&Preferences::default())
    }
}

impl CalcTheme {
    pub fn from_preferences(prefs: &Preferences) -> Self {
        Self {
            font_size_body: 14.0,
            font_size_display: prefs.display_font_size,
            font_size_button: prefs.button_font_size,
            button_size: prefs.button_size,
            gap: 10.0,
            padding: 15.0,
            display_height: 50.0,
        }
    }

    pub fn display_font(&self) -> FontId {
        FontId::new(self.font_size_display, FontFamily::Proportional)
    }

    pub fn button_font(&self) -> FontId {
        FontId::new(self.font_size_button, FontFamily::Proportional)
    }

    /// Apply the theme to an egui context
    pub fn apply(&self, ctx: &egui::Context) {
        let mut style = Style::default();

        style.text_styles = [
            (TextStyle::Small, FontId::new(self.font_size_body - 3.0, FontFamily::Proportional)),
            (TextStyle::Body, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Button, FontId::new(self.font_size_body, FontFamily::Proportional)),
            (TextStyle::Heading, FontId::new(self.font_size_body + 6.0, FontFamily::Proportional)),
            (TextStyle::Monospace, FontId::new(self.font_size_body, FontFamily::Monospace)),
        ]
        .into();

        let mut visuals = Visuals::light();
        visuals.window_fill = CalcColors::BACKGROUND;
        visuals.panel_fill = CalcColors::BACKGROUND;
        visuals.extreme_bg_color = CalcColors::DISPLAY;
        visuals.window_rounding = Rounding::same(4.0);
        visuals.window_stroke = Stroke::new(1.0, CalcColors::OUTLINE);

        let flat = |ws: &mut egui::style::WidgetVisuals, fill: Color32| {
            ws.bg_fill = fill;
            ws.weak_bg_fill = fill;
            ws.bg_stroke = Stroke::new(1.0, CalcColors::OUTLINE);
            ws.fg_stroke = Stroke::new(1.0, CalcColors::TEXT);
            ws.rounding = Rounding::same(3.0);
        };
        flat(&mut visuals.widgets.inactive, CalcColors::BUTTON);
        flat(&mut visuals.widgets.hovered, CalcColors::BUTTON_HOVER);
        flat(&mut visuals.widgets.active, CalcColors::BUTTON_PRESSED);
        flat(&mut visuals.widgets.open, CalcColors::BUTTON_HOVER);

        style.visuals = visuals;
        style.spacing.item_spacing = egui::vec2(self.gap, self.gap);
        style.spacing.window_margin = egui::Margin::same(self.padding);

        ctx.set_style(style);
    }

    /// Frame around the whole calculator content
    pub fn panel_frame(&self) -> egui::Frame {
        egui::Frame::none()
            .fill(CalcColors::BACKGROUND)
            .inner_margin(egui::Margin::same(self.padding))
    }
}

/// Menu bar styling helper
pub fn menu_bar<R>(ui: &mut egui::Ui, add_contents: impl FnOnce(&mut egui::Ui) -> R) -> egui::InnerResponse<R> {
    egui::Frame::none()
        .fill(CalcColors::BACKGROUND)
        .inner_margin(egui::Margin::symmetric(4.0, 2.0))
        .show(ui, |ui| egui::menu::bar(ui, add_contents).inner)
}
