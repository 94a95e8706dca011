//! Calculator widgets

use crate::theme::{CalcColors, CalcTheme};
use egui::{Response, Ui, Widget};

pub const BUTTON_TOOLTIP: &str = "Click or use keyboard";

/// A fixed-size grid button. Shaded while hovered and pressed.
pub struct KeyButton<'a> {
    label: &'a str,
    size: egui::Vec2,
    font: egui::FontId,
}

impl<'a> KeyButton<'a> {
    pub fn new(label: &'a str, theme: &CalcTheme) -> Self {
        Self {
            label,
            size: egui::Vec2::splat(theme.button_size),
            font: theme.button_font(),
        }
    }
}

impl<'a> Widget for KeyButton<'a> {
    fn ui(self, ui: &mut Ui) -> Response {
        let (rect, response) = ui.allocate_exact_size(self.size, egui::Sense::click());

        if ui.is_rect_visible(rect) {
            let fill = if response.is_pointer_button_down_on() {
                CalcColors::BUTTON_PRESSED
            } else if response.hovered() {
                CalcColors::BUTTON_HOVER
            } else {
                CalcColors::BUTTON
            };
            let painter = ui.painter();
            painter.rect_filled(rect, 3.0, fill);
            painter.rect_stroke(rect, 3.0, egui::Stroke::new(1.0, CalcColors::OUTLINE));
            painter.text(
                rect.center(),
                egui::Align2::CENTER_CENTER,
                self.label,
                self.font,
                CalcColors::TEXT,
            );
        }

        response
    }
}

/// Read-only display: white field, text right-aligned and vertically centered.
pub fn display_field(ui: &mut Ui, text: &str, theme: &CalcTheme) -> Response {
    egui::Frame::none()
        .fill(CalcColors::DISPLAY)
        .stroke(egui::Stroke::new(1.0, CalcColors::OUTLINE))
        .rounding(3.0)
        .inner_margin(egui::Margin::symmetric(8.0, 4.0))
        .show(ui, |ui| {
            let height = theme.display_height - 8.0;
            ui.set_min_height(height);
            ui.set_max_height(height);
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                ui.label(
                    egui::RichText::new(text)
                        .font(theme.display_font())
                        .color(CalcColors::TEXT),
                );
            });
        })
        .response
}
