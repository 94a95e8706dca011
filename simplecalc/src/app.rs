//! SimpleCalc application

use calccore::keymap::{self, BUTTON_ROWS};
use calccore::theme::menu_bar;
use calccore::widgets::{display_field, KeyButton, BUTTON_TOOLTIP};
use calccore::{CalcTheme, CalculatorState, Command, Preferences};
use egui::Context;

pub struct CalculatorApp {
    state: CalculatorState,
    display: String,
    theme: CalcTheme,
    prefs: Preferences,
    show_about: bool,
}

impl CalculatorApp {
    pub fn new(prefs: Preferences, theme: CalcTheme) -> Self {
        Self {
            state: CalculatorState::new(),
            display: String::new(),
            theme,
            prefs,
            show_about: false,
        }
    }

    fn dispatch(&mut self, command: Command) {
        if let Some(text) = self.state.apply(command) {
            self.display = text;
        }
    }

    fn handle_keys(&mut self, ctx: &Context) {
        let commands = ctx.input(|i| keymap::commands_from_events(&i.events));
        for command in commands {
            self.dispatch(command);
        }
    }

    fn render_buttons(&mut self, ui: &mut egui::Ui) {
        for row in BUTTON_ROWS {
            ui.horizontal(|ui| {
                for label in row.iter() {
                    let mut response = ui.add(KeyButton::new(label, &self.theme));
                    if self.prefs.show_tooltips {
                        response = response.on_hover_text(BUTTON_TOOLTIP);
                    }
                    if response.clicked() {
                        if let Some(command) = keymap::command_for_label(label) {
                            self.dispatch(command);
                        }
                    }
                }
            });
        }
    }

    fn render_about(&mut self, ctx: &Context) {
        egui::Window::new("about calculator")
            .collapsible(false)
            .resizable(false)
            .default_width(220.0)
            .show(ctx, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("Simple Calculator");
                    ui.label(format!("version {}", env!("CARGO_PKG_VERSION")));
                });
                ui.separator();
                ui.label("keys: 0-9 . + - * / = Enter");
                ui.label("Backspace deletes, C or Esc clears");
                ui.vertical_centered(|ui| {
                    if ui.button("ok").clicked() {
                        self.show_about = false;
                    }
                });
            });
    }

    /// Remember the window size once the window is asked to close.
    fn save_on_close(&mut self, ctx: &Context) {
        let (closing, inner) = ctx.input(|i| (i.viewport().close_requested(), i.viewport().inner_rect));
        if !closing {
            return;
        }
        if let Some(rect) = inner {
            self.prefs.window_width = rect.width();
            self.prefs.window_height = rect.height();
        }
        if let Err(e) = self.prefs.save() {
            tracing::warn!("could not save preferences: {e}");
        }
    }

    /// One frame of UI, independent of the native window.
    fn ui(&mut self, ctx: &Context) {
        self.handle_keys(ctx);

        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            menu_bar(ui, |ui| {
                ui.menu_button("edit", |ui| {
                    if ui.button("copy result").clicked() {
                        let text = self.display.clone();
                        ui.ctx().output_mut(|o| o.copied_text = text);
                        ui.close_menu();
                    }
                });
                ui.menu_button("help", |ui| {
                    if ui.button("about").clicked() {
                        self.show_about = true;
                        ui.close_menu();
                    }
                });
            });
        });

        egui::CentralPanel::default()
            .frame(self.theme.panel_frame())
            .show(ctx, |ui| {
                display_field(ui, &self.display, &self.theme);
                self.render_buttons(ui);
            });

        if self.show_about {
            self.render_about(ctx);
        }
    }
}

impl eframe::App for CalculatorApp {
    fn update(&mut self, ctx: &Context, _frame: &mut eframe::Frame) {
        self.ui(ctx);
        self.save_on_close(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_frame(app: &mut CalculatorApp, ctx: &Context, events: Vec<egui::Event>) {
        let input = egui::RawInput {
            events,
            ..Default::default()
        };
        let _ = ctx.run(input, |ctx| app.ui(ctx));
    }

    fn text(s: &str) -> egui::Event {
        egui::Event::Text(s.to_string())
    }

    fn key(key: egui::Key) -> egui::Event {
        egui::Event::Key {
            key,
            physical_key: None,
            pressed: true,
            repeat: false,
            modifiers: egui::Modifiers::NONE,
        }
    }

    fn new_app() -> CalculatorApp {
        CalculatorApp::new(Preferences::default(), CalcTheme::default())
    }

    #[test]
    fn test_typing_computes() {
        let ctx = Context::default();
        let mut app = new_app();
        run_frame(&mut app, &ctx, vec![text("5"), text("+"), text("3")]);
        assert_eq!(app.display, "3");
        run_frame(&mut app, &ctx, vec![key(egui::Key::Enter)]);
        assert_eq!(app.display, "8.0");
    }

    #[test]
    fn test_divide_by_zero_message() {
        let ctx = Context::default();
        let mut app = new_app();
        run_frame(&mut app, &ctx, vec![text("4"), text("/"), text("0"), text("=")]);
        assert_eq!(app.display, "Cannot divide by zero");
    }

    #[test]
    fn test_backspace_and_clear_keys() {
        let ctx = Context::default();
        let mut app = new_app();
        run_frame(&mut app, &ctx, vec![text("7"), key(egui::Key::Backspace)]);
        assert_eq!(app.display, "");

        run_frame(&mut app, &ctx, vec![text("9"), text("*")]);
        assert_eq!(app.display, "9");
        run_frame(&mut app, &ctx, vec![key(egui::Key::Escape)]);
        assert_eq!(app.display, "");
        assert_eq!(app.state, CalculatorState::new());
    }

    #[test]
    fn test_dispatch_matches_button_labels() {
        let mut app = new_app();
        for label in ["1", "2", "-", "5", "="] {
            let command = keymap::command_for_label(label).expect("button label maps to a command");
            app.dispatch(command);
        }
        assert_eq!(app.display, "7.0");
    }

    #[test]
    fn test_error_survives_backspace_on_empty_input() {
        let ctx = Context::default();
        let mut app = new_app();
        run_frame(&mut app, &ctx, vec![text("+")]);
        assert_eq!(app.display, "Invalid Input");
        run_frame(&mut app, &ctx, vec![key(egui::Key::Backspace)]);
        assert_eq!(app.display, "Invalid Input");
        run_frame(&mut app, &ctx, vec![text("4")]);
        assert_eq!(app.display, "4");
    }
}
