use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme;

/// Login / registration screen
///
/// One form with a mode toggle; the register mode adds name and password
/// confirmation fields.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let available = ui.available_rect_before_wrap();

    ui.vertical_centered(|ui| {
        let top_space = (available.height() - 320.0).max(0.0) / 2.0;
        ui.add_space(top_space);

        ui.label(
            egui::RichText::new(if state.is_register_mode { "Create Account" } else { "Welcome Back" })
                .size(26.0)
                .strong()
                .color(theme::TEXT_LIGHT),
        );
        ui.add_space(16.0);

        if let Some(notice) = state.auth_notice.clone() {
            ui.label(egui::RichText::new(notice).color(theme::ACCENT));
            ui.add_space(8.0);
        }
        if let Some(error) = state.auth_error.clone() {
            ui.label(egui::RichText::new(error).color(theme::ERROR));
            ui.add_space(8.0);
        }

        let field_width = 280.0;

        if state.is_register_mode {
            labeled_field(ui, field_width, "Name", &mut state.name_input, false);
        }
        labeled_field(ui, field_width, "Email", &mut state.email_input, false);
        labeled_field(ui, field_width, "Password", &mut state.password_input, true);
        if state.is_register_mode {
            labeled_field(ui, field_width, "Confirm", &mut state.confirm_password_input, true);
        }

        ui.add_space(16.0);

        ui.horizontal(|ui| {
            let buttons_width = 260.0;
            ui.add_space((available.width() - buttons_width).max(0.0) / 2.0);

            let submit_label = if state.is_register_mode { "Register" } else { "Sign In" };
            if ui
                .add_sized([120.0, 32.0], egui::Button::new(submit_label).fill(theme::ACCENT))
                .clicked()
            {
                if state.is_register_mode {
                    state.handle_register();
                } else {
                    state.handle_login();
                }
            }

            ui.add_space(10.0);
            let toggle_label = if state.is_register_mode { "Back to Login" } else { "Register" };
            if ui.add_sized([120.0, 32.0], egui::Button::new(toggle_label)).clicked() {
                state.toggle_auth_mode();
            }
        });

        if state.auth_loading {
            ui.add_space(12.0);
            ui.spinner();
        }
    });
}

fn labeled_field(ui: &mut egui::Ui, width: f32, label: &str, value: &mut String, password: bool) {
    ui.horizontal(|ui| {
        let total = width + 80.0;
        ui.add_space((ui.available_width() - total).max(0.0) / 2.0);
        ui.add_sized(
            [72.0, 24.0],
            egui::Label::new(egui::RichText::new(label).color(theme::TEXT_SECONDARY)),
        );
        ui.add_sized(
            [width, 26.0],
            egui::TextEdit::singleline(value).password(password),
        );
    });
    ui.add_space(6.0);
}
