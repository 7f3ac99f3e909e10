use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme;
use crate::egui_app::types::Route;

/// Create/edit form
///
/// Shared by `Route::Create` and `Route::Edit`; the state machine decides
/// which API call a save maps to. Validation and ownership failures render
/// inline without navigating away.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    let editing = matches!(state.route, Route::Edit(_));

    ui.add_space(12.0);
    ui.heading(
        egui::RichText::new(if editing { "Edit Post" } else { "New Post" })
            .color(theme::TEXT_LIGHT),
    );
    ui.add_space(8.0);

    if editing && state.detail_loading {
        ui.spinner();
        return;
    }

    if let Some(error) = state.editor_error.clone() {
        ui.label(egui::RichText::new(error).color(theme::ERROR));
        ui.add_space(6.0);
    }

    ui.label(egui::RichText::new("Title").color(theme::TEXT_SECONDARY));
    ui.add(
        egui::TextEdit::singleline(&mut state.editor_title)
            .desired_width(f32::INFINITY)
            .hint_text("Post title"),
    );
    ui.add_space(8.0);

    ui.label(egui::RichText::new("Content").color(theme::TEXT_SECONDARY));
    let content_height = (ui.available_height() - 60.0).max(120.0);
    egui::ScrollArea::vertical().max_height(content_height).show(ui, |ui| {
        ui.add(
            egui::TextEdit::multiline(&mut state.editor_content)
                .desired_width(f32::INFINITY)
                .desired_rows(16)
                .hint_text("Write your post..."),
        );
    });
    ui.add_space(10.0);

    ui.horizontal(|ui| {
        let save_label = if editing { "Save Changes" } else { "Publish" };
        if ui
            .add_enabled(
                !state.editor_saving,
                egui::Button::new(save_label).fill(theme::ACCENT),
            )
            .clicked()
        {
            state.save_editor();
        }

        if ui.button("Cancel").clicked() {
            match state.route {
                Route::Edit(id) => state.navigate(Route::Detail(id)),
                _ => state.navigate(Route::Home),
            }
        }

        if state.editor_saving {
            ui.spinner();
        }
    });
}
