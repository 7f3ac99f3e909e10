use eframe::egui;
use uuid::Uuid;

use crate::egui_app::state::AppState;
use crate::egui_app::theme;
use crate::egui_app::types::Route;

/// One post, publicly readable
///
/// The edit and delete controls only appear when the session controller's
/// identity matches the recorded author; the server enforces the same
/// rule regardless.
pub fn render(ui: &mut egui::Ui, state: &mut AppState, id: Uuid) {
    ui.add_space(12.0);

    if ui.button("< Back").clicked() {
        state.navigate(Route::Home);
        return;
    }
    ui.add_space(8.0);

    if state.detail_loading {
        ui.spinner();
        return;
    }

    if let Some(error) = state.detail_error.clone() {
        ui.label(egui::RichText::new(error).color(theme::ERROR));
        if ui.button("Retry").clicked() {
            state.load_detail(id);
        }
        return;
    }

    let Some(blog) = state.detail.clone() else {
        return;
    };

    ui.heading(egui::RichText::new(&blog.title).size(26.0).color(theme::TEXT_LIGHT));
    ui.label(
        egui::RichText::new(format!(
            "by {} on {}",
            blog.author,
            blog.created_at.format("%b %e, %Y")
        ))
        .color(theme::TEXT_SECONDARY),
    );
    ui.add_space(12.0);

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.label(egui::RichText::new(&blog.content).color(theme::TEXT_LIGHT));
    });

    let is_author = state
        .session
        .current_user()
        .is_some_and(|user| user.email == blog.author);

    if is_author {
        ui.add_space(16.0);
        if let Some(error) = state.delete_error.clone() {
            ui.label(egui::RichText::new(error).color(theme::ERROR));
        }
        ui.horizontal(|ui| {
            if ui.button("Edit").clicked() {
                state.navigate(Route::Edit(blog.id));
            }
            if ui
                .add(egui::Button::new(egui::RichText::new("Delete").color(theme::TEXT_LIGHT)).fill(theme::DANGER))
                .clicked()
            {
                state.request_delete(blog.id);
            }
        });
    }
}
