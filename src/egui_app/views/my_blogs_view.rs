use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme;
use crate::egui_app::types::Route;

/// The caller's own posts, with edit/delete shortcuts
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.add_space(12.0);
    ui.heading(egui::RichText::new("My Blogs").color(theme::TEXT_LIGHT));
    ui.add_space(8.0);

    if state.blogs_loading {
        ui.spinner();
        return;
    }

    if let Some(error) = state.blogs_error.clone() {
        ui.label(egui::RichText::new(error).color(theme::ERROR));
        if ui.button("Retry").clicked() {
            state.load_blogs();
        }
        return;
    }

    if let Some(error) = state.delete_error.clone() {
        ui.label(egui::RichText::new(error).color(theme::ERROR));
        ui.add_space(6.0);
    }

    let mine: Vec<_> = state.my_blogs().into_iter().cloned().collect();
    if mine.is_empty() {
        ui.label(
            egui::RichText::new("You have not written anything yet.")
                .color(theme::TEXT_SECONDARY),
        );
        if ui.button("Write your first post").clicked() {
            state.navigate(Route::Create);
        }
        return;
    }

    egui::ScrollArea::vertical().show(ui, |ui| {
        for blog in &mine {
            egui::Frame::default()
                .fill(theme::PANEL)
                .inner_margin(egui::Margin::same(12))
                .corner_radius(egui::CornerRadius::same(6))
                .show(ui, |ui| {
                    ui.horizontal(|ui| {
                        let title = egui::Label::new(
                            egui::RichText::new(&blog.title)
                                .size(16.0)
                                .strong()
                                .color(theme::TEXT_LIGHT),
                        )
                        .sense(egui::Sense::click());
                        if ui
                            .add(title)
                            .on_hover_cursor(egui::CursorIcon::PointingHand)
                            .clicked()
                        {
                            state.navigate(Route::Detail(blog.id));
                        }

                        ui.with_layout(
                            egui::Layout::right_to_left(egui::Align::Center),
                            |ui| {
                                if ui
                                    .add(
                                        egui::Button::new(
                                            egui::RichText::new("Delete")
                                                .color(theme::TEXT_LIGHT),
                                        )
                                        .fill(theme::DANGER),
                                    )
                                    .clicked()
                                {
                                    state.request_delete(blog.id);
                                }
                                if ui.button("Edit").clicked() {
                                    state.navigate(Route::Edit(blog.id));
                                }
                            },
                        );
                    });
                    ui.label(
                        egui::RichText::new(format!(
                            "updated {}",
                            blog.updated_at.format("%b %e, %Y")
                        ))
                        .color(theme::TEXT_SECONDARY),
                    );
                });
            ui.add_space(8.0);
        }
    });
}
