use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme;
use crate::egui_app::types::Route;

/// Public feed of all posts, newest first
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.add_space(12.0);
    ui.heading(egui::RichText::new("Latest Posts").color(theme::TEXT_LIGHT));
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

    if state.blogs.is_empty() {
        ui.label(egui::RichText::new("No posts yet.").color(theme::TEXT_SECONDARY));
        return;
    }

    let blogs = state.blogs.clone();
    egui::ScrollArea::vertical().show(ui, |ui| {
        for blog in &blogs {
            egui::Frame::default()
                .fill(theme::PANEL)
                .inner_margin(egui::Margin::same(12))
                .corner_radius(egui::CornerRadius::same(6))
                .show(ui, |ui| {
                    let title = egui::Label::new(
                        egui::RichText::new(&blog.title)
                            .size(18.0)
                            .strong()
                            .color(theme::TEXT_LIGHT),
                    )
                    .sense(egui::Sense::click());
                    if ui.add(title).on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
                        state.navigate(Route::Detail(blog.id));
                    }
                    ui.label(
                        egui::RichText::new(format!(
                            "by {} on {}",
                            blog.author,
                            blog.created_at.format("%b %e, %Y")
                        ))
                        .color(theme::TEXT_SECONDARY),
                    );
                    ui.add_space(4.0);

                    let preview: String = blog.content.chars().take(180).collect();
                    let preview = if blog.content.chars().count() > 180 {
                        format!("{preview}...")
                    } else {
                        preview
                    };
                    ui.label(egui::RichText::new(preview).color(theme::TEXT_SECONDARY));

                    if ui.button("Read more").clicked() {
                        state.navigate(Route::Detail(blog.id));
                    }
                });
            ui.add_space(8.0);
        }
    });
}
