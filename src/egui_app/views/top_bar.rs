use eframe::egui;

use crate::egui_app::state::AppState;
use crate::egui_app::theme;
use crate::egui_app::types::Route;

/// Top navigation bar
///
/// Renders the brand, the public navigation, and either the signed-in
/// menu (driven by the session controller) or a login button.
pub fn render_top_bar(ctx: &egui::Context, state: &mut AppState) {
    egui::TopBottomPanel::top("top_bar")
        .frame(egui::Frame::default().fill(theme::PANEL).inner_margin(egui::Margin::same(8)))
        .show(ctx, |ui| {
            ui.horizontal(|ui| {
                let brand = egui::Label::new(
                    egui::RichText::new("BlogIT").size(20.0).strong().color(theme::ACCENT),
                )
                .sense(egui::Sense::click());
                if ui.add(brand).on_hover_cursor(egui::CursorIcon::PointingHand).clicked() {
                    state.navigate(Route::Home);
                }

                ui.add_space(12.0);
                if ui.button("Home").clicked() {
                    state.navigate(Route::Home);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    match state.session.current_user().cloned() {
                        Some(user) => {
                            if ui.button("Log Out").clicked() {
                                state.logout();
                            }
                            if ui.button("New Post").clicked() {
                                state.navigate(Route::Create);
                            }
                            if ui.button("My Blogs").clicked() {
                                state.navigate(Route::MyBlogs);
                            }
                            ui.label(
                                egui::RichText::new(&user.email).color(theme::TEXT_SECONDARY),
                            );
                        }
                        None => {
                            if ui.button("Login / Register").clicked() {
                                state.navigate(Route::Auth);
                            }
                        }
                    }
                });
            });
        });
}
