//! Views Module
//!
//! Screen rendering. The shell (`render_main_panel`) owns route dispatch
//! and runs every protected route through the gate first, so no view can
//! render for an unauthenticated session.

/// Top navigation bar
pub mod top_bar;

/// Login / registration screen
pub mod auth_view;

/// Public feed
pub mod home_view;

/// Single post
pub mod detail_view;

/// Create/edit form
pub mod editor_view;

/// The caller's own posts
pub mod my_blogs_view;

use eframe::egui;

use crate::egui_app::guard::{self, Gate};
use crate::egui_app::state::AppState;
use crate::egui_app::theme;
use crate::egui_app::types::Route;

pub use top_bar::render_top_bar;

/// Render the active screen
///
/// Protected routes pass the gate every frame: while the session is
/// unresolved a neutral spinner is shown (no content, no redirect); an
/// anonymous session is redirected to the login screen and nothing is
/// rendered this frame.
pub fn render_main_panel(ctx: &egui::Context, state: &mut AppState) {
    if state.route.is_protected() {
        match guard::check(state.session.session()) {
            Gate::Allow => {}
            Gate::Pending => {
                render_loading(ctx);
                return;
            }
            Gate::Deny => {
                state.navigate(Route::Auth);
                return;
            }
        }
    }

    egui::CentralPanel::default()
        .frame(egui::Frame::default().fill(theme::BG_DARK))
        .show(ctx, |ui| match state.route {
            Route::Home => home_view::render(ui, state),
            Route::Auth => auth_view::render(ui, state),
            Route::Detail(id) => detail_view::render(ui, state, id),
            Route::Create | Route::Edit(_) => editor_view::render(ui, state),
            Route::MyBlogs => my_blogs_view::render(ui, state),
        });
}

fn render_loading(ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::default().fill(theme::BG_DARK))
        .show(ctx, |ui| {
            ui.centered_and_justified(|ui| {
                ui.spinner();
            });
        });
}
