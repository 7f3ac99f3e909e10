/**
 * BlogIT Desktop Client - Main Entry Point
 *
 * eframe application shell. Each frame drives the session controller and
 * background requests (`AppState::poll`), then renders the top bar and
 * the active screen through the route gate.
 */

use eframe::egui;

use blogit::egui_app::{views, AppState};

fn main() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 720.0])
            .with_min_inner_size([700.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        "BlogIT",
        options,
        Box::new(|_cc| Ok(Box::new(BlogItApp::default()))),
    )
}

/// Main application
struct BlogItApp {
    state: AppState,
}

impl Default for BlogItApp {
    fn default() -> Self {
        Self { state: AppState::new() }
    }
}

impl eframe::App for BlogItApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.state.poll();

        views::render_top_bar(ctx, &mut self.state);
        views::render_main_panel(ctx, &mut self.state);

        // Background results land between frames; keep painting so they
        // are picked up promptly.
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}
