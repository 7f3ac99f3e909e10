/**
 * Central Client State
 *
 * Owns everything the views render from: the session controller, the
 * current route, form inputs, and the in-flight background requests.
 * Views never talk to the network themselves; they call the handle_*
 * methods here, which spawn a background thread per request and hand back
 * a channel polled once per frame.
 *
 * Authentication failures from any request funnel through the session
 * controller, so a dead token is cleared exactly once no matter which
 * screen noticed it.
 */

use std::sync::mpsc::{channel, Receiver, TryRecvError};

use uuid::Uuid;

use crate::egui_app::api::{self, ApiError};
use crate::egui_app::config::Config;
use crate::egui_app::session::SessionController;
use crate::egui_app::token_store::TokenStore;
use crate::egui_app::types::Route;
use crate::shared::{BlogPost, UpdateBlogRequest};

/// Central application state shared across egui views
pub struct AppState {
    pub config: Config,
    pub session: SessionController,
    pub route: Route,

    // Auth form
    pub is_register_mode: bool,
    pub name_input: String,
    pub email_input: String,
    pub password_input: String,
    pub confirm_password_input: String,
    pub auth_error: Option<String>,
    /// Informational banner on the auth screen ("account created")
    pub auth_notice: Option<String>,
    pub auth_loading: bool,
    login_result: Option<Receiver<Result<String, ApiError>>>,
    register_result: Option<Receiver<Result<(), ApiError>>>,

    // Blog feed
    pub blogs: Vec<BlogPost>,
    pub blogs_loading: bool,
    pub blogs_error: Option<String>,
    blogs_result: Option<Receiver<Result<Vec<BlogPost>, ApiError>>>,

    // Blog detail
    pub detail: Option<BlogPost>,
    pub detail_loading: bool,
    pub detail_error: Option<String>,
    detail_result: Option<Receiver<Result<BlogPost, ApiError>>>,

    // Editor (create and edit)
    pub editor_title: String,
    pub editor_content: String,
    pub editor_error: Option<String>,
    pub editor_saving: bool,
    editor_result: Option<Receiver<Result<BlogPost, ApiError>>>,

    // Delete
    pub delete_error: Option<String>,
    delete_result: Option<Receiver<Result<Uuid, ApiError>>>,
}

impl AppState {
    pub fn new() -> Self {
        let config = Config::new();
        let session = SessionController::new(config.clone(), TokenStore::new());

        let mut state = Self {
            config,
            session,
            route: Route::Home,
            is_register_mode: false,
            name_input: String::new(),
            email_input: String::new(),
            password_input: String::new(),
            confirm_password_input: String::new(),
            auth_error: None,
            auth_notice: None,
            auth_loading: false,
            login_result: None,
            register_result: None,
            blogs: Vec::new(),
            blogs_loading: false,
            blogs_error: None,
            blogs_result: None,
            detail: None,
            detail_loading: false,
            detail_error: None,
            detail_result: None,
            editor_title: String::new(),
            editor_content: String::new(),
            editor_error: None,
            editor_saving: false,
            editor_result: None,
            delete_error: None,
            delete_result: None,
        };
        state.load_blogs();
        state
    }

    /// Drive session resolution and drain finished background requests;
    /// call once per frame
    pub fn poll(&mut self) {
        self.session.poll();
        self.poll_login();
        self.poll_register();
        self.poll_blogs();
        self.poll_detail();
        self.poll_editor();
        self.poll_delete();
    }

    /// Route an API failure: dead tokens clear the session, everything
    /// else is returned for inline display
    fn classify_error(&mut self, error: ApiError) -> String {
        if matches!(error, ApiError::Unauthenticated) {
            self.session.auth_failed();
        }
        error.to_string()
    }

    // ---- navigation -----------------------------------------------------

    pub fn navigate(&mut self, route: Route) {
        self.delete_error = None;
        match route {
            Route::Home | Route::MyBlogs => self.load_blogs(),
            Route::Detail(id) => self.load_detail(id),
            Route::Create => {
                self.editor_title.clear();
                self.editor_content.clear();
                self.editor_error = None;
            }
            Route::Edit(id) => self.prepare_edit(id),
            Route::Auth => {
                self.auth_error = None;
                self.password_input.clear();
                self.confirm_password_input.clear();
            }
        }
        self.route = route;
    }

    pub fn logout(&mut self) {
        self.session.logout();
        self.navigate(Route::Home);
    }

    pub fn toggle_auth_mode(&mut self) {
        self.is_register_mode = !self.is_register_mode;
        self.auth_error = None;
        self.auth_notice = None;
        self.password_input.clear();
        self.confirm_password_input.clear();
    }

    // ---- auth -----------------------------------------------------------

    pub fn handle_login(&mut self) {
        if self.email_input.is_empty() || self.password_input.is_empty() {
            self.auth_error = Some("Email and password are required".to_string());
            return;
        }

        self.auth_loading = true;
        self.auth_error = None;
        self.auth_notice = None;

        let config = self.config.clone();
        let email = self.email_input.clone();
        let password = self.password_input.clone();

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(api::login(&config, email, password));
        });
        self.login_result = Some(rx);
    }

    pub fn handle_register(&mut self) {
        if self.name_input.trim().is_empty() {
            self.auth_error = Some("Name is required".to_string());
            return;
        }
        if self.email_input.is_empty() || self.password_input.is_empty() {
            self.auth_error = Some("Email and password are required".to_string());
            return;
        }
        if !self.email_input.contains('@') {
            self.auth_error = Some("Please enter a valid email address".to_string());
            return;
        }
        if self.password_input != self.confirm_password_input {
            self.auth_error = Some("Passwords do not match".to_string());
            return;
        }

        self.auth_loading = true;
        self.auth_error = None;

        let config = self.config.clone();
        let name = self.name_input.clone();
        let email = self.email_input.clone();
        let password = self.password_input.clone();

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(api::register(&config, name, email, password));
        });
        self.register_result = Some(rx);
    }

    fn poll_login(&mut self) {
        let Some(rx) = self.login_result.take() else { return };
        match rx.try_recv() {
            Ok(Ok(token)) => {
                self.auth_loading = false;
                self.password_input.clear();
                self.session.login_succeeded(token);
                self.navigate(Route::Home);
            }
            Ok(Err(e)) => {
                self.auth_loading = false;
                self.auth_error = Some(e.to_string());
            }
            Err(TryRecvError::Empty) => self.login_result = Some(rx),
            Err(TryRecvError::Disconnected) => {
                self.auth_loading = false;
                self.auth_error = Some("Login failed, please try again".to_string());
            }
        }
    }

    fn poll_register(&mut self) {
        let Some(rx) = self.register_result.take() else { return };
        match rx.try_recv() {
            Ok(Ok(())) => {
                self.auth_loading = false;
                self.is_register_mode = false;
                self.auth_notice = Some("Account created, please log in".to_string());
                self.password_input.clear();
                self.confirm_password_input.clear();
            }
            Ok(Err(e)) => {
                self.auth_loading = false;
                self.auth_error = Some(self.classify_error(e));
            }
            Err(TryRecvError::Empty) => self.register_result = Some(rx),
            Err(TryRecvError::Disconnected) => {
                self.auth_loading = false;
                self.auth_error = Some("Registration failed, please try again".to_string());
            }
        }
    }

    // ---- blog feed ------------------------------------------------------

    pub fn load_blogs(&mut self) {
        if self.blogs_loading {
            return;
        }
        self.blogs_loading = true;
        self.blogs_error = None;

        let config = self.config.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(api::all_blogs(&config));
        });
        self.blogs_result = Some(rx);
    }

    fn poll_blogs(&mut self) {
        let Some(rx) = self.blogs_result.take() else { return };
        match rx.try_recv() {
            Ok(Ok(blogs)) => {
                self.blogs_loading = false;
                self.blogs = blogs;
            }
            Ok(Err(e)) => {
                self.blogs_loading = false;
                self.blogs_error = Some(self.classify_error(e));
            }
            Err(TryRecvError::Empty) => self.blogs_result = Some(rx),
            Err(TryRecvError::Disconnected) => {
                self.blogs_loading = false;
                self.blogs_error = Some("Could not load blogs".to_string());
            }
        }
    }

    /// The current user's own posts
    pub fn my_blogs(&self) -> Vec<&BlogPost> {
        match self.session.current_user() {
            Some(user) => self.blogs.iter().filter(|b| b.author == user.email).collect(),
            None => Vec::new(),
        }
    }

    // ---- blog detail ----------------------------------------------------

    pub fn load_detail(&mut self, id: Uuid) {
        self.detail = None;
        self.detail_loading = true;
        self.detail_error = None;

        let config = self.config.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(api::get_blog(&config, id));
        });
        self.detail_result = Some(rx);
    }

    fn poll_detail(&mut self) {
        let Some(rx) = self.detail_result.take() else { return };
        match rx.try_recv() {
            Ok(Ok(blog)) => {
                self.detail_loading = false;
                // When the fetch backs the editor, prefill it on arrival.
                if self.route == Route::Edit(blog.id) {
                    self.editor_title = blog.title.clone();
                    self.editor_content = blog.content.clone();
                }
                self.detail = Some(blog);
            }
            Ok(Err(e)) => {
                self.detail_loading = false;
                self.detail_error = Some(self.classify_error(e));
            }
            Err(TryRecvError::Empty) => self.detail_result = Some(rx),
            Err(TryRecvError::Disconnected) => {
                self.detail_loading = false;
                self.detail_error = Some("Could not load blog".to_string());
            }
        }
    }

    // ---- editor ---------------------------------------------------------

    fn prepare_edit(&mut self, id: Uuid) {
        self.editor_error = None;
        match &self.detail {
            // Reuse the already-loaded post when editing from its page.
            Some(blog) if blog.id == id => {
                self.editor_title = blog.title.clone();
                self.editor_content = blog.content.clone();
            }
            _ => {
                self.editor_title.clear();
                self.editor_content.clear();
                self.load_detail(id);
            }
        }
    }

    pub fn save_editor(&mut self) {
        if self.editor_title.trim().is_empty() || self.editor_content.trim().is_empty() {
            self.editor_error = Some("Title and content are required".to_string());
            return;
        }
        let Some(token) = self.session.token().map(str::to_string) else {
            self.editor_error = Some("You must be logged in".to_string());
            return;
        };

        self.editor_saving = true;
        self.editor_error = None;

        let config = self.config.clone();
        let title = self.editor_title.clone();
        let content = self.editor_content.clone();
        let route = self.route;

        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let result = match route {
                Route::Edit(id) => {
                    let update =
                        UpdateBlogRequest { title: Some(title), content: Some(content) };
                    api::update_blog(&config, &token, id, &update)
                }
                _ => api::create_blog(&config, &token, title, content),
            };
            let _ = tx.send(result);
        });
        self.editor_result = Some(rx);
    }

    fn poll_editor(&mut self) {
        let Some(rx) = self.editor_result.take() else { return };
        match rx.try_recv() {
            Ok(Ok(blog)) => {
                self.editor_saving = false;
                // The save response is authoritative; no refetch needed.
                self.detail_loading = false;
                self.detail_error = None;
                self.route = Route::Detail(blog.id);
                self.detail = Some(blog);
            }
            Ok(Err(e)) => {
                self.editor_saving = false;
                self.editor_error = Some(self.classify_error(e));
            }
            Err(TryRecvError::Empty) => self.editor_result = Some(rx),
            Err(TryRecvError::Disconnected) => {
                self.editor_saving = false;
                self.editor_error = Some("Could not save blog".to_string());
            }
        }
    }

    // ---- delete ---------------------------------------------------------

    pub fn request_delete(&mut self, id: Uuid) {
        let Some(token) = self.session.token().map(str::to_string) else {
            self.delete_error = Some("You must be logged in".to_string());
            return;
        };
        self.delete_error = None;

        let config = self.config.clone();
        let (tx, rx) = channel();
        std::thread::spawn(move || {
            let _ = tx.send(api::delete_blog(&config, &token, id).map(|_| id));
        });
        self.delete_result = Some(rx);
    }

    fn poll_delete(&mut self) {
        let Some(rx) = self.delete_result.take() else { return };
        match rx.try_recv() {
            Ok(Ok(id)) => {
                self.blogs.retain(|b| b.id != id);
                if self.route == Route::Detail(id) || self.route == Route::Edit(id) {
                    self.navigate(Route::Home);
                }
            }
            Ok(Err(e)) => {
                self.delete_error = Some(self.classify_error(e));
            }
            Err(TryRecvError::Empty) => self.delete_result = Some(rx),
            Err(TryRecvError::Disconnected) => {
                self.delete_error = Some("Could not delete blog".to_string());
            }
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::egui_app::session::Session;

    /// State wired to an unroutable server so no background call can
    /// accidentally succeed
    fn offline_state() -> AppState {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::with_server_url("http://127.0.0.1:9");
        let session = SessionController::new(config.clone(), TokenStore::at(dir.path()));
        AppState {
            config,
            session,
            route: Route::Home,
            is_register_mode: false,
            name_input: String::new(),
            email_input: String::new(),
            password_input: String::new(),
            confirm_password_input: String::new(),
            auth_error: None,
            auth_notice: None,
            auth_loading: false,
            login_result: None,
            register_result: None,
            blogs: Vec::new(),
            blogs_loading: false,
            blogs_error: None,
            blogs_result: None,
            detail: None,
            detail_loading: false,
            detail_error: None,
            detail_result: None,
            editor_title: String::new(),
            editor_content: String::new(),
            editor_error: None,
            editor_saving: false,
            editor_result: None,
            delete_error: None,
            delete_result: None,
        }
    }

    #[test]
    fn test_login_requires_fields() {
        let mut state = offline_state();
        state.handle_login();
        assert!(state.auth_error.is_some());
        assert!(!state.auth_loading);
    }

    #[test]
    fn test_register_validates_inputs() {
        let mut state = offline_state();
        state.name_input = "A".to_string();
        state.email_input = "a@x.com".to_string();
        state.password_input = "password1".to_string();
        state.confirm_password_input = "different".to_string();

        state.handle_register();
        assert_eq!(state.auth_error.as_deref(), Some("Passwords do not match"));
    }

    #[test]
    fn test_save_editor_requires_login() {
        let mut state = offline_state();
        state.route = Route::Create;
        state.editor_title = "T".to_string();
        state.editor_content = "C".to_string();

        state.save_editor();
        assert_eq!(state.editor_error.as_deref(), Some("You must be logged in"));
        assert!(!state.editor_saving);
    }

    #[test]
    fn test_logout_goes_home_anonymous() {
        let mut state = offline_state();
        state.route = Route::MyBlogs;
        state.logout();
        assert_eq!(state.route, Route::Home);
        assert_eq!(*state.session.session(), Session::Anonymous);
    }

    #[test]
    fn test_my_blogs_empty_when_anonymous() {
        let state = offline_state();
        assert!(state.my_blogs().is_empty());
    }
}
