/**
 * Token Store
 *
 * Durable persistence for the session token: a single file at a fixed
 * path under the user config directory. Absence of the file means "not
 * logged in". The desktop analog of browser local storage under a fixed
 * key.
 */

use std::fs;
use std::path::PathBuf;

/// Fixed file name for the stored token
const TOKEN_FILE: &str = "token";

/// Durable token storage
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    /// Store under the platform config directory (`~/.config/blogit` on
    /// Linux)
    pub fn new() -> Self {
        let dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("blogit");
        Self { path: dir.join(TOKEN_FILE) }
    }

    /// Store at an explicit location; used by tests
    pub fn at(dir: impl Into<PathBuf>) -> Self {
        Self { path: dir.into().join(TOKEN_FILE) }
    }

    /// Read the stored token, if any
    ///
    /// An unreadable or empty file is treated the same as no file: not
    /// logged in.
    pub fn load(&self) -> Option<String> {
        let token = fs::read_to_string(&self.path).ok()?;
        let token = token.trim().to_string();
        if token.is_empty() {
            None
        } else {
            Some(token)
        }
    }

    /// Persist a token, replacing any previous one
    pub fn save(&self, token: &str) {
        if let Some(parent) = self.path.parent() {
            if let Err(e) = fs::create_dir_all(parent) {
                tracing::warn!("failed to create token directory: {e}");
                return;
            }
        }
        if let Err(e) = fs::write(&self.path, token) {
            tracing::warn!("failed to persist token: {e}");
        }
    }

    /// Remove the stored token
    pub fn clear(&self) {
        if self.path.exists() {
            if let Err(e) = fs::remove_file(&self.path) {
                tracing::warn!("failed to remove token: {e}");
            }
        }
    }
}

impl Default for TokenStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_token() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::at(dir.path());
        assert!(store.load().is_none());
    }

    #[test]
    fn test_save_load_clear_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::at(dir.path());

        store.save("abc.def.ghi");
        assert_eq!(store.load().as_deref(), Some("abc.def.ghi"));

        store.save("replacement");
        assert_eq!(store.load().as_deref(), Some("replacement"));

        store.clear();
        assert!(store.load().is_none());
    }

    #[test]
    fn test_blank_file_is_not_logged_in() {
        let dir = tempfile::tempdir().unwrap();
        let store = TokenStore::at(dir.path());
        store.save("  \n");
        assert!(store.load().is_none());
    }
}
