use serde::Serialize;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Shell state shared by every page: sidebar, expanded menu groups and the
/// display name shown in the header. Lives as long as the server process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UiState {
    pub sidebar_open: bool,
    pub expanded_menu_items: Vec<String>,
    pub current_user: Option<String>,
}

impl Default for UiState {
    fn default() -> Self {
        UiState {
            sidebar_open: true,
            expanded_menu_items: Vec::new(),
            current_user: Some("Admin".to_string()),
        }
    }
}

impl UiState {
    pub fn toggle_sidebar(&mut self) {
        self.sidebar_open = !self.sidebar_open;
    }

    pub fn set_sidebar_open(&mut self, open: bool) {
        self.sidebar_open = open;
    }

    pub fn set_current_user(&mut self, user: Option<String>) {
        self.current_user = user;
    }

    /// Adds `name` to the expanded set, or removes it if already there.
    pub fn toggle_menu_expanded(&mut self, name: &str) {
        if let Some(pos) = self.expanded_menu_items.iter().position(|item| item == name) {
            self.expanded_menu_items.remove(pos);
        } else {
            self.expanded_menu_items.push(name.to_string());
        }
    }

    pub fn is_expanded(&self, name: &str) -> bool {
        self.expanded_menu_items.iter().any(|item| item == name)
    }

    /// Upper-cased first character of the current user's name.
    pub fn user_initial(&self) -> String {
        self.current_user
            .as_deref()
            .and_then(|name| name.chars().next())
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// Injectable handle to the shared `UiState`.
#[derive(Debug, Clone, Default)]
pub struct UiStore {
    state: Arc<RwLock<UiState>>,
}

impl UiStore {
    pub fn new(initial: UiState) -> Self {
        UiStore { state: Arc::new(RwLock::new(initial)) }
    }

    pub fn snapshot(&self) -> UiState {
        self.read().clone()
    }

    /// Applies one update under the write lock.
    pub fn update<F>(&self, apply: F)
    where
        F: FnOnce(&mut UiState),
    {
        apply(&mut *self.write());
    }

    fn read(&self) -> RwLockReadGuard<'_, UiState> {
        self.state.read().unwrap_or_else(|poisoned| {
            log::error!("RwLock for UI state was poisoned! Using stale data.");
            poisoned.into_inner()
        })
    }

    fn write(&self) -> RwLockWriteGuard<'_, UiState> {
        self.state.write().unwrap_or_else(|poisoned| {
            log::error!("RwLock for UI state was poisoned during an update! Recovering lock.");
            poisoned.into_inner()
        })
    }
}
