use store::UiStore;

pub mod config;
pub mod helper;
pub mod models;
pub mod pages;
pub mod routes;
pub mod services;
pub mod store;
pub mod ui;
pub mod workflow;

/// Process-wide state shared by every worker.
pub struct AppState {
    pub ui: UiStore,
}

impl AppState {
    pub fn new(ui: UiStore) -> Self {
        AppState { ui }
    }
}
