//! Page definitions: what each resource screen shows and how its modal form
//! maps to backend payloads. The workflow and rendering are shared.

use crate::helper::api_client::ApiClient;
use crate::models::Record;
use crate::services::Resource;
use crate::ui::{escape, escape_attr, Column};
use futures_util::future::LocalBoxFuture;
use std::collections::HashMap;

pub mod categories;
pub mod dashboard;
pub mod posts;
pub mod roles;
pub mod series;
pub mod users;

pub use categories::CategoriesPage;
pub use posts::PostsPage;
pub use roles::RolesPage;
pub use series::SeriesPage;
pub use users::UsersPage;

pub type Create<P> = <<P as ResourcePage>::Record as Resource>::Create;
pub type Update<P> = <<P as ResourcePage>::Record as Resource>::Update;

pub trait ResourcePage: 'static {
    type Record: Resource;
    /// Field state of the create/edit modal, as typed by the user.
    type Form: Clone + Default;
    /// Sibling collections the page needs (select options, reference names).
    type Lookups: Default;

    const TITLE: &'static str;
    const SINGULAR: &'static str;
    const ROUTE: &'static str;
    const SEARCH_PLACEHOLDER: &'static str;

    fn load_lookups(_client: &ApiClient) -> LocalBoxFuture<'_, Self::Lookups> {
        Box::pin(async { Self::Lookups::default() })
    }

    /// Post-processing of a fetched list, e.g. reference resolution.
    fn prepare(items: Vec<Self::Record>, _lookups: &Self::Lookups) -> Vec<Self::Record> {
        items
    }

    fn columns() -> Vec<Column<'static, Self::Record>>;

    fn form_from_record(record: &Self::Record) -> Self::Form;
    fn form_from_fields(fields: &HashMap<String, String>) -> Self::Form;
    fn form_body(form: &Self::Form, lookups: &Self::Lookups, editing: bool) -> String;

    fn create_payload(form: &Self::Form) -> Create<Self>;
    fn update_payload(form: &Self::Form) -> Update<Self>;
}

pub(crate) fn id_column<R: Record + 'static>() -> Column<'static, R> {
    Column::text("ID", |r: &R| r.id().to_string())
}

/// Edit / Delete links; both open a modal on the same page.
pub(crate) fn actions_column<R: Record + 'static>(route: &'static str) -> Column<'static, R> {
    Column::html("Action", move |r: &R| {
        format!(
            r#"<div class="row-actions"><a class="link-accent" href="{route}?edit={id}">Edit</a><a class="link-danger" href="{route}?delete={id}">Delete</a></div>"#,
            route = escape_attr(route),
            id = r.id()
        )
    })
    .class("col-actions")
}

pub(crate) fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v.to_string(),
        _ => "-".to_string(),
    }
}

/// Body of the delete confirmation prompt.
pub(crate) fn confirm_delete_body(singular: &str, label: &str) -> String {
    format!(
        r#"<p>Are you sure you want to delete this {}?</p><p class="confirm-label">{}</p><input type="hidden" name="confirm" value="yes">"#,
        escape(&singular.to_lowercase()),
        escape(label)
    )
}

pub(crate) fn options<R: Record>(records: &[R]) -> Vec<(String, String)> {
    records.iter().map(|r| (r.id().to_string(), r.label().to_string())).collect()
}
