use super::{actions_column, id_column, or_dash, ResourcePage};
use crate::helper::form_helpers::{field, non_blank};
use crate::models::{Category, CategoryChanges, NewCategory};
use crate::ui::{format_timestamp, Column, Input};
use std::collections::HashMap;

pub struct CategoriesPage;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CategoryForm {
    pub name: String,
    pub description: String,
}

impl ResourcePage for CategoriesPage {
    type Record = Category;
    type Form = CategoryForm;
    type Lookups = ();

    const TITLE: &'static str = "Categories";
    const SINGULAR: &'static str = "Category";
    const ROUTE: &'static str = "/categories";
    const SEARCH_PLACEHOLDER: &'static str = "Search for categories";

    fn columns() -> Vec<Column<'static, Category>> {
        vec![
            id_column(),
            Column::text("Category", |c: &Category| c.name.clone()),
            Column::text("Description", |c: &Category| or_dash(c.description.as_deref())),
            Column::text("Date", |c: &Category| format_timestamp(&c.created_at)),
            actions_column(Self::ROUTE),
        ]
    }

    fn form_from_record(record: &Category) -> CategoryForm {
        CategoryForm {
            name: record.name.clone(),
            description: record.description.clone().unwrap_or_default(),
        }
    }

    fn form_from_fields(fields: &HashMap<String, String>) -> CategoryForm {
        CategoryForm { name: field(fields, "name"), description: field(fields, "description") }
    }

    fn form_body(form: &CategoryForm, _lookups: &(), _editing: bool) -> String {
        [
            Input::new("name", &form.name)
                .label("Category Name")
                .placeholder("Enter category name")
                .required(true)
                .render(),
            Input::new("description", &form.description)
                .label("Description")
                .placeholder("Enter description")
                .render(),
        ]
        .concat()
    }

    fn create_payload(form: &CategoryForm) -> NewCategory {
        NewCategory { name: form.name.trim().to_string(), description: form.description.trim().to_string() }
    }

    fn update_payload(form: &CategoryForm) -> CategoryChanges {
        CategoryChanges { name: non_blank(&form.name), description: Some(form.description.trim().to_string()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blank_name_is_left_out_of_updates() {
        let form = CategoryForm { name: "  ".to_string(), description: "All about code".to_string() };
        assert_eq!(
            serde_json::to_value(CategoriesPage::update_payload(&form)).unwrap(),
            json!({ "description": "All about code" })
        );
    }

    #[test]
    fn create_payload_keeps_empty_description() {
        let form = CategoryForm { name: "Tech".to_string(), description: String::new() };
        assert_eq!(
            serde_json::to_value(CategoriesPage::create_payload(&form)).unwrap(),
            json!({ "name": "Tech", "description": "" })
        );
    }
}
