use super::{actions_column, id_column, or_dash, ResourcePage};
use crate::helper::form_helpers::{field, non_blank};
use crate::models::{NewRole, Role, RoleChanges};
use crate::ui::{format_timestamp, Column, Input};
use std::collections::HashMap;

pub struct RolesPage;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RoleForm {
    pub name: String,
    pub description: String,
}

impl ResourcePage for RolesPage {
    type Record = Role;
    type Form = RoleForm;
    type Lookups = ();

    const TITLE: &'static str = "Roles";
    const SINGULAR: &'static str = "Role";
    const ROUTE: &'static str = "/roles";
    const SEARCH_PLACEHOLDER: &'static str = "Search for roles";

    fn columns() -> Vec<Column<'static, Role>> {
        vec![
            id_column(),
            Column::text("Role", |r: &Role| r.name.clone()),
            Column::text("Description", |r: &Role| or_dash(r.description.as_deref())),
            Column::text("Date", |r: &Role| format_timestamp(&r.created_at)),
            actions_column(Self::ROUTE),
        ]
    }

    fn form_from_record(record: &Role) -> RoleForm {
        RoleForm {
            name: record.name.clone(),
            description: record.description.clone().unwrap_or_default(),
        }
    }

    fn form_from_fields(fields: &HashMap<String, String>) -> RoleForm {
        RoleForm { name: field(fields, "name"), description: field(fields, "description") }
    }

    fn form_body(form: &RoleForm, _lookups: &(), _editing: bool) -> String {
        [
            Input::new("name", &form.name)
                .label("Role Name")
                .placeholder("Enter role name")
                .required(true)
                .render(),
            Input::new("description", &form.description)
                .label("Description")
                .placeholder("Enter description")
                .render(),
        ]
        .concat()
    }

    fn create_payload(form: &RoleForm) -> NewRole {
        NewRole { name: form.name.trim().to_string(), description: form.description.trim().to_string() }
    }

    fn update_payload(form: &RoleForm) -> RoleChanges {
        RoleChanges { name: non_blank(&form.name), description: Some(form.description.trim().to_string()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn blank_name_is_left_out_of_updates() {
        let form = RoleForm { name: "  ".to_string(), description: "Full access".to_string() };
        assert_eq!(
            serde_json::to_value(RolesPage::update_payload(&form)).unwrap(),
            json!({ "description": "Full access" })
        );
    }

    #[test]
    fn create_payload_keeps_empty_description() {
        let form = RoleForm { name: "Editor".to_string(), description: String::new() };
        assert_eq!(
            serde_json::to_value(RolesPage::create_payload(&form)).unwrap(),
            json!({ "name": "Editor", "description": "" })
        );
    }
}
