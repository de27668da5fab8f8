use super::{actions_column, id_column, options, ResourcePage};
use crate::helper::api_client::ApiClient;
use crate::helper::form_helpers::{cleared_or_id, field, non_blank, optional_id};
use crate::models::{reference_label, NewUser, Role, User, UserChanges};
use crate::services::users::resolve_roles;
use crate::services::RoleService;
use crate::ui::{format_timestamp, Column, Input, Select};
use futures_util::future::LocalBoxFuture;
use std::collections::HashMap;

pub struct UsersPage;

/// `password` is write-only: it never comes back from the backend, so an
/// edit form starts with it blank.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UserForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

impl ResourcePage for UsersPage {
    type Record = User;
    type Form = UserForm;
    type Lookups = Vec<Role>;

    const TITLE: &'static str = "Users";
    const SINGULAR: &'static str = "User";
    const ROUTE: &'static str = "/users";
    const SEARCH_PLACEHOLDER: &'static str = "Search for users";

    fn load_lookups(client: &ApiClient) -> LocalBoxFuture<'_, Vec<Role>> {
        Box::pin(async move { RoleService::new(client.clone()).list_or_empty().await })
    }

    fn prepare(items: Vec<User>, roles: &Vec<Role>) -> Vec<User> {
        resolve_roles(items, roles)
    }

    fn columns() -> Vec<Column<'static, User>> {
        vec![
            id_column(),
            Column::text("Username", |u: &User| u.username.clone()),
            Column::text("Email", |u: &User| u.email.clone()),
            Column::text("Role", |u: &User| reference_label(u.role.as_ref()).to_string()),
            Column::text("Date", |u: &User| format_timestamp(&u.created_at)),
            actions_column(Self::ROUTE),
        ]
    }

    fn form_from_record(record: &User) -> UserForm {
        UserForm {
            username: record.username.clone(),
            email: record.email.clone(),
            password: String::new(),
            role: record.role.as_ref().map(|r| r.id().to_string()).unwrap_or_default(),
        }
    }

    fn form_from_fields(fields: &HashMap<String, String>) -> UserForm {
        UserForm {
            username: field(fields, "username"),
            email: field(fields, "email"),
            password: field(fields, "password"),
            role: field(fields, "role"),
        }
    }

    fn form_body(form: &UserForm, roles: &Vec<Role>, editing: bool) -> String {
        let password_label = if editing { "Password (leave empty to keep)" } else { "Password" };
        [
            Input::new("username", &form.username)
                .label("Username")
                .placeholder("Enter username")
                .required(true)
                .render(),
            Input::new("email", &form.email)
                .label("Email")
                .placeholder("Enter email")
                .input_type("email")
                .required(true)
                .render(),
            Input::new("password", &form.password)
                .label(password_label)
                .placeholder("Enter password")
                .input_type("password")
                .required(!editing)
                .render(),
            Select::new("role", &form.role, options(roles))
                .label("Role")
                .empty_option("Select a role")
                .render(),
        ]
        .concat()
    }

    fn create_payload(form: &UserForm) -> NewUser {
        NewUser {
            username: form.username.trim().to_string(),
            email: form.email.trim().to_string(),
            password: form.password.clone(),
            role: optional_id(&form.role),
        }
    }

    fn update_payload(form: &UserForm) -> UserChanges {
        UserChanges {
            username: non_blank(&form.username),
            email: non_blank(&form.email),
            password: Some(form.password.clone()).filter(|p| !p.is_empty()),
            role: cleared_or_id(&form.role),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RecordId, Reference};
    use chrono::Utc;
    use serde_json::json;

    fn alice() -> User {
        User {
            id: RecordId(7),
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            role: Some(Reference::Unresolved(RecordId(2))),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn edit_form_starts_with_blank_password() {
        let form = UsersPage::form_from_record(&alice());
        assert_eq!(form.username, "alice");
        assert_eq!(form.password, "");
        assert_eq!(form.role, "2");
    }

    #[test]
    fn blank_password_is_omitted_from_updates() {
        let form = UsersPage::form_from_record(&alice());
        assert_eq!(
            serde_json::to_value(UsersPage::update_payload(&form)).unwrap(),
            json!({ "username": "alice", "email": "alice@example.com", "role": 2 })
        );

        let form = UserForm { password: "s3cret".to_string(), ..form };
        assert_eq!(serde_json::to_value(UsersPage::update_payload(&form)).unwrap()["password"], "s3cret");
    }

    #[test]
    fn emptied_role_select_clears_the_role() {
        let form = UserForm { role: String::new(), ..UsersPage::form_from_record(&alice()) };
        assert_eq!(serde_json::to_value(UsersPage::update_payload(&form)).unwrap()["role"], json!(null));
    }

    #[test]
    fn password_is_required_only_when_creating() {
        let password_input = |html: &str| {
            let start = html.find(r#"name="password""#).unwrap();
            html[start..start + html[start..].find('>').unwrap()].to_string()
        };

        let creating = UsersPage::form_body(&UserForm::default(), &Vec::new(), false);
        assert!(password_input(&creating).ends_with(" required"));
        assert!(!creating.contains("leave empty to keep"));

        let editing = UsersPage::form_body(&UserForm::default(), &Vec::new(), true);
        assert!(!password_input(&editing).contains("required"));
        assert!(editing.contains("Password (leave empty to keep)"));
    }
}
