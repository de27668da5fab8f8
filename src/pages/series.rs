use super::{actions_column, id_column, or_dash, ResourcePage};
use crate::helper::form_helpers::{field, non_blank};
use crate::models::{NewSeries, Series, SeriesChanges, SeriesStatus};
use crate::ui::{badge, format_timestamp, BadgeVariant, Column, Input, Select};
use std::collections::HashMap;

pub struct SeriesPage;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SeriesForm {
    pub name: String,
    pub description: String,
    pub status: String,
}

impl SeriesForm {
    fn status(&self) -> Option<SeriesStatus> {
        self.status.parse().ok()
    }
}

fn status_badge(status: Option<SeriesStatus>) -> String {
    match status {
        Some(SeriesStatus::Active) => badge("Active", BadgeVariant::Success),
        Some(SeriesStatus::Inactive) => badge("Inactive", BadgeVariant::Default),
        None => "-".to_string(),
    }
}

impl ResourcePage for SeriesPage {
    type Record = Series;
    type Form = SeriesForm;
    type Lookups = ();

    const TITLE: &'static str = "Series";
    const SINGULAR: &'static str = "Series";
    const ROUTE: &'static str = "/series";
    const SEARCH_PLACEHOLDER: &'static str = "Search for series";

    fn columns() -> Vec<Column<'static, Series>> {
        vec![
            id_column(),
            Column::text("Series Name", |s: &Series| s.name.clone()),
            Column::text("Description", |s: &Series| or_dash(s.description.as_deref())),
            Column::html("Status", |s: &Series| status_badge(s.status)),
            Column::text("Date", |s: &Series| format_timestamp(&s.created_at)),
            actions_column(Self::ROUTE),
        ]
    }

    fn form_from_record(record: &Series) -> SeriesForm {
        SeriesForm {
            name: record.name.clone(),
            description: record.description.clone().unwrap_or_default(),
            status: record.status.map(|s| s.as_str().to_string()).unwrap_or_default(),
        }
    }

    fn form_from_fields(fields: &HashMap<String, String>) -> SeriesForm {
        SeriesForm {
            name: field(fields, "name"),
            description: field(fields, "description"),
            status: field(fields, "status"),
        }
    }

    fn form_body(form: &SeriesForm, _lookups: &(), _editing: bool) -> String {
        let statuses = SeriesStatus::ALL
            .iter()
            .map(|s| (s.as_str().to_string(), s.as_str().to_string()))
            .collect();
        [
            Input::new("name", &form.name)
                .label("Series Name")
                .placeholder("Enter series name")
                .required(true)
                .render(),
            Input::new("description", &form.description)
                .label("Description")
                .placeholder("Enter description")
                .render(),
            Select::new("status", &form.status, statuses)
                .label("Status")
                .empty_option("Select a status")
                .render(),
        ]
        .concat()
    }

    fn create_payload(form: &SeriesForm) -> NewSeries {
        NewSeries {
            name: form.name.trim().to_string(),
            description: form.description.trim().to_string(),
            status: form.status(),
        }
    }

    fn update_payload(form: &SeriesForm) -> SeriesChanges {
        SeriesChanges {
            name: non_blank(&form.name),
            description: Some(form.description.trim().to_string()),
            status: Some(form.status()),
        }
    }
}
