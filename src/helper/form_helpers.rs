use crate::models::RecordId;
use actix_web::{web, HttpResponse};
use std::collections::HashMap;
use url::form_urlencoded;

/// Parses URL-encoded form data from bytes, handling potential UTF-8 errors gracefully.
pub fn parse_form(form_bytes: &web::Bytes) -> Result<HashMap<String, String>, HttpResponse> {
    let body = match String::from_utf8(form_bytes.to_vec()) {
        Ok(s) => s,
        Err(_) => return Err(HttpResponse::BadRequest().body("Invalid UTF-8 in request body.")),
    };
    Ok(form_urlencoded::parse(body.as_bytes()).into_owned().collect())
}

/// A field's raw value, or an empty string when the browser did not send it.
pub fn field(fields: &HashMap<String, String>, name: &str) -> String {
    fields.get(name).cloned().unwrap_or_default()
}

/// Trimmed value, `None` when blank.
pub fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Select boxes post "" for "nothing chosen".
pub fn optional_id(value: &str) -> Option<RecordId> {
    value.parse::<RecordId>().ok()
}

/// Select value for a partial update: an emptied select clears the field
/// (`Some(None)`, sent as `null`) instead of leaving it out.
pub fn cleared_or_id(value: &str) -> Option<Option<RecordId>> {
    Some(optional_id(value))
}
