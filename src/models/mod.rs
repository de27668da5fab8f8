use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

pub mod category;
pub mod post;
pub mod role;
pub mod series;
pub mod user;

pub use category::{Category, CategoryChanges, NewCategory};
pub use post::{NewPost, Post, PostChanges, PostStatus};
pub use role::{NewRole, Role, RoleChanges};
pub use series::{NewSeries, Series, SeriesChanges, SeriesStatus};
pub use user::{NewUser, User, UserChanges};

/// Backend-assigned identifier. One numeric representation for every resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(pub u64);

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for RecordId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<u64>().map(RecordId)
    }
}

/// Anything the backend hands out with an id and a human-readable label.
pub trait Record {
    fn id(&self) -> RecordId;

    /// The field shown in tables and matched by the search box.
    fn label(&self) -> &str;

    /// Fields consulted by the free-text search. Defaults to the label only.
    fn search_fields(&self) -> Vec<&str> {
        vec![self.label()]
    }

    /// Case-insensitive substring match over `search_fields`.
    fn matches_search(&self, term: &str) -> bool {
        let needle = term.trim().to_lowercase();
        if needle.is_empty() {
            return true;
        }
        self.search_fields()
            .iter()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

/// A link to another record that the backend either populated or left as a raw id.
/// A populated record may be partial: referenced types default every field but `_id`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Reference<T> {
    Unresolved(RecordId),
    Resolved(T),
}

impl<T: Record + Clone> Reference<T> {
    pub fn id(&self) -> RecordId {
        match self {
            Reference::Unresolved(id) => *id,
            Reference::Resolved(record) => record.id(),
        }
    }

    pub fn resolved(&self) -> Option<&T> {
        match self {
            Reference::Resolved(record) => Some(record),
            Reference::Unresolved(_) => None,
        }
    }

    /// Replaces a raw id, or a populated record with no label, with the
    /// matching record from `known`, if there is one.
    pub fn resolve(self, known: &[T]) -> Self {
        if matches!(&self, Reference::Resolved(record) if !record.label().is_empty()) {
            return self;
        }
        let id = self.id();
        known
            .iter()
            .find(|candidate| candidate.id() == id)
            .cloned()
            .map(Reference::Resolved)
            .unwrap_or(self)
    }
}

/// Label of an optional reference, or "-" when absent, unresolved or unlabeled.
pub fn reference_label<T: Record + Clone>(reference: Option<&Reference<T>>) -> &str {
    reference
        .and_then(Reference::resolved)
        .map(Record::label)
        .filter(|label| !label.is_empty())
        .unwrap_or("-")
}

/// Wrapper the backend puts around every response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<T> ApiEnvelope<T> {
    /// Envelope used when the backend answers a mutation with an empty body.
    pub fn empty() -> Self {
        ApiEnvelope { success: true, data: None, message: None, error: None }
    }

    pub fn data_or_default(self) -> T
    where
        T: Default,
    {
        self.data.unwrap_or_default()
    }
}

/// Envelope whose `data` is irrelevant to the caller (update and delete).
pub type EmptyEnvelope = ApiEnvelope<serde::de::IgnoredAny>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reference_accepts_raw_id_or_embedded_object() {
        let raw: Reference<Category> = serde_json::from_value(json!(7)).unwrap();
        assert_eq!(raw, Reference::Unresolved(RecordId(7)));

        let embedded: Reference<Category> = serde_json::from_value(json!({
            "_id": 3,
            "name": "Rust",
            "createdAt": "2024-05-01T10:00:00Z",
            "updatedAt": "2024-05-01T10:00:00Z"
        }))
        .unwrap();
        assert_eq!(embedded.id(), RecordId(3));
        assert_eq!(reference_label(Some(&embedded)), "Rust");
    }

    #[test]
    fn partially_populated_references_decode() {
        let posts: Vec<Post> = serde_json::from_value(json!([{
            "_id": 1,
            "title": "Hello",
            "status": "Published",
            "category": { "_id": 3, "name": "Tech" },
            "author": { "_id": 5, "username": "ada" },
            "series": { "_id": 8 },
            "createdAt": "2024-05-01T10:00:00Z",
            "updatedAt": "2024-05-01T10:00:00Z"
        }]))
        .unwrap();
        assert_eq!(reference_label(posts[0].category.as_ref()), "Tech");
        assert_eq!(reference_label(posts[0].author.as_ref()), "ada");
        assert_eq!(posts[0].series.as_ref().map(Reference::id), Some(RecordId(8)));
        assert_eq!(reference_label(posts[0].series.as_ref()), "-");
    }

    #[test]
    fn unlabeled_embedded_record_is_filled_from_known_records() {
        let series: Vec<Series> = serde_json::from_value(json!([{
            "_id": 8,
            "name": "Rust 101",
            "createdAt": "2024-05-01T10:00:00Z",
            "updatedAt": "2024-05-01T10:00:00Z"
        }]))
        .unwrap();
        let bare: Reference<Series> = serde_json::from_value(json!({ "_id": 8 })).unwrap();
        assert_eq!(reference_label(Some(&bare.resolve(&series))), "Rust 101");

        let labeled: Reference<Series> = serde_json::from_value(json!({ "_id": 8, "name": "Embedded" })).unwrap();
        assert_eq!(reference_label(Some(&labeled.resolve(&series))), "Embedded");
    }

    #[test]
    fn unresolved_reference_renders_dash_until_resolved() {
        let categories: Vec<Category> = serde_json::from_value(json!([{
            "_id": 9,
            "name": "Tech",
            "createdAt": "2024-05-01T10:00:00Z",
            "updatedAt": "2024-05-01T10:00:00Z"
        }]))
        .unwrap();

        let reference: Reference<Category> = Reference::Unresolved(RecordId(9));
        assert_eq!(reference_label(Some(&reference)), "-");
        let resolved = reference.resolve(&categories);
        assert_eq!(reference_label(Some(&resolved)), "Tech");

        let dangling: Reference<Category> = Reference::Unresolved(RecordId(42)).resolve(&categories);
        assert_eq!(dangling, Reference::Unresolved(RecordId(42)));
        assert_eq!(reference_label::<Category>(None), "-");
    }

    #[test]
    fn envelope_tolerates_missing_data() {
        let envelope: ApiEnvelope<Vec<Category>> =
            serde_json::from_value(json!({ "success": true, "message": "ok" })).unwrap();
        assert!(envelope.success);
        assert!(envelope.data_or_default().is_empty());

        let empty: EmptyEnvelope =
            serde_json::from_value(json!({ "success": true, "data": { "modified": 1 } })).unwrap();
        assert!(empty.data.is_some());
    }

    #[test]
    fn record_id_parses_from_form_text() {
        assert_eq!(" 12 ".parse::<RecordId>().unwrap(), RecordId(12));
        assert!("abc".parse::<RecordId>().is_err());
    }
}
