//! Resource-agnostic HTML building blocks. They render what they are given
//! and know nothing about categories, posts or the backend.

use chrono::{DateTime, Utc};

pub mod badge;
pub mod button;
pub mod input;
pub mod modal;
pub mod navigation;
pub mod table;

pub use badge::{badge, BadgeVariant};
pub use button::{Button, ButtonVariant};
pub use input::{Input, Select, TextArea};
pub use modal::{Modal, ModalSubmit};
pub use table::{Column, Table};

/// Escapes text for an HTML element body.
pub fn escape(text: &str) -> String {
    html_escape::encode_text(text).into_owned()
}

/// Escapes text for a double-quoted attribute value.
pub fn escape_attr(text: &str) -> String {
    html_escape::encode_double_quoted_attribute(text).into_owned()
}

/// `HH:MM MM/DD/YYYY`, the format used in every table's date column.
pub fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%H:%M %m/%d/%Y").to_string()
}
