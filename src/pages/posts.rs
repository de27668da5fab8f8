use super::{actions_column, id_column, options, ResourcePage};
use crate::helper::api_client::ApiClient;
use crate::helper::form_helpers::{cleared_or_id, field, non_blank, optional_id};
use crate::models::{reference_label, NewPost, Post, PostChanges, PostStatus, RecordId};
use crate::services::posts::{resolve_references, PostLookups};
use crate::services::{CategoryService, SeriesService, UserService};
use crate::ui::{badge, format_timestamp, BadgeVariant, Column, Input, Select, TextArea};
use futures_util::future::{self, LocalBoxFuture};
use std::collections::HashMap;

pub struct PostsPage;

#[derive(Debug, Clone, PartialEq)]
pub struct PostForm {
    pub title: String,
    pub content: String,
    pub category: String,
    pub series: String,
    pub status: String,
}

impl Default for PostForm {
    fn default() -> Self {
        PostForm {
            title: String::new(),
            content: String::new(),
            category: String::new(),
            series: String::new(),
            status: PostStatus::Draft.as_str().to_string(),
        }
    }
}

pub fn status_badge(status: PostStatus) -> String {
    let variant = match status {
        PostStatus::Published => BadgeVariant::Success,
        PostStatus::Draft => BadgeVariant::Warning,
        PostStatus::Archived => BadgeVariant::Default,
    };
    badge(status.as_str(), variant)
}

impl ResourcePage for PostsPage {
    type Record = Post;
    type Form = PostForm;
    type Lookups = PostLookups;

    const TITLE: &'static str = "Posts";
    const SINGULAR: &'static str = "Post";
    const ROUTE: &'static str = "/posts";
    const SEARCH_PLACEHOLDER: &'static str = "Search for posts";

    fn load_lookups(client: &ApiClient) -> LocalBoxFuture<'_, PostLookups> {
        Box::pin(async move {
            let (categories, series, users) = future::join3(
                CategoryService::new(client.clone()).list_or_empty(),
                SeriesService::new(client.clone()).list_or_empty(),
                UserService::new(client.clone()).list_or_empty(),
            )
            .await;
            PostLookups { categories, series, users }
        })
    }

    fn prepare(items: Vec<Post>, lookups: &PostLookups) -> Vec<Post> {
        resolve_references(items, lookups)
    }

    fn columns() -> Vec<Column<'static, Post>> {
        vec![
            id_column(),
            Column::text("Title", |p: &Post| p.title.clone()),
            Column::text("Category", |p: &Post| reference_label(p.category.as_ref()).to_string()),
            Column::text("Series", |p: &Post| reference_label(p.series.as_ref()).to_string()),
            Column::text("Author", |p: &Post| reference_label(p.author.as_ref()).to_string()),
            Column::html("Status", |p: &Post| status_badge(p.status)),
            Column::text("Date", |p: &Post| format_timestamp(&p.created_at)),
            actions_column(Self::ROUTE),
        ]
    }

    fn form_from_record(record: &Post) -> PostForm {
        let id_of = |id: Option<RecordId>| id.map(|id| id.to_string()).unwrap_or_default();
        PostForm {
            title: record.title.clone(),
            content: record.content.clone(),
            category: id_of(record.category.as_ref().map(|r| r.id())),
            series: id_of(record.series.as_ref().map(|r| r.id())),
            status: record.status.as_str().to_string(),
        }
    }

    fn form_from_fields(fields: &HashMap<String, String>) -> PostForm {
        PostForm {
            title: field(fields, "title"),
            content: field(fields, "content"),
            category: field(fields, "category"),
            series: field(fields, "series"),
            status: field(fields, "status"),
        }
    }

    fn form_body(form: &PostForm, lookups: &PostLookups, _editing: bool) -> String {
        let statuses = PostStatus::ALL
            .iter()
            .map(|s| (s.as_str().to_string(), s.as_str().to_string()))
            .collect();
        [
            Input::new("title", &form.title)
                .label("Title")
                .placeholder("Enter post title")
                .required(true)
                .render(),
            TextArea::new("content", &form.content)
                .label("Content")
                .placeholder("Enter post content")
                .render(),
            Select::new("category", &form.category, options(&lookups.categories))
                .label("Category")
                .empty_option("Select a category")
                .render(),
            Select::new("series", &form.series, options(&lookups.series))
                .label("Series")
                .empty_option("Select a series")
                .render(),
            Select::new("status", &form.status, statuses).label("Status").render(),
        ]
        .concat()
    }

    fn create_payload(form: &PostForm) -> NewPost {
        NewPost {
            title: form.title.trim().to_string(),
            content: form.content.clone(),
            category: optional_id(&form.category),
            series: optional_id(&form.series),
            status: form.status.parse().unwrap_or_default(),
        }
    }

    fn update_payload(form: &PostForm) -> PostChanges {
        PostChanges {
            title: non_blank(&form.title),
            content: Some(form.content.clone()),
            category: cleared_or_id(&form.category),
            series: cleared_or_id(&form.series),
            status: form.status.parse().ok(),
        }
    }
}
