use super::{Resource, ResourceService};
use crate::models::{Category, NewPost, Post, PostChanges, Series, User};

impl Resource for Post {
    const PATH: &'static str = "posts";
    type Create = NewPost;
    type Update = PostChanges;
}

pub type PostService = ResourceService<Post>;

/// Sibling collections a post's references are resolved against.
#[derive(Debug, Clone, Default)]
pub struct PostLookups {
    pub categories: Vec<Category>,
    pub series: Vec<Series>,
    pub users: Vec<User>,
}

/// Swaps raw category/series/author ids for the records in `lookups`.
pub fn resolve_references(posts: Vec<Post>, lookups: &PostLookups) -> Vec<Post> {
    posts
        .into_iter()
        .map(|mut post| {
            post.category = post.category.map(|r| r.resolve(&lookups.categories));
            post.series = post.series.map(|r| r.resolve(&lookups.series));
            post.author = post.author.map(|r| r.resolve(&lookups.users));
            post
        })
        .collect()
}
