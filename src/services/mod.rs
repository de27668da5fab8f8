use crate::helper::api_client::{ApiClient, ApiError};
use crate::models::{ApiEnvelope, EmptyEnvelope, Record, RecordId};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::marker::PhantomData;

pub mod categories;
pub mod posts;
pub mod roles;
pub mod series;
pub mod users;

pub use categories::CategoryService;
pub use posts::PostService;
pub use roles::RoleService;
pub use series::SeriesService;
pub use users::UserService;

/// A backend collection with the four CRUD endpoints.
pub trait Resource: Record + DeserializeOwned + Clone + 'static {
    /// Collection path below the API base URL, e.g. `categories`.
    const PATH: &'static str;
    /// Create payload (no id, no timestamps).
    type Create: Serialize;
    /// Partial update payload.
    type Update: Serialize;

    /// Ordering applied to every freshly fetched list.
    fn order(_items: &mut [Self]) {}
}

/// `getAll / create / update / delete` for one resource.
pub struct ResourceService<R> {
    client: ApiClient,
    _resource: PhantomData<fn() -> R>,
}

impl<R> Clone for ResourceService<R> {
    fn clone(&self) -> Self {
        ResourceService { client: self.client.clone(), _resource: PhantomData }
    }
}

impl<R: Resource> ResourceService<R> {
    pub fn new(client: ApiClient) -> Self {
        ResourceService { client, _resource: PhantomData }
    }

    pub async fn get_all(&self) -> Result<ApiEnvelope<Vec<R>>, ApiError> {
        self.client.get(&[R::PATH]).await
    }

    pub async fn create(&self, payload: &R::Create) -> Result<ApiEnvelope<R>, ApiError> {
        self.client.post(&[R::PATH], payload).await
    }

    pub async fn update(&self, id: RecordId, payload: &R::Update) -> Result<EmptyEnvelope, ApiError> {
        let id = id.to_string();
        self.client.put(&[R::PATH, id.as_str()], payload).await
    }

    pub async fn delete(&self, id: RecordId) -> Result<EmptyEnvelope, ApiError> {
        let id = id.to_string();
        self.client.delete(&[R::PATH, id.as_str()]).await
    }

    /// `get_all` with absent data read as an empty list, in the resource's display order.
    pub async fn list(&self) -> Result<Vec<R>, ApiError> {
        let mut items = self.get_all().await?.data_or_default();
        R::order(&mut items);
        Ok(items)
    }

    /// Like `list`, but logs failures and falls back to an empty list.
    pub async fn list_or_empty(&self) -> Vec<R> {
        match self.list().await {
            Ok(items) => items,
            Err(e) => {
                log::error!("Error fetching {}: {}", R::PATH, e);
                Vec::new()
            }
        }
    }
}

pub(crate) fn order_by_id<R: Record>(items: &mut [R]) {
    items.sort_by_key(|item| item.id());
}
