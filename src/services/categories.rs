use super::{order_by_id, Resource, ResourceService};
use crate::models::{Category, CategoryChanges, NewCategory};

impl Resource for Category {
    const PATH: &'static str = "categories";
    type Create = NewCategory;
    type Update = CategoryChanges;

    fn order(items: &mut [Self]) {
        order_by_id(items);
    }
}

pub type CategoryService = ResourceService<Category>;
