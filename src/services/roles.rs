use super::{order_by_id, Resource, ResourceService};
use crate::models::{NewRole, Role, RoleChanges};

impl Resource for Role {
    const PATH: &'static str = "roles";
    type Create = NewRole;
    type Update = RoleChanges;

    fn order(items: &mut [Self]) {
        order_by_id(items);
    }
}

pub type RoleService = ResourceService<Role>;
