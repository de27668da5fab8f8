use super::{order_by_id, Resource, ResourceService};
use crate::models::{NewUser, Role, User, UserChanges};

impl Resource for User {
    const PATH: &'static str = "users";
    type Create = NewUser;
    type Update = UserChanges;

    fn order(items: &mut [Self]) {
        order_by_id(items);
    }
}

pub type UserService = ResourceService<User>;

/// Swaps raw role ids for the matching role records.
pub fn resolve_roles(users: Vec<User>, roles: &[Role]) -> Vec<User> {
    users
        .into_iter()
        .map(|mut user| {
            user.role = user.role.map(|role| role.resolve(roles));
            user
        })
        .collect()
}
