use crate::helper::api_client::{ApiClient, ApiError};
use crate::services::{CategoryService, PostService, RoleService, UserService};
use futures_util::future::try_join4;
use serde::Serialize;

/// Record counts shown on the dashboard. All zero until a fetch succeeds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub posts: usize,
    pub categories: usize,
    pub users: usize,
    pub roles: usize,
}

/// One resource's figures across the stat cards and both chart panels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatCard {
    pub title: &'static str,
    pub value: usize,
    pub tone: &'static str,
    pub color: &'static str,
    /// Bar height relative to the largest count, 0-100.
    pub bar_percent: usize,
    /// Share of the total, rounded to a whole percent.
    pub share_percent: usize,
}

impl DashboardStats {
    pub fn total(&self) -> usize {
        self.posts + self.categories + self.users + self.roles
    }

    pub fn cards(&self) -> Vec<StatCard> {
        let entries = [
            ("Posts", self.posts, "accent", "#3b82f6"),
            ("Categories", self.categories, "success", "#10b981"),
            ("Users", self.users, "warning", "#f59e0b"),
            ("Roles", self.roles, "danger", "#ef4444"),
        ];
        let max = entries.iter().map(|(_, value, _, _)| *value).max().unwrap_or(0);
        let total = self.total();

        entries
            .into_iter()
            .map(|(title, value, tone, color)| StatCard {
                title,
                value,
                tone,
                color,
                bar_percent: percent_of(value, max),
                share_percent: percent_of(value, total),
            })
            .collect()
    }
}

// Rounded half up; 0 when the whole is 0.
fn percent_of(part: usize, whole: usize) -> usize {
    if whole == 0 {
        0
    } else {
        (part * 200 + whole) / (whole * 2)
    }
}

/// Counts every collection concurrently. Any single failure fails the whole
/// fetch.
pub async fn fetch_stats(client: &ApiClient) -> Result<DashboardStats, ApiError> {
    let posts = PostService::new(client.clone());
    let categories = CategoryService::new(client.clone());
    let users = UserService::new(client.clone());
    let roles = RoleService::new(client.clone());

    let (posts, categories, users, roles) =
        try_join4(posts.get_all(), categories.get_all(), users.get_all(), roles.get_all()).await?;

    Ok(DashboardStats {
        posts: posts.data_or_default().len(),
        categories: categories.data_or_default().len(),
        users: users.data_or_default().len(),
        roles: roles.data_or_default().len(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, 0, 0)]
    #[case(1, 3, 33)]
    #[case(2, 3, 67)]
    #[case(1, 8, 13)]
    #[case(5, 5, 100)]
    fn percentages_round_half_up(#[case] part: usize, #[case] whole: usize, #[case] expected: usize) {
        assert_eq!(percent_of(part, whole), expected);
    }

    #[test]
    fn empty_backend_shows_zero_everywhere() {
        let cards = DashboardStats::default().cards();
        assert_eq!(cards.len(), 4);
        assert!(cards.iter().all(|c| c.value == 0 && c.bar_percent == 0 && c.share_percent == 0));
    }

    #[test]
    fn bars_scale_to_largest_count() {
        let stats = DashboardStats { posts: 10, categories: 5, users: 2, roles: 3 };
        let cards = stats.cards();
        let titles: Vec<&str> = cards.iter().map(|c| c.title).collect();
        assert_eq!(titles, ["Posts", "Categories", "Users", "Roles"]);
        assert_eq!(cards[0].bar_percent, 100);
        assert_eq!(cards[1].bar_percent, 50);
        assert_eq!(cards[0].share_percent, 50);
        assert_eq!(cards[2].share_percent, 10);
        assert_eq!(stats.total(), 20);
    }
}
