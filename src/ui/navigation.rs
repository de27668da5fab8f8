use crate::store::UiState;
use serde::Serialize;

/// Static sidebar description: top-level items, some with nested sub-items.
#[derive(Debug)]
pub struct MenuItem {
    pub name: &'static str,
    pub icon: &'static str,
    pub href: Option<&'static str>,
    pub children: &'static [MenuItem],
}

pub const MENU: &[MenuItem] = &[
    MenuItem { name: "Dashboard", icon: "▦", href: Some("/"), children: &[] },
    MenuItem {
        name: "Content",
        icon: "▤",
        href: None,
        children: &[
            MenuItem { name: "Posts", icon: "▤", href: Some("/posts"), children: &[] },
            MenuItem { name: "Categories", icon: "◫", href: Some("/categories"), children: &[] },
            MenuItem { name: "Series", icon: "◫", href: Some("/series"), children: &[] },
        ],
    },
    MenuItem {
        name: "System",
        icon: "◉",
        href: None,
        children: &[
            MenuItem { name: "Users", icon: "◉", href: Some("/users"), children: &[] },
            MenuItem { name: "Roles", icon: "⚙", href: Some("/roles"), children: &[] },
        ],
    },
];

/// A menu item as the sidebar template sees it for one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MenuEntry {
    pub name: String,
    pub icon: String,
    pub href: Option<String>,
    pub active: bool,
    pub expanded: bool,
    pub children: Vec<MenuEntry>,
}

// `/dashboard` renders the same view as `/`.
fn canonical_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    match trimmed {
        "" | "/dashboard" => "/",
        other => other,
    }
}

fn is_active(href: Option<&str>, current_path: &str) -> bool {
    href.map(|h| canonical_path(h) == canonical_path(current_path)).unwrap_or(false)
}

fn entry(item: &MenuItem, current_path: &str, state: &UiState) -> MenuEntry {
    MenuEntry {
        name: item.name.to_string(),
        icon: item.icon.to_string(),
        href: item.href.map(str::to_string),
        active: is_active(item.href, current_path),
        expanded: !item.children.is_empty() && state.is_expanded(item.name),
        children: item.children.iter().map(|child| entry(child, current_path, state)).collect(),
    }
}

pub fn build_menu(current_path: &str, state: &UiState) -> Vec<MenuEntry> {
    MENU.iter().map(|item| entry(item, current_path, state)).collect()
}

/// Whether `name` is a top-level group that can be expanded.
pub fn is_menu_group(name: &str) -> bool {
    MENU.iter().any(|item| item.name == name && !item.children.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn find<'a>(menu: &'a [MenuEntry], name: &str) -> &'a MenuEntry {
        menu.iter()
            .flat_map(|e| std::iter::once(e).chain(e.children.iter()))
            .find(|e| e.name == name)
            .unwrap()
    }

    #[test]
    fn dashboard_is_active_on_root_and_dashboard() {
        let state = UiState::default();
        assert!(find(&build_menu("/", &state), "Dashboard").active);
        assert!(find(&build_menu("/dashboard", &state), "Dashboard").active);
        assert!(!find(&build_menu("/posts", &state), "Dashboard").active);
    }

    #[test]
    fn sub_item_highlights_on_matching_route() {
        let state = UiState::default();
        let menu = build_menu("/categories", &state);
        assert!(find(&menu, "Categories").active);
        assert!(!find(&menu, "Posts").active);
        assert!(!find(&menu, "Content").active);
    }

    #[test]
    fn groups_follow_expanded_set() {
        let mut state = UiState::default();
        state.toggle_menu_expanded("System");
        let menu = build_menu("/", &state);
        assert!(find(&menu, "System").expanded);
        assert!(!find(&menu, "Content").expanded);
    }

    #[test]
    fn only_groups_with_children_are_toggleable() {
        assert!(is_menu_group("Content"));
        assert!(is_menu_group("System"));
        assert!(!is_menu_group("Dashboard"));
        assert!(!is_menu_group("Posts"));
    }
}
