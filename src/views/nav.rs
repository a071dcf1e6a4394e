use crate::views::esc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub path: &'static str,
    pub icon: &'static str,
    pub label: &'static str,
}

pub const ITEMS: [NavItem; 5] = [
    NavItem { path: "/", icon: "🏠", label: "Home" },
    NavItem { path: "/communities", icon: "🌐", label: "Communities" },
    NavItem { path: "/create-post", icon: "➕", label: "Post" },
    NavItem { path: "/notifications", icon: "🔔", label: "Notifications" },
    NavItem { path: "/profile", icon: "👤", label: "Profile" },
];

/// `/` is active only on the exact path, every other tab on its prefix.
pub fn is_active(item_path: &str, current_path: &str) -> bool {
    if item_path == "/" {
        current_path == "/"
    } else {
        current_path.starts_with(item_path)
    }
}

pub fn render(current_path: &str) -> String {
    let links: String = ITEMS
        .iter()
        .map(|item| {
            let active = is_active(item.path, current_path);
            format!(
                r#"<a href="{}"{}><div>{}</div><div>{}</div></a>"#,
                item.path,
                if active { r#" class="active" aria-current="page""# } else { "" },
                item.icon,
                esc(item.label)
            )
        })
        .collect();
    format!(r#"<nav class="bottom">{}</nav>"#, links)
}
