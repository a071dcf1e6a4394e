use crate::directory::DirectoryProvider;
use crate::models::models::{Notification, NotificationKind};
use crate::routes::Route;
use crate::views::{empty_state, esc, Page};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Group {
    Today,
    ThisWeek,
    Earlier,
}

impl Group {
    pub fn label(self) -> &'static str {
        match self {
            Group::Today => "Today",
            Group::ThisWeek => "This Week",
            Group::Earlier => "Earlier",
        }
    }

    /// Buckets by the relative time label: minutes or hours ago is today,
    /// a single day ago is this week, anything older is earlier.
    pub fn of(time: &str) -> Group {
        let time = time.to_ascii_lowercase();
        if time.contains("just now") || time.contains("minute") || time.contains("hour") {
            Group::Today
        } else if time.contains("day ago") {
            Group::ThisWeek
        } else {
            Group::Earlier
        }
    }
}

/// Notification list with its read flags. Read state is local to the screen.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct State {
    pub items: Vec<Notification>,
}

impl State {
    pub fn seeded(directory: &dyn DirectoryProvider) -> Self {
        Self {
            items: directory.notifications(),
        }
    }

    pub fn unread(&self) -> usize {
        self.items.iter().filter(|n| n.unread).count()
    }

    /// Marks `id` read and returns where opening it leads.
    pub fn open(&mut self, id: u32) -> Option<Route> {
        let item = self.items.iter_mut().find(|n| n.id == id)?;
        item.unread = false;
        Some(target_of(item.kind))
    }

    pub fn mark_all_read(&mut self) {
        for n in &mut self.items {
            n.unread = false;
        }
    }

    pub fn grouped(&self) -> Vec<(Group, Vec<&Notification>)> {
        [Group::Today, Group::ThisWeek, Group::Earlier]
            .into_iter()
            .map(|g| (g, self.items.iter().filter(|n| Group::of(&n.time) == g).collect::<Vec<_>>()))
            .filter(|(_, items)| !items.is_empty())
            .collect()
    }
}

/// Comments lead to the member's own posts, everything else to the feed.
pub fn target_of(kind: NotificationKind) -> Route {
    match kind {
        NotificationKind::Comment => Route::Profile,
        _ => Route::Home,
    }
}

fn render_item(n: &Notification) -> String {
    format!(
        r#"<article class="card notification{}" data-action="open-notification" data-notification="{}">
<span class="icon">{}</span><div><strong>{}</strong>{}<p>{}</p><span class="muted">{}</span></div></article>"#,
        if n.unread { " unread" } else { "" },
        n.id,
        n.kind.icon(),
        esc(&n.title),
        if n.unread { r#" <span class="badge badge-blue">New</span>"# } else { "" },
        esc(&n.message),
        esc(&n.time)
    )
}

pub fn render(state: &State) -> Page {
    let groups = state.grouped();
    let content = if groups.is_empty() {
        empty_state("🔔", "No notifications", "You're all caught up!")
    } else {
        groups
            .iter()
            .map(|(group, items)| {
                let list: String = items.iter().map(|n| render_item(n)).collect();
                format!("<h2>{}</h2>{}", group.label(), list)
            })
            .collect()
    };
    let mark_all = if state.unread() > 0 {
        r#"<button data-action="mark-all-read">Mark all as read</button>"#
    } else {
        ""
    };
    let body = format!(
        r#"<header class="page-header"><h1>Notifications</h1>{}</header>{}"#,
        mark_all, content
    );
    Page::new("Notifications", body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::directory::MockDirectory;

    #[test]
    fn groups_by_time_label() {
        assert_eq!(Group::of("2 hours ago"), Group::Today);
        assert_eq!(Group::of("Just now"), Group::Today);
        assert_eq!(Group::of("1 day ago"), Group::ThisWeek);
        assert_eq!(Group::of("2 days ago"), Group::Earlier);
        assert_eq!(Group::of("March 3"), Group::Earlier);
    }

    #[test]
    fn seeded_list_has_all_three_groups() {
        let state = State::seeded(&MockDirectory::new());
        let groups: Vec<Group> = state.grouped().into_iter().map(|(g, _)| g).collect();
        assert_eq!(groups, vec![Group::Today, Group::ThisWeek, Group::Earlier]);
        assert_eq!(state.unread(), 2);
    }

    #[test]
    fn opening_marks_read_and_routes() {
        let mut state = State::seeded(&MockDirectory::new());
        assert_eq!(state.open(1), Some(Route::Home));
        assert_eq!(state.unread(), 1);
        assert_eq!(state.open(5), Some(Route::Profile));
        assert_eq!(state.open(99), None);
        state.mark_all_read();
        assert_eq!(state.unread(), 0);
        assert!(!render(&state).body.contains("Mark all as read"));
    }
}
