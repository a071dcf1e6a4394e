use rust_embed::RustEmbed;

use crate::config::APP_NAME;
use crate::core::errors::{HubError, HubResult};
use crate::views::{Notice, Page};

#[derive(RustEmbed)]
#[folder = "static"]
struct Assets;

const LAYOUT: &str = "layout.html";

fn load(name: &str) -> HubResult<String> {
    let file = Assets::get(name)
        .ok_or_else(|| HubError::Template(format!("{} not found", name)))?;
    String::from_utf8(file.data.to_vec()).map_err(|e| HubError::Template(e.to_string()))
}

/// Substitutes every placeholder in one pass, so text inserted for one
/// placeholder is never scanned for another.
fn fill(template: &str, values: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    loop {
        let next = values
            .iter()
            .filter_map(|(key, value)| rest.find(key).map(|at| (at, *key, *value)))
            .min_by_key(|(at, _, _)| *at);
        match next {
            Some((at, key, value)) => {
                out.push_str(&rest[..at]);
                out.push_str(value);
                rest = &rest[at + key.len()..];
            }
            None => {
                out.push_str(rest);
                return out;
            }
        }
    }
}

/// Wraps a rendered view in the application layout.
pub fn render_page(page: &Page, nav: Option<&str>, notice: Option<&Notice>) -> HubResult<String> {
    let layout = load(LAYOUT)?;
    let title = if page.title.is_empty() {
        APP_NAME.to_string()
    } else {
        format!("{} · {}", page.title, APP_NAME)
    };
    let title = html_escape::encode_text(&title).to_string();
    let notice = notice
        .map(|n| {
            format!(
                r#"<div class="notice notice-{}" role="status">{}</div>"#,
                n.level.css_suffix(),
                html_escape::encode_text(&n.message)
            )
        })
        .unwrap_or_default();
    Ok(fill(
        &layout,
        &[
            ("PAGE_TITLE", title.as_str()),
            ("PAGE_NOTICE", notice.as_str()),
            ("PAGE_BODY", page.body.as_str()),
            ("PAGE_NAV", nav.unwrap_or_default()),
        ],
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::NoticeLevel;

    #[test]
    fn layout_is_embedded() {
        assert!(load(LAYOUT).unwrap().contains("PAGE_BODY"));
    }

    #[test]
    fn placeholders_in_content_stay_literal() {
        let page = Page::new("Home", "<p>PAGE_NAV</p>");
        let html = render_page(&page, Some("<nav>bar</nav>"), None).unwrap();
        assert!(html.contains("<p>PAGE_NAV</p>"));
        assert!(html.contains("<nav>bar</nav>"));
        assert!(html.contains("<title>Home · MyCommunityHub</title>"));
    }

    #[test]
    fn notice_is_escaped() {
        let page = Page::new("", "");
        let notice = Notice::new(NoticeLevel::Error, "<b>Passwords don't match!</b>");
        let html = render_page(&page, None, Some(&notice)).unwrap();
        assert!(html.contains("notice-error"));
        assert!(html.contains("&lt;b&gt;"));
        assert!(html.contains("<title>MyCommunityHub</title>"));
    }
}
