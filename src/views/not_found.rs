use crate::views::{esc, Page};

pub fn render(path: &str) -> Page {
    let body = format!(
        r#"<section class="empty">
<h1>404</h1>
<p>Oops! Page not found</p>
<p class="muted">{}</p>
<a href="/">Return to Home</a>
</section>"#,
        esc(path)
    );
    Page::new("Page not found", body)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn echoes_escaped_path() {
        let page = render("/<script>");
        assert!(page.body.contains("&lt;script&gt;"));
        assert!(page.body.contains(r#"href="/""#));
    }
}
