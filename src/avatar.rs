//! Placeholder avatars for people without an uploaded picture.

use crate::config::AVATAR_INITIALS;
use crate::core::helpers::initials;

const PALETTE: [&str; 8] = [
    "#3B82F6", "#8B5CF6", "#10B981", "#F59E0B", "#EF4444", "#EC4899", "#14B8A6", "#6366F1",
];

/// Inline SVG data URI with the name's initials on a colour picked by a hash
/// of the name. Same name, same image.
pub fn generate_avatar_from_name(name: &str) -> String {
    let letters = initials(name, AVATAR_INITIALS);
    let color = PALETTE[(name_hash(name) as usize) % PALETTE.len()];
    let svg = format!(
        concat!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100" viewBox="0 0 100 100">"#,
            r#"<rect width="100" height="100" rx="50" fill="{color}"/>"#,
            r##"<text x="50" y="50" dy=".35em" text-anchor="middle" font-family="sans-serif" font-size="40" fill="#FFFFFF">{letters}</text>"##,
            r#"</svg>"#
        ),
        color = color,
        letters = html_escape::encode_text(&letters),
    );
    format!("data:image/svg+xml;charset=utf-8,{}", urlencoding::encode(&svg))
}

/// Uploaded avatar if there is one, generated otherwise.
pub fn avatar_or_generated(avatar: &str, name: &str) -> String {
    if avatar.trim().is_empty() {
        generate_avatar_from_name(name)
    } else {
        avatar.to_string()
    }
}

/// True for references an `<img>` can load; anything else (an emoji) is shown as text.
pub fn is_image_reference(avatar: &str) -> bool {
    let a = avatar.trim_start();
    a.starts_with("http://") || a.starts_with("https://") || a.starts_with("data:") || a.starts_with('/')
}

fn name_hash(name: &str) -> u32 {
    name.trim().chars().fold(0u32, |hash, c| {
        (c as u32).wrapping_add(hash.wrapping_shl(5).wrapping_sub(hash))
    })
}
