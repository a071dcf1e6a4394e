use ammonia::Builder;
use chrono::{DateTime, Utc};
use uuid::Uuid;

pub fn now_iso() -> String {
    Utc::now().to_rfc3339()
}

pub fn now_millis() -> u64 {
    Utc::now().timestamp_millis().max(0) as u64
}

/// "Joined March 2024" style label shown on profiles.
pub fn joined_label(at: DateTime<Utc>) -> String {
    format!("Joined {}", at.format("%B %Y"))
}

pub fn validate_uuid(id: &str) -> bool {
    Uuid::parse_str(id).is_ok()
}

pub fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

/// Plain text only. Any markup is stripped, entities are kept escaped.
pub fn sanitize_text(text: &str) -> String {
    let cleaned = Builder::default()
        .tags(std::collections::HashSet::new())
        .clean(text.trim())
        .to_string();
    html_escape::decode_html_entities(&cleaned).to_string()
}

/// First letter of each word, upper-cased, at most `limit` of them.
pub fn initials(name: &str, limit: usize) -> String {
    let letters: String = name
        .split_whitespace()
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(limit)
        .collect();
    if letters.is_empty() {
        "?".to_string()
    } else {
        letters
    }
}

/// 1247 -> "1,247"
pub fn format_count(n: u32) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

pub fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn initials_take_first_letters() {
        assert_eq!(initials("Anjali Rao", 2), "AR");
        assert_eq!(initials("dr. lakshmi devi", 2), "DL");
        assert_eq!(initials("   ", 2), "?");
    }

    #[test]
    fn counts_get_thousand_separators() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(892), "892");
        assert_eq!(format_count(1247), "1,247");
        assert_eq!(format_count(1234567), "1,234,567");
    }

    #[test]
    fn sanitize_strips_markup() {
        assert_eq!(sanitize_text("<b>Hi</b> <script>x()</script>there"), "Hi there");
        assert_eq!(sanitize_text("  Fish & chips "), "Fish & chips");
    }

    #[test]
    fn joined_label_uses_month_and_year() {
        let at = Utc.with_ymd_and_hms(2024, 3, 9, 12, 0, 0).unwrap();
        assert_eq!(joined_label(at), "Joined March 2024");
    }

    #[test]
    fn truncate_respects_char_boundaries() {
        assert_eq!(truncate_chars("வணக்கம் world", 3), "வணக");
        assert_eq!(truncate_chars("short", 10), "short");
    }
}
