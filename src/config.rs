pub const APP_NAME: &str = "MyCommunityHub";

// === Storage layout ===
pub const USER_KEY: &str = "user";
pub const SESSION_KEY: &str = "isAuthenticated";
pub const SESSION_FLAG_VALUE: &str = "true";

// === Limits ===
pub const MAX_POST_TITLE_LENGTH: usize = 120;
pub const MAX_POST_LENGTH: usize = 5000;
pub const MAX_BIO_LENGTH: usize = 500;
pub const MAX_NAME_LENGTH: usize = 80;
pub const SHARE_PREVIEW_LENGTH: usize = 100;
pub const AVATAR_INITIALS: usize = 2;

pub const JUST_NOW: &str = "Just now";
pub const UNKNOWN_LOCATION: &str = "Unknown";

pub fn latency_percent() -> u64 {
    std::env::var("HUB_LATENCY_PERCENT")
        .ok()
        .and_then(|v| v.parse::<u64>().ok())
        .unwrap_or(100)
}

pub fn public_origin() -> String {
    std::env::var("HUB_PUBLIC_ORIGIN")
        .ok()
        .map(|v| v.trim_end_matches('/').to_string())
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| "http://localhost:8080".to_string())
}
