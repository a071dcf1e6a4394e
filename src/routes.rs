use crate::core::query_params::{get_string, split_uri};
use crate::gate::GateState;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    Onboarding,
    Login,
    Signup,
    ForgotPassword,
    Home,
    Communities,
    CommunityDetail(String),
    CreatePost,
    Notifications,
    Profile,
    UserProfile(String),
    Search { query: Option<String> },
    NotFound,
}

impl Route {
    /// Maps a path (query string and fragment allowed) onto a route,
    /// ignoring the gate. Trailing slashes are not significant.
    pub fn parse(uri: &str) -> Route {
        let (path, params) = split_uri(uri);
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["onboarding"] => Route::Onboarding,
            ["login"] => Route::Login,
            ["signup"] => Route::Signup,
            ["forgot-password"] => Route::ForgotPassword,
            ["communities"] => Route::Communities,
            ["communities", id] => Route::CommunityDetail(decode_segment(id)),
            ["create-post"] => Route::CreatePost,
            ["notifications"] => Route::Notifications,
            ["profile"] => Route::Profile,
            ["profile", id] => Route::UserProfile(decode_segment(id)),
            ["search"] => Route::Search {
                query: get_string(&params, "q"),
            },
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> String {
        match self {
            Route::Onboarding => "/onboarding".to_string(),
            Route::Login => "/login".to_string(),
            Route::Signup => "/signup".to_string(),
            Route::ForgotPassword => "/forgot-password".to_string(),
            Route::Home => "/".to_string(),
            Route::Communities => "/communities".to_string(),
            Route::CommunityDetail(id) => format!("/communities/{}", urlencoding::encode(id)),
            Route::CreatePost => "/create-post".to_string(),
            Route::Notifications => "/notifications".to_string(),
            Route::Profile => "/profile".to_string(),
            Route::UserProfile(id) => format!("/profile/{}", urlencoding::encode(id)),
            Route::Search { query: Some(q) } => format!("/search?q={}", urlencoding::encode(q)),
            Route::Search { query: None } => "/search".to_string(),
            Route::NotFound => "/404".to_string(),
        }
    }

    pub fn is_auth_screen(&self) -> bool {
        matches!(self, Route::Login | Route::Signup | Route::ForgotPassword)
    }

    /// Screens that render inside the main layout with the bottom navigation.
    pub fn has_bottom_nav(&self) -> bool {
        matches!(
            self,
            Route::Home
                | Route::Communities
                | Route::CommunityDetail(_)
                | Route::CreatePost
                | Route::Notifications
                | Route::Profile
                | Route::UserProfile(_)
                | Route::Search { .. }
        )
    }
}

fn decode_segment(segment: &str) -> String {
    urlencoding::decode(segment)
        .map(|s| s.into_owned())
        .unwrap_or_else(|_| segment.to_string())
}

/// The route that actually mounts for `uri` in the given gate state.
///
/// Before onboarding is finished every path shows the carousel. Signed out,
/// only signup and forgot-password are reachable and everything else falls
/// back to login. Signed in, the auth screens no longer exist.
pub fn resolve(state: GateState, uri: &str) -> Route {
    let route = Route::parse(uri);
    match state {
        GateState::Onboarding => Route::Onboarding,
        GateState::Unauthenticated => match route {
            Route::Signup | Route::ForgotPassword => route,
            _ => Route::Login,
        },
        GateState::Authenticated => {
            if route.is_auth_screen() || route == Route::Onboarding {
                Route::NotFound
            } else {
                route
            }
        }
    }
}
