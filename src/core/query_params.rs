use std::collections::HashMap;

/// Split a client-side URI into its path and decoded query parameters.
///
/// Repeated keys keep the last value; a key without `=` maps to an empty string.
///
/// # Example
/// ```
/// use communityhub::core::query_params::split_uri;
/// let (path, params) = split_uri("/search?q=power%20cut&filter=alerts");
/// assert_eq!(path, "/search");
/// assert_eq!(params.get("q"), Some(&"power cut".to_string()));
/// ```
pub fn split_uri(uri: &str) -> (&str, HashMap<String, String>) {
    let without_fragment = uri.split('#').next().unwrap_or_default();
    match without_fragment.find('?') {
        Some(query_start) => (
            &without_fragment[..query_start],
            parse_query(&without_fragment[query_start + 1..]),
        ),
        None => (without_fragment, HashMap::new()),
    }
}

fn parse_query(query: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();
    for param in query.split('&').filter(|p| !p.is_empty()) {
        let (key, raw) = param.split_once('=').unwrap_or((param, ""));
        let plus_decoded = raw.replace('+', " ");
        let decoded = urlencoding::decode(&plus_decoded)
            .map(|v| v.into_owned())
            .unwrap_or(plus_decoded);
        params.insert(key.to_string(), decoded);
    }
    params
}

/// Non-blank string parameter, trimmed.
pub fn get_string(params: &HashMap<String, String>, key: &str) -> Option<String> {
    params
        .get(key)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
