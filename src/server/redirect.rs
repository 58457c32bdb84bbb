//! Redirect path computation for the UI alias route.

/// Default path the documentation UI is served under.
pub const DEFAULT_UI_PATH: &str = "/swagger-ui";

/// Default alias that redirects to the UI.
pub const DEFAULT_UI_ALIAS: &str = "/swaggerui";

/// Compute where a request to the UI alias should be redirected.
///
/// The trailing `alias` segment of `request_path` is replaced by `ui_path`, so
/// any prefix the router is mounted under survives. A trailing slash on the
/// request is ignored. If the path does not end in `alias`, `ui_path` is
/// appended to the path instead.
///
/// ```
/// use swaggerui_server::server::redirect_path;
///
/// assert_eq!(redirect_path("/swaggerui", "/swaggerui", "/swagger-ui"), "/swagger-ui");
/// assert_eq!(
///     redirect_path("/prefix/swaggerui", "/swaggerui", "/swagger-ui"),
///     "/prefix/swagger-ui"
/// );
/// ```
pub fn redirect_path(request_path: &str, alias: &str, ui_path: &str) -> String {
    format!("{}{}", mount_prefix(request_path, alias), ui_path)
}

/// Strip `route` (and any trailing slash) from the end of `request_path`,
/// returning the prefix the route is mounted under.
pub(crate) fn mount_prefix<'a>(request_path: &'a str, route: &str) -> &'a str {
    let trimmed = request_path.trim_end_matches('/');
    trimmed
        .strip_suffix(route.trim_end_matches('/'))
        .unwrap_or(trimmed)
}
