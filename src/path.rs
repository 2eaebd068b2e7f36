//! Path prefix handling for hierarchical parameter names.

/// Separator between path segments.
pub const PATH_SEPARATOR: char = '/';

/// Returns `path` with exactly one trailing separator appended if it lacks one.
///
/// Stripping the normalized prefix removes a whole directory boundary, so
/// `/app` never matches `/application/x`.
///
/// # Example
///
/// ```
/// use ssm_params::path::normalize_path;
///
/// assert_eq!(normalize_path("/app/db"), "/app/db/");
/// assert_eq!(normalize_path("/app/db/"), "/app/db/");
/// assert_eq!(normalize_path(""), "/");
/// ```
pub fn normalize_path(path: &str) -> String {
    if path.ends_with(PATH_SEPARATOR) {
        path.to_string()
    } else {
        format!("{}{}", path, PATH_SEPARATOR)
    }
}

/// Strips the normalized `prefix` from the start of `name`.
///
/// A name that does not start with the prefix is returned whole.
///
/// # Example
///
/// ```
/// use ssm_params::path::relative_key;
///
/// assert_eq!(relative_key("/app/db/host", "/app/db/"), "host");
/// assert_eq!(relative_key("/app/db/pool/size", "/app/db/"), "pool/size");
/// assert_eq!(relative_key("/other/host", "/app/db/"), "/other/host");
/// ```
pub fn relative_key<'a>(name: &'a str, prefix: &str) -> &'a str {
    name.strip_prefix(prefix).unwrap_or(name)
}
