/// Extracts the token from an `Authorization: Bearer <token>` value.
#[must_use]
pub fn parse_bearer(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}
