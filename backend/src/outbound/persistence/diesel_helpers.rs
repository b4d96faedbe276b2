//! Small helpers shared by the Diesel repositories.

/// Escape `%`, `_` and `\` so a search term matches literally inside `LIKE`.
pub(super) fn escape_like(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len());
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// `LIKE` pattern matching any value that contains `term`.
pub(super) fn contains_pattern(term: &str) -> String {
    format!("%{}%", escape_like(term))
}

/// Convert a `COUNT(*)` result; Postgres never returns a negative count.
pub(super) fn count_to_u64(count: i64) -> u64 {
    u64::try_from(count).unwrap_or_default()
}
