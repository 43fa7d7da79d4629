/// Build a URL slug from the first and last words of a name.
///
/// "Jane Q. Doe" becomes `jane_doe`; anything outside `[a-z0-9_]` is dropped.
pub fn slugify(full_name: &str) -> String {
    let mut parts = full_name.split_whitespace();
    let Some(first) = parts.next() else {
        return String::new();
    };
    let last = parts.last().unwrap_or("");

    format!("{first}_{last}")
        .trim_matches('_')
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_')
        .collect()
}

/// Append the first free numeric suffix (starting at 2) to `base`
pub fn disambiguate<F>(base: &str, taken: F) -> String
where
    F: Fn(&str) -> bool,
{
    if !taken(base) {
        return base.to_string();
    }

    (2..)
        .map(|i| format!("{base}{i}"))
        .find(|candidate| !taken(candidate))
        .unwrap_or_else(|| base.to_string())
}
