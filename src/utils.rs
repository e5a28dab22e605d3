use std::collections::HashSet;

/// Builds a search URL, turning whitespace in the query into `+`.
///
/// No other characters are escaped.
pub fn build_search_url(base_url: &str, query: &str, num_results: Option<usize>) -> String {
    let query = query.replace(char::is_whitespace, "+");
    match num_results {
        Some(num) => format!("{}?q={}&num={}", base_url, query, num),
        None => format!("{}?q={}", base_url, query),
    }
}

/// Strips spaces and dashes from a captured identifier
pub fn normalize_identifier(raw: &str) -> String {
    raw.chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect()
}

/// Removes repeated entries, keeping the first occurrence of each
pub fn dedupe_preserving_order<I>(items: I) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let mut seen = HashSet::new();
    items
        .into_iter()
        .filter(|item| seen.insert(item.clone()))
        .collect()
}
