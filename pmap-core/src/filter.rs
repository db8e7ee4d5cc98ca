use pmap_entities::place::Place;

/// Splits the filter text into non-empty whitespace-separated tokens.
pub fn filter_tokens(text: &str) -> Vec<&str> {
    text.split_whitespace().collect()
}

/// A place passes iff every token is a case-insensitive substring of its
/// title. An empty or whitespace-only filter lets every place pass.
pub fn passes_filter(place: &Place, filter_text: &str) -> bool {
    let title = place.title.to_lowercase();
    filter_tokens(filter_text)
        .iter()
        .all(|token| title.contains(&token.to_lowercase()))
}
