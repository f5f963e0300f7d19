//! Field normalization applied whenever a job's text is written.

/// Trim and title-case: every whitespace-separated word gets an uppercase
/// first letter and lowercase remainder. Words are rejoined with single
/// spaces.
pub fn title_case(input: &str) -> String {
    input
        .split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Trim and sentence-case: uppercase first character, lowercase the rest.
pub fn sentence_case(input: &str) -> String {
    capitalize(input.trim())
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first
            .to_uppercase()
            .chain(chars.as_str().to_lowercase().chars())
            .collect(),
        None => String::new(),
    }
}
