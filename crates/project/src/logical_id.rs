//! Logical ID normalization.
//!
//! Infrastructure templates identify resources by PascalCase logical IDs.
//! Stack identities are built from application and deployment names, which
//! may contain separators or characters a template would reject.

/// Normalizes a name into a PascalCase logical ID.
///
/// Words are split on `-`, `_`, `.`, `/` and whitespace; each word keeps its
/// alphanumeric characters and has its first letter upper-cased. The result
/// is deterministic: equal inputs always produce equal IDs.
pub fn to_logical_id(name: &str) -> String {
    name.split(|c: char| matches!(c, '-' | '_' | '.' | '/') || c.is_whitespace())
        .filter(|word| !word.is_empty())
        .map(capitalize_word)
        .collect()
}

fn capitalize_word(word: &str) -> String {
    let cleaned: String = word.chars().filter(char::is_ascii_alphanumeric).collect();
    let mut chars = cleaned.chars();
    match chars.next() {
        Some(first) => first.to_ascii_uppercase().to_string() + chars.as_str(),
        None => String::new(),
    }
}
