//! Naming helpers for turning layer names into identifiers.

/// Split a layer name into lowercase-insensitive words.
///
/// Any non-alphanumeric character separates words, and a lowercase to
/// uppercase transition starts a new word ("myLayer" -> ["my", "Layer"]).
fn words(s: &str) -> Vec<String> {
    let mut words = Vec::new();
    let mut current = String::new();
    let mut prev_lower = false;

    for c in s.chars() {
        if !c.is_alphanumeric() {
            if !current.is_empty() {
                words.push(std::mem::take(&mut current));
            }
            prev_lower = false;
            continue;
        }
        if c.is_uppercase() && prev_lower && !current.is_empty() {
            words.push(std::mem::take(&mut current));
        }
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
        current.push(c);
    }
    if !current.is_empty() {
        words.push(current);
    }
    words
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c
            .to_uppercase()
            .chain(chars.flat_map(|c| c.to_lowercase()))
            .collect(),
    }
}

/// Convert a layer name to kebab-case (e.g., "Hero Card" -> "hero-card")
pub fn to_kebab_case(s: &str) -> String {
    words(s)
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join("-")
}

/// Convert a layer name to PascalCase (e.g., "hero card" -> "HeroCard")
pub fn to_pascal_case(s: &str) -> String {
    words(s).iter().map(|w| capitalize(w)).collect()
}

/// Convert a layer name to camelCase (e.g., "Hero Card" -> "heroCard")
pub fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_kebab_case() {
        assert_eq!(to_kebab_case("Hero Card"), "hero-card");
        assert_eq!(to_kebab_case("myLayer"), "my-layer");
        assert_eq!(to_kebab_case("Frame 12"), "frame-12");
        assert_eq!(to_kebab_case("  --  "), "");
    }

    #[test]
    fn test_to_pascal_case() {
        assert_eq!(to_pascal_case("hero card"), "HeroCard");
        assert_eq!(to_pascal_case("primary_button"), "PrimaryButton");
        assert_eq!(to_pascal_case("BIG title"), "BigTitle");
        assert_eq!(to_pascal_case(""), "");
    }

    #[test]
    fn test_to_camel_case() {
        assert_eq!(to_camel_case("Hero Card"), "heroCard");
        assert_eq!(to_camel_case("x"), "x");
    }
}
