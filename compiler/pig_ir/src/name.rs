//! Naming rules for generated identifiers.
//!
//! Tags in a type universe are `snake_case`. Domains, tuples and sums become
//! `PascalCase` in generated code; properties and builders become
//! `camelCase`. Runs of underscores collapse, so `a__b` and `a_b` map to
//! the same generated name.

/// Convert a `snake_case` tag to `PascalCase`.
pub fn to_pascal_case(tag: &str) -> String {
    let mut out = String::with_capacity(tag.len());
    for word in tag.split('_').filter(|w| !w.is_empty()) {
        push_capitalized(&mut out, word);
    }
    out
}

/// Convert a `snake_case` tag to `camelCase`.
pub fn to_camel_case(tag: &str) -> String {
    let mut out = String::with_capacity(tag.len());
    let mut words = tag.split('_').filter(|w| !w.is_empty());
    if let Some(first) = words.next() {
        out.push_str(first);
    }
    for word in words {
        push_capitalized(&mut out, word);
    }
    out
}

/// Fully-qualified generated identity of a member of `owner`.
pub fn qualify(owner: &str, name: &str) -> String {
    format!("{owner}.{name}")
}

fn push_capitalized(out: &mut String, word: &str) {
    let mut chars = word.chars();
    if let Some(first) = chars.next() {
        out.extend(first.to_uppercase());
        out.push_str(chars.as_str());
    }
}
