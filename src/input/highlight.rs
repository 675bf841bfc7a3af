//! Prefix emphasis for suggestion rows

/// How a suggestion id relates to the typed text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight<'a> {
    /// The id starts with the whole input (ignoring case)
    Prefix { matched: &'a str, rest: &'a str },
    Plain(&'a str),
}

/// Split `id` into the part matching `input` and the remainder.
///
/// The first `input.chars().count()` characters of `id` are compared to
/// `input` case-insensitively. The matched part keeps the id's own casing.
pub fn highlight_prefix<'a>(id: &'a str, input: &str) -> Highlight<'a> {
    let split = id
        .char_indices()
        .nth(input.chars().count())
        .map_or(id.len(), |(i, _)| i);
    let (head, rest) = id.split_at(split);

    if head.to_uppercase() == input.to_uppercase() {
        Highlight::Prefix {
            matched: head,
            rest,
        }
    } else {
        Highlight::Plain(id)
    }
}

#[cfg(test)]
#[path = "highlight_tests.rs"]
mod highlight_tests;
