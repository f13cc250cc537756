//! Free-text search helpers.
//!
//! A search string is split into terms; every term must match for a row to be
//! included. Terms are matched as case-insensitive substrings via `ILIKE`.

/// Split user input into search terms.
///
/// Terms are separated by whitespace and/or commas. Empty input yields no
/// terms, which callers treat as "no filter".
pub fn search_terms(query: &str) -> Vec<String> {
    query
        .replace('\0', "")
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Build an `ILIKE` pattern matching `term` anywhere in a value.
///
/// `%`, `_` and the escape character `\` are escaped so they match
/// literally.
pub fn contains_pattern(term: &str) -> String {
    let mut pattern = String::with_capacity(term.len() + 2);
    pattern.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace_and_commas() {
        assert_eq!(search_terms("alice, bob  carol"), vec!["alice", "bob", "carol"]);
    }

    #[test]
    fn blank_input_has_no_terms() {
        assert!(search_terms("").is_empty());
        assert!(search_terms(" , ,").is_empty());
    }

    #[test]
    fn plain_term_is_wrapped() {
        assert_eq!(contains_pattern("alice"), "%alice%");
    }

    #[test]
    fn wildcards_are_escaped() {
        assert_eq!(contains_pattern("a_b%c"), "%a\\_b\\%c%");
        assert_eq!(contains_pattern("a\\b"), "%a\\\\b%");
    }
}
