//! Tokenizer for the embedded key/value text block
//!

/// Characters separating tokens in the key/value text block.
const DELIMITERS: &[char] = &['\n', '\t', '\r', '"', ' ', '{', '}'];

/// Split a key/value text blob into ordered (key, value) pairs.
///
/// The first surviving token is the section label (usually `"Information"`) and is not
/// itself part of a pair, so it is skipped. The remaining tokens are consumed pairwise in
/// encounter order; duplicates are kept. A trailing token with no partner is dropped.
pub fn tokenize(blob: &str) -> Vec<(String, String)> {
    let mut tokens = blob
        .split(DELIMITERS)
        .filter(|token| !token.is_empty())
        .skip(1);

    let mut pairs = Vec::new();
    while let (Some(key), Some(value)) = (tokens.next(), tokens.next()) {
        pairs.push((key.to_owned(), value.to_owned()));
    }

    pairs
}

#[cfg(test)]
mod test {
    use pretty_assertions::assert_eq;

    use crate::keyvalues::tokenize;

    fn pair(key: &str, value: &str) -> (String, String) {
        (key.to_owned(), value.to_owned())
    }

    #[test]
    fn tokenize_simple_block() {
        let pairs = tokenize("Information\n\"foo\" \"bar\"\n\"baz\" \"qux\"");
        assert_eq!(pairs, vec![pair("foo", "bar"), pair("baz", "qux")]);
    }

    #[test]
    fn tokenize_braced_block() {
        let pairs = tokenize("\"Information\"\n{\n\t\"author\" \"someone\"\n}\n");
        assert_eq!(pairs, vec![pair("author", "someone")]);
    }

    #[test]
    fn duplicates_and_order_are_preserved() {
        let pairs = tokenize("Information \"a\" \"1\" \"a\" \"2\"");
        assert_eq!(pairs, vec![pair("a", "1"), pair("a", "2")]);
    }

    #[test]
    fn trailing_unpaired_token_is_dropped() {
        let pairs = tokenize("Information \"foo\" \"bar\" \"dangling\"");
        assert_eq!(pairs, vec![pair("foo", "bar")]);
    }

    #[test]
    fn empty_and_label_only_blocks_yield_nothing() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("Information").is_empty());
        assert!(tokenize("{}\"\"  \n\t").is_empty());
    }
}
