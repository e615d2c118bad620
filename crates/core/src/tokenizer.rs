//! Whitespace tokenization with shell-style quoting.
//!
//! Tokens are separated by runs of whitespace. A double-quoted segment keeps
//! its whitespace and the quotes are stripped, so `1 "2 3"` yields `1` and
//! `2 3`. A backslash escapes the next character, inside or outside quotes.
//!
//! Edge-case policy, chosen deterministically rather than inherited:
//! an unterminated double quote takes the remainder of the input as the
//! final token, and a trailing lone backslash is emitted literally.

/// Split a raw variable value into axis values.
///
/// Order of appearance and duplicates are preserved. An empty or
/// all-whitespace input yields no tokens; validating and substituting a
/// fallback is the caller's job.
pub fn tokenize(raw: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_token = false;
    let mut in_quotes = false;

    let mut chars = raw.chars();
    while let Some(ch) = chars.next() {
        match ch {
            '\\' => {
                in_token = true;
                match chars.next() {
                    Some(escaped) => current.push(escaped),
                    None => current.push('\\'),
                }
            }
            '"' => {
                // An empty quoted pair still produces a token.
                in_token = true;
                in_quotes = !in_quotes;
            }
            ch if ch.is_whitespace() && !in_quotes => {
                if in_token {
                    tokens.push(std::mem::take(&mut current));
                    in_token = false;
                }
            }
            ch => {
                in_token = true;
                current.push(ch);
            }
        }
    }

    if in_token {
        tokens.push(current);
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_whitespace_runs() {
        assert_eq!(tokenize("1 2 3"), vec!["1", "2", "3"]);
        assert_eq!(tokenize("  a \t b \n c  "), vec!["a", "b", "c"]);
    }

    #[test]
    fn empty_and_blank_inputs_yield_no_tokens() {
        assert_eq!(tokenize(""), Vec::<String>::new());
        assert_eq!(tokenize("   \t  "), Vec::<String>::new());
    }

    #[test]
    fn quoted_segment_keeps_whitespace_and_drops_quotes() {
        assert_eq!(tokenize(r#"1 "2 3""#), vec!["1", "2 3"]);
        assert_eq!(tokenize(r#""a b" "c d""#), vec!["a b", "c d"]);
    }

    #[test]
    fn quotes_join_adjacent_segments() {
        assert_eq!(tokenize(r#"pre"mid dle"post"#), vec!["premid dlepost"]);
    }

    #[test]
    fn backslash_escapes_next_character() {
        assert_eq!(tokenize(r#"a\ b c"#), vec!["a b", "c"]);
        assert_eq!(tokenize(r#"say \"hi\""#), vec!["say", r#""hi""#]);
        assert_eq!(tokenize(r#""a \" b""#), vec![r#"a " b"#]);
    }

    #[test]
    fn preserves_duplicates_and_order() {
        assert_eq!(tokenize("x x y"), vec!["x", "x", "y"]);
    }

    #[test]
    fn unterminated_quote_takes_remainder_as_one_token() {
        assert_eq!(tokenize(r#"1 "2 3"#), vec!["1", "2 3"]);
        assert_eq!(tokenize(r#""a b c"#), vec!["a b c"]);
    }

    #[test]
    fn trailing_backslash_is_literal() {
        assert_eq!(tokenize(r"a\"), vec![r"a\"]);
    }

    #[test]
    fn empty_quoted_pair_is_an_empty_token() {
        assert_eq!(tokenize(r#"a "" b"#), vec!["a", "", "b"]);
    }
}
