//! logos-based attribute-name tokenizer.
//!
//! Attribute names are split into [`Token::Segment`]s separated by `:`
//! (namespace/category/sub-path) and `.` (modifiers). Every character lands in
//! some token, so lexing never fails.

use logos::Logos;

/// Attribute-name token produced by the lexer.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token {
    /// `:`
    #[token(":")]
    Colon,

    /// `.`
    #[token(".")]
    Dot,

    /// Run of characters containing neither `:` nor `.`.
    #[regex(r"[^:.]+")]
    Segment,
}

/// Tokenize an attribute name into `(Token, text)` pairs.
pub fn tokenize(input: &str) -> Vec<(Token, String)> {
    let lexer = Token::lexer(input);
    lexer
        .spanned()
        .filter_map(|(result, span)| result.ok().map(|token| (token, input[span].to_string())))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        tokenize(input).into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn test_model_with_modifiers() {
        let result = tokenize("unicorn:model.debounce-250");
        assert_eq!(
            result,
            vec![
                (Token::Segment, "unicorn".into()),
                (Token::Colon, ":".into()),
                (Token::Segment, "model".into()),
                (Token::Dot, ".".into()),
                (Token::Segment, "debounce-250".into()),
            ]
        );
    }

    #[test]
    fn test_error_sub_path() {
        assert_eq!(
            tokens("unicorn:error:required"),
            vec![
                Token::Segment,
                Token::Colon,
                Token::Segment,
                Token::Colon,
                Token::Segment,
            ]
        );
    }

    #[test]
    fn test_empty_segments() {
        assert_eq!(tokens("a..b"), vec![Token::Segment, Token::Dot, Token::Dot, Token::Segment]);
        assert_eq!(tokens(":"), vec![Token::Colon]);
    }

    #[test]
    fn test_dashes_stay_in_segment() {
        let result = tokenize("poll-2000");
        assert_eq!(result, vec![(Token::Segment, "poll-2000".into())]);
    }

    #[test]
    fn test_empty_input() {
        assert!(tokens("").is_empty());
    }
}
