//! logos-based tokenizer for stylesheet property values.
//!
//! Token priority in logos is determined by:
//! 1. Longest match wins (e.g. `12px` as Dimension beats `12` as Number)
//! 2. For equal length matches, earlier-defined variants win
//!
//! Our ordering ensures:
//! - `#ff00aa` matches [`Token::HexColor`], not an error followed by `Ident`
//! - `50%` matches [`Token::Dimension`], not `Number` + `%`
//! - `rgba(` matches [`Token::Function`], not `Ident` + `(`

use logos::Logos;

/// Value token produced by the lexer.
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(skip r"[ \t\n\r\f]+")]
pub enum Token {
    // ── Compound tokens (longer matches, defined first) ──────────────

    /// `!important` flag (accepted and ignored by the cascade).
    #[token("!important")]
    Important,

    /// Hex color: `#fff`, `#ff00aa`, `#ff00aa80` (3-8 hex digits).
    #[regex(r"#[0-9a-fA-F]{3,8}")]
    HexColor,

    /// Dimension: number with a unit suffix like `12px`, `50%`, `1.5em`, `10vw`.
    #[regex(r"-?([0-9]+(\.[0-9]+)?|\.[0-9]+)(px|%|em|rem|vw|vh|deg)")]
    Dimension,

    /// Function opener: `rgba(`, `url(`, `resource(`.
    #[regex(r"[a-zA-Z_-][a-zA-Z0-9_-]*\(")]
    Function,

    /// Double-quoted string literal.
    #[regex(r#""[^"]*""#)]
    StringLiteral,

    /// Single-quoted string literal.
    #[regex(r"'[^']*'")]
    StringLiteralSingle,

    /// Number: integer or float, possibly negative.
    #[regex(r"-?([0-9]+(\.[0-9]+)?|\.[0-9]+)")]
    Number,

    /// Identifier: keywords, color names, `-unity-*` style names.
    #[regex(r"-?[a-zA-Z_][a-zA-Z0-9_-]*")]
    Ident,

    // ── Single-character punctuation ─────────────────────────────────

    /// `)`
    #[token(")")]
    ParenClose,

    /// `,`
    #[token(",")]
    Comma,

    /// `/`
    #[token("/")]
    Slash,
}

/// A fragment the lexer could not match.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("unexpected {fragment:?} at byte {position}")]
pub struct LexError {
    pub position: usize,
    pub fragment: String,
}

/// Tokenize a value string into `(Token, text)` pairs.
///
/// Unlike a lossy tokenizer, any unmatched fragment is an error: a value like
/// `12p x` must not silently become `12`.
pub fn tokenize(input: &str) -> Result<Vec<(Token, String)>, LexError> {
    let lexer = Token::lexer(input);
    lexer
        .spanned()
        .map(|(result, span)| match result {
            Ok(token) => Ok((token, input[span].to_string())),
            Err(()) => Err(LexError {
                position: span.start,
                fragment: input[span].to_string(),
            }),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: tokenize and return just the token variants.
    fn tokens(input: &str) -> Vec<Token> {
        tokenize(input).unwrap().into_iter().map(|(t, _)| t).collect()
    }

    // ── Numbers and dimensions ───────────────────────────────────────

    #[test]
    fn test_numbers() {
        let result = tokenize("10 -5 3.14 .5").unwrap();
        assert_eq!(result[0], (Token::Number, "10".into()));
        assert_eq!(result[1], (Token::Number, "-5".into()));
        assert_eq!(result[2], (Token::Number, "3.14".into()));
        assert_eq!(result[3], (Token::Number, ".5".into()));
    }

    #[test]
    fn test_dimensions() {
        let result = tokenize("12px 50% 1.5em 2rem 100vw 80vh").unwrap();
        let texts: Vec<_> = result.iter().map(|(_, s)| s.as_str()).collect();
        assert_eq!(texts, vec!["12px", "50%", "1.5em", "2rem", "100vw", "80vh"]);
        assert!(result.iter().all(|(t, _)| *t == Token::Dimension));
    }

    #[test]
    fn test_negative_dimension() {
        assert_eq!(tokens("-10px"), vec![Token::Dimension]);
    }

    // ── Colors and functions ─────────────────────────────────────────

    #[test]
    fn test_hex_colors() {
        let result = tokenize("#fff #ff00aa #ff00aa80").unwrap();
        assert!(result.iter().all(|(t, _)| *t == Token::HexColor));
    }

    #[test]
    fn test_function_call() {
        assert_eq!(
            tokens("rgba(10, 20, 30, 0.5)"),
            vec![
                Token::Function,
                Token::Number,
                Token::Comma,
                Token::Number,
                Token::Comma,
                Token::Number,
                Token::Comma,
                Token::Number,
                Token::ParenClose,
            ]
        );
    }

    // ── Identifiers ──────────────────────────────────────────────────

    #[test]
    fn test_idents() {
        let result = tokenize("auto bold-and-italic -unity-font").unwrap();
        assert_eq!(result[0], (Token::Ident, "auto".into()));
        assert_eq!(result[1], (Token::Ident, "bold-and-italic".into()));
        assert_eq!(result[2], (Token::Ident, "-unity-font".into()));
    }

    #[test]
    fn test_strings() {
        assert_eq!(
            tokens(r#""a b" 'c'"#),
            vec![Token::StringLiteral, Token::StringLiteralSingle]
        );
    }

    #[test]
    fn test_important() {
        assert_eq!(tokens("10px !important"), vec![Token::Dimension, Token::Important]);
    }

    // ── Errors ───────────────────────────────────────────────────────

    #[test]
    fn test_unknown_fragment_is_error() {
        let err = tokenize("12px @").unwrap_err();
        assert_eq!(err.position, 5);
        assert_eq!(err.fragment, "@");
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("   ").unwrap().is_empty());
    }
}
