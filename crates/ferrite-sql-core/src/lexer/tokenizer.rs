//! SQL tokenizer.
//!
//! Splits a SQL string into a flat token sequence for the statement
//! rewriters. The scan is total over all inputs: unrecognized characters
//! become single-character punctuation tokens and an unterminated string
//! literal extends to the end of the input. Whitespace separates tokens
//! and is discarded.

use super::{Span, Token, TokenKind};

/// A lexer over a SQL string.
pub struct Lexer<'a> {
    /// The input SQL text.
    input: &'a str,
    /// The current byte position.
    pos: usize,
    /// The byte position where the current token started.
    start: usize,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given input.
    #[must_use]
    pub const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            start: 0,
        }
    }

    /// Returns the current character without advancing.
    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    /// Returns the character after the current one without advancing.
    fn peek_next(&self) -> Option<char> {
        let mut chars = self.input[self.pos..].chars();
        chars.next();
        chars.next()
    }

    /// Advances to the next character and returns it.
    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Creates a token covering the current lexeme.
    fn make_token(&self, kind: TokenKind) -> Token {
        Token::new(
            &self.input[self.start..self.pos],
            kind,
            Span::new(self.start, self.pos),
        )
    }

    /// Scans an identifier. Qualified names (`alias.column`) stay a single
    /// token so statement rewriters can re-emit them verbatim.
    fn scan_identifier(&mut self) -> Token {
        while self
            .peek()
            .is_some_and(|c| c.is_alphanumeric() || c == '_' || c == '.')
        {
            self.advance();
        }
        self.make_token(TokenKind::Identifier)
    }

    /// Scans an integer or decimal literal.
    fn scan_number(&mut self) -> Token {
        while self.peek().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
        if self.peek() == Some('.') && self.peek_next().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
            while self.peek().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }
        self.make_token(TokenKind::Literal)
    }

    /// Scans a single-quoted string literal, `''` escape included. The
    /// lexeme keeps its quotes.
    fn scan_string(&mut self) -> Token {
        self.advance();
        loop {
            match self.peek() {
                Some('\'') if self.peek_next() == Some('\'') => {
                    self.advance();
                    self.advance();
                }
                Some('\'') => {
                    self.advance();
                    break;
                }
                Some(_) => {
                    self.advance();
                }
                // unterminated literal runs to the end of the input
                None => break,
            }
        }
        self.make_token(TokenKind::Literal)
    }

    /// Scans the next token, or `None` at end of input.
    pub fn next_token(&mut self) -> Option<Token> {
        while self.peek().is_some_and(char::is_whitespace) {
            self.advance();
        }
        self.start = self.pos;
        let c = self.peek()?;
        let token = match c {
            '\'' => self.scan_string(),
            c if c.is_ascii_digit() => self.scan_number(),
            c if c.is_alphabetic() || c == '_' => self.scan_identifier(),
            '<' | '>' | '!' | '=' | '|' | '&' | '+' | '-' | '*' | '/' | '%' => {
                self.advance();
                if matches!(
                    (c, self.peek()),
                    ('<', Some('=' | '>')) | ('>', Some('=')) | ('!', Some('=')) | ('|', Some('|'))
                ) {
                    self.advance();
                }
                self.make_token(TokenKind::Operator)
            }
            _ => {
                self.advance();
                self.make_token(TokenKind::Punctuation)
            }
        };
        Some(token)
    }

    /// Tokenizes the entire input.
    #[must_use]
    pub fn tokenize(&mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(input: &str) -> Vec<Token> {
        Lexer::new(input).tokenize()
    }

    fn texts(input: &str) -> Vec<String> {
        tokenize(input).into_iter().map(|t| t.text).collect()
    }

    #[test]
    fn test_empty_input() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t  ").is_empty());
    }

    #[test]
    fn test_case_is_preserved() {
        let tokens = tokenize("Insert INTO users");
        assert_eq!(tokens[0].text, "Insert");
        assert_eq!(tokens[1].text, "INTO");
        assert!(tokens[0].matches("insert"));
    }

    #[test]
    fn test_qualified_name_is_one_token() {
        assert_eq!(texts("tt.b = excluded.b"), vec!["tt.b", "=", "excluded.b"]);
    }

    #[test]
    fn test_punctuation_splits_identifiers() {
        assert_eq!(
            texts("insert into t (a,b)"),
            vec!["insert", "into", "t", "(", "a", ",", "b", ")"]
        );
    }

    #[test]
    fn test_classification() {
        let tokens = tokenize("a = 1.5 , 'x'");
        let kinds: Vec<TokenKind> = tokens.iter().map(|t| t.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Identifier,
                TokenKind::Operator,
                TokenKind::Literal,
                TokenKind::Punctuation,
                TokenKind::Literal,
            ]
        );
    }

    #[test]
    fn test_two_character_operators() {
        assert_eq!(texts("a <= b <> c != d || e"), vec![
            "a", "<=", "b", "<>", "c", "!=", "d", "||", "e"
        ]);
    }

    #[test]
    fn test_string_lexeme_keeps_quotes_and_escape() {
        assert_eq!(texts("'it''s'"), vec!["'it''s'"]);
    }

    #[test]
    fn test_unterminated_string_is_total() {
        assert_eq!(texts("'oops"), vec!["'oops"]);
    }

    #[test]
    fn test_unknown_characters_become_punctuation() {
        let tokens = tokenize("a § b");
        assert_eq!(tokens[1].text, "§");
        assert_eq!(tokens[1].kind, TokenKind::Punctuation);
    }

    #[test]
    fn test_named_binding_splits_on_colon() {
        assert_eq!(texts("(:id, :name)"), vec![
            "(", ":", "id", ",", ":", "name", ")"
        ]);
    }

    #[test]
    fn test_decimal_number() {
        assert_eq!(texts("1.5 2"), vec!["1.5", "2"]);
    }

    #[test]
    fn test_span_tracking() {
        let tokens = tokenize("select id");
        assert_eq!(tokens[0].span, Span::new(0, 6));
        assert_eq!(tokens[1].span, Span::new(7, 9));
    }
}
