use std::borrow::Cow;
use std::fmt;

use crate::constants::{NEWLINE_SENTINEL, SPACE_SENTINEL};

/// Kind of character run a token was scanned from.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Word,
    Space,
    Newline,
}

/// An atomic unit of text.
///
/// Words keep their exact substring. Runs of spaces and runs of newlines are
/// collapsed into sentinels, so their original length is not preserved.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    Word(String),
    Space,
    Newline,
}

impl Token {
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Word(_) => TokenKind::Word,
            Token::Space => TokenKind::Space,
            Token::Newline => TokenKind::Newline,
        }
    }

    pub fn is_whitespace(&self) -> bool {
        !matches!(self, Token::Word(_))
    }

    /// Text this token contributes when converted back to a string.
    ///
    /// Sentinels become a single space or a single newline.
    pub fn as_text(&self) -> &str {
        match self {
            Token::Word(word) => word,
            Token::Space => " ",
            Token::Newline => "\n",
        }
    }

    /// Comparison key, lowercased when matching is case-insensitive.
    ///
    /// Sentinels are unaffected by case folding.
    pub fn fold_case(&self, case_sensitive: bool) -> Cow<'_, Token> {
        match self {
            Token::Word(word) if !case_sensitive => Cow::Owned(Token::Word(word.to_lowercase())),
            _ => Cow::Borrowed(self),
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Word(word) => write!(f, "{}", word),
            Token::Space => write!(f, "{}", SPACE_SENTINEL),
            Token::Newline => write!(f, "{}", NEWLINE_SENTINEL),
        }
    }
}
