use std::ops::Index;

use crate::models::tokenizer::tokenize_to_vec;
use crate::models::{detokenize, Error, MatchSpan, Token};

/// The tokens of one source text.
///
/// Built once per text and never mutated; a changed text means a new
/// sequence. Spans produced by searching a sequence are only meaningful
/// against that same sequence.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TokenSequence {
    tokens: Vec<Token>,
}

impl TokenSequence {
    pub fn from_text(text: &str) -> Self {
        Self {
            tokens: tokenize_to_vec(text),
        }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Tokens covered by `span`.
    pub fn slice(&self, span: &MatchSpan) -> Result<&[Token], Error> {
        self.check_span(span)?;
        Ok(&self.tokens[span.start..span.end])
    }

    /// Text covered by `span`, with whitespace sentinels collapsed.
    pub fn span_text(&self, span: &MatchSpan) -> Result<String, Error> {
        Ok(detokenize(self.slice(span)?))
    }

    pub fn to_text(&self) -> String {
        detokenize(&self.tokens)
    }

    pub(crate) fn check_span(&self, span: &MatchSpan) -> Result<(), Error> {
        if span.start > span.end || span.end > self.tokens.len() {
            return Err(Error::InvalidArgument(format!(
                "span [{}, {}) is not a valid range over {} tokens",
                span.start,
                span.end,
                self.tokens.len()
            )));
        }
        Ok(())
    }
}

impl Index<usize> for TokenSequence {
    type Output = Token;

    fn index(&self, index: usize) -> &Token {
        &self.tokens[index]
    }
}

impl<'a> IntoIterator for &'a TokenSequence {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

impl From<&str> for TokenSequence {
    fn from(text: &str) -> Self {
        Self::from_text(text)
    }
}
