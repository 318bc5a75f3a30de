use std::ops::Range;

use crate::models::{Token, TokenKind, TokenSequence};

/// Whitespace also covers the ASCII information separators U+001C..=U+001F,
/// which `char::is_whitespace` leaves out.
fn classify(c: char) -> TokenKind {
    if c == '\n' {
        TokenKind::Newline
    } else if c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c) {
        TokenKind::Space
    } else {
        TokenKind::Word
    }
}

/// Iterator over the byte ranges of each token in a text.
///
/// Each range is a maximal run of one `TokenKind`: non-whitespace characters,
/// whitespace other than `\n`, or `\n`. Ranges are contiguous and cover the
/// whole input.
pub struct TokenRanges<'a> {
    text: &'a str,
    position: usize,
}

impl<'a> Iterator for TokenRanges<'a> {
    type Item = (Range<usize>, TokenKind);

    fn next(&mut self) -> Option<Self::Item> {
        let rest = &self.text[self.position..];
        let mut chars = rest.char_indices();
        let (_, first) = chars.next()?;
        let kind = classify(first);

        let run_length = chars
            .find(|&(_, c)| classify(c) != kind)
            .map_or(rest.len(), |(offset, _)| offset);

        let start = self.position;
        self.position += run_length;

        Some((start..self.position, kind))
    }
}

/// Scan `text` into token byte ranges without allocating.
pub fn token_ranges(text: &str) -> TokenRanges<'_> {
    TokenRanges { text, position: 0 }
}

/// Tokenize `text` into words, space sentinels and newline sentinels.
///
/// Note: This explicitly does not modify the case of the text.
pub fn tokenize(text: &str) -> TokenSequence {
    TokenSequence::from_text(text)
}

pub(crate) fn tokenize_to_vec(text: &str) -> Vec<Token> {
    token_ranges(text)
        .map(|(range, kind)| match kind {
            TokenKind::Word => Token::Word(text[range].to_string()),
            TokenKind::Space => Token::Space,
            TokenKind::Newline => Token::Newline,
        })
        .collect()
}

/// Convert tokens back into text.
///
/// Each sentinel is emitted as a single space or a single newline, so runs of
/// whitespace in the original text come back collapsed.
pub fn detokenize(tokens: &[Token]) -> String {
    tokens.iter().map(Token::as_text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranges_partition_input() {
        let text = "Dear team,\r\n\n  I agree\twith  option B.\n";
        let rebuilt: String = token_ranges(text).map(|(range, _)| &text[range]).collect();
        assert_eq!(rebuilt, text);

        let mut expected_start = 0;
        for (range, _) in token_ranges(text) {
            assert_eq!(range.start, expected_start);
            assert!(range.end > range.start);
            expected_start = range.end;
        }
        assert_eq!(expected_start, text.len());
    }

    #[test]
    fn test_adjacent_ranges_differ_in_kind() {
        let kinds: Vec<TokenKind> = token_ranges("a \t\n\n b").map(|(_, kind)| kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Word,
                TokenKind::Space,
                TokenKind::Newline,
                TokenKind::Space,
                TokenKind::Word
            ]
        );
    }

    #[test]
    fn test_information_separators_are_spaces() {
        let tokens = tokenize_to_vec("a\u{1c}b\u{1f}\u{1d}c");
        assert_eq!(
            tokens,
            vec![
                Token::Word("a".to_string()),
                Token::Space,
                Token::Word("b".to_string()),
                Token::Space,
                Token::Word("c".to_string()),
            ]
        );
    }

    #[test]
    fn test_multibyte_words() {
        let tokens = tokenize_to_vec("naïve café\u{3000}東京");
        assert_eq!(
            tokens,
            vec![
                Token::Word("naïve".to_string()),
                Token::Space,
                Token::Word("café".to_string()),
                Token::Space,
                Token::Word("東京".to_string()),
            ]
        );
    }
}
