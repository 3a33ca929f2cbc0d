// SPDX-License-Identifier: PMPL-1.0-or-later

//! Word scanner
//!
//! Splits source text into word and separator spans without dropping a
//! single character. A word is a maximal run of characters that are not in
//! the [`SeparatorSet`]; anything else (letters, digits, `_`, `$`, accented
//! letters, stray symbols) counts as a word character, so the scanner is
//! locale-agnostic.

use std::collections::BTreeSet;

/// Characters that end a word.
const DEFAULT_SEPARATORS: &[char] = &[
    ' ', '\n', '\t', '(', ')', '[', ']', '{', '}', ',', ';', '.', ':', '=', '<', '>', '-',
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeparatorSet {
    chars: BTreeSet<char>,
}

impl SeparatorSet {
    pub fn new<I: IntoIterator<Item = char>>(chars: I) -> Self {
        Self {
            chars: chars.into_iter().collect(),
        }
    }

    /// Extend the set, e.g. with `'\r'` for CRLF sources.
    pub fn with<I: IntoIterator<Item = char>>(mut self, chars: I) -> Self {
        self.chars.extend(chars);
        self
    }

    pub fn contains(&self, c: char) -> bool {
        self.chars.contains(&c)
    }

    pub fn is_word_char(&self, c: char) -> bool {
        !self.contains(c)
    }

    /// First character of `text` that is a separator. Text containing one
    /// can never be scanned back as a single word.
    pub fn first_in(&self, text: &str) -> Option<char> {
        text.chars().find(|&c| self.contains(c))
    }

    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.chars.iter().copied()
    }
}

impl Default for SeparatorSet {
    fn default() -> Self {
        Self::new(DEFAULT_SEPARATORS.iter().copied())
    }
}

/// One classified slice of the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Span<'a> {
    /// A maximal run of word characters.
    Word(&'a str),
    /// Exactly one separator character.
    Separator(&'a str),
}

impl<'a> Span<'a> {
    pub fn text(&self) -> &'a str {
        match self {
            Span::Word(text) | Span::Separator(text) => text,
        }
    }

    pub fn is_word(&self) -> bool {
        matches!(self, Span::Word(_))
    }
}

/// Single-pass cursor over a source string.
///
/// `peek_*` never moves the cursor. `next_*` advances past what it returns
/// and yields `None` once the input is exhausted; calling it again at the
/// end is a no-op.
#[derive(Debug, Clone)]
pub struct WordScanner<'a, 's> {
    input: &'a str,
    pos: usize,
    separators: &'s SeparatorSet,
}

impl<'a, 's> WordScanner<'a, 's> {
    pub fn new(input: &'a str, separators: &'s SeparatorSet) -> Self {
        Self {
            input,
            pos: 0,
            separators,
        }
    }

    /// Byte offset of the cursor.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    pub fn peek_char(&self) -> Option<char> {
        self.rest().chars().next()
    }

    pub fn next_char(&mut self) -> Option<char> {
        let c = self.peek_char()?;
        self.pos += c.len_utf8();
        Some(c)
    }

    /// Whether the cursor sits on the first character of a word.
    pub fn at_word(&self) -> bool {
        self.peek_char()
            .map(|c| self.separators.is_word_char(c))
            .unwrap_or(false)
    }

    pub fn peek_word(&self) -> Option<&'a str> {
        let rest = self.rest();
        let end = rest
            .char_indices()
            .find(|&(_, c)| self.separators.contains(c))
            .map(|(idx, _)| idx)
            .unwrap_or(rest.len());
        if end == 0 {
            None
        } else {
            Some(&rest[..end])
        }
    }

    pub fn next_word(&mut self) -> Option<&'a str> {
        let word = self.peek_word()?;
        self.pos += word.len();
        Some(word)
    }

    /// Next span: a whole word when the cursor is on one, otherwise a
    /// single separator character.
    pub fn next_span(&mut self) -> Option<Span<'a>> {
        if let Some(word) = self.next_word() {
            return Some(Span::Word(word));
        }
        let start = self.pos;
        self.next_char()?;
        Some(Span::Separator(&self.input[start..self.pos]))
    }
}

impl<'a> Iterator for WordScanner<'a, '_> {
    type Item = Span<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_span()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans(input: &str) -> Vec<Span<'_>> {
        let separators = SeparatorSet::default();
        WordScanner::new(input, &separators).collect()
    }

    #[test]
    fn splits_words_and_separators() {
        assert_eq!(
            spans("Poner(Rojo)"),
            vec![
                Span::Word("Poner"),
                Span::Separator("("),
                Span::Word("Rojo"),
                Span::Separator(")"),
            ]
        );
    }

    #[test]
    fn repeated_whitespace_is_one_char_per_span() {
        let got = spans("a  \n\tb");
        assert_eq!(got.len(), 6);
        assert_eq!(got[0], Span::Word("a"));
        assert_eq!(got[5], Span::Word("b"));
        assert!(got[1..5].iter().all(|s| !s.is_word()));
    }

    #[test]
    fn non_ascii_and_symbols_are_word_chars() {
        assert_eq!(
            spans("esVacía $GBS_X$ x+y"),
            vec![
                Span::Word("esVacía"),
                Span::Separator(" "),
                Span::Word("$GBS_X$"),
                Span::Separator(" "),
                Span::Word("x+y"),
            ]
        );
    }

    #[test]
    fn concatenated_spans_reproduce_input() {
        let input = "program {\n  Poner( Rojo ); x:=a-b<=c.d[1]\r\n}";
        let joined: String = spans(input).iter().map(Span::text).collect();
        assert_eq!(joined, input);
    }

    #[test]
    fn peek_does_not_advance() {
        let separators = SeparatorSet::default();
        let mut scanner = WordScanner::new("ab cd", &separators);
        assert!(scanner.at_word());
        assert_eq!(scanner.peek_word(), Some("ab"));
        assert_eq!(scanner.peek_word(), Some("ab"));
        assert_eq!(scanner.peek_char(), Some('a'));
        assert_eq!(scanner.position(), 0);
        assert_eq!(scanner.next_word(), Some("ab"));
        assert!(!scanner.at_word());
        assert_eq!(scanner.peek_word(), None);
        assert_eq!(scanner.next_char(), Some(' '));
        assert_eq!(scanner.next_word(), Some("cd"));
    }

    #[test]
    fn end_of_input_is_a_quiet_no_op() {
        let separators = SeparatorSet::default();
        let mut scanner = WordScanner::new("é", &separators);
        assert_eq!(scanner.next_char(), Some('é'));
        assert!(scanner.is_at_end());
        assert_eq!(scanner.next_char(), None);
        assert_eq!(scanner.next_word(), None);
        assert_eq!(scanner.next_span(), None);
        assert_eq!(scanner.peek_char(), None);
        assert!(!scanner.at_word());
    }

    #[test]
    fn custom_separators() {
        let separators = SeparatorSet::default().with(['\r', '+']);
        let input = "x+y\r\n";
        let words: Vec<&str> = WordScanner::new(input, &separators)
            .filter(Span::is_word)
            .map(|s| s.text())
            .collect();
        assert_eq!(words, vec!["x", "y"]);
        assert!(SeparatorSet::default().is_word_char('\r'));
    }

    #[test]
    fn first_separator_in_text() {
        let separators = SeparatorSet::default();
        assert_eq!(separators.first_in("$"), None);
        assert_eq!(separators.first_in("«»"), None);
        assert_eq!(separators.first_in("x<y>"), Some('<'));
        assert_eq!(separators.first_in(""), None);
    }
}
