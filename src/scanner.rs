//! Delimiter scanning
//!
//! Splits an input string into literal text and placeholder spans in a single
//! left-to-right pass. Supported syntax, shown for `${` / `}`:
//! - `${body}` → placeholder with body `body`
//! - `${a${b}c}` → one placeholder with body `a${b}c` (balanced nesting)
//! - `\${body}` → literal `${body}` (the backslash is dropped)
//! - `${body` with no closing token → the rest of the input is literal
//!
//! Nesting is tracked with a depth counter, never recursion, so arbitrarily
//! deep inputs scan in constant stack space.

use crate::config::DelimiterConfig;
use std::ops::Range;

const ESCAPE: u8 = b'\\';

/// A matched `prefix + body + suffix` span
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholder<'a> {
    /// Byte range of the whole placeholder, delimiters included
    pub span: Range<usize>,

    /// Text between the outer delimiters, nested delimiters included
    pub body: &'a str,
}

impl<'a> Placeholder<'a> {
    /// The placeholder exactly as written in `input`
    pub fn as_written<'s>(&self, input: &'s str) -> &'s str {
        &input[self.span.clone()]
    }
}

/// One piece of scanned input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment<'a> {
    /// Text to copy to the output as-is
    Literal(&'a str),

    /// A balanced placeholder
    Placeholder(Placeholder<'a>),
}

/// Iterator over the [`Segment`]s of an input string
///
/// Concatenating every segment (placeholders as written) reproduces the input
/// with escape backslashes removed.
#[derive(Debug, Clone)]
pub struct Scanner<'a> {
    input: &'a str,
    prefix: &'a str,
    suffix: &'a str,
    cursor: usize,
    pending: Option<Segment<'a>>,
}

impl<'a> Scanner<'a> {
    pub fn new(input: &'a str, config: &'a DelimiterConfig) -> Self {
        Self {
            input,
            prefix: config.prefix(),
            suffix: config.suffix(),
            cursor: 0,
            pending: None,
        }
    }

    /// Emit `before` (when non-empty) now and `next` on the following call
    fn emit(&mut self, before: &'a str, next: Segment<'a>) -> Segment<'a> {
        if before.is_empty() {
            next
        } else {
            self.pending = Some(next);
            Segment::Literal(before)
        }
    }

    /// Find the `suffix` closing a placeholder whose body starts at `from`.
    ///
    /// Returns the byte offset of that `suffix`, or `None` when the input ends
    /// while the depth is still positive. When both tokens start at the same
    /// offset the `suffix` wins, otherwise identical pairs could never close.
    fn match_balanced(&self, from: usize) -> Option<usize> {
        let mut prefixes = Finder::new(self.prefix);
        let mut suffixes = Finder::new(self.suffix);
        let mut depth = 1usize;
        let mut pos = from;

        loop {
            let close = suffixes.next_from(self.input, pos)?;
            match prefixes.next_from(self.input, pos) {
                Some(open) if open < close => {
                    depth += 1;
                    pos = open + self.prefix.len();
                }
                _ => {
                    depth -= 1;
                    if depth == 0 {
                        return Some(close);
                    }
                    pos = close + self.suffix.len();
                }
            }
        }
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = Segment<'a>;

    fn next(&mut self) -> Option<Segment<'a>> {
        if let Some(segment) = self.pending.take() {
            return Some(segment);
        }

        let input = self.input;
        let start = self.cursor;
        if start >= input.len() {
            return None;
        }

        let Some(found) = input[start..].find(self.prefix) else {
            self.cursor = input.len();
            return Some(Segment::Literal(&input[start..]));
        };
        let open = start + found;
        let body_start = open + self.prefix.len();

        // Only unconsumed text can escape; a backslash ending the previous
        // suffix belongs to that suffix.
        if open > start && input.as_bytes()[open - 1] == ESCAPE {
            self.cursor = body_start;
            let escaped = Segment::Literal(&input[open..body_start]);
            return Some(self.emit(&input[start..open - 1], escaped));
        }

        match self.match_balanced(body_start) {
            Some(close) => {
                let end = close + self.suffix.len();
                self.cursor = end;
                let placeholder = Placeholder {
                    span: open..end,
                    body: &input[body_start..close],
                };
                Some(self.emit(&input[start..open], Segment::Placeholder(placeholder)))
            }
            None => {
                tracing::trace!(offset = open, "unterminated placeholder, keeping tail literal");
                self.cursor = input.len();
                Some(Segment::Literal(&input[start..]))
            }
        }
    }
}

/// Forward search for one token that remembers its last hit, so repeated
/// queries from increasing offsets never rescan the same text.
struct Finder<'n> {
    needle: &'n str,
    next: Option<usize>,
    exhausted: bool,
}

impl<'n> Finder<'n> {
    fn new(needle: &'n str) -> Self {
        Self {
            needle,
            next: None,
            exhausted: false,
        }
    }

    fn next_from(&mut self, haystack: &str, pos: usize) -> Option<usize> {
        if self.exhausted {
            return None;
        }
        if let Some(next) = self.next {
            if next >= pos {
                return Some(next);
            }
        }

        self.next = haystack[pos..].find(self.needle).map(|i| pos + i);
        self.exhausted = self.next.is_none();
        self.next
    }
}

/// Collect every placeholder in `input`, in order of appearance
pub fn find_placeholders<'a>(input: &'a str, config: &'a DelimiterConfig) -> Vec<Placeholder<'a>> {
    Scanner::new(input, config)
        .filter_map(|segment| match segment {
            Segment::Placeholder(placeholder) => Some(placeholder),
            Segment::Literal(_) => None,
        })
        .collect()
}
