//! Tokenization for the template engine
//!
//! Splits a template into literal text and placeholder expressions in a
//! single forward pass. Escape handling happens here so the renderer only
//! sees text to copy and expressions to look up.

use std::collections::VecDeque;

use crate::template::error::TemplateError;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// A piece of a template
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Segment<'a> {
    /// Literal text, copied verbatim
    Text(&'a str),

    /// Raw expression between `{{` and `}}` (untrimmed)
    Placeholder { expr: &'a str, line: usize },
}

/// Iterator over the segments of a template string
///
/// Backslashes directly in front of `{{` follow the usual rule: an odd
/// count escapes the placeholder, and every pair collapses to one
/// backslash in the output.
pub(crate) struct TokenStream<'a> {
    text: &'a str,
    pos: usize,
    line: usize,
    pending: VecDeque<Segment<'a>>,
    failed: bool,
}

impl<'a> TokenStream<'a> {
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            line: 1,
            pending: VecDeque::new(),
            failed: false,
        }
    }

    fn push_text(&mut self, text: &'a str) {
        if !text.is_empty() {
            self.line += count_newlines(text);
            self.pending.push_back(Segment::Text(text));
        }
    }

    /// Scan up to and including the next `{{...}}`
    fn advance(&mut self) -> Result<(), TemplateError> {
        let rest = &self.text[self.pos..];

        let Some(rel_open) = rest.find(OPEN) else {
            self.push_text(rest);
            self.pos = self.text.len();
            return Ok(());
        };

        let open = self.pos + rel_open;
        let backslashes = count_backslashes_before(&self.text[self.pos..open]);
        let text_end = open - backslashes;

        self.push_text(&self.text[self.pos..text_end]);
        self.push_text(&self.text[text_end..text_end + backslashes / 2]);

        let body_start = open + OPEN.len();
        let escaped = backslashes % 2 == 1;

        let Some(rel_close) = self.text[body_start..].find(CLOSE) else {
            let message = if escaped {
                "Unclosed escaped placeholder"
            } else {
                "Unclosed placeholder"
            };
            return Err(TemplateError::MalformedSyntax {
                message: message.to_string(),
                line: self.line,
            });
        };

        let close = body_start + rel_close;
        let end = close + CLOSE.len();

        if escaped {
            self.push_text(&self.text[open..end]);
        } else {
            let expr = &self.text[body_start..close];
            self.pending.push_back(Segment::Placeholder {
                expr,
                line: self.line,
            });
            self.line += count_newlines(expr);
        }

        self.pos = end;
        Ok(())
    }
}

impl<'a> Iterator for TokenStream<'a> {
    type Item = Result<Segment<'a>, TemplateError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(segment) = self.pending.pop_front() {
                return Some(Ok(segment));
            }
            if self.failed || self.pos >= self.text.len() {
                return None;
            }
            if let Err(e) = self.advance() {
                self.failed = true;
                self.pending.clear();
                return Some(Err(e));
            }
        }
    }
}

/// Count trailing backslashes of `text`
fn count_backslashes_before(text: &str) -> usize {
    text.bytes().rev().take_while(|&b| b == b'\\').count()
}

fn count_newlines(text: &str) -> usize {
    text.bytes().filter(|&b| b == b'\n').count()
}
