//! Command line tokenizer.
//!
//! Tokens are separated by runs of spaces and tabs. A token that starts with
//! `"` runs to the next unescaped `"` (or the end of the line) and may contain
//! blanks; inside it `\"` stands for a literal quote. There is no other
//! escaping and no nesting.

use std::borrow::Cow;

fn is_blank(b: u8) -> bool {
    b == b' ' || b == b'\t'
}

/// Split `line` into at most `max_args` tokens. Extra tokens are dropped.
///
/// Tokens borrow from `line` unless an escaped quote had to be collapsed.
pub fn tokenize(line: &str, max_args: usize) -> Vec<Cow<'_, str>> {
    let bytes = line.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;

    while tokens.len() < max_args {
        while i < bytes.len() && is_blank(bytes[i]) {
            i += 1;
        }
        if i >= bytes.len() {
            break;
        }

        if bytes[i] == b'"' {
            let start = i + 1;
            let mut end = start;
            let mut escaped = false;
            while end < bytes.len() && bytes[end] != b'"' {
                if bytes[end] == b'\\' && bytes.get(end + 1) == Some(&b'"') {
                    escaped = true;
                    end += 1;
                }
                end += 1;
            }
            let raw = &line[start..end];
            tokens.push(if escaped {
                Cow::Owned(raw.replace("\\\"", "\""))
            } else {
                Cow::Borrowed(raw)
            });
            // Step over the closing quote, if there is one.
            i = (end + 1).min(bytes.len());
        } else {
            let start = i;
            while i < bytes.len() && !is_blank(bytes[i]) {
                i += 1;
            }
            tokens.push(Cow::Borrowed(&line[start..i]));
        }
    }

    tokens
}
