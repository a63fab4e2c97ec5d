//! JSX angle-delimiter detection
//!
//! Finds the `<`, `</`, `>` and `/>` delimiters of JSX-looking tags so
//! they can be styled apart from comparison operators. Heuristic, not a
//! parser: a `<` opens a tag when it is followed by a letter (or `/` and
//! a letter) and the preceding non-space character is neither an
//! identifier character nor `)`.

use super::kinds::TokenKind;
use super::span::Span;

fn is_ident(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_' || ch == '$'
}

/// Scan text for JSX angle delimiters
pub fn scan_delimiters(text: &str) -> Vec<Span> {
    let chars: Vec<(usize, char)> = text.char_indices().collect();
    let n = chars.len();
    let mut out = Vec::new();
    let mut i = 0;

    while i < n {
        if chars[i].1 != '<' {
            i += 1;
            continue;
        }

        let next = chars.get(i + 1).map(|&(_, c)| c);
        let looks_like_tag = match next {
            Some('/') => chars.get(i + 2).is_some_and(|&(_, c)| c.is_ascii_alphabetic()),
            Some(c) => c.is_ascii_alphabetic(),
            None => false,
        };
        let prev = chars[..i].iter().rev().find(|&&(_, c)| !c.is_whitespace());
        let ok_left = prev.map_or(true, |&(_, c)| !is_ident(c) && c != ')');

        if !(looks_like_tag && ok_left) {
            i += 1;
            continue;
        }

        // Mark "<" or "</"
        let open_at = chars[i].0;
        if next == Some('/') {
            out.push(Span::new(open_at, open_at + 2, TokenKind::JsxDelimiter));
            i += 2;
        } else {
            out.push(Span::new(open_at, open_at + 1, TokenKind::JsxDelimiter));
            i += 1;
        }

        // Advance to the closing '>' honoring quotes and {...} nesting
        let mut j = i;
        let mut quote: Option<char> = None;
        let mut brace = 0usize;
        while j < n {
            let ch = chars[j].1;
            if let Some(q) = quote {
                if ch == q && chars[j - 1].1 != '\\' {
                    quote = None;
                }
            } else {
                match ch {
                    '{' => brace += 1,
                    '}' => brace = brace.saturating_sub(1),
                    '\'' | '"' => quote = Some(ch),
                    '>' if brace == 0 => {
                        let at = chars[j].0;
                        if chars[j - 1].1 == '/' {
                            out.push(Span::new(at - 1, at + 1, TokenKind::JsxDelimiter));
                        } else {
                            out.push(Span::new(at, at + 1, TokenKind::JsxDelimiter));
                        }
                        break;
                    }
                    _ => {}
                }
            }
            j += 1;
        }
        if j < n {
            i = j + 1;
        }
        // Unterminated tag: keep scanning from where we are
    }

    out
}
