use crate::core::aliases::TokenList;

/// Splits a raw command line into tokens.
///
/// Whitespace separates tokens. A single- or double-quoted span is kept as one
/// token with its quotes removed; inside a quoted span a backslash escapes the
/// next character. An unterminated quote runs to the end of the input.
pub fn tokenize(line: &str) -> TokenList {
    let mut out = TokenList::new();
    let mut buf = String::new();
    let mut in_token = false;
    let mut quote: Option<char> = None;
    let mut chars = line.chars();

    while let Some(c) = chars.next() {
        match quote {
            Some(q) => {
                if c == '\\' {
                    if let Some(escaped) = chars.next() {
                        buf.push(escaped);
                    }
                } else if c == q {
                    quote = None;
                } else {
                    buf.push(c);
                }
            }
            None => {
                if c.is_whitespace() {
                    if in_token {
                        out.push(std::mem::take(&mut buf));
                        in_token = false;
                    }
                } else if (c == '"' || c == '\'') && !in_token {
                    quote = Some(c);
                    in_token = true;
                } else {
                    buf.push(c);
                    in_token = true;
                }
            }
        }
    }
    if in_token {
        out.push(buf);
    }
    out
}
