use std::collections::VecDeque;
use std::fmt;

use crate::arg::tokenizer::tokenize;
use crate::errors::{ResolveError, ResolveResult};
use crate::resolve::parameter::CommandParameter;

/// Remaining input of one binding pass.
///
/// Tokens only ever leave from the front, and each leaves at most once. Every
/// resolver in a pass works on the same stack, so whatever one resolver pops
/// is gone for the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArgumentStack {
    toks: VecDeque<String>,
}

impl ArgumentStack {
    pub fn new(raw: &[String]) -> Self {
        raw.iter().cloned().collect()
    }

    /// Tokenizes a raw line (quote-aware) into a fresh stack.
    pub fn parse(line: &str) -> Self {
        tokenize(line).into_iter().collect()
    }

    pub fn len(&self) -> usize {
        self.toks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.toks.is_empty()
    }

    pub fn peek(&self) -> ResolveResult<&str> {
        self.toks
            .front()
            .map(|s| s.as_str())
            .ok_or(ResolveError::ExhaustedInput)
    }

    pub fn pop(&mut self) -> ResolveResult<String> {
        self.toks.pop_front().ok_or(ResolveError::ExhaustedInput)
    }

    /// Pops the token(s) belonging to `parameter`.
    ///
    /// A parameter that consumes all strings takes every remaining token,
    /// joined by a single space. Anything else takes exactly one token.
    pub fn pop_for_parameter(&mut self, parameter: &CommandParameter) -> ResolveResult<String> {
        if !parameter.consumes_all_string() {
            return self.pop();
        }
        if self.is_empty() {
            return Err(ResolveError::ExhaustedInput);
        }
        let joined = self.join(" ");
        self.toks.clear();
        Ok(joined)
    }

    /// Remaining tokens joined by `sep`, without consuming them.
    pub fn join(&self, sep: &str) -> String {
        self.toks
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(sep)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.toks.iter().map(|s| s.as_str())
    }
}

impl FromIterator<String> for ArgumentStack {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            toks: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for ArgumentStack {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, tok) in self.toks.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{tok:?}")?;
        }
        write!(f, "]")
    }
}
