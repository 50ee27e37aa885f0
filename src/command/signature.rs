use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::resolve::parameter::CommandParameter;

/// A command's name and its ordered parameter list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandSignature {
    name: String,
    #[serde(default)]
    aliases: Vec<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    parameters: Vec<CommandParameter>,
}

impl CommandSignature {
    pub fn new(name: impl Into<String>, parameters: Vec<CommandParameter>) -> Result<Self> {
        Self {
            name: name.into(),
            aliases: Vec::new(),
            description: None,
            parameters,
        }
        .validated()
    }

    pub fn with_aliases<I, S>(mut self, aliases: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.aliases = aliases.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Assigns positions and checks registration rules. Signatures read from
    /// config go through this before they are used.
    pub fn validated(mut self) -> Result<Self> {
        let name = self.name.trim();
        if name.is_empty() || name.contains(char::is_whitespace) {
            return Err(Error::signature(format!(
                "Command name '{}' must be a single non-empty word.",
                self.name
            )));
        }

        let mut words = HashSet::from([name.to_ascii_lowercase()]);
        for alias in &self.aliases {
            let word = alias.trim();
            if word.is_empty() || word.contains(char::is_whitespace) {
                return Err(Error::signature(format!(
                    "Alias '{}' of '{}' must be a single non-empty word.",
                    alias, self.name
                )));
            }
            if !words.insert(word.to_ascii_lowercase()) {
                return Err(Error::signature(format!(
                    "Alias '{}' of '{}' repeats a name already used by this command.",
                    alias, self.name
                )));
            }
        }

        let mut seen = HashSet::new();
        let last = self.parameters.len().saturating_sub(1);
        for (i, p) in self.parameters.iter().enumerate() {
            if p.name().trim().is_empty() {
                return Err(Error::signature(format!(
                    "Parameter #{i} of '{}' has no name.",
                    self.name
                )));
            }
            if !seen.insert(p.name().to_string()) {
                return Err(Error::signature(format!(
                    "Duplicate parameter '{}' in '{}'.",
                    p.name(),
                    self.name
                )));
            }
            if p.consumes_all_string() && i != last {
                return Err(Error::signature(format!(
                    "Greedy parameter '{}' of '{}' must be the last parameter.",
                    p.name(),
                    self.name
                )));
            }
        }

        self.parameters = self
            .parameters
            .into_iter()
            .enumerate()
            .map(|(i, p)| p.at(i))
            .collect();
        Ok(self)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn aliases(&self) -> &[String] {
        &self.aliases
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn parameters(&self) -> &[CommandParameter] {
        &self.parameters
    }

    /// `name <required> [optional] <greedy...>`
    pub fn usage(&self) -> String {
        let mut out = self.name.clone();
        for p in &self.parameters {
            let dots = if p.consumes_all_string() { "..." } else { "" };
            if p.has_fallback() {
                out.push_str(&format!(" [{}{dots}]", p.name()));
            } else {
                out.push_str(&format!(" <{}{dots}>", p.name()));
            }
        }
        out
    }
}
