use std::collections::HashMap;

use crate::command::signature::CommandSignature;
use crate::errors::{Error, Result};

/// Registered command signatures, looked up by name or alias.
#[derive(Debug, Clone, Default)]
pub struct CommandTable {
    commands: Vec<CommandSignature>,
    index: HashMap<String, usize>,
}

impl CommandTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, signature: CommandSignature) -> Result<()> {
        let signature = signature.validated()?;
        let slot = self.commands.len();
        let mut keys = vec![signature.name().to_ascii_lowercase()];
        keys.extend(signature.aliases().iter().map(|a| a.to_ascii_lowercase()));

        for key in &keys {
            if self.index.contains_key(key) {
                return Err(Error::signature(format!(
                    "'{}' is already registered.",
                    key
                )));
            }
        }
        for key in keys {
            self.index.insert(key, slot);
        }
        self.commands.push(signature);
        Ok(())
    }

    pub fn get(&self, command: &str) -> Option<&CommandSignature> {
        let key = command.trim().to_ascii_lowercase();
        self.index.get(&key).map(|&i| &self.commands[i])
    }

    pub fn resolve(&self, command: &str) -> Result<&CommandSignature> {
        self.get(command).ok_or_else(|| Error::unknown(command))
    }

    pub fn iter(&self) -> impl Iterator<Item = &CommandSignature> {
        self.commands.iter()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}
