use std::path::{Path, PathBuf};

use crate::arg::tokenizer::tokenize;
use crate::command::signature::CommandSignature;
use crate::command::table::CommandTable;
use crate::config::Config;
use crate::errors::{Error, Result};
use crate::logging::Logger;
use crate::resolve::binder::{Binder, BoundArguments};
use crate::resolve::registry::ResolverRegistry;

/// Everything the binary needs to bind commands declared in a config file.
#[derive(Debug)]
pub struct AppContext {
    pub config: Config,
    pub table: CommandTable,
    pub registry: ResolverRegistry,
    pub logger: Logger,
    pub config_path: PathBuf,
}

impl AppContext {
    pub fn new_with_paths(config_path: PathBuf, logs_dir: Option<PathBuf>) -> Result<Self> {
        let config = Config::load_from(&config_path)?;
        let logger = Logger::new();
        logger.set_log_dir(logs_dir.as_deref().unwrap_or(config.log_dir()));
        logger.set_file_logging_enabled(config.file_logging_enabled());
        Self::from_config(config, logger, config_path)
    }

    pub fn from_config(config: Config, logger: Logger, config_path: impl AsRef<Path>) -> Result<Self> {
        let table = config.command_table()?;
        let mut registry = ResolverRegistry::new();
        config.install_choices(&mut registry)?;

        for signature in table.iter() {
            let missing = registry.missing_types(signature.parameters());
            if !missing.is_empty() {
                let names: Vec<&str> = missing.iter().map(|k| k.as_str()).collect();
                return Err(Error::config(format!(
                    "Command '{}' uses unknown type(s): {}",
                    signature.name(),
                    names.join(", ")
                )));
            }
        }

        Ok(Self {
            config,
            table,
            registry,
            logger,
            config_path: config_path.as_ref().to_path_buf(),
        })
    }

    pub fn bind(
        &self,
        command: &str,
        tokens: &[String],
    ) -> Result<(&CommandSignature, BoundArguments)> {
        let signature = self.table.resolve(command)?;
        let bound = Binder::new(&self.registry)
            .with_logger(self.logger.clone())
            .bind(signature, tokens)?;
        Ok((signature, bound))
    }

    /// Splits `line` into a command word and its tokens, then binds.
    pub fn bind_line(&self, line: &str) -> Result<(&CommandSignature, BoundArguments)> {
        let mut tokens = tokenize(line);
        if tokens.is_empty() {
            return Err(Error::cli("Empty command line."));
        }
        let command = tokens.remove(0);
        self.bind(&command, &tokens)
    }
}
