use std::path::PathBuf;

use crate::config::DEFAULT_CONFIG_PATH;
use crate::core::aliases::TokenList;
use crate::errors::{Error, Result};

pub const USAGE: &str = "Usage: argbind [--config PATH] [--logs DIR] (<command> [tokens...] | --line \"<command line>\" | --list)";

/// What the binary was asked to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Invocation {
    /// Command name followed by already-split tokens.
    Tokens { command: String, tokens: TokenList },
    /// One raw line, split with the quote-aware tokenizer.
    Line(String),
    /// Print the registered signatures.
    List,
}

#[derive(Debug, Clone)]
pub struct CliArgs {
    pub config_path: PathBuf,
    pub logs_dir: Option<PathBuf>,
    pub invocation: Invocation,
}

impl CliArgs {
    pub fn from_env() -> Result<Self> {
        Self::from_args(std::env::args().skip(1))
    }

    /// Flags are read until the first non-flag word (or `--`); that word is
    /// the command and everything after it is passed through as tokens.
    pub fn from_args<I>(mut args: I) -> Result<Self>
    where
        I: Iterator<Item = String>,
    {
        let mut config_path = PathBuf::from(DEFAULT_CONFIG_PATH);
        let mut logs_dir = None;
        let mut invocation = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--config" => config_path = Self::next_value(&mut args, "--config")?.into(),
                "--logs" => logs_dir = Some(Self::next_value(&mut args, "--logs")?.into()),
                "--line" => {
                    let line = Self::next_value(&mut args, "--line")?;
                    Self::set_invocation(&mut invocation, Invocation::Line(line))?;
                }
                "--list" => Self::set_invocation(&mut invocation, Invocation::List)?,
                "--" => {
                    let command = args
                        .next()
                        .ok_or_else(|| Error::cli(format!("Missing command after '--'.\n{USAGE}")))?;
                    let tokens = args.by_ref().collect();
                    Self::set_invocation(&mut invocation, Invocation::Tokens { command, tokens })?;
                }
                flag if flag.starts_with("--") => {
                    return Err(Error::cli(format!("Unknown argument: {flag}\n{USAGE}")));
                }
                _ => {
                    let tokens = args.by_ref().collect();
                    Self::set_invocation(
                        &mut invocation,
                        Invocation::Tokens {
                            command: arg.clone(),
                            tokens,
                        },
                    )?;
                }
            }
        }

        let invocation =
            invocation.ok_or_else(|| Error::cli(format!("Missing command.\n{USAGE}")))?;
        Ok(Self {
            config_path,
            logs_dir,
            invocation,
        })
    }

    /// Only one of a command, `--line` or `--list` may be given.
    fn set_invocation(slot: &mut Option<Invocation>, next: Invocation) -> Result<()> {
        if slot.is_some() {
            return Err(Error::cli(format!(
                "Only one of <command>, --line or --list may be given.\n{USAGE}"
            )));
        }
        *slot = Some(next);
        Ok(())
    }

    fn next_value<I>(args: &mut I, flag: &str) -> Result<String>
    where
        I: Iterator<Item = String>,
    {
        args.next()
            .ok_or_else(|| Error::cli(format!("Missing value for {flag}")))
    }
}
