use std::process::ExitCode;

use anyhow::Context;

use argbind::arg::tokenizer::tokenize;
use argbind::core::cli::{CliArgs, Invocation};
use argbind::core::context::AppContext;
use argbind::errors::Error;
use argbind::logging::LogTarget;

const EXIT_SETUP: u8 = 1;
const EXIT_BINDING: u8 = 2;

fn main() -> ExitCode {
    let args = match CliArgs::from_env() {
        Ok(args) => args,
        Err(err) => {
            eprintln!("{err}");
            return ExitCode::from(EXIT_SETUP);
        }
    };
    let ctx = match AppContext::new_with_paths(args.config_path.clone(), args.logs_dir.clone())
        .with_context(|| format!("failed to start from '{}'", args.config_path.display()))
    {
        Ok(ctx) => ctx,
        Err(err) => {
            eprintln!("{err:#}");
            return ExitCode::from(EXIT_SETUP);
        }
    };
    run(&ctx, &args.invocation)
}

fn run(ctx: &AppContext, invocation: &Invocation) -> ExitCode {
    let (command, result) = match invocation {
        Invocation::List => {
            for signature in ctx.table.iter() {
                ctx.logger.info(signature.usage(), LogTarget::ConsoleOnly);
            }
            return ExitCode::SUCCESS;
        }
        Invocation::Tokens { command, tokens } => (command.clone(), ctx.bind(command, tokens)),
        Invocation::Line(line) => (
            tokenize(line).into_iter().next().unwrap_or_default(),
            ctx.bind_line(line),
        ),
    };

    match result {
        Ok((signature, bound)) => {
            for (parameter, value) in signature.parameters().iter().zip(bound.values()) {
                ctx.logger.info(
                    format!("{} ({}) = {}", parameter.name(), parameter.type_key(), value),
                    LogTarget::ConsoleOnly,
                );
            }
            ExitCode::SUCCESS
        }
        Err(Error::Binding(err)) => {
            ctx.logger.error(err.to_string(), LogTarget::ConsoleAndFile);
            if let Some(signature) = ctx.table.get(&command) {
                ctx.logger
                    .error(format!("Usage: {}", signature.usage()), LogTarget::ConsoleOnly);
            }
            ExitCode::from(EXIT_BINDING)
        }
        Err(err) => {
            ctx.logger.error(err.to_string(), LogTarget::ConsoleAndFile);
            ExitCode::from(EXIT_SETUP)
        }
    }
}
