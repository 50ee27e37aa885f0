use crate::arg::stack::ArgumentStack;
use crate::arg::value::{FromValue, Value};
use crate::command::signature::CommandSignature;
use crate::errors::{BindingError, ResolveError, ResolveResult};
use crate::logging::{LogTarget, Logger};
use crate::resolve::context::ResolutionContext;
use crate::resolve::parameter::CommandParameter;
use crate::resolve::registry::ResolverRegistry;
use crate::resolve::resolver::ErasedResolver;

/// Values of a completed binding pass, in parameter order.
#[derive(Debug, Clone)]
pub struct BoundArguments {
    names: Vec<String>,
    values: Vec<Value>,
}

impl BoundArguments {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn value(&self, position: usize) -> Option<&Value> {
        self.values.get(position)
    }

    pub fn get<'a, T: FromValue<'a>>(&'a self, position: usize) -> Option<T> {
        self.values.get(position).and_then(T::try_extract)
    }

    pub fn custom<T: 'static>(&self, position: usize) -> Option<&T> {
        self.values.get(position).and_then(Value::downcast_ref)
    }

    pub fn by_name(&self, name: &str) -> Option<&Value> {
        let idx = self.names.iter().position(|n| n == name)?;
        self.values.get(idx)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.names.iter().map(|n| n.as_str()).zip(self.values.iter())
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn into_values(self) -> Vec<Value> {
        self.values
    }
}

/// Runs binding passes against a registry.
pub struct Binder<'r> {
    registry: &'r ResolverRegistry,
    logger: Option<Logger>,
}

impl<'r> Binder<'r> {
    pub fn new(registry: &'r ResolverRegistry) -> Self {
        Self {
            registry,
            logger: None,
        }
    }

    /// Pass outcomes are written to the logger's file target only.
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    pub fn bind(
        &self,
        signature: &CommandSignature,
        raw: &[String],
    ) -> Result<BoundArguments, BindingError> {
        self.bind_parameters(signature.name(), signature.parameters(), raw)
    }

    pub fn bind_parameters(
        &self,
        command: &str,
        parameters: &[CommandParameter],
        raw: &[String],
    ) -> Result<BoundArguments, BindingError> {
        let mut stack = ArgumentStack::new(raw);
        self.bind_stack(command, parameters, &mut stack, raw)
    }

    /// Binds against a caller-owned stack so its state can be inspected after
    /// the pass. Consumed tokens are never restored, even on failure.
    pub fn bind_stack(
        &self,
        command: &str,
        parameters: &[CommandParameter],
        stack: &mut ArgumentStack,
        input: &[String],
    ) -> Result<BoundArguments, BindingError> {
        let arity = parameters.len();
        let fail = |position: usize, kind: ResolveError| BindingError {
            position,
            parameter: parameters[position].name().to_string(),
            arity,
            kind,
        };

        // Every type must resolve before the first token is touched.
        let mut resolvers: Vec<&dyn ErasedResolver> = Vec::with_capacity(arity);
        for (position, parameter) in parameters.iter().enumerate() {
            match self.registry.resolver_for(parameter.type_key()) {
                Some(r) => resolvers.push(r),
                None => {
                    let err = fail(
                        position,
                        ResolveError::UnknownType(parameter.type_key().clone()),
                    );
                    self.trace_failure(command, &err);
                    return Err(err);
                }
            }
        }

        let mut values = Vec::with_capacity(arity);
        for (position, (parameter, resolver)) in parameters.iter().zip(resolvers).enumerate() {
            match resolve_one(resolver, stack, parameter, command, input) {
                Ok(value) => values.push(value),
                Err(kind) => {
                    let err = fail(position, kind);
                    self.trace_failure(command, &err);
                    return Err(err);
                }
            }
        }

        if let Some(logger) = &self.logger {
            logger.info(
                format!(
                    "bound {arity} parameter(s) for '{command}', {} token(s) left",
                    stack.len()
                ),
                LogTarget::FileOnly,
            );
        }
        Ok(BoundArguments {
            names: parameters.iter().map(|p| p.name().to_string()).collect(),
            values,
        })
    }

    fn trace_failure(&self, command: &str, err: &BindingError) {
        if let Some(logger) = &self.logger {
            logger.warn(
                format!("binding '{command}' failed: {err}"),
                LogTarget::FileOnly,
            );
        }
    }
}

fn resolve_one(
    resolver: &dyn ErasedResolver,
    stack: &mut ArgumentStack,
    parameter: &CommandParameter,
    command: &str,
    input: &[String],
) -> ResolveResult<Value> {
    if stack.is_empty() && parameter.has_fallback() {
        let Some(raw_default) = parameter.default_value() else {
            return Ok(Value::Absent);
        };
        return resolve_default(resolver, raw_default, parameter, command, input);
    }
    let mut ctx = ResolutionContext::new(stack, parameter, command, input);
    resolver.resolve_value(&mut ctx)
}

/// Resolves a declared default on its own stack. A blank default is one empty
/// token, and the resolver must use up every token of the default.
fn resolve_default(
    resolver: &dyn ErasedResolver,
    raw_default: &str,
    parameter: &CommandParameter,
    command: &str,
    input: &[String],
) -> ResolveResult<Value> {
    let mut fallback = ArgumentStack::parse(raw_default);
    if fallback.is_empty() {
        fallback = ArgumentStack::new(&[String::new()]);
    }
    let value = {
        let mut ctx = ResolutionContext::new(&mut fallback, parameter, command, input);
        resolver.resolve_value(&mut ctx)?
    };
    if !fallback.is_empty() {
        return Err(ResolveError::semantic(format!(
            "Default '{}' of '{}' has unused token(s): {}",
            raw_default,
            parameter.name(),
            fallback.join(" ")
        )));
    }
    Ok(value)
}
