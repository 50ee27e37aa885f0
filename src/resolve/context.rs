use crate::arg::numbers::PrimitiveNumber;
use crate::arg::numbers::parse_number;
use crate::arg::stack::ArgumentStack;
use crate::errors::ResolveResult;
use crate::resolve::parameter::CommandParameter;

/// Everything a resolver sees while producing one parameter's value.
///
/// The stack is borrowed mutably for the lifetime of the context, so only one
/// context can drive it at a time. Pops through the context are visible to
/// every resolver that runs after this one in the same pass.
pub struct ResolutionContext<'a> {
    stack: &'a mut ArgumentStack,
    parameter: &'a CommandParameter,
    command: &'a str,
    input: &'a [String],
}

impl<'a> ResolutionContext<'a> {
    pub fn new(
        stack: &'a mut ArgumentStack,
        parameter: &'a CommandParameter,
        command: &'a str,
        input: &'a [String],
    ) -> Self {
        Self {
            stack,
            parameter,
            command,
            input,
        }
    }

    /// Live stack; may already be shorter than the raw input.
    pub fn arguments(&mut self) -> &mut ArgumentStack {
        &mut *self.stack
    }

    pub fn parameter(&self) -> &CommandParameter {
        self.parameter
    }

    pub fn command(&self) -> &str {
        self.command
    }

    /// Original, unmodified input of this invocation.
    pub fn input(&self) -> &[String] {
        self.input
    }

    pub fn pop_for_parameter(&mut self) -> ResolveResult<String> {
        self.stack.pop_for_parameter(self.parameter)
    }

    pub fn pop(&mut self) -> ResolveResult<String> {
        self.stack.pop()
    }

    pub fn peek(&self) -> ResolveResult<&str> {
        self.stack.peek()
    }

    /// Pops one token and parses it; the token stays consumed if parsing fails.
    pub fn pop_number<N: PrimitiveNumber>(&mut self) -> ResolveResult<N> {
        let tok = self.pop()?;
        parse_number(&tok)
    }

    pub fn pop_int(&mut self) -> ResolveResult<i32> {
        self.pop_number()
    }

    pub fn pop_double(&mut self) -> ResolveResult<f64> {
        self.pop_number()
    }

    pub fn pop_byte(&mut self) -> ResolveResult<i8> {
        self.pop_number()
    }

    pub fn pop_short(&mut self) -> ResolveResult<i16> {
        self.pop_number()
    }

    pub fn pop_float(&mut self) -> ResolveResult<f32> {
        self.pop_number()
    }

    pub fn pop_long(&mut self) -> ResolveResult<i64> {
        self.pop_number()
    }
}
