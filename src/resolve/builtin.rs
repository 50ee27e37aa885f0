use std::any::Any;
use std::marker::PhantomData;
use std::str::FromStr;

use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, EnumIter as EnumIterDerive, EnumString};

use crate::arg::numbers::PrimitiveNumber;
use crate::arg::value::{IntoValue, Value};
use crate::errors::{ResolveError, ResolveResult};
use crate::extensions::enums::valid_csv;
use crate::resolve::context::ResolutionContext;
use crate::resolve::resolver::ValueResolver;

pub struct NumberResolver<N>(PhantomData<fn() -> N>);

impl<N> NumberResolver<N> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<N> Default for NumberResolver<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<N: PrimitiveNumber + IntoValue> ValueResolver for NumberResolver<N> {
    type Output = N;
    fn resolve(&self, ctx: &mut ResolutionContext<'_>) -> ResolveResult<N> {
        ctx.pop_number::<N>()
    }
}

/// The only resolver that honours greedy parameters.
pub struct StringResolver;

impl ValueResolver for StringResolver {
    type Output = String;
    fn resolve(&self, ctx: &mut ResolutionContext<'_>) -> ResolveResult<String> {
        ctx.pop_for_parameter()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, AsRefStr, EnumIterDerive)]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
enum BoolFormat {
    True,
    False,
    Yes,
    No,
    On,
    Off,
}

impl BoolFormat {
    #[inline]
    fn to_bool(self) -> bool {
        matches!(self, BoolFormat::True | BoolFormat::Yes | BoolFormat::On)
    }
}

pub struct BooleanResolver;

impl ValueResolver for BooleanResolver {
    type Output = bool;
    fn resolve(&self, ctx: &mut ResolutionContext<'_>) -> ResolveResult<bool> {
        let tok = ctx.pop()?;
        BoolFormat::from_str(&tok)
            .map(BoolFormat::to_bool)
            .map_err(|_| {
                ResolveError::semantic(format!(
                    "Expected a boolean, got '{}'. Valid booleans: {}",
                    tok,
                    valid_csv::<BoolFormat>()
                ))
            })
    }
}

pub struct CharResolver;

impl ValueResolver for CharResolver {
    type Output = char;
    fn resolve(&self, ctx: &mut ResolutionContext<'_>) -> ResolveResult<char> {
        let tok = ctx.pop()?;
        let mut chars = tok.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Ok(c),
            _ => Err(ResolveError::semantic(format!(
                "Expected a single character, got '{tok}'"
            ))),
        }
    }
}

/// Resolves one token into a variant of a strum-derived enum.
pub struct EnumResolver<E>(PhantomData<fn() -> E>);

impl<E> EnumResolver<E> {
    pub fn new() -> Self {
        Self(PhantomData)
    }
}

impl<E> Default for EnumResolver<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> ValueResolver for EnumResolver<E>
where
    E: FromStr + IntoEnumIterator + AsRef<str> + Any + Send + Sync,
{
    type Output = Value;
    fn resolve(&self, ctx: &mut ResolutionContext<'_>) -> ResolveResult<Value> {
        let tok = ctx.pop()?;
        E::from_str(&tok).map(Value::custom).map_err(|_| {
            ResolveError::semantic(format!(
                "Invalid {}: '{}'. Valid values: {}",
                ctx.parameter().type_key(),
                tok,
                valid_csv::<E>()
            ))
        })
    }
}

/// Resolves one token against a fixed list of choices, case-insensitively.
#[derive(Debug, Clone)]
pub struct ChoiceResolver {
    choices: Vec<String>,
}

impl ChoiceResolver {
    pub fn new<I, S>(choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            choices: choices.into_iter().map(Into::into).collect(),
        }
    }

    pub fn choices(&self) -> &[String] {
        &self.choices
    }
}

impl ValueResolver for ChoiceResolver {
    type Output = String;
    fn resolve(&self, ctx: &mut ResolutionContext<'_>) -> ResolveResult<String> {
        let tok = ctx.pop()?;
        self.choices
            .iter()
            .find(|c| c.eq_ignore_ascii_case(&tok))
            .cloned()
            .ok_or_else(|| {
                ResolveError::semantic(format!(
                    "Invalid {}: '{}'. Valid choices: {}",
                    ctx.parameter().type_key(),
                    tok,
                    self.choices.join(", ")
                ))
            })
    }
}
