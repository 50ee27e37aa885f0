use std::str::FromStr;

use strum_macros::{AsRefStr, Display, EnumIter as EnumIterDerive};

use crate::errors::{ResolveError, ResolveResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, AsRefStr, EnumIterDerive)]
#[strum(serialize_all = "lowercase")]
pub enum NumberKind {
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
}

/// Numeric primitives a single token can be parsed into.
pub trait PrimitiveNumber: FromStr + Copy {
    const KIND: NumberKind;

    /// Rejects values `FromStr` accepted but that fall outside the kind's range.
    fn in_range(self, _token: &str) -> bool {
        true
    }
}

impl PrimitiveNumber for i8 {
    const KIND: NumberKind = NumberKind::Byte;
}

impl PrimitiveNumber for i16 {
    const KIND: NumberKind = NumberKind::Short;
}

impl PrimitiveNumber for i32 {
    const KIND: NumberKind = NumberKind::Int;
}

impl PrimitiveNumber for i64 {
    const KIND: NumberKind = NumberKind::Long;
}

impl PrimitiveNumber for f32 {
    const KIND: NumberKind = NumberKind::Float;
    fn in_range(self, token: &str) -> bool {
        !self.is_infinite() || is_infinity_literal(token)
    }
}

impl PrimitiveNumber for f64 {
    const KIND: NumberKind = NumberKind::Double;
    fn in_range(self, token: &str) -> bool {
        !self.is_infinite() || is_infinity_literal(token)
    }
}

// Float parsing saturates to infinity on overflow; only an explicit
// infinity spelling may produce one.
fn is_infinity_literal(token: &str) -> bool {
    let unsigned = token.strip_prefix(['+', '-']).unwrap_or(token);
    unsigned.eq_ignore_ascii_case("inf") || unsigned.eq_ignore_ascii_case("infinity")
}

pub fn parse_number<N: PrimitiveNumber>(token: &str) -> ResolveResult<N> {
    token
        .parse::<N>()
        .ok()
        .filter(|value| value.in_range(token))
        .ok_or_else(|| ResolveError::invalid_number(N::KIND, token))
}

pub fn parse_byte(token: &str) -> ResolveResult<i8> {
    parse_number(token)
}

pub fn parse_short(token: &str) -> ResolveResult<i16> {
    parse_number(token)
}

pub fn parse_int(token: &str) -> ResolveResult<i32> {
    parse_number(token)
}

pub fn parse_long(token: &str) -> ResolveResult<i64> {
    parse_number(token)
}

pub fn parse_float(token: &str) -> ResolveResult<f32> {
    parse_number(token)
}

pub fn parse_double(token: &str) -> ResolveResult<f64> {
    parse_number(token)
}
