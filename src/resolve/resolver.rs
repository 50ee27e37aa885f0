use std::marker::PhantomData;

use crate::arg::value::{IntoValue, Value};
use crate::errors::ResolveResult;
use crate::resolve::context::ResolutionContext;

/// Turns context-accessible tokens into one typed value.
///
/// A resolver decides how many tokens its type takes and must consume exactly
/// those; the binder does not pre-count. Errors from context calls propagate
/// with `?`; domain failures use [`crate::errors::ResolveError::Semantic`].
pub trait ValueResolver {
    type Output: IntoValue;

    fn resolve(&self, ctx: &mut ResolutionContext<'_>) -> ResolveResult<Self::Output>;
}

/// Object-safe form stored in the registry.
pub trait ErasedResolver: Send + Sync {
    fn resolve_value(&self, ctx: &mut ResolutionContext<'_>) -> ResolveResult<Value>;
}

impl<R> ErasedResolver for R
where
    R: ValueResolver + Send + Sync,
{
    fn resolve_value(&self, ctx: &mut ResolutionContext<'_>) -> ResolveResult<Value> {
        self.resolve(ctx).map(IntoValue::into_value)
    }
}

/// Adapts a closure into a [`ValueResolver`].
pub struct FnResolver<F, T> {
    f: F,
    _out: PhantomData<fn() -> T>,
}

impl<F, T> ValueResolver for FnResolver<F, T>
where
    F: Fn(&mut ResolutionContext<'_>) -> ResolveResult<T>,
    T: IntoValue,
{
    type Output = T;

    fn resolve(&self, ctx: &mut ResolutionContext<'_>) -> ResolveResult<T> {
        (self.f)(ctx)
    }
}

pub fn resolver_fn<F, T>(f: F) -> FnResolver<F, T>
where
    F: Fn(&mut ResolutionContext<'_>) -> ResolveResult<T>,
    T: IntoValue,
{
    FnResolver {
        f,
        _out: PhantomData,
    }
}
