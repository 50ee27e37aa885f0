use std::any::Any;
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use strum::IntoEnumIterator;

use crate::arg::value::IntoValue;
use crate::errors::ResolveResult;
use crate::resolve::builtin::{
    BooleanResolver, CharResolver, ChoiceResolver, EnumResolver, NumberResolver, StringResolver,
};
use crate::resolve::context::ResolutionContext;
use crate::resolve::parameter::{BuiltinType, CommandParameter, TypeKey};
use crate::resolve::resolver::{ErasedResolver, ValueResolver, resolver_fn};

/// Maps declared parameter types to resolvers.
///
/// Lookup is an exact match on the normalized [`TypeKey`]. User registrations
/// live in a separate table that is consulted before the built-ins.
pub struct ResolverRegistry {
    builtins: HashMap<TypeKey, Box<dyn ErasedResolver>>,
    overrides: HashMap<TypeKey, Box<dyn ErasedResolver>>,
}

impl ResolverRegistry {
    pub fn new() -> Self {
        let mut builtins: HashMap<TypeKey, Box<dyn ErasedResolver>> = HashMap::new();
        for builtin in BuiltinType::iter() {
            builtins.insert(builtin.into(), builtin_resolver(builtin));
        }
        Self {
            builtins,
            overrides: HashMap::new(),
        }
    }

    /// A registry with no built-in resolvers at all.
    pub fn empty() -> Self {
        Self {
            builtins: HashMap::new(),
            overrides: HashMap::new(),
        }
    }

    pub fn register<R>(&mut self, key: impl Into<TypeKey>, resolver: R) -> &mut Self
    where
        R: ValueResolver + Send + Sync + 'static,
    {
        self.overrides.insert(key.into(), Box::new(resolver));
        self
    }

    pub fn register_fn<F, T>(&mut self, key: impl Into<TypeKey>, f: F) -> &mut Self
    where
        F: Fn(&mut ResolutionContext<'_>) -> ResolveResult<T> + Send + Sync + 'static,
        T: IntoValue + 'static,
    {
        self.register(key, resolver_fn(f))
    }

    pub fn register_enum<E>(&mut self, key: impl Into<TypeKey>) -> &mut Self
    where
        E: FromStr + IntoEnumIterator + AsRef<str> + Any + Send + Sync,
    {
        self.register(key, EnumResolver::<E>::new())
    }

    pub fn register_choices<I, S>(&mut self, key: impl Into<TypeKey>, choices: I) -> &mut Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.register(key, ChoiceResolver::new(choices))
    }

    pub fn resolver_for(&self, key: &TypeKey) -> Option<&dyn ErasedResolver> {
        self.overrides
            .get(key)
            .or_else(|| self.builtins.get(key))
            .map(|r| r.as_ref())
    }

    pub fn contains(&self, key: &TypeKey) -> bool {
        self.resolver_for(key).is_some()
    }

    /// Declared types in `parameters` that have no resolver, in order, deduplicated.
    pub fn missing_types<'p>(&self, parameters: &'p [CommandParameter]) -> Vec<&'p TypeKey> {
        let mut out: Vec<&TypeKey> = Vec::new();
        for p in parameters {
            let key = p.type_key();
            if !self.contains(key) && !out.contains(&key) {
                out.push(key);
            }
        }
        out
    }
}

impl fmt::Debug for ResolverRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut overrides: Vec<&str> = self.overrides.keys().map(|k| k.as_str()).collect();
        overrides.sort_unstable();
        f.debug_struct("ResolverRegistry")
            .field("builtins", &self.builtins.len())
            .field("overrides", &overrides)
            .finish()
    }
}

impl Default for ResolverRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn builtin_resolver(builtin: BuiltinType) -> Box<dyn ErasedResolver> {
    match builtin {
        BuiltinType::Byte => Box::new(NumberResolver::<i8>::new()),
        BuiltinType::Short => Box::new(NumberResolver::<i16>::new()),
        BuiltinType::Int => Box::new(NumberResolver::<i32>::new()),
        BuiltinType::Long => Box::new(NumberResolver::<i64>::new()),
        BuiltinType::Float => Box::new(NumberResolver::<f32>::new()),
        BuiltinType::Double => Box::new(NumberResolver::<f64>::new()),
        BuiltinType::Boolean => Box::new(BooleanResolver),
        BuiltinType::Char => Box::new(CharResolver),
        BuiltinType::String => Box::new(StringResolver),
    }
}
