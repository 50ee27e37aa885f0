pub mod arg;
pub mod command;
pub mod config;
pub mod core;
pub mod errors;
pub mod extensions;
pub mod logging;
pub mod resolve;

pub use crate::arg::stack::ArgumentStack;
pub use crate::arg::value::{FromValue, IntoValue, Value};
pub use crate::command::signature::CommandSignature;
pub use crate::errors::{BindingError, Error, ResolveError, ResolveResult, Result};
pub use crate::resolve::binder::{Binder, BoundArguments};
pub use crate::resolve::context::ResolutionContext;
pub use crate::resolve::parameter::{BuiltinType, CommandParameter, TypeKey};
pub use crate::resolve::registry::ResolverRegistry;
pub use crate::resolve::resolver::{ValueResolver, resolver_fn};
