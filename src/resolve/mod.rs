pub mod binder;
pub mod builtin;
pub mod context;
pub mod parameter;
pub mod registry;
pub mod resolver;
