pub mod aliases;
pub mod cli;
pub mod context;
