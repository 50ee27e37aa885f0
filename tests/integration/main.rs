mod bind;
mod cli;
mod common;
