//! Main module for simplecc library functionality

pub mod config;
pub mod cst;
pub mod diagnostics;
pub mod formats;
pub mod grammar;
pub mod lexing;
pub mod loader;
pub mod parsing;
pub mod testing;
pub mod token;
