//! A personal contact book persisted as `name,phone,email` lines in a flat
//! file.
//!
//! Every operation reloads the whole file, works on the list in memory and,
//! when something changed, rewrites the file through a temp-file rename.

pub mod cli;
pub mod config;
pub mod domain;
pub mod errors;
pub mod prelude;
pub mod store;
pub mod validation;
