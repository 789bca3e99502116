#[macro_use]
extern crate lazy_static;

pub mod catalog;
pub mod cli;
pub mod core;
pub mod cql;
pub mod util;
