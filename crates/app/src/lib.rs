//! Ammunition purchase tracking: validated console input, `PostgreSQL`
//! persistence and the menu that ties them together.

pub mod config;
pub mod console;
pub mod context;
pub mod database;
pub mod domain;
pub mod input;
pub mod observability;
pub mod report;
pub mod shell;
pub mod validation;
pub mod workflow;

#[cfg(test)]
mod test;

mod ids;
