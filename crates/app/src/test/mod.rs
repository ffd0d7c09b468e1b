//! Shared test infrastructure.


pub(crate) use console::ScriptedConsole;
pub(crate) use context::TestContext;
