//! The interpreter's side of the contract.
//!
//! Every evaluated unit is described through [`unit::CompiledUnit`]; the history of
//! evaluated units through [`history::History`]. Interpreters that can report member
//! metadata directly build [`unit::ScriptUnit`]s and keep them in a
//! [`history::SessionHistory`].
pub mod history;
pub mod member;
pub mod unit;
