//! Maji Mazuri Engine - the command layer
//!
//! Each command takes a session, does one unit of work inside a single
//! transaction and either commits or drops the transaction (rolling back).
//! Command handlers own lifecycle logging; the store logs only at debug.

pub mod commands;
