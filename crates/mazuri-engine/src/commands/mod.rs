//! Command handlers grouped by record type, plus the read-only reports
//!
//! ## Logging Ownership
//!
//! Every public handler emits `log_op_start!` on entry and exactly one of
//! `log_op_end!` / `log_op_error!` on exit.

pub mod cocktail;
pub mod customer;
pub mod order;
pub mod report;

use mazuri_core::{log_op_end, log_op_error, MazuriError};
use std::time::Instant;

/// Emit the closing lifecycle event for `op`
pub(crate) fn log_outcome<T>(op: &'static str, start: Instant, result: &Result<T, MazuriError>) {
    let duration_ms = start.elapsed().as_millis() as u64;
    match result {
        Ok(_) => {
            log_op_end!(op, duration_ms = duration_ms);
        }
        Err(e) => {
            log_op_error!(op, e, duration_ms = duration_ms);
        }
    }
}
