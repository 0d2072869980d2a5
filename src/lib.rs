//! prdflow: product requirements to assigned user stories.
//!
//! A PRD (JSON) is summarized, turned into epics and user stories, and the
//! stories are distributed across an engineer roster by one of several
//! assignment strategies, optionally followed by a workload rebalance.
//!
//! The assignment engine in [`assign`] performs no I/O. [`pipeline`] wires
//! it to the PRD loader, the run log and the JSON output.

pub mod assign;
pub mod color;
pub mod config;
pub mod engineer;
pub mod log;
pub mod output;
pub mod pipeline;
pub mod prd;
pub mod run_id;
#[doc(hidden)]
pub mod testutil;
