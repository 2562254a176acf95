//! Veritas Control - client for the Veritas analysis services.
//!
//! Owns the resilience side of the system: the cascading fallback chain
//! (primary aggregation service, secondary direct service, local keyword
//! heuristic) and the on-disk detection history.

pub mod commands;
pub mod fallback;
pub mod history;
pub mod tiers;
