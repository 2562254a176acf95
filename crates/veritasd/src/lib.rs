//! Veritas analysis daemon.
//!
//! Serves the primary composite analysis endpoint (keyword heuristic +
//! fact-check provider, averaged) and the secondary direct endpoint used by
//! clients as a fallback tier. Providers are injected behind the
//! `FactCheckProvider` trait so the pipeline is testable without a network.

pub mod aggregator;
pub mod analysis;
pub mod providers;
pub mod routes;
pub mod server;
pub mod validation;
