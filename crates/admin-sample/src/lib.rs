//! # Admin Sample
//!
//! A small application built on [`admin_core`]: an in-memory record store
//! behind the fetcher boundary, an English message table behind the
//! translator and label boundaries, and tracing-backed notification and
//! redirect sinks. The binary in `main.rs` wires one show controller end to
//! end against this stack.

pub mod i18n;
pub mod sinks;
pub mod store;

pub use i18n::{EnglishTranslator, StaticLabels};
pub use sinks::{setup_tracing, TracingNotifier, TracingRedirector};
pub use store::{RecordStore, StoreClient};
