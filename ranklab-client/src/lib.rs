//! Backend access for the ranking dashboard.
//!
//! This crate owns everything between the wire and the engine: response
//! contracts ([`dto`]), the blocking HTTP client ([`api`]), snapshot
//! assembly and persistence ([`snapshot`]), TOML configuration
//! ([`config`]), and seeded demo data ([`sample`]). `ranklab-core` stays
//! free of I/O; this crate stays free of ranking logic.

pub mod api;
pub mod config;
pub mod dto;
pub mod error;
pub mod sample;
pub mod snapshot;

pub use api::ApiClient;
pub use config::ClientConfig;
pub use error::ClientError;
pub use sample::sample_snapshot;
pub use snapshot::{fetch_snapshot, DashboardSnapshot};
