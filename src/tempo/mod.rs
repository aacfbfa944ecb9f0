//! Tempo lookup - finds a track's BPM from external tempo databases.
//!
//! # Architecture
//!
//! Same split as every external integration in this crate:
//! - **Domain models** (`domain.rs`) - query, result, provider ids, errors
//! - **API DTOs** (`deezer/dto.rs`, `getsongbpm/dto.rs`, `theaudiodb/dto.rs`)
//! - **Adapters** - the only code that reads DTOs
//! - **Clients** - HTTP, one per provider, behind the [`TempoProvider`] trait
//! - **Resolver** - the priority-ordered, first-success-wins chain
//!
//! # Usage
//!
//! ```ignore
//! use pulsegroove::tempo::{ProviderConfig, TempoQuery, TempoResolver};
//!
//! let http = crate::http::build_client(config.attempt_timeout)?;
//! let resolver = TempoResolver::from_config(&config, http);
//!
//! let result = resolver.resolve(&TempoQuery::new("Blinding Lights", "The Weeknd")).await;
//! if let (Some(bpm), Some(source)) = (result.bpm(), result.source()) {
//!     println!("{bpm} BPM via {source}");
//! }
//! ```

pub mod config;
pub mod deezer;
pub mod domain;
pub mod getsongbpm;
mod request;
pub mod resolver;
pub mod theaudiodb;
pub mod traits;

pub use config::ProviderConfig;
pub use domain::{ProviderId, TempoError, TempoQuery, TempoResult};
pub use resolver::TempoResolver;
pub use traits::TempoProvider;
