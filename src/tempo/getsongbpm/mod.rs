//! GetSongBPM tempo lookup
//!
//! Requires an API key; the provider is disabled when none is configured.
//! API docs: https://getsongbpm.com/api

mod adapter;
mod client;
pub mod dto;

pub use client::GetSongBpmClient;
