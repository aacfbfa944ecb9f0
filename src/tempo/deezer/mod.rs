//! Deezer tempo lookup
//!
//! Deezer exposes a `bpm` field on its track records. Free, no key needed.
//! API docs: https://developers.deezer.com/api

mod adapter;
mod client;
pub mod dto;

pub use client::DeezerClient;
