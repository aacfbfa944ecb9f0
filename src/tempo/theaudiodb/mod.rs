//! TheAudioDB tempo lookup
//!
//! Works without a personal key through the public test key.
//! API docs: https://www.theaudiodb.com/free_music_api

mod adapter;
mod client;
pub mod dto;

pub use client::{PUBLIC_API_KEY, TheAudioDbClient};
