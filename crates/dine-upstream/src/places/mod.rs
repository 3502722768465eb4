//! Places text search and details adapter

mod client;
mod dto;

pub use client::GooglePlacesClient;
