//! Forecast API adapter

mod client;
mod dto;

pub use client::OpenMeteoClient;
