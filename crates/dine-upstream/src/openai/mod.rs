//! Chat completions adapter

mod client;
mod dto;

pub use client::OpenAiClient;
