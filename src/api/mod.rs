pub mod client;

pub use client::{AladhanClient, FetchError, TimingsSource};
