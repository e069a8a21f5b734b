//! Network transport — `ReqwestTransport` for plugging into the managed client.

pub mod client;

pub use client::ReqwestTransport;
