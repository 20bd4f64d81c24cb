//! Inbound adapters translating transport requests into domain port calls.

pub mod http;
