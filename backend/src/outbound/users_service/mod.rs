//! Users service outbound adapter.
//!
//! A thin reqwest implementation of the `UserDirectory` port used by product
//! enrichment.

mod dto;
mod http_directory;

pub use http_directory::HttpUserDirectory;
