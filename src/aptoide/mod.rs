pub mod client;
pub mod metadata;
pub mod service;
pub mod types;

pub use client::{AptoideClient, APTOIDE_SEARCH_URL};
pub use metadata::{build_metadata, AppMetadata};
pub use service::SearchService;
pub use types::*;
