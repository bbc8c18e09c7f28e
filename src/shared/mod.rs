//! Shared utilities used across the Aptoide scraper service.

pub mod cert_parser;
pub mod format;

pub use cert_parser::{parse_owner, CertificateFields};
pub use format::{format_downloads, format_size};
