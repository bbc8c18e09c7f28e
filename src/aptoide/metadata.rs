//! Assembly of the public app metadata shape.

use serde::Serialize;

use crate::aptoide::types::SearchResult;
use crate::shared::{format_downloads, format_size, parse_owner};

/// Flattened app metadata served to API consumers.
///
/// Every field is optional; absent fields are omitted from the JSON
/// response entirely rather than serialized as `null`.
#[derive(Debug, Serialize)]
pub struct AppMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub downloads: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub release_date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_screen: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supported_cpu: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub package_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha1_signature: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub developer_cn: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub local: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Flattens a raw search result into the public metadata shape.
///
/// Missing nested objects (file, signature) simply leave their derived
/// fields empty.
pub fn build_metadata(result: SearchResult) -> AppMetadata {
    let file = result.file.unwrap_or_default();
    let signature = file.signature.unwrap_or_default();
    let cert = signature
        .owner
        .as_deref()
        .map(parse_owner)
        .unwrap_or_default();

    AppMetadata {
        name: result.name,
        size: format_size(result.size),
        downloads: format_downloads(result.downloads),
        version: file.vername,
        release_date: file.added,
        min_screen: file.screensize,
        supported_cpu: file.cpu,
        package_id: result.package,
        sha1_signature: signature.sha1,
        developer_cn: cert.developer_cn,
        organization: cert.organization,
        local: cert.local,
        state_city: cert.state_city,
        country: cert.country,
    }
}
