use serde::Deserialize;

/// Top-level payload returned by the Aptoide search endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResponse {
    pub datalist: Option<Datalist>,
}

/// Container for the list of matching applications.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Datalist {
    #[serde(default)]
    pub list: Vec<SearchResult>,
}

/// A single application entry from the search results.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchResult {
    pub name: Option<String>,
    pub size: Option<u64>,
    pub downloads: Option<u64>,
    pub package: Option<String>,
    pub file: Option<FileInfo>,
}

/// APK file details nested inside a search result.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FileInfo {
    pub vername: Option<String>,
    pub added: Option<String>,
    pub screensize: Option<String>,
    pub cpu: Option<String>,
    pub signature: Option<Signature>,
}

/// Signing certificate details for an APK file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Signature {
    pub sha1: Option<String>,
    pub owner: Option<String>,
}
