//! X.509 owner string parsing utilities.
//!
//! Aptoide reports the signing certificate's owner as a distinguished
//! name string, e.g. `CN=Facebook Corporation, O=Facebook Mobile,
//! L=Palo Alto, ST=CA, C=US`. This module splits that string into its
//! individual attributes.

/// Developer identity attributes extracted from a certificate owner string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CertificateFields {
    pub developer_cn: Option<String>,
    pub organization: Option<String>,
    pub local: Option<String>,
    pub state_city: Option<String>,
    pub country: Option<String>,
}

/// Parses a certificate owner distinguished name string.
///
/// Splits the string on commas, then each segment on its first `=`.
/// Recognized keys are `CN`, `O`, `L`, `ST` and `C`; segments without
/// an `=` or with an unknown key are skipped. Keys and values are
/// trimmed of surrounding whitespace.
pub fn parse_owner(owner: &str) -> CertificateFields {
    let mut fields = CertificateFields::default();

    for segment in owner.split(',') {
        if let Some((key, value)) = segment.split_once('=') {
            let value = value.trim();
            match key.trim() {
                "CN" => fields.developer_cn = Some(value.to_string()),
                "O" => fields.organization = Some(value.to_string()),
                "L" => fields.local = Some(value.to_string()),
                "ST" => fields.state_city = Some(value.to_string()),
                "C" => fields.country = Some(value.to_string()),
                _ => {}
            }
        }
    }

    fields
}
