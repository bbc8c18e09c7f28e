use std::env;

use url::Url;

use crate::aptoide::APTOIDE_SEARCH_URL;

pub struct Config {
    pub port: u16,
    pub search_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            port: env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            search_url: env::var("APTOIDE_SEARCH_URL")
                .ok()
                .and_then(|url| match Url::parse(&url) {
                    Ok(_) => Some(url),
                    Err(e) => {
                        tracing::warn!(
                            "Ignoring invalid APTOIDE_SEARCH_URL ({e}); using the default endpoint"
                        );
                        None
                    }
                })
                .unwrap_or_else(|| APTOIDE_SEARCH_URL.to_string()),
        }
    }
}
