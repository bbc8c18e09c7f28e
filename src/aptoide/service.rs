//! Search service abstraction layer.
//!
//! Provides a trait-based abstraction over the Aptoide search call,
//! enabling dependency injection and easier testing.

use std::future::Future;
use std::pin::Pin;

use crate::aptoide::client::AptoideClient;
use crate::aptoide::types::SearchResponse;
use crate::error::AppError;

/// Trait for services that look up apps on Aptoide.
///
/// This abstraction allows handlers to run against a mock backend in
/// tests instead of the live API.
pub trait SearchService: Send + Sync {
    /// Searches for apps matching the given package name.
    fn search(
        &self,
        package_name: &str,
    ) -> Pin<Box<dyn Future<Output = Result<SearchResponse, AppError>> + Send + '_>>;
}

impl SearchService for AptoideClient {
    fn search(
        &self,
        package_name: &str,
    ) -> Pin<Box<dyn Future<Output = Result<SearchResponse, AppError>> + Send + '_>> {
        let package_name = package_name.to_owned();
        Box::pin(async move { AptoideClient::search(self, &package_name).await })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::aptoide::types::{Datalist, SearchResult};

    struct MockSearchService {
        response: SearchResponse,
    }

    impl SearchService for MockSearchService {
        fn search(
            &self,
            _package_name: &str,
        ) -> Pin<Box<dyn Future<Output = Result<SearchResponse, AppError>> + Send + '_>> {
            let response = self.response.clone();
            Box::pin(async move { Ok(response) })
        }
    }

    #[tokio::test]
    async fn test_mock_search_service() {
        let service = MockSearchService {
            response: SearchResponse {
                datalist: Some(Datalist {
                    list: vec![SearchResult {
                        name: Some("Mock App".to_string()),
                        ..Default::default()
                    }],
                }),
            },
        };

        let response = service.search("com.mock.app").await.unwrap();
        let list = response.datalist.unwrap().list;
        assert_eq!(list[0].name.as_deref(), Some("Mock App"));
    }
}
