// cats.rs - http.cat image fetch

use crate::error::FunResult;
use crate::services::get_http_client;

pub fn cat_url(base_url: &str, code: u16) -> String {
    format!("{}/{}", base_url, code)
}

/// Download the cat picture for an HTTP status code.
pub async fn fetch(base_url: &str, code: u16) -> FunResult<Vec<u8>> {
    let client = get_http_client().await?;
    let response = client.get(cat_url(base_url, code)).send().await?.error_for_status()?;
    let bytes = response.bytes().await?;
    Ok(bytes.to_vec())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cat_url() {
        assert_eq!(cat_url("https://http.cat", 418), "https://http.cat/418");
    }

    #[tokio::test]
    async fn test_fetch_returns_image_bytes() {
        use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;

        Mock::given(matchers::method("GET"))
            .and(matchers::path("/404"))
            .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0x89, b'P', b'N', b'G']))
            .expect(1)
            .mount(&server)
            .await;

        let bytes = fetch(&server.uri(), 404).await.unwrap();
        assert_eq!(bytes, vec![0x89, b'P', b'N', b'G']);
    }

    #[tokio::test]
    async fn test_fetch_server_error_is_upstream_error() {
        use crate::error::FunError;
        use wiremock::{matchers, Mock, MockServer, ResponseTemplate};

        let server = MockServer::start().await;

        Mock::given(matchers::method("GET"))
            .and(matchers::path("/500"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let result = fetch(&server.uri(), 500).await;
        assert!(matches!(result, Err(FunError::Upstream(_))));
    }
}
