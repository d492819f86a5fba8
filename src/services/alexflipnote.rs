// alexflipnote.rs - Logo generation API

use async_trait::async_trait;

use crate::error::FunResult;
use crate::services::{get_http_client, LogoGenerator, SupremeOptions};

pub struct AlexFlipnoteClient {
    base_url: String,
    token: Option<String>,
}

impl AlexFlipnoteClient {
    pub fn new(base_url: &str, token: Option<String>) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            token,
        }
    }
}

/// Query string for the supreme endpoint. Only set flags are sent.
pub fn supreme_query(options: &SupremeOptions) -> Vec<(&'static str, String)> {
    let mut query = vec![("text", options.text.clone())];
    if options.dark {
        query.push(("dark", "true".to_string()));
    }
    if options.light {
        query.push(("light", "true".to_string()));
    }
    query
}

#[async_trait]
impl LogoGenerator for AlexFlipnoteClient {
    async fn supreme(&self, options: &SupremeOptions) -> FunResult<Vec<u8>> {
        let client = get_http_client().await?;
        let mut request = client
            .get(format!("{}/supreme", self.base_url))
            .query(&supreme_query(options));
        if let Some(token) = &self.token {
            request = request.header(reqwest::header::AUTHORIZATION, token);
        }

        let bytes = request.send().await?.error_for_status()?.bytes().await?;
        Ok(bytes.to_vec())
    }
}
