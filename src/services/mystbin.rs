// mystbin.rs - Paste service client

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;

use crate::error::FunResult;
use crate::services::{get_http_client, PasteService};

#[derive(Debug, Deserialize)]
struct PasteBody {
    data: String,
}

#[derive(Debug, Deserialize)]
struct CreatedPaste {
    id: String,
}

pub struct MystbinClient {
    base_url: String,
}

impl MystbinClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn paste_url(&self, id: &str) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

#[async_trait]
impl PasteService for MystbinClient {
    async fn fetch(&self, id: &str) -> FunResult<Option<String>> {
        let client = get_http_client().await?;
        let response = client
            .get(format!("{}/api/pastes/{}", self.base_url, id))
            .send()
            .await?;

        if !response.status().is_success() {
            log::debug!("Paste {} lookup returned {}", id, response.status());
            return Ok(None);
        }

        let body = response.json::<PasteBody>().await?;
        Ok(Some(body.data))
    }

    async fn upload(&self, content: &str) -> FunResult<String> {
        let client = get_http_client().await?;
        let created = client
            .post(format!("{}/api/pastes", self.base_url))
            .json(&json!({
                "files": [{ "filename": "output.txt", "content": content }]
            }))
            .send()
            .await?
            .error_for_status()?
            .json::<CreatedPaste>()
            .await?;
        Ok(self.paste_url(&created.id))
    }
}
