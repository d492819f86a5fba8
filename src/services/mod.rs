// services/mod.rs - External Service Client
// One pooled reqwest client shared by every command, plus thin wrappers around
// the upstream APIs the fun commands call. The paste service and the logo
// generator sit behind traits so handlers can be exercised with test doubles.

pub mod alexflipnote;
pub mod cats;
pub mod jokes;
pub mod mystbin;

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use serenity::client::Context;
use serenity::prelude::TypeMapKey;
use tokio::sync::OnceCell;

use crate::config::BotConfig;
use crate::error::{FunError, FunResult};

pub use alexflipnote::AlexFlipnoteClient;
pub use mystbin::MystbinClient;

// Global HTTP client for connection pooling and reuse
static HTTP_CLIENT: OnceCell<reqwest::Client> = OnceCell::const_new();

pub async fn get_http_client() -> FunResult<&'static reqwest::Client> {
    HTTP_CLIENT
        .get_or_try_init(|| async {
            reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .connect_timeout(Duration::from_secs(10))
                .pool_idle_timeout(Duration::from_secs(90))
                .user_agent(concat!("funbot/", env!("CARGO_PKG_VERSION")))
                .build()
        })
        .await
        .map_err(FunError::from)
}

/// Options for the supreme logo generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupremeOptions {
    pub text: String,
    pub dark: bool,
    pub light: bool,
}

impl Default for SupremeOptions {
    fn default() -> Self {
        Self {
            text: "supreme".to_string(),
            dark: false,
            light: false,
        }
    }
}

/// Text hosting service used both to resolve paste links and to park long output.
#[async_trait]
pub trait PasteService: Send + Sync {
    /// `Ok(None)` when the service answers with a non-success status.
    async fn fetch(&self, id: &str) -> FunResult<Option<String>>;

    /// Upload `content` and return a link to it.
    async fn upload(&self, content: &str) -> FunResult<String>;
}

#[async_trait]
pub trait LogoGenerator: Send + Sync {
    async fn supreme(&self, options: &SupremeOptions) -> FunResult<Vec<u8>>;
}

/// Everything a handler may call out to, built once at startup.
pub struct Services {
    pub http_cat_url: String,
    pub chuck_norris_url: String,
    pub paste: Arc<dyn PasteService>,
    pub logo: Arc<dyn LogoGenerator>,
}

impl Services {
    pub fn from_config(config: &BotConfig) -> Self {
        Self {
            http_cat_url: config.http_cat_url.clone(),
            chuck_norris_url: config.chuck_norris_url.clone(),
            paste: Arc::new(MystbinClient::new(&config.mystbin_url)),
            logo: Arc::new(AlexFlipnoteClient::new(
                &config.alexflipnote_url,
                config.alexflipnote_token.clone(),
            )),
        }
    }
}

pub struct ServicesKey;
impl TypeMapKey for ServicesKey {
    type Value = Arc<Services>;
}

pub async fn services(ctx: &Context) -> FunResult<Arc<Services>> {
    let data = ctx.data.read().await;
    data.get::<ServicesKey>()
        .cloned()
        .ok_or_else(|| FunError::Config("services missing from client data".to_string()))
}
