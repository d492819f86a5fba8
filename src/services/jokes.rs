// jokes.rs - Chuck Norris joke API

use serde::Deserialize;

use crate::error::FunResult;
use crate::services::get_http_client;

#[derive(Debug, Clone, Deserialize)]
pub struct Joke {
    pub url: String,
    pub value: String,
    pub icon_url: String,
}

pub async fn random(base_url: &str) -> FunResult<Joke> {
    let client = get_http_client().await?;
    let joke = client
        .get(format!("{}/jokes/random", base_url))
        .send()
        .await?
        .error_for_status()?
        .json::<Joke>()
        .await?;
    Ok(joke)
}
