// config.rs - Bot Configuration Module
// Reads botconfig.txt (KEY=VALUE lines) from a handful of well-known locations,
// exports every key as an environment variable and builds the typed BotConfig.
//
// Used by: main.rs (startup), every command through BotConfigKey

use std::collections::HashMap;
use std::env;
use std::fs;

use serenity::client::Context;
use serenity::prelude::TypeMapKey;

use crate::error::{FunError, FunResult};

const CONFIG_PATHS: [&str; 4] = [
    "botconfig.txt",
    "../botconfig.txt",
    "../../botconfig.txt",
    "src/botconfig.txt",
];

pub const DEFAULT_PREFIX: &str = "^";
pub const DEFAULT_EMBED_COLOR: u32 = 0x7289DA;

#[derive(Debug, Clone)]
pub struct BotConfig {
    pub token: String,
    pub prefix: String,
    pub embed_color: u32,
    pub log_level: String,
    pub alexflipnote_token: Option<String>,
    pub http_cat_url: String,
    pub chuck_norris_url: String,
    pub mystbin_url: String,
    pub alexflipnote_url: String,
}

pub struct BotConfigKey;
impl TypeMapKey for BotConfigKey {
    type Value = BotConfig;
}

impl BotConfig {
    /// Build the config from parsed KEY=VALUE pairs.
    pub fn from_map(map: &HashMap<String, String>) -> FunResult<Self> {
        let token = map
            .get("DISCORD_TOKEN")
            .cloned()
            .ok_or_else(|| FunError::Config("DISCORD_TOKEN not found in botconfig.txt".to_string()))?;
        if token.is_empty() || token == "YOUR_BOT_TOKEN_HERE" {
            return Err(FunError::Config(
                "DISCORD_TOKEN in botconfig.txt is set to placeholder value".to_string(),
            ));
        }

        let embed_color = match map.get("EMBED_COLOR") {
            Some(raw) => parse_color(raw)?,
            None => DEFAULT_EMBED_COLOR,
        };

        let get = |key: &str, default: &str| {
            map.get(key)
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|| default.to_string())
        };

        Ok(Self {
            token,
            prefix: map.get("PREFIX").cloned().unwrap_or_else(|| DEFAULT_PREFIX.to_string()),
            embed_color,
            log_level: get("LOG_LEVEL", "info"),
            alexflipnote_token: map.get("ALEXFLIPNOTE_TOKEN").filter(|t| !t.is_empty()).cloned(),
            http_cat_url: get("HTTP_CAT_URL", "https://http.cat"),
            chuck_norris_url: get("CHUCK_NORRIS_URL", "https://api.chucknorris.io"),
            mystbin_url: get("MYSTBIN_URL", "https://mystb.in"),
            alexflipnote_url: get("ALEXFLIPNOTE_URL", "https://api.alexflipnote.dev"),
        })
    }
}

/// Parse KEY=VALUE lines, skipping blanks and `#` comments.
pub fn parse_config(content: &str) -> HashMap<String, String> {
    // Remove BOM if present
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    let mut config = HashMap::new();

    for line in content.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if let Some(equals_pos) = line.find('=') {
            let key = line[..equals_pos].trim().to_string();
            let value = line[equals_pos + 1..].trim().to_string();
            config.insert(key, value);
        }
    }

    config
}

/// Accepts `7289DA`, `#7289DA` and `0x7289DA`.
pub fn parse_color(raw: &str) -> FunResult<u32> {
    let hex = raw.trim();
    let hex = hex
        .strip_prefix('#')
        .or_else(|| hex.strip_prefix("0x"))
        .or_else(|| hex.strip_prefix("0X"))
        .unwrap_or(hex);
    u32::from_str_radix(hex, 16)
        .ok()
        .filter(|c| *c <= 0xFF_FF_FF)
        .ok_or_else(|| FunError::Config(format!("EMBED_COLOR '{}' is not a hex colour", raw)))
}

/// Load botconfig.txt with multi-path fallback. Values already present in the
/// environment win over the file. Returns the path that was used.
pub fn load_bot_config() -> FunResult<(BotConfig, &'static str)> {
    for config_path in &CONFIG_PATHS {
        let content = match fs::read_to_string(config_path) {
            Ok(content) => content,
            Err(_) => continue,
        };

        let mut config = parse_config(&content);
        for (key, value) in config.iter_mut() {
            match env::var(key) {
                Ok(existing) => *value = existing,
                Err(_) => env::set_var(key, &*value),
            }
        }

        return BotConfig::from_map(&config).map(|c| (c, *config_path));
    }

    Err(FunError::Config(
        "No botconfig.txt file found in any expected location (., .., ../.., src/)".to_string(),
    ))
}

/// Read the shared config out of the client's TypeMap.
pub async fn bot_config(ctx: &Context) -> FunResult<BotConfig> {
    let data = ctx.data.read().await;
    data.get::<BotConfigKey>()
        .cloned()
        .ok_or_else(|| FunError::Config("bot configuration missing from client data".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_config_skips_comments_and_bom() {
        let content = "\u{feff}# comment\n\nDISCORD_TOKEN = abc\nPREFIX=!\nbroken line\n";
        let map = parse_config(content);
        assert_eq!(map.len(), 2);
        assert_eq!(map["DISCORD_TOKEN"], "abc");
        assert_eq!(map["PREFIX"], "!");
    }

    #[test]
    fn test_from_map_defaults() {
        let map = parse_config("DISCORD_TOKEN=abc");
        let config = BotConfig::from_map(&map).unwrap();
        assert_eq!(config.prefix, "^");
        assert_eq!(config.embed_color, DEFAULT_EMBED_COLOR);
        assert_eq!(config.http_cat_url, "https://http.cat");
        assert_eq!(config.mystbin_url, "https://mystb.in");
        assert!(config.alexflipnote_token.is_none());
    }

    #[test]
    fn test_from_map_rejects_placeholder_token() {
        let map = parse_config("DISCORD_TOKEN=YOUR_BOT_TOKEN_HERE");
        assert!(matches!(BotConfig::from_map(&map), Err(FunError::Config(_))));
        assert!(BotConfig::from_map(&HashMap::new()).is_err());
    }

    #[test]
    fn test_service_urls_lose_trailing_slash() {
        let map = parse_config("DISCORD_TOKEN=abc\nMYSTBIN_URL=http://localhost:8080/");
        let config = BotConfig::from_map(&map).unwrap();
        assert_eq!(config.mystbin_url, "http://localhost:8080");
    }

    #[test]
    fn test_parse_color_formats() {
        assert_eq!(parse_color("#ff0000").unwrap(), 0xff0000);
        assert_eq!(parse_color("0x00FF00").unwrap(), 0x00ff00);
        assert_eq!(parse_color("0000ff").unwrap(), 0x0000ff);
        assert!(parse_color("purple").is_err());
        assert!(parse_color("1000000").is_err());
    }
}
