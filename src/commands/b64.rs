// b64.rs - Base64 Command Group
// `base64 encode <text>` / `base64 decode <text>`, also reachable as `b64`.
// Decoding errors are returned to the framework rather than swallowed.

use base64::{engine::general_purpose, Engine as _};
use serenity::{
    client::Context,
    framework::standard::{
        macros::{command, group},
        Args, CommandResult,
    },
    model::channel::Message,
};

use crate::error::{FunError, FunResult};
use crate::render::Reply;

const USAGE: &str = "Some functions with base64\n`base64 encode <text>`\n`base64 decode <text>`";

/// Subcommands need something to work on.
pub fn require_input(text: &str) -> FunResult<&str> {
    if text.trim().is_empty() {
        return Err(FunError::validation(USAGE));
    }
    Ok(text)
}

pub fn encode(text: &str) -> String {
    general_purpose::STANDARD.encode(text.as_bytes())
}

pub fn decode(text: &str) -> FunResult<String> {
    let bytes = general_purpose::STANDARD.decode(text.trim())?;
    Ok(String::from_utf8(bytes)?)
}

#[command("base64")]
/// Shown when the group is called without a subcommand
pub async fn base64_usage(ctx: &Context, msg: &Message, _args: Args) -> CommandResult {
    Reply::embed(USAGE).send(ctx, msg).await?;
    Ok(())
}

#[command("encode")]
#[description = "Encodes a base64 string"]
#[usage = "<text>"]
pub async fn encode_cmd(ctx: &Context, msg: &Message, args: Args) -> CommandResult {
    let text = match require_input(args.rest()) {
        Ok(text) => text,
        Err(e) => {
            Reply::embed(e.to_string()).send(ctx, msg).await?;
            return Ok(());
        }
    };
    Reply::embed(encode(text)).send(ctx, msg).await?;
    Ok(())
}

#[command("decode")]
#[description = "Decodes a base64 string"]
#[usage = "<base64>"]
pub async fn decode_cmd(ctx: &Context, msg: &Message, args: Args) -> CommandResult {
    let text = match require_input(args.rest()) {
        Ok(text) => text,
        Err(e) => {
            Reply::embed(e.to_string()).send(ctx, msg).await?;
            return Ok(());
        }
    };
    let decoded = decode(text)?;
    Reply::embed(decoded).send(ctx, msg).await?;
    Ok(())
}

#[group]
#[prefixes("base64", "b64")]
#[description = "Some functions with base64"]
#[default_command(base64_usage)]
#[commands(encode_cmd, decode_cmd)]
pub struct Base64;
