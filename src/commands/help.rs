// help.rs - Help Command Module
// Lists every fun command with its usage, using the configured prefix.

use serenity::{
    client::Context,
    framework::standard::{macros::command, CommandResult},
    model::channel::Message,
};

use crate::config::{bot_config, DEFAULT_PREFIX};
use crate::render::Reply;

pub fn help_text(prefix: &str) -> String {
    format!(
        r#"**🎉 Fun Commands**

**🖼️ Images:**
• `{p}http [code]` - A cat for every HTTP status (aliases: `{p}httpcat`, `{p}http_cat`)
• `{p}supreme --text "text" [--dark|--light]` - Custom supreme logo

**✏️ Text:**
• `{p}replacespace <char> <text>` - Replace spaces with a character
• `{p}reverse <text>` - Reverse some text
• `{p}spoiler <text>` - Spoiler every character
• `{p}partyfrog <text>` / `{p}clap <text>` - Emoji between every word
• `{p}buildup <word>` - Build a word up and back down

**🎲 Random:**
• `{p}react [seconds]` - Check your reaction speed (max 30)
• `{p}ship <@user> [@user]` - Love calculator
• `{p}pp [@user]` - Very scientific measurement (alias: `{p}ppsize`)
• `{p}roo` - A random roo emoji
• `{p}chucknorris` - A Chuck Norris joke (aliases: `{p}norris`, `{p}chucknorrisjoke`)

**🔐 Encoding:**
• `{p}bottomencode <text|mystb.in link>` / `{p}bottomdecode <text|mystb.in link>`
• `{p}base64 encode <text>` / `{p}base64 decode <text>` (alias: `{p}b64`)

Long bottom output is uploaded to mystb.in."#,
        p = prefix
    )
}

#[command]
#[aliases("h", "commands")]
/// Display help information for all available commands
pub async fn help(ctx: &Context, msg: &Message) -> CommandResult {
    let prefix = match bot_config(ctx).await {
        Ok(config) => config.prefix,
        Err(_) => DEFAULT_PREFIX.to_string(),
    };

    Reply::embed(help_text(&prefix)).title("Help").send(ctx, msg).await?;
    Ok(())
}
