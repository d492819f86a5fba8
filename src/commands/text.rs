// text.rs - Text Transform Commands
// Pure string effects: space replacement, reversal, spoilers, emoji claps and
// the build-up ladder. Every transform is a plain function so the commands
// themselves only parse arguments and send the result.
//
// Used by: commands/mod.rs (FUN_GROUP)

use serenity::{
    client::Context,
    framework::standard::{macros::command, Args, CommandResult},
    model::channel::Message,
};

use crate::render::Reply;

pub const PARTYFROG: &str = "<a:partyfrog:815283360465289316>";
pub const CLAP: &str = ":clap:";

// ============================================================================
// TRANSFORMS
// ============================================================================

/// Put `token` between every word, padded by single spaces.
pub fn replace_spaces(text: &str, token: &str) -> String {
    text.replace(' ', &format!(" {} ", token))
}

/// Code-point reversal.
pub fn reverse(text: &str) -> String {
    text.chars().rev().collect()
}

pub fn spoiler(text: &str) -> String {
    text.chars().map(|c| format!("||{}||", c)).collect()
}

/// Grow the text one character at a time, print it whole, then shrink it back
/// down to a single character.
pub fn buildup(text: &str) -> String {
    let chars: Vec<char> = text.chars().collect();
    let n = chars.len();
    let prefix = |len: usize| chars[..len].iter().collect::<String>();

    let mut lines: Vec<String> = (1..=n).map(prefix).collect();
    if n > 0 {
        lines.push(text.to_string());
    }
    lines.extend((1..n).rev().map(prefix));
    lines.join("\n")
}

// ============================================================================
// COMMAND IMPLEMENTATIONS
// ============================================================================

async fn usage(ctx: &Context, msg: &Message, text: &str) -> CommandResult {
    Reply::embed(text).send(ctx, msg).await?;
    Ok(())
}

#[command]
#[description = "Replaces the spaces in a string with a character"]
#[usage = "<char> <text>"]
pub async fn replacespace(ctx: &Context, msg: &Message, mut args: Args) -> CommandResult {
    let token = match args.single::<String>() {
        Ok(token) => token,
        Err(_) => return usage(ctx, msg, "Usage: `replacespace <char> <text>`").await,
    };
    let text = args.rest();
    if text.is_empty() {
        return usage(ctx, msg, "Usage: `replacespace <char> <text>`").await;
    }

    Reply::embed(replace_spaces(text, &token)).send(ctx, msg).await?;
    Ok(())
}

#[command("reverse")]
#[description = "Reverses some text"]
#[usage = "<text>"]
pub async fn reverse_cmd(ctx: &Context, msg: &Message, args: Args) -> CommandResult {
    let text = args.rest();
    if text.is_empty() {
        return usage(ctx, msg, "Please provide some text to reverse!").await;
    }

    Reply::embed(reverse(text)).send(ctx, msg).await?;
    Ok(())
}

#[command("spoiler")]
#[description = "Hides every character behind its own spoiler"]
#[usage = "<text>"]
pub async fn spoiler_cmd(ctx: &Context, msg: &Message, args: Args) -> CommandResult {
    let text = args.rest();
    if text.is_empty() {
        return usage(ctx, msg, "Please provide some text to spoil!").await;
    }

    Reply::plain(spoiler(text)).send(ctx, msg).await?;
    Ok(())
}

#[command]
#[usage = "<text>"]
pub async fn partyfrog(ctx: &Context, msg: &Message, args: Args) -> CommandResult {
    let text = args.rest();
    if text.is_empty() {
        return usage(ctx, msg, "Please provide some text!").await;
    }

    Reply::plain(replace_spaces(text, PARTYFROG)).send(ctx, msg).await?;
    Ok(())
}

#[command]
#[usage = "<text>"]
pub async fn clap(ctx: &Context, msg: &Message, args: Args) -> CommandResult {
    let text = args.rest();
    if text.is_empty() {
        return usage(ctx, msg, "Please provide some text!").await;
    }

    Reply::plain(replace_spaces(text, CLAP)).send(ctx, msg).await?;
    Ok(())
}

#[command("buildup")]
#[usage = "<word>"]
pub async fn buildup_cmd(ctx: &Context, msg: &Message, mut args: Args) -> CommandResult {
    let text = match args.single_quoted::<String>() {
        Ok(text) if !text.is_empty() => text,
        _ => return usage(ctx, msg, "Usage: `buildup <word>`").await,
    };

    Reply::plain(buildup(&text)).send(ctx, msg).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_spaces() {
        assert_eq!(replace_spaces("a b c", "-"), "a - b - c");
        assert_eq!(replace_spaces("nospace", "-"), "nospace");
        assert_eq!(replace_spaces("make some noise", CLAP), "make :clap: some :clap: noise");
    }

    #[test]
    fn test_reverse_is_involution() {
        for s in ["", "a", "hello world", "héllo 🦀 wörld", "racecar"] {
            assert_eq!(reverse(&reverse(s)), s);
        }
        assert_eq!(reverse("abc"), "cba");
    }

    #[test]
    fn test_reverse_is_per_code_point() {
        // A combining accent stays a separate code point and moves with it.
        assert_eq!(reverse("e\u{301}x"), "x\u{301}e");
    }

    #[test]
    fn test_spoiler_wraps_each_character() {
        assert_eq!(spoiler("hi!"), "||h||||i||||!||");
        assert_eq!(spoiler(""), "");
    }

    #[test]
    fn test_buildup_two_chars() {
        assert_eq!(buildup("ab"), "a\nab\nab\na");
    }

    #[test]
    fn test_buildup_longer_text() {
        let lines: Vec<String> = buildup("abc").lines().map(String::from).collect();
        assert_eq!(lines, vec!["a", "ab", "abc", "abc", "ab", "a"]);
    }

    #[test]
    fn test_buildup_edge_cases() {
        assert_eq!(buildup(""), "");
        assert_eq!(buildup("x"), "x\nx");
        assert_eq!(buildup("日本"), "日\n日本\n日本\n日");
    }
}
