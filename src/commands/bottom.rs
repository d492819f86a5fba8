// bottom.rs - Bottom Encode/Decode Commands
// Input may be a paste link, which is resolved first. Output longer than
// PASTE_THRESHOLD characters is uploaded to the paste service and linked.
//
// Used by: commands/mod.rs (FUN_GROUP)

use once_cell::sync::Lazy;
use regex::Regex;
use serenity::{
    client::Context,
    framework::standard::{macros::command, Args, CommandResult},
    model::channel::Message,
};

use crate::bottom;
use crate::error::FunResult;
use crate::render::Reply;
use crate::services::{self, PasteService};

pub const PASTE_THRESHOLD: usize = 500;

// Anchored at the start only; anything may follow the id.
static PASTE_LINK: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:(?:https?://)?mystb\.in/)?(?P<id>[a-zA-Z]+)(?:\.(?P<syntax>[a-zA-Z0-9]+))?")
        .expect("Invalid paste link regex pattern")
});

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Encode,
    Decode,
}

/// The paste id `text` refers to, if it looks like a paste link.
pub fn paste_id(text: &str) -> Option<&str> {
    PASTE_LINK
        .captures(text)
        .and_then(|caps| caps.name("id"))
        .map(|m| m.as_str())
}

/// Swap a paste link for the paste's content. Any lookup failure falls back to
/// the text as given.
pub async fn check_mystbin(text: &str, paste: &dyn PasteService) -> String {
    let Some(id) = paste_id(text) else {
        return text.to_string();
    };

    match paste.fetch(id).await {
        Ok(Some(content)) => content,
        Ok(None) => text.to_string(),
        Err(e) => {
            log::warn!("Paste lookup for '{}' failed, using input as-is: {}", id, e);
            text.to_string()
        }
    }
}

/// Resolve, transform and decide between inline text and a paste link.
pub async fn bottom_reply(direction: Direction, text: &str, paste: &dyn PasteService) -> FunResult<String> {
    let text = check_mystbin(text, paste).await;
    let output = match direction {
        Direction::Encode => bottom::encode(&text),
        Direction::Decode => bottom::decode(&text)?,
    };

    if output.chars().count() > PASTE_THRESHOLD {
        return paste.upload(&output).await;
    }
    Ok(output)
}

async fn run(ctx: &Context, msg: &Message, args: Args, direction: Direction) -> CommandResult {
    let text = args.rest();
    if text.is_empty() {
        Reply::embed("Please provide some text or a mystb.in link!").send(ctx, msg).await?;
        return Ok(());
    }

    let services = services::services(ctx).await?;
    let output = bottom_reply(direction, text, services.paste.as_ref()).await?;
    Reply::embed(output).send(ctx, msg).await?;
    Ok(())
}

#[command]
#[aliases("bottom_decode")]
#[usage = "<bottom text or mystb.in link>"]
pub async fn bottomdecode(ctx: &Context, msg: &Message, args: Args) -> CommandResult {
    run(ctx, msg, args, Direction::Decode).await
}

#[command]
#[aliases("bottom_encode")]
#[usage = "<text or mystb.in link>"]
pub async fn bottomencode(ctx: &Context, msg: &Message, args: Args) -> CommandResult {
    run(ctx, msg, args, Direction::Encode).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FunError;
    use async_trait::async_trait;
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    #[derive(Default)]
    struct FakePaste {
        pastes: HashMap<String, String>,
        fetches: AtomicUsize,
        uploads: Mutex<Vec<String>>,
        unreachable: bool,
    }

    impl FakePaste {
        fn with(id: &str, content: &str) -> Self {
            let mut fake = Self::default();
            fake.pastes.insert(id.to_string(), content.to_string());
            fake
        }
    }

    #[async_trait]
    impl PasteService for FakePaste {
        async fn fetch(&self, id: &str) -> FunResult<Option<String>> {
            self.fetches.fetch_add(1, Ordering::SeqCst);
            if self.unreachable {
                return Err(FunError::Decode("connection reset".to_string()));
            }
            Ok(self.pastes.get(id).cloned())
        }

        async fn upload(&self, content: &str) -> FunResult<String> {
            self.uploads.lock().unwrap().push(content.to_string());
            Ok("https://mystb.in/Uploaded".to_string())
        }
    }

    #[test]
    fn test_paste_id_forms() {
        assert_eq!(paste_id("https://mystb.in/AbcDef"), Some("AbcDef"));
        assert_eq!(paste_id("http://mystb.in/AbcDef.py"), Some("AbcDef"));
        assert_eq!(paste_id("mystb.in/AbcDef"), Some("AbcDef"));
        assert_eq!(paste_id("AbcDef.rs"), Some("AbcDef"));
        assert_eq!(paste_id("hello world"), Some("hello"));
        assert_eq!(paste_id("123abc"), None);
        assert_eq!(paste_id("🥺👉👈"), None);
        assert_eq!(paste_id("https://example.com/abc"), Some("https"));
    }

    #[test]
    fn test_paste_syntax_capture() {
        let caps = PASTE_LINK.captures("mystb.in/AbcDef.py").unwrap();
        assert_eq!(caps.name("syntax").map(|m| m.as_str()), Some("py"));
    }

    #[tokio::test]
    async fn test_check_mystbin_unknown_id_returns_text() {
        let paste = FakePaste::default();
        assert_eq!(check_mystbin("hello", &paste).await, "hello");
        assert_eq!(paste.fetches.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_check_mystbin_no_match_skips_lookup() {
        let paste = FakePaste::default();
        assert_eq!(check_mystbin("42 is the answer", &paste).await, "42 is the answer");
        assert_eq!(paste.fetches.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_check_mystbin_resolves_link() {
        let paste = FakePaste::with("AbcDef", "pasted content");
        assert_eq!(
            check_mystbin("https://mystb.in/AbcDef.txt", &paste).await,
            "pasted content"
        );
    }

    #[tokio::test]
    async fn test_check_mystbin_falls_back_when_unreachable() {
        let paste = FakePaste {
            unreachable: true,
            ..Default::default()
        };
        assert_eq!(check_mystbin("mystb.in/AbcDef", &paste).await, "mystb.in/AbcDef");
    }

    #[tokio::test]
    async fn test_bottom_reply_round_trip_inline() {
        let paste = FakePaste::default();
        let encoded = bottom_reply(Direction::Encode, "hi", &paste).await.unwrap();
        assert_eq!(encoded, bottom::encode("hi"));
        let decoded = bottom_reply(Direction::Decode, &encoded, &paste).await.unwrap();
        assert_eq!(decoded, "hi");
        assert!(paste.uploads.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_long_output_goes_to_paste() {
        let paste = FakePaste::default();
        // Every byte encodes to at least three characters, so this overflows.
        let reply = bottom_reply(Direction::Encode, &"z".repeat(200), &paste).await.unwrap();
        assert_eq!(reply, "https://mystb.in/Uploaded");
        let uploads = paste.uploads.lock().unwrap();
        assert_eq!(uploads.len(), 1);
        assert_eq!(uploads[0], bottom::encode(&"z".repeat(200)));
    }

    #[tokio::test]
    async fn test_decode_of_garbage_is_an_error() {
        let paste = FakePaste::default();
        let result = bottom_reply(Direction::Decode, "not bottom", &paste).await;
        assert!(matches!(result, Err(FunError::Decode(_))));
    }
}
