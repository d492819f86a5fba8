// images.rs - Image Relay Commands
// Fetch an image from an external service and relay it as an embed attachment.
//
// Used by: commands/mod.rs (FUN_GROUP)

use serenity::{
    client::Context,
    framework::standard::{macros::command, Args, CommandResult, Delimiter},
    model::channel::Message,
};

use crate::error::{FunError, FunResult};
use crate::render::Reply;
use crate::services::{self, cats, LogoGenerator, SupremeOptions};

pub const DEFAULT_HTTP_CODE: u16 = 404;

/// Status code for `http`. No argument means 404.
pub fn parse_code(args: &mut Args) -> FunResult<u16> {
    if args.is_empty() {
        return Ok(DEFAULT_HTTP_CODE);
    }
    args.single::<u16>()
        .map_err(|_| FunError::validation("Please give an HTTP status code, like `404`."))
}

/// `--text <value>`, `--dark`, `--light`. Values may be quoted.
pub fn parse_supreme_flags(raw: &str) -> FunResult<SupremeOptions> {
    let mut args = Args::new(raw, &[Delimiter::Single(' ')]);
    let mut options = SupremeOptions::default();

    while !args.is_empty() {
        let flag = args
            .single_quoted::<String>()
            .map_err(|_| FunError::validation("Could not read the flags."))?;
        match flag.as_str() {
            "--dark" => options.dark = true,
            "--light" => options.light = true,
            "--text" => {
                options.text = args
                    .single_quoted::<String>()
                    .map_err(|_| FunError::validation("`--text` needs a value."))?;
            }
            "" => {}
            other => {
                return Err(FunError::validation(format!(
                    "Unknown flag `{}`. Usage: `supreme --text \"text\" [--dark|--light]`",
                    other
                )))
            }
        }
    }

    Ok(options)
}

/// Validate the flags and render the logo. Conflicting flags never reach the
/// generator.
pub async fn supreme_reply(options: &SupremeOptions, logo: &dyn LogoGenerator) -> FunResult<Reply> {
    if options.dark && options.light {
        return Err(FunError::validation("You can't have both dark and light, sorry."));
    }
    let image = logo.supreme(options).await?;
    Ok(Reply::image("supreme.png", image).with_author())
}

#[command]
#[aliases("httpcat", "http_cat")]
#[description = "Sends a cat for every error code"]
#[usage = "[code]"]
pub async fn http(ctx: &Context, msg: &Message, mut args: Args) -> CommandResult {
    let code = match parse_code(&mut args) {
        Ok(code) => code,
        Err(e) => {
            Reply::embed(e.to_string()).send(ctx, msg).await?;
            return Ok(());
        }
    };

    let services = services::services(ctx).await?;
    let image = cats::fetch(&services.http_cat_url, code).await?;
    Reply::image(format!("{}.png", code), image).send(ctx, msg).await?;
    Ok(())
}

#[command]
#[description = "Makes a custom supreme logo"]
#[usage = "--text \"hey guys\" [--dark|--light]"]
pub async fn supreme(ctx: &Context, msg: &Message, args: Args) -> CommandResult {
    let services = services::services(ctx).await?;
    let reply = match parse_supreme_flags(args.rest()) {
        Ok(options) => supreme_reply(&options, services.logo.as_ref()).await,
        Err(e) => Err(e),
    };

    match reply {
        Ok(reply) => reply.send(ctx, msg).await?,
        Err(FunError::Validation(text)) => Reply::embed(text).send(ctx, msg).await?,
        Err(e) => return Err(e.into()),
    };
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Default)]
    struct CountingLogo {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl LogoGenerator for CountingLogo {
        async fn supreme(&self, _options: &SupremeOptions) -> FunResult<Vec<u8>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(vec![0x89, b'P', b'N', b'G'])
        }
    }

    fn http_args(raw: &str) -> Args {
        Args::new(raw, &[Delimiter::Single(' ')])
    }

    #[test]
    fn test_parse_code_defaults_to_not_found() {
        assert_eq!(parse_code(&mut http_args("")).unwrap(), DEFAULT_HTTP_CODE);
    }

    #[test]
    fn test_parse_code_reads_status() {
        assert_eq!(parse_code(&mut http_args("418")).unwrap(), 418);
    }

    #[test]
    fn test_parse_code_rejects_garbage() {
        for raw in ["teapot", "-1", "70000"] {
            match parse_code(&mut http_args(raw)) {
                Err(FunError::Validation(text)) => {
                    assert_eq!(text, "Please give an HTTP status code, like `404`.")
                }
                other => panic!("expected validation error, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_parse_supreme_flags_defaults() {
        assert_eq!(parse_supreme_flags("").unwrap(), SupremeOptions::default());
    }

    #[test]
    fn test_parse_supreme_flags_quoted_text() {
        let options = parse_supreme_flags("--text \"hey guys\" --dark").unwrap();
        assert_eq!(options.text, "hey guys");
        assert!(options.dark);
        assert!(!options.light);
    }

    #[test]
    fn test_parse_supreme_flags_rejects_unknown() {
        assert!(matches!(parse_supreme_flags("--shiny"), Err(FunError::Validation(_))));
        assert!(matches!(parse_supreme_flags("--text"), Err(FunError::Validation(_))));
    }

    #[tokio::test]
    async fn test_dark_and_light_never_call_generator() {
        let logo = CountingLogo::default();
        let options = SupremeOptions {
            dark: true,
            light: true,
            ..Default::default()
        };

        match supreme_reply(&options, &logo).await {
            Err(FunError::Validation(text)) => {
                assert_eq!(text, "You can't have both dark and light, sorry.")
            }
            other => panic!("expected validation error, got {:?}", other),
        }
        assert_eq!(logo.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_supreme_attaches_logo() {
        let logo = CountingLogo::default();
        let options = parse_supreme_flags("--light").unwrap();

        let reply = supreme_reply(&options, &logo).await.unwrap();
        assert_eq!(logo.calls.load(Ordering::SeqCst), 1);
        match reply {
            Reply::Embed(embed) => {
                let image = embed.image.expect("logo attached");
                assert_eq!(image.filename, "supreme.png");
                assert!(embed.show_author);
            }
            Reply::Plain(_) => panic!("expected an embed"),
        }
    }
}
