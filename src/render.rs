// render.rs - Reply Renderer
// Turns a handler's output into exactly one outbound Discord message.
// Embeds always carry the accent colour, a "Requested by" footer with the
// requester's avatar and the triggering message's timestamp.

use serenity::{
    builder::CreateEmbed,
    client::Context,
    model::channel::{AttachmentType, Message},
};

use crate::config::bot_config;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageAttachment {
    pub filename: String,
    pub data: Vec<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmbedReply {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<String>,
    pub image: Option<ImageAttachment>,
    pub show_author: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Embed(EmbedReply),
    /// Plain text with every mention suppressed.
    Plain(String),
}

impl Reply {
    pub fn embed(description: impl Into<String>) -> Self {
        Reply::Embed(EmbedReply {
            description: Some(description.into()),
            ..Default::default()
        })
    }

    /// An embed that shows nothing but the attached image.
    pub fn image(filename: impl Into<String>, data: Vec<u8>) -> Self {
        Reply::Embed(EmbedReply {
            image: Some(ImageAttachment {
                filename: filename.into(),
                data,
            }),
            ..Default::default()
        })
    }

    pub fn plain(content: impl Into<String>) -> Self {
        Reply::Plain(content.into())
    }

    pub fn title(self, title: impl Into<String>) -> Self {
        self.map_embed(|e| e.title = Some(title.into()))
    }

    pub fn url(self, url: impl Into<String>) -> Self {
        self.map_embed(|e| e.url = Some(url.into()))
    }

    pub fn thumbnail(self, url: impl Into<String>) -> Self {
        self.map_embed(|e| e.thumbnail = Some(url.into()))
    }

    pub fn with_author(self) -> Self {
        self.map_embed(|e| e.show_author = true)
    }

    fn map_embed(mut self, f: impl FnOnce(&mut EmbedReply)) -> Self {
        if let Reply::Embed(embed) = &mut self {
            f(embed);
        }
        self
    }

    pub async fn send(self, ctx: &Context, msg: &Message) -> serenity::Result<Message> {
        match self {
            Reply::Plain(content) => {
                msg.channel_id
                    .send_message(&ctx.http, |m| {
                        m.content(content);
                        m.allowed_mentions(|am| am.empty_parse());
                        m
                    })
                    .await
            }
            Reply::Embed(mut embed) => {
                let colour = accent_colour(ctx).await;
                let attachment = embed.image.take();
                let image_name = attachment.as_ref().map(|a| a.filename.clone());
                msg.channel_id
                    .send_message(&ctx.http, |m| {
                        m.embed(|e| {
                            decorate(e, &embed, msg, colour);
                            if let Some(name) = &image_name {
                                e.image(format!("attachment://{}", name));
                            }
                            e
                        });
                        if let Some(ImageAttachment { filename, data }) = attachment {
                            m.add_file(AttachmentType::Bytes {
                                data: data.into(),
                                filename,
                            });
                        }
                        m
                    })
                    .await
            }
        }
    }

    /// Replace the embed of a message this bot already sent.
    pub async fn edit(self, ctx: &Context, msg: &Message, target: &mut Message) -> serenity::Result<()> {
        let colour = accent_colour(ctx).await;
        match self {
            Reply::Plain(content) => target.edit(&ctx.http, |m| m.content(content)).await,
            Reply::Embed(embed) => {
                target
                    .edit(&ctx.http, |m| {
                        m.embed(|e| {
                            decorate(e, &embed, msg, colour);
                            e
                        })
                    })
                    .await
            }
        }
    }
}

async fn accent_colour(ctx: &Context) -> u32 {
    match bot_config(ctx).await {
        Ok(config) => config.embed_color,
        Err(_) => crate::config::DEFAULT_EMBED_COLOR,
    }
}

fn decorate(e: &mut CreateEmbed, embed: &EmbedReply, msg: &Message, colour: u32) {
    e.colour(colour);
    e.timestamp(msg.timestamp);
    e.footer(|f| {
        f.text(format!("Requested by {}", msg.author.tag()));
        f.icon_url(msg.author.face())
    });
    if embed.show_author {
        e.author(|a| a.name(msg.author.tag()).icon_url(msg.author.face()));
    }
    if let Some(title) = &embed.title {
        e.title(title);
    }
    if let Some(url) = &embed.url {
        e.url(url);
    }
    if let Some(description) = &embed.description {
        e.description(description);
    }
    if let Some(thumbnail) = &embed.thumbnail {
        e.thumbnail(thumbnail);
    }
}
