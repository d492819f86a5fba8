use serenity::{
    client::Context,
    framework::standard::{macros::command, Args, CommandResult},
    model::channel::Message,
};

use crate::render::Reply;
use crate::services::{self, jokes, jokes::Joke};

pub fn joke_reply(joke: Joke) -> Reply {
    Reply::embed(joke.value)
        .title("Chuck Norris Joke")
        .url(joke.url)
        .thumbnail(joke.icon_url)
}

#[command]
#[aliases("norris", "chucknorrisjoke")]
#[description = "Gets a random Chuck Norris Joke"]
pub async fn chucknorris(ctx: &Context, msg: &Message, _args: Args) -> CommandResult {
    let services = services::services(ctx).await?;
    let joke = jokes::random(&services.chuck_norris_url).await?;
    joke_reply(joke).send(ctx, msg).await?;
    Ok(())
}
