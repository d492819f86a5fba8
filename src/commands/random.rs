// random.rs - Randomized Commands
// ship and pp draw from an explicitly seeded generator so the same users always
// get the same answer. roo and react pick from the custom emojis the bot can see.
// react is the only command that waits on the gateway: it suspends until the
// requester reacts with the right emoji or the window closes.
//
// Used by: commands/mod.rs (FUN_GROUP)

use std::fmt;
use std::future::Future;
use std::time::Duration;

use rand::{rngs::StdRng, seq::SliceRandom, Rng, SeedableRng};
use serenity::{
    client::Context,
    framework::standard::{macros::command, Args, CommandResult},
    model::{
        channel::{Message, ReactionType},
        guild::Emoji,
        id::{EmojiId, UserId},
    },
};
use tokio::time::Instant;

use crate::error::{FunError, FunResult};
use crate::render::Reply;

pub const MAX_REACT_SECONDS: u64 = 30;
pub const DEFAULT_REACT_SECONDS: u64 = 5;

// ============================================================================
// SEEDED DRAWS
// ============================================================================

/// One draw from `range`, fully determined by `seed`.
pub fn seeded_draw(seed: u64, range: std::ops::RangeInclusive<u32>) -> u32 {
    StdRng::seed_from_u64(seed).gen_range(range)
}

/// Commutative so `ship a b` and `ship b a` agree.
pub fn ship_seed(a: UserId, b: UserId) -> u64 {
    a.0.wrapping_add(b.0)
}

pub fn ship_message(a: UserId, b: UserId) -> String {
    let love = seeded_draw(ship_seed(a, b), 1..=100);
    let shown: String = love.to_string().chars().take(2).collect();
    format!(
        "I calculate that the love between <@{}> and <@{}> is {}%",
        a.0, b.0, shown
    )
}

pub fn pp_message(user: UserId) -> String {
    let length = seeded_draw(user.0, 1..=25) as usize;
    format!("8{}D", "=".repeat(length))
}

/// Accepts `<@id>`, `<@!id>` or a bare id.
pub fn parse_user(arg: &str) -> FunResult<UserId> {
    let id_str = arg
        .trim()
        .trim_start_matches("<@")
        .trim_start_matches('!')
        .trim_end_matches('>');
    id_str
        .parse::<u64>()
        .map(UserId)
        .map_err(|_| FunError::validation(format!("`{}` is not a user mention.", arg)))
}

// ============================================================================
// EMOJI POOL
// ============================================================================

/// A custom emoji as the bot can render and react with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmojiSymbol {
    pub id: EmojiId,
    pub name: String,
    pub animated: bool,
}

impl EmojiSymbol {
    pub fn reaction(&self) -> ReactionType {
        ReactionType::Custom {
            animated: self.animated,
            id: self.id,
            name: Some(self.name.clone()),
        }
    }

    pub fn matches(&self, reaction: &ReactionType) -> bool {
        matches!(reaction, ReactionType::Custom { id, .. } if *id == self.id)
    }
}

impl fmt::Display for EmojiSymbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let prefix = if self.animated { "a" } else { "" };
        write!(f, "<{}:{}:{}>", prefix, self.name, self.id.0)
    }
}

impl From<&Emoji> for EmojiSymbol {
    fn from(emoji: &Emoji) -> Self {
        Self {
            id: emoji.id,
            name: emoji.name.clone(),
            animated: emoji.animated,
        }
    }
}

/// Every custom emoji in every guild the bot is in.
pub fn available_emojis(ctx: &Context) -> Vec<EmojiSymbol> {
    ctx.cache
        .guilds()
        .into_iter()
        .filter_map(|guild_id| ctx.cache.guild(guild_id))
        .flat_map(|guild| guild.emojis.values().map(EmojiSymbol::from).collect::<Vec<_>>())
        .collect()
}

pub fn pick_emoji<R: Rng + ?Sized>(pool: &[EmojiSymbol], rng: &mut R) -> FunResult<EmojiSymbol> {
    pool.choose(rng).cloned().ok_or(FunError::EmptyEmojiPool("custom"))
}

pub fn pick_roo<R: Rng + ?Sized>(pool: &[EmojiSymbol], rng: &mut R) -> FunResult<EmojiSymbol> {
    let roos: Vec<&EmojiSymbol> = pool.iter().filter(|e| e.name.starts_with("roo")).collect();
    roos.choose(rng)
        .map(|e| (*e).clone())
        .ok_or(FunError::EmptyEmojiPool("roo"))
}

// ============================================================================
// REACTION RACE
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ReactionRace {
    Reacted(Duration),
    TimedOut,
}

/// Validate the requested target; 0 or nothing means the default.
pub fn react_seconds(requested: Option<u64>) -> FunResult<u64> {
    match requested {
        Some(s) if s > MAX_REACT_SECONDS => Err(FunError::validation(format!(
            "You cannot specify more than {} seconds. Sorry.",
            MAX_REACT_SECONDS
        ))),
        Some(0) | None => Ok(DEFAULT_REACT_SECONDS),
        Some(s) => Ok(s),
    }
}

/// Players get half as long again as the target.
pub fn reaction_window(seconds: u64) -> Duration {
    Duration::from_millis(seconds * 1500)
}

/// Wait for `reaction` until the window closes. A reaction stream that ends
/// without a match counts as a timeout.
pub async fn race_reaction<F, T>(seconds: u64, reaction: F) -> ReactionRace
where
    F: Future<Output = Option<T>>,
{
    let start = Instant::now();
    match tokio::time::timeout(reaction_window(seconds), reaction).await {
        Ok(Some(_)) => ReactionRace::Reacted(start.elapsed()),
        Ok(None) | Err(_) => ReactionRace::TimedOut,
    }
}

pub fn race_message(seconds: u64, race: ReactionRace) -> String {
    match race {
        ReactionRace::Reacted(elapsed) => {
            let took = elapsed.as_secs_f64();
            format!(
                "You reacted in **{:.2}** seconds, **{:.2}** off.",
                took,
                seconds as f64 - took
            )
        }
        ReactionRace::TimedOut => "You did not react in time".to_string(),
    }
}

// ============================================================================
// COMMAND IMPLEMENTATIONS
// ============================================================================

#[command]
#[description = "Calculates the love between two users"]
#[usage = "<@user> [@user]"]
pub async fn ship(ctx: &Context, msg: &Message, mut args: Args) -> CommandResult {
    let first = match args.single::<String>() {
        Ok(arg) => arg,
        Err(_) => {
            Reply::embed("Usage: `ship <@user> [@user]`").send(ctx, msg).await?;
            return Ok(());
        }
    };
    let second = args.single::<String>().ok();

    let users = parse_user(&first).and_then(|a| {
        let b = second.as_deref().map(parse_user).transpose()?.unwrap_or(msg.author.id);
        Ok((a, b))
    });
    let reply = match users {
        Ok((a, b)) => ship_message(a, b),
        Err(FunError::Validation(text)) => text,
        Err(e) => return Err(e.into()),
    };

    Reply::embed(reply).send(ctx, msg).await?;
    Ok(())
}

#[command]
#[aliases("ppsize")]
#[usage = "[@user]"]
pub async fn pp(ctx: &Context, msg: &Message, mut args: Args) -> CommandResult {
    let reply = match args.single::<String>() {
        Ok(arg) => match parse_user(&arg) {
            Ok(user) => pp_message(user),
            Err(e) => e.to_string(),
        },
        Err(_) => pp_message(msg.author.id),
    };

    Reply::embed(reply).send(ctx, msg).await?;
    Ok(())
}

#[command]
#[description = "Sends a random \"roo\" emoji"]
pub async fn roo(ctx: &Context, msg: &Message, _args: Args) -> CommandResult {
    let pool = available_emojis(ctx);
    let emoji = pick_roo(&pool, &mut rand::thread_rng())?;
    Reply::plain(emoji.to_string()).send(ctx, msg).await?;
    Ok(())
}

#[command]
#[description = "Checks your speed."]
#[usage = "[seconds]"]
pub async fn react(ctx: &Context, msg: &Message, mut args: Args) -> CommandResult {
    let requested = if args.is_empty() {
        None
    } else {
        match args.single::<u64>() {
            Ok(s) => Some(s),
            Err(_) => {
                Reply::embed("Please give the number of seconds as a whole number.").send(ctx, msg).await?;
                return Ok(());
            }
        }
    };
    let seconds = match react_seconds(requested) {
        Ok(seconds) => seconds,
        Err(e) => {
            Reply::embed(e.to_string()).send(ctx, msg).await?;
            return Ok(());
        }
    };

    // Pick before awaiting so the thread-local rng is not held across awaits.
    let target = {
        let pool = available_emojis(ctx);
        pick_emoji(&pool, &mut rand::thread_rng())?
    };

    let mut prompt = Reply::embed(format!(
        "React to this message with {} in {} seconds.",
        target, seconds
    ))
    .send(ctx, msg)
    .await?;
    prompt.react(ctx, target.reaction()).await?;

    let wanted = target.clone();
    let collector = prompt
        .await_reaction(ctx)
        .author_id(msg.author.id)
        .added(true)
        .removed(false)
        .filter(move |reaction| wanted.matches(&reaction.emoji));
    let race = race_reaction(seconds, collector).await;
    log::debug!("react for {} finished: {:?}", msg.author.id, race);

    if let Err(e) = Reply::embed(race_message(seconds, race)).edit(ctx, msg, &mut prompt).await {
        log::warn!("Failed to edit react prompt {}: {}", prompt.id, e);
    }
    Ok(())
}
