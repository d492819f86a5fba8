// commands/mod.rs - Command Module Registry
// Declares the command modules and the groups main.rs registers with the framework.

pub mod b64;            // base64 encode/decode group
pub mod bottom;         // Bottom codec commands with paste-service resolution
pub mod help;           // Help listing
pub mod images;         // http.cat and supreme logo relays
pub mod jokes;          // Chuck Norris jokes
pub mod random;         // Seeded draws, roo and the reaction race
pub mod text;           // Pure text transforms

use serenity::framework::standard::macros::group;

use self::bottom::{BOTTOMDECODE_COMMAND, BOTTOMENCODE_COMMAND};
use self::help::HELP_COMMAND;
use self::images::{HTTP_COMMAND, SUPREME_COMMAND};
use self::jokes::CHUCKNORRIS_COMMAND;
use self::random::{PP_COMMAND, REACT_COMMAND, ROO_COMMAND, SHIP_COMMAND};
use self::text::{
    BUILDUP_CMD_COMMAND, CLAP_COMMAND, PARTYFROG_COMMAND, REPLACESPACE_COMMAND, REVERSE_CMD_COMMAND,
    SPOILER_CMD_COMMAND,
};

pub use self::b64::BASE64_GROUP;

#[group]
#[description = "For the fun commands"]
#[commands(
    help,
    http,
    supreme,
    replacespace,
    reverse_cmd,
    spoiler_cmd,
    partyfrog,
    clap,
    buildup_cmd,
    react,
    ship,
    pp,
    roo,
    chucknorris,
    bottomencode,
    bottomdecode
)]
pub struct Fun;
