// bottom.rs - Bottom text codec
// Every UTF-8 byte becomes a run of weighted emoji followed by a 👉👈 separator.
// A zero byte is written as ❤️.

use crate::error::{FunError, FunResult};

const SEPARATOR: &str = "👉👈";
const NULL_BYTE: &str = "❤️";

/// Weighted symbols, largest first so encoding can be greedy.
const WEIGHTS: [(u8, char); 5] = [
    (200, '🫂'),
    (50, '💖'),
    (10, '✨'),
    (5, '🥺'),
    (1, ','),
];

pub fn encode(text: &str) -> String {
    let mut out = String::with_capacity(text.len() * 8);
    for byte in text.bytes() {
        encode_byte(byte, &mut out);
        out.push_str(SEPARATOR);
    }
    out
}

fn encode_byte(byte: u8, out: &mut String) {
    if byte == 0 {
        out.push_str(NULL_BYTE);
        return;
    }
    let mut remaining = byte;
    for (weight, symbol) in WEIGHTS {
        while remaining >= weight {
            out.push(symbol);
            remaining -= weight;
        }
    }
}

pub fn decode(text: &str) -> FunResult<String> {
    let text = text.trim();
    let text = text.strip_suffix(SEPARATOR).unwrap_or(text);
    if text.is_empty() {
        return Ok(String::new());
    }

    let bytes = text
        .split(SEPARATOR)
        .map(decode_group)
        .collect::<FunResult<Vec<u8>>>()?;

    Ok(String::from_utf8(bytes)?)
}

fn decode_group(group: &str) -> FunResult<u8> {
    let mut sum: u8 = 0;
    for c in group.chars() {
        let weight = match c {
            '🫂' => 200,
            '💖' => 50,
            '✨' => 10,
            '🥺' => 5,
            ',' => 1,
            '❤' | '\u{FE0F}' => 0,
            other => {
                return Err(FunError::Decode(format!(
                    "'{}' is not a bottom character",
                    other
                )))
            }
        };
        sum = sum
            .checked_add(weight)
            .ok_or_else(|| FunError::Decode("group value exceeds a byte".to_string()))?;
    }
    Ok(sum)
}
