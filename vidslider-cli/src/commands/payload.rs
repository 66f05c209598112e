// ============================================================================
// vidslider-cli/src/commands/payload.rs
// ============================================================================
//
// PAYLOAD COMMANDS: Pair <-> Transfer Payload
//
// `encode` builds the payload for one or two videos; `decode` reads a payload
// and prints the pair as a JSON array of strings and nulls.
//
// AI-ASSISTANT-INFO: Implementation of the payload encode/decode commands

use crate::error::{CliErrorContext, CliResult};

use serde_json::{Value, json};
use std::io::Read;
use std::path::Path;
use vidslider_core::{TransferPayload, VideoPair, VideoRef, decode, encode_value};

/// Marks an absent side on the command line.
pub const ABSENT: &str = "-";

fn side_value(arg: Option<&str>) -> Value {
    match arg {
        None | Some(ABSENT) => Value::Null,
        Some(value) => Value::String(value.to_string()),
    }
}

/// Host value for the two positional arguments.
#[must_use]
pub fn pair_value(left: &str, right: Option<&str>) -> Value {
    json!([side_value(Some(left)), side_value(right)])
}

/// JSON array form of a decoded pair, `null` when absent.
#[must_use]
pub fn pair_json(pair: Option<&VideoPair>) -> Value {
    match pair {
        None => Value::Null,
        Some(pair) => {
            let side = |v: &Option<VideoRef>| {
                v.as_ref().map_or(Value::Null, |r| Value::String(r.to_string()))
            };
            json!([side(&pair.left), side(&pair.right)])
        }
    }
}

/// Executes `payload encode` and returns the printed JSON.
///
/// # Errors
///
/// Returns `UnsupportedVideoValue` for inputs that are neither paths nor
/// http(s) URLs.
pub fn run_payload_encode(left: &str, right: Option<&str>) -> CliResult<String> {
    let payload = encode_value(&pair_value(left, right))?;
    let json = TransferPayload::to_json(payload.as_ref())?;
    println!("{json}");
    Ok(json)
}

/// Executes `payload decode` on `file`, or on stdin when `None`.
///
/// # Errors
///
/// Fails if the input cannot be read or is not a valid payload.
pub fn run_payload_decode(file: Option<&Path>) -> CliResult<Value> {
    let text = match file {
        Some(path) => std::fs::read_to_string(path)
            .cli_with_context(|| format!("Reading payload from {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .cli_context("Reading payload from stdin")?;
            buf
        }
    };

    let payload = TransferPayload::parse(text.trim())?;
    let pair = decode(payload.as_ref())?;
    let out = pair_json(pair.as_ref());
    println!("{out}");
    Ok(out)
}
