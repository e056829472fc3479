//! Human-readable response printer

use std::io::{self, Write};

use serde_json::Value;

use super::envelope::{Body, Envelope};

/// Default number of body characters shown
pub const DEFAULT_MAX_TEXT_LENGTH: usize = 500;

const RULE_WIDTH: usize = 50;

/// Print an envelope summary to stdout
pub fn print_response(envelope: &Envelope, max_text_length: usize) {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = write_response(&mut out, envelope, max_text_length) {
        tracing::debug!("Failed to write response summary: {}", e);
    }
}

/// Write an envelope summary
///
/// Only JSON objects and text bodies are shown; arrays and scalars print the
/// status line alone.
pub fn write_response<W: Write>(
    out: &mut W,
    envelope: &Envelope,
    max_text_length: usize,
) -> io::Result<()> {
    let reply = match envelope {
        Envelope::Failure { error } => return writeln!(out, "[ERROR] {}", error),
        Envelope::Success(reply) => reply,
    };

    writeln!(out, "[INFO] Status: {}", reply.status_code)?;

    match &reply.data {
        Body::Json(value @ Value::Object(_)) => {
            let pretty = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
            let pretty = escape_non_ascii(&pretty);
            writeln!(out, "\n[DATA]")?;
            writeln!(out, "{}", truncate_chars(&pretty, max_text_length))?;
        }
        Body::Json(_) => {}
        Body::Text(text) => {
            let rule = "-".repeat(RULE_WIDTH);
            writeln!(out, "\n[DATA] (length: {})", text.chars().count())?;
            writeln!(out, "{}", rule)?;
            if text.chars().count() > max_text_length {
                writeln!(out, "{}...", truncate_chars(text, max_text_length))?;
            } else {
                writeln!(out, "{}", text)?;
            }
            writeln!(out, "{}", rule)?;
        }
    }

    if let Some(bytes) = &reply.image_data {
        let kind = match &reply.data {
            Body::Text(text) => text.clone(),
            Body::Json(value) => value.to_string(),
        };
        writeln!(out, "\n[IMAGE] Type: {}, Size: {} bytes", kind, bytes.len())?;
    }

    Ok(())
}

/// Replace non-ASCII characters with `\uXXXX` escapes (UTF-16 surrogate pairs above U+FFFF)
///
/// Only valid on serialized JSON, where such characters can appear inside
/// string literals alone.
fn escape_non_ascii(json: &str) -> String {
    let mut out = String::with_capacity(json.len());
    let mut units = [0u16; 2];
    for c in json.chars() {
        if c.is_ascii() {
            out.push(c);
        } else {
            for unit in c.encode_utf16(&mut units) {
                out.push_str(&format!("\\u{:04x}", unit));
            }
        }
    }
    out
}

/// Prefix of `s` holding at most `max` characters
fn truncate_chars(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
