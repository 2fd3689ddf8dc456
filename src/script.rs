// SPDX-License-Identifier: MPL-2.0
//! Line-based command scripts for driving a viewer without a window.
//!
//! One command per line:
//!
//! ```text
//! next | prev | select N | backdrop | close | state
//! key escape|left|right
//! down x,y [x,y]      # contact start, listing every active contact
//! move x,y [x,y]      # contact move
//! up T [x,y]          # contact end at T ms after the script started
//! ```
//!
//! Blank lines and lines starting with `#` are skipped.

use crate::error::{Error, Result};
use crate::ui::viewer::{Message, ViewerKey};
use iced_core::Point;
use std::time::{Duration, Instant};

/// A parsed script line.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Feed this message to the viewer.
    Send(Message),
    /// Print the current state without changing it.
    PrintState,
}

/// Parses one script line. `origin` anchors the `up` timestamps.
///
/// Returns `Ok(None)` for blank and comment lines.
pub fn parse_line(line: &str, origin: Instant) -> Result<Option<Command>> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let mut words = line.split_whitespace();
    let Some(verb) = words.next() else {
        return Ok(None);
    };
    let args: Vec<&str> = words.collect();

    let message = match (verb, args.as_slice()) {
        ("state", []) => return Ok(Some(Command::PrintState)),
        ("next", []) => Message::Next,
        ("prev", []) => Message::Previous,
        ("backdrop", []) => Message::BackdropClicked,
        ("close", []) => Message::Close,
        ("select", [index]) => Message::Select(parse_number(index)?),
        ("key", [name]) => Message::KeyPressed(parse_key(name)?),
        ("down", points) if !points.is_empty() => Message::TouchStarted {
            contacts: parse_points(points)?,
        },
        ("move", points) if !points.is_empty() => Message::TouchMoved {
            contacts: parse_points(points)?,
        },
        ("up", [millis, points @ ..]) => Message::TouchEnded {
            contacts: parse_points(points)?,
            at: origin + Duration::from_millis(parse_number(millis)?),
        },
        _ => return Err(Error::Script(format!("unrecognized command: {line}"))),
    };

    Ok(Some(Command::Send(message)))
}

fn parse_key(name: &str) -> Result<ViewerKey> {
    match name.to_ascii_lowercase().as_str() {
        "escape" | "esc" => Ok(ViewerKey::Escape),
        "left" | "arrowleft" => Ok(ViewerKey::ArrowLeft),
        "right" | "arrowright" => Ok(ViewerKey::ArrowRight),
        _ => Err(Error::Script(format!("unknown key: {name}"))),
    }
}

fn parse_number<T: std::str::FromStr>(text: &str) -> Result<T> {
    text.parse()
        .map_err(|_| Error::Script(format!("invalid number: {text}")))
}

fn parse_points(words: &[&str]) -> Result<Vec<Point>> {
    words.iter().map(|word| parse_point(word)).collect()
}

fn parse_point(word: &str) -> Result<Point> {
    let (x, y) = word
        .split_once(',')
        .ok_or_else(|| Error::Script(format!("expected x,y but got: {word}")))?;
    let x: f32 = parse_number(x.trim())?;
    let y: f32 = parse_number(y.trim())?;
    if !x.is_finite() || !y.is_finite() {
        return Err(Error::Script(format!("non-finite coordinate: {word}")));
    }
    Ok(Point::new(x, y))
}
