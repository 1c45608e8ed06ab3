//! Line-oriented commands for driving a carousel from a terminal or script.

use std::str::FromStr;

use anyhow::{Context, Error, Result, anyhow, bail};

use crate::events::{Input, Key, Target};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Input(Input),
    Quit,
}

impl FromStr for Command {
    type Err = Error;

    fn from_str(line: &str) -> Result<Self> {
        let mut words = line.split_whitespace();
        let verb = words
            .next()
            .ok_or_else(|| anyhow!("empty command"))?
            .to_ascii_lowercase();
        let arg = words.next();
        if words.next().is_some() {
            bail!("too many arguments: {line}");
        }

        let input = match (verb.as_str(), arg) {
            ("quit" | "exit", None) => return Ok(Self::Quit),
            ("next", None) => Input::Click(Target::InlineNext),
            ("prev", None) => Input::Click(Target::InlinePrev),
            ("modal-next", None) => Input::Click(Target::ModalNext),
            ("modal-prev", None) => Input::Click(Target::ModalPrev),
            ("close", None) => Input::Click(Target::CloseControl),
            ("backdrop", None) => Input::Click(Target::Backdrop),
            ("content", None) => Input::Click(Target::ModalContent),
            ("click", Some(index)) => Input::Click(Target::Item(
                index
                    .parse()
                    .with_context(|| format!("invalid item index: {index}"))?,
            )),
            ("key", Some(key)) => Input::Key(parse_key(key)),
            ("enter", None) => Input::PointerEnter,
            ("leave", None) => Input::PointerLeave,
            ("resize", Some(width)) => Input::Resize(
                width
                    .parse()
                    .with_context(|| format!("invalid width: {width}"))?,
            ),
            ("end", None) => Input::TransitionEnd,
            ("tick", None) => Input::Tick,
            _ => bail!("unrecognized command: {line}"),
        };
        Ok(Self::Input(input))
    }
}

fn parse_key(name: &str) -> Key {
    match name.to_ascii_lowercase().as_str() {
        "escape" | "esc" => Key::Escape,
        "left" | "arrowleft" => Key::ArrowLeft,
        "right" | "arrowright" => Key::ArrowRight,
        _ => Key::Other,
    }
}
