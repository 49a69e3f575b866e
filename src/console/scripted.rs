//! Scripted console
//!
//! Replays canned input lines and records every frame it was asked to show, so whole
//! sessions can be driven and inspected without a terminal.

use super::{Console, trim_line_ending};
use std::collections::VecDeque;
use std::io;

/// One prompt as the player would have seen it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub screen: String,
    pub notice: Option<String>,
    pub prompt: String,
}

/// Console that answers prompts from a fixed list of lines
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<String>,
    frames: Vec<Frame>,
    clears: usize,
}

impl ScriptedConsole {
    pub fn new<I, S>(inputs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: inputs.into_iter().map(Into::into).collect(),
            frames: Vec::new(),
            clears: 0,
        }
    }

    /// Every frame shown so far, oldest first
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Most recent frame
    #[must_use]
    pub fn last_frame(&self) -> Option<&Frame> {
        self.frames.last()
    }

    /// Number of times the screen was cleared
    #[must_use]
    pub const fn clears(&self) -> usize {
        self.clears
    }

    /// Input lines not consumed yet
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

impl Console for ScriptedConsole {
    fn clear(&mut self) -> io::Result<()> {
        self.clears += 1;
        Ok(())
    }

    fn render_and_prompt(
        &mut self,
        screen: &str,
        notice: Option<&str>,
        prompt: &str,
    ) -> io::Result<String> {
        self.frames.push(Frame {
            screen: screen.to_string(),
            notice: notice.map(str::to_string),
            prompt: prompt.to_string(),
        });

        self.inputs
            .pop_front()
            .map(|line| trim_line_ending(&line).to_string())
            .ok_or_else(|| io::Error::new(io::ErrorKind::UnexpectedEof, "no more scripted input"))
    }
}
