//! Pause bookkeeping for the auto-advance timer.

use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PauseSource {
    Hover,
    Modal,
    ManualNav,
}

impl PauseSource {
    const fn bit(self) -> u8 {
        match self {
            Self::Hover => 0b001,
            Self::Modal => 0b010,
            Self::ManualNav => 0b100,
        }
    }
}

/// How overlapping pause sources combine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PausePolicy {
    /// Every release clears all sources: one shared flag.
    #[default]
    Shared,
    /// Auto-advance resumes only once every source has been released.
    PerSource,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct PauseSet {
    held: u8,
    policy: PausePolicy,
}

impl PauseSet {
    pub fn new(policy: PausePolicy) -> Self {
        Self { held: 0, policy }
    }

    pub fn hold(&mut self, source: PauseSource) {
        self.held |= source.bit();
    }

    pub fn release(&mut self, source: PauseSource) {
        match self.policy {
            PausePolicy::Shared => self.held = 0,
            PausePolicy::PerSource => self.held &= !source.bit(),
        }
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.held != 0
    }

    #[must_use]
    pub fn holds(&self, source: PauseSource) -> bool {
        self.held & source.bit() != 0
    }
}
