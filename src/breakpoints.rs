//! Viewport width to visible item count.

use anyhow::{Result, bail, ensure};
use serde::Deserialize;

/// One row of the breakpoint table. `max_width: None` is the catch-all row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Breakpoint {
    #[serde(default)]
    pub max_width: Option<u32>,
    pub visible: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct Breakpoints(Vec<Breakpoint>);

impl Breakpoints {
    pub fn new(rows: Vec<Breakpoint>) -> Result<Self> {
        let table = Self(rows);
        table.validate()?;
        Ok(table)
    }

    /// Number of items visible at `width`. Rows are checked in order; a width
    /// equal to a row's `max_width` belongs to that row.
    #[must_use]
    pub fn visible_for(&self, width: u32) -> usize {
        self.0
            .iter()
            .find(|bp| bp.max_width.is_none_or(|max| width <= max))
            .map_or(1, |bp| bp.visible)
    }

    #[must_use]
    pub fn rows(&self) -> &[Breakpoint] {
        &self.0
    }

    pub fn validate(&self) -> Result<()> {
        let Some((last, bounded)) = self.0.split_last() else {
            bail!("breakpoints must not be empty");
        };
        ensure!(
            self.0.iter().all(|bp| bp.visible >= 1),
            "breakpoint visible count must be at least 1"
        );
        ensure!(
            last.max_width.is_none(),
            "last breakpoint must omit max-width"
        );
        ensure!(
            bounded.iter().all(|bp| bp.max_width.is_some()),
            "only the last breakpoint may omit max-width"
        );
        ensure!(
            bounded.windows(2).all(|w| w[0].max_width < w[1].max_width),
            "breakpoint max-width values must be strictly ascending"
        );
        Ok(())
    }
}

impl Default for Breakpoints {
    fn default() -> Self {
        Self(vec![
            Breakpoint {
                max_width: Some(480),
                visible: 1,
            },
            Breakpoint {
                max_width: Some(768),
                visible: 2,
            },
            Breakpoint {
                max_width: Some(1200),
                visible: 3,
            },
            Breakpoint {
                max_width: None,
                visible: 4,
            },
        ])
    }
}
