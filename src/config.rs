use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, ensure};
use serde::Deserialize;

use crate::breakpoints::Breakpoints;
use crate::controller::CarouselOptions;
use crate::item::ItemSequence;
use crate::pause::PausePolicy;
use crate::scan::{ScanOptions, scan_library};

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ItemConfig {
    pub src: String,
    /// Alt text; defaults to the file stem of `src`.
    #[serde(default)]
    pub alt: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", default, deny_unknown_fields)]
pub struct Configuration {
    /// Explicit item list, in display order.
    pub items: Vec<ItemConfig>,
    /// Directory scanned for images when `items` is empty.
    pub library_path: Option<PathBuf>,
    /// Viewport width used at startup, in pixels.
    pub viewport_width: u32,
    /// Period of the auto-advance timer.
    #[serde(with = "humantime_serde")]
    pub auto_advance: Duration,
    /// Duration of one animated slide.
    #[serde(with = "humantime_serde")]
    pub transition: Duration,
    /// Viewport width to visible item count table.
    pub breakpoints: Breakpoints,
    /// How overlapping pause causes combine.
    pub pause_policy: PausePolicy,
}

impl Configuration {
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let s = std::fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&s)?)
    }

    /// Validate runtime invariants that cannot be expressed via serde defaults alone.
    pub fn validated(self) -> Result<Self> {
        ensure!(
            !self.auto_advance.is_zero(),
            "auto-advance must be greater than zero"
        );
        ensure!(
            !self.transition.is_zero(),
            "transition must be greater than zero"
        );
        ensure!(
            self.viewport_width > 0,
            "viewport-width must be greater than zero"
        );
        ensure!(
            self.items.is_empty() || self.library_path.is_none(),
            "set either items or library-path, not both"
        );
        self.breakpoints
            .validate()
            .context("invalid breakpoints")?;
        Ok(self)
    }

    /// Build the item sequence from `items`, or by scanning `library-path`.
    pub fn item_sequence(&self) -> Result<ItemSequence> {
        if let Some(root) = &self.library_path {
            return scan_library(root, &ScanOptions::default())
                .with_context(|| format!("scanning library {}", root.display()));
        }
        Ok(ItemSequence::from_sources(self.items.iter().map(|item| {
            let alt = item.alt.clone().unwrap_or_else(|| {
                Path::new(&item.src)
                    .file_stem()
                    .map(|s| s.to_string_lossy().into_owned())
                    .unwrap_or_default()
            });
            (item.src.clone(), alt)
        })))
    }

    pub fn carousel_options(&self) -> CarouselOptions {
        CarouselOptions {
            breakpoints: self.breakpoints.clone(),
            pause_policy: self.pause_policy,
            viewport_width: self.viewport_width,
        }
    }
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            library_path: None,
            viewport_width: 1280,
            auto_advance: Duration::from_millis(3000),
            transition: Duration::from_millis(500),
            breakpoints: Breakpoints::default(),
            pause_policy: PausePolicy::default(),
        }
    }
}
