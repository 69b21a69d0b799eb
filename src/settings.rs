//! Game settings
//!
//! Read once at startup from a JSON file; nothing is ever written back.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::{CRASH_HOLD_MS, FRAME_DELAY_MS};

/// Colour schemes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Palette {
    /// Green player and text on black, blue floor
    #[default]
    Classic,
    /// High contrast greys
    Mono,
}

impl Palette {
    pub fn as_str(&self) -> &'static str {
        match self {
            Palette::Classic => "Classic",
            Palette::Mono => "Mono",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "classic" => Some(Palette::Classic),
            "mono" | "high-contrast" => Some(Palette::Mono),
            _ => None,
        }
    }
}

/// Runtime settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Pause after every frame / sub-step
    pub frame_delay_ms: u64,
    /// How long the crash pose stays up before the game-over screen
    pub crash_hold_ms: u64,
    /// Fixed field seed; wall clock when unset
    pub seed: Option<u64>,
    pub palette: Palette,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            frame_delay_ms: FRAME_DELAY_MS,
            crash_hold_ms: CRASH_HOLD_MS,
            seed: None,
            palette: Palette::Classic,
        }
    }
}

impl Settings {
    /// Settings file override
    const PATH_VAR: &'static str = "SQUARE_JUMP_SETTINGS";
    /// Seed override
    const SEED_VAR: &'static str = "SQUARE_JUMP_SEED";
    /// Palette override
    const PALETTE_VAR: &'static str = "SQUARE_JUMP_PALETTE";
    const DEFAULT_PATH: &'static str = "square_jump.json";

    /// Parse settings from JSON; unknown fields are ignored, missing ones defaulted
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    /// Load settings from disk, falling back to defaults
    pub fn load() -> Self {
        let path = std::env::var_os(Self::PATH_VAR)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(Self::DEFAULT_PATH));

        let mut settings = match std::fs::read_to_string(&path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path.display());
                    settings
                }
                Err(e) => {
                    log::warn!("Ignoring malformed settings in {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default settings");
                Self::default()
            }
        };

        settings.apply_overrides(
            std::env::var(Self::SEED_VAR).ok().as_deref(),
            std::env::var(Self::PALETTE_VAR).ok().as_deref(),
        );
        settings
    }

    /// Apply environment overrides; invalid values are logged and ignored
    fn apply_overrides(&mut self, seed: Option<&str>, palette: Option<&str>) {
        if let Some(raw) = seed {
            match raw.trim().parse() {
                Ok(seed) => self.seed = Some(seed),
                Err(_) => log::warn!("{} is not a valid seed: {:?}", Self::SEED_VAR, raw),
            }
        }
        if let Some(raw) = palette {
            match Palette::from_str(raw.trim()) {
                Some(palette) => self.palette = palette,
                None => log::warn!("{} is not a known palette: {:?}", Self::PALETTE_VAR, raw),
            }
        }
    }

    /// Frames the crash pose is held for at the configured frame delay
    pub fn crash_hold_ticks(&self) -> u32 {
        if self.frame_delay_ms == 0 {
            return 0;
        }
        (self.crash_hold_ms / self.frame_delay_ms) as u32
    }
}
