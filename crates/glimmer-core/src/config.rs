use serde::{Deserialize, Serialize};
use web_time::Duration;

use crate::color::DEFAULT_PALETTE_HEX;
use crate::{Palette, Result};

/// Tunables for a [`crate::Playground`]. Every field has a default, so a
/// partial JSON/TOML document is enough.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaygroundConfig {
    pub palette: Vec<String>,
    pub sum_min: i64,
    pub sum_max: i64,
    /// How much `demonstrate_scope` adds to the shared counter.
    pub scope_bump: u64,
    pub effect_ms: u64,
    pub spinner_ms: u64,
    pub display_delay_ms: u64,
    pub modal_id: String,
    pub spinner_id: String,
    /// Class a surface element carries while visible.
    pub visible_class: String,
    pub exclusive_markers: Vec<String>,
    /// Fixed RNG seed; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for PlaygroundConfig {
    fn default() -> Self {
        Self {
            palette: DEFAULT_PALETTE_HEX.iter().map(|s| s.to_string()).collect(),
            sum_min: 1,
            sum_max: 100,
            scope_bump: 5,
            effect_ms: 1000,
            spinner_ms: 3000,
            display_delay_ms: 150,
            modal_id: "modalOverlay".into(),
            spinner_id: "loadingSpinner".into(),
            visible_class: "show".into(),
            exclusive_markers: vec!["bounce-animation".into(), "slide-animation".into()],
            seed: None,
        }
    }
}

impl PlaygroundConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn palette(&self) -> Result<Palette> {
        Palette::from_hex_list(&self.palette)
    }

    pub fn effect_duration(&self) -> Duration {
        Duration::from_millis(self.effect_ms)
    }

    pub fn spinner_duration(&self) -> Duration {
        Duration::from_millis(self.spinner_ms)
    }

    pub fn display_delay(&self) -> Duration {
        Duration::from_millis(self.display_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg: PlaygroundConfig =
            serde_json::from_str(r#"{ "spinner_ms": 4000, "seed": 3 }"#).unwrap();
        assert_eq!(cfg.spinner_duration(), Duration::from_millis(4000));
        assert_eq!(cfg.seed, Some(3));
        assert_eq!(cfg.sum_max, 100);
        assert_eq!(cfg.palette().unwrap().len(), 6);
    }

    #[test]
    fn json_round_trip() {
        let cfg = PlaygroundConfig::default().with_seed(11);
        let s = serde_json::to_string(&cfg).unwrap();
        let back: PlaygroundConfig = serde_json::from_str(&s).unwrap();
        assert_eq!(back, cfg);
    }

    #[test]
    fn bad_palette() {
        let mut cfg = PlaygroundConfig::default();
        cfg.palette = vec!["#12345".into()];
        assert_eq!(cfg.palette(), Err(Error::InvalidColor("#12345".into())));
        cfg.palette.clear();
        assert_eq!(cfg.palette(), Err(Error::EmptyPalette));
    }
}
