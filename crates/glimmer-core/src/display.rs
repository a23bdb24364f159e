use slotmap::SecondaryMap;
use web_time::{Duration, Instant};

use crate::{Color, DisplayStyle, ElementKey, OneShot, Result, Stage};

pub const DEFAULT_DISPLAY_DELAY: Duration = Duration::from_millis(150);
/// Alpha applied to a panel's background color.
pub const BACKGROUND_ALPHA: u8 = 0x40;

struct PendingUpdate {
    content: String,
    background: Option<Color>,
    apply: OneShot,
}

/// Result panels that dim, then swap in new content after a short delay.
#[derive(Default)]
pub struct ResultPanels {
    pending: SecondaryMap<ElementKey, PendingUpdate>,
}

impl ResultPanels {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dims `target` now; content and background land after `delay`. A
    /// newer update for the same target replaces one still in flight.
    pub fn update(
        &mut self,
        stage: &mut Stage,
        target: &str,
        content: impl Into<String>,
        background: Option<Color>,
        now: Instant,
        delay: Duration,
    ) -> Result<()> {
        let key = stage.resolve(target)?;
        if let Some(el) = stage.get_mut(key) {
            el.style = DisplayStyle::DIMMED;
        }

        let mut apply = self
            .pending
            .remove(key)
            .map(|p| p.apply)
            .unwrap_or_default();
        if apply.arm(now, delay) {
            log::debug!("panel '{target}': replacing pending update");
        }
        self.pending.insert(
            key,
            PendingUpdate {
                content: content.into(),
                background,
                apply,
            },
        );
        Ok(())
    }

    pub fn is_pending(&self, key: ElementKey) -> bool {
        self.pending.contains_key(key)
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.values().filter_map(|p| p.apply.deadline()).min()
    }

    pub fn poll(&mut self, stage: &mut Stage, now: Instant) -> usize {
        let due: Vec<ElementKey> = self
            .pending
            .iter_mut()
            .filter_map(|(k, p)| p.apply.fire(now).then_some(k))
            .collect();

        for &key in &due {
            let (Some(p), Some(el)) = (self.pending.remove(key), stage.get_mut(key)) else {
                continue;
            };
            el.content = p.content;
            if let Some(bg) = p.background {
                el.background = Some(bg.with_alpha(BACKGROUND_ALPHA));
            }
            el.style = DisplayStyle::NORMAL;
            log::trace!("panel '{}' updated", el.id());
        }
        due.len()
    }
}
