use slotmap::SecondaryMap;
use web_time::{Duration, Instant};

use crate::{ElementKey, OneShot, Result, Stage};

pub const DEFAULT_EFFECT_DURATION: Duration = Duration::from_millis(1000);
pub const FLIPPED_CLASS: &str = "flipped";

struct ActiveMarker {
    marker: String,
    removal: OneShot,
}

/// Transient effect markers, at most one per target.
///
/// `exclusive` names markers that are mutually exclusive with any new one:
/// they are cleared from the target even when this tracker did not apply
/// them.
pub struct TransientEffects {
    active: SecondaryMap<ElementKey, ActiveMarker>,
    exclusive: Vec<String>,
}

impl TransientEffects {
    pub fn new(exclusive: Vec<String>) -> Self {
        Self {
            active: SecondaryMap::new(),
            exclusive,
        }
    }

    /// Clears whatever marker `target` carries, applies `marker`, and
    /// schedules its removal after `duration`. The target's previous removal
    /// is cancelled, so a stale timer can never strip the new marker.
    pub fn apply(
        &mut self,
        stage: &mut Stage,
        target: &str,
        marker: &str,
        duration: Duration,
        now: Instant,
    ) -> Result<()> {
        let key = stage.resolve(target)?;
        let Some(el) = stage.get_mut(key) else {
            return Err(crate::Error::TargetNotFound(target.to_string()));
        };

        if let Some(prev) = self.active.remove(key) {
            el.remove_class(&prev.marker);
        }
        for m in &self.exclusive {
            el.remove_class(m);
        }
        el.add_class(marker);

        let mut removal = OneShot::new();
        removal.arm(now, duration);
        self.active.insert(
            key,
            ActiveMarker {
                marker: marker.to_string(),
                removal,
            },
        );
        log::debug!("effect '{marker}' on '{target}' for {duration:?}");
        Ok(())
    }

    pub fn active_marker(&self, key: ElementKey) -> Option<&str> {
        self.active.get(key).map(|a| a.marker.as_str())
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.active.values().filter_map(|a| a.removal.deadline()).min()
    }

    /// Removes every marker whose window has elapsed. Returns how many.
    pub fn poll(&mut self, stage: &mut Stage, now: Instant) -> usize {
        let due: Vec<ElementKey> = self
            .active
            .iter_mut()
            .filter_map(|(k, a)| a.removal.fire(now).then_some(k))
            .collect();

        for &key in &due {
            if let Some(a) = self.active.remove(key) {
                if let Some(el) = stage.get_mut(key) {
                    el.remove_class(&a.marker);
                    log::trace!("effect '{}' cleared from '{}'", a.marker, el.id());
                }
            }
        }
        due.len()
    }
}

/// Flips the card flip marker on `target`; returns whether it is now set.
pub fn flip_card(stage: &mut Stage, target: &str) -> Result<bool> {
    let key = stage.resolve(target)?;
    let flipped = stage
        .get_mut(key)
        .map(|el| el.toggle_class(FLIPPED_CLASS))
        .unwrap_or(false);
    Ok(flipped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn missing_target_mutates_nothing() {
        let mut stage = Stage::new();
        stage.insert("box");
        let mut fx = TransientEffects::new(vec![]);
        let r = fx.apply(&mut stage, "nope", "bounce", ms(100), Instant::now());
        assert_eq!(r, Err(Error::TargetNotFound("nope".into())));
        assert_eq!(stage.by_id("box").unwrap().classes().count(), 0);
        assert!(fx.next_deadline().is_none());
    }

    #[test]
    fn exclusive_markers_are_cleared_on_apply() {
        let t0 = Instant::now();
        let mut stage = Stage::new();
        let k = stage.insert("box");
        stage.get_mut(k).unwrap().add_class("slide-animation");
        stage.get_mut(k).unwrap().add_class("rounded");

        let mut fx = TransientEffects::new(vec!["slide-animation".into()]);
        fx.apply(&mut stage, "box", "bounce", ms(100), t0).unwrap();

        let el = stage.get(k).unwrap();
        assert!(el.has_class("bounce"));
        assert!(el.has_class("rounded"));
        assert!(!el.has_class("slide-animation"));
    }

    #[test]
    fn flip_toggles() {
        let mut stage = Stage::new();
        stage.insert("card");
        assert_eq!(flip_card(&mut stage, "card"), Ok(true));
        assert_eq!(flip_card(&mut stage, "card"), Ok(false));
        assert!(flip_card(&mut stage, "missing").is_err());
    }
}
