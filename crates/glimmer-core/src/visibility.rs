use web_time::{Duration, Instant};

use crate::{OneShot, Signal, SubId, signal};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Visibility {
    #[default]
    Hidden,
    Visible,
}

impl Visibility {
    pub fn is_visible(self) -> bool {
        self == Visibility::Visible
    }

    pub fn flipped(self) -> Self {
        match self {
            Visibility::Hidden => Visibility::Visible,
            Visibility::Visible => Visibility::Hidden,
        }
    }
}

impl From<bool> for Visibility {
    fn from(v: bool) -> Self {
        if v {
            Visibility::Visible
        } else {
            Visibility::Hidden
        }
    }
}

/// Show/hide state of one surface (modal, spinner) with an optional
/// auto-hide.
///
/// The surface owns a single [`OneShot`]: `show_with_auto_hide` re-arms it,
/// any explicit transition cancels it.
pub struct VisibilityToggle {
    name: &'static str,
    state: Signal<Visibility>,
    auto_hide: OneShot,
}

impl VisibilityToggle {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            state: signal(Visibility::Hidden),
            auto_hide: OneShot::new(),
        }
    }

    pub fn get(&self) -> Visibility {
        self.state.get()
    }

    pub fn is_visible(&self) -> bool {
        self.get().is_visible()
    }

    pub fn show(&mut self) {
        self.auto_hide.cancel();
        self.transition(Visibility::Visible);
    }

    pub fn hide(&mut self) {
        self.auto_hide.cancel();
        self.transition(Visibility::Hidden);
    }

    pub fn toggle(&mut self) -> Visibility {
        self.auto_hide.cancel();
        let next = self.get().flipped();
        self.transition(next);
        next
    }

    /// `None` toggles, `Some(v)` forces. Returns whether the surface ends up
    /// visible.
    pub fn set(&mut self, show: Option<bool>) -> bool {
        match show {
            None => {
                self.toggle();
            }
            Some(true) => self.show(),
            Some(false) => self.hide(),
        }
        self.is_visible()
    }

    /// Shows now and hides once `delay` has elapsed. Calling again before
    /// then moves the deadline instead of adding a second one.
    pub fn show_with_auto_hide(&mut self, now: Instant, delay: Duration) {
        self.transition(Visibility::Visible);
        if self.auto_hide.arm(now, delay) {
            log::debug!("{}: auto-hide rescheduled", self.name);
        }
    }

    pub fn auto_hide_deadline(&self) -> Option<Instant> {
        self.auto_hide.deadline()
    }

    /// Runs a due auto-hide. Returns true if it fired.
    pub fn poll(&mut self, now: Instant) -> bool {
        if !self.auto_hide.fire(now) {
            return false;
        }
        log::trace!("{}: auto-hide fired", self.name);
        self.transition(Visibility::Hidden);
        true
    }

    pub fn subscribe(&self, f: impl Fn(&Visibility) + 'static) -> SubId {
        self.state.subscribe(f)
    }

    pub fn unsubscribe(&self, id: SubId) -> bool {
        self.state.unsubscribe(id)
    }

    fn transition(&self, to: Visibility) {
        if self.get() != to {
            log::debug!("{}: {:?} -> {:?}", self.name, self.get(), to);
            self.state.set(to);
        }
    }
}
