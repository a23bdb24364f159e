use std::rc::Rc;

use web_time::{Duration, Instant};

use crate::lessons::{self, ScopeReport, SumResult};
use crate::timer::earliest;
use crate::{
    Clock, Color, Counter, Palette, PlaygroundConfig, RandomSource, Result, ResultPanels, Stage,
    SystemClock, TransientEffects, VisibilityToggle, effects,
};

/// Context object that owns every piece of demo state: the shared counter,
/// RNG, stage, both surfaces and all pending deferred work.
///
/// Nothing runs in the background. Call [`Playground::tick`] whenever the
/// host gets a chance (once per frame, or after sleeping until
/// [`Playground::next_deadline`]).
pub struct Playground {
    config: PlaygroundConfig,
    clock: Rc<dyn Clock>,
    rng: RandomSource,
    palette: Palette,
    counter: Counter,
    stage: Stage,
    modal: VisibilityToggle,
    spinner: VisibilityToggle,
    effects: TransientEffects,
    panels: ResultPanels,
}

impl Playground {
    pub fn new(config: PlaygroundConfig) -> Result<Self> {
        Self::with_clock(config, Rc::new(SystemClock))
    }

    pub fn with_clock(config: PlaygroundConfig, clock: Rc<dyn Clock>) -> Result<Self> {
        let palette = config.palette()?;
        let rng = match config.seed {
            Some(seed) => RandomSource::seeded(seed),
            None => RandomSource::from_entropy(),
        };
        let mut stage = Stage::new();
        stage.insert(config.modal_id.clone());
        stage.insert(config.spinner_id.clone());

        let effects = TransientEffects::new(config.exclusive_markers.clone());
        log::debug!(
            "playground ready: {} colors, sums in {}..={}",
            palette.len(),
            config.sum_min,
            config.sum_max
        );
        Ok(Self {
            config,
            clock,
            rng,
            palette,
            counter: Counter::new(),
            stage,
            modal: VisibilityToggle::new("modal"),
            spinner: VisibilityToggle::new("spinner"),
            effects,
            panels: ResultPanels::new(),
        })
    }

    pub fn config(&self) -> &PlaygroundConfig {
        &self.config
    }

    pub fn now(&self) -> Instant {
        self.clock.now()
    }

    pub fn counter(&self) -> u64 {
        self.counter.get()
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn stage_mut(&mut self) -> &mut Stage {
        &mut self.stage
    }

    pub fn modal(&self) -> &VisibilityToggle {
        &self.modal
    }

    pub fn spinner(&self) -> &VisibilityToggle {
        &self.spinner
    }

    pub fn effects(&self) -> &TransientEffects {
        &self.effects
    }

    pub fn panels(&self) -> &ResultPanels {
        &self.panels
    }

    pub fn random_int(&mut self, min: i64, max: i64) -> Result<i64> {
        self.rng.random_int(min, max)
    }

    pub fn bump_counter(&mut self, amount: u64) -> u64 {
        self.counter.bump(amount)
    }

    pub fn calculate_random_sum(&mut self) -> Result<SumResult> {
        lessons::calculate_random_sum(
            &mut self.counter,
            &mut self.rng,
            self.config.sum_min,
            self.config.sum_max,
        )
    }

    pub fn random_color(&mut self) -> Color {
        self.rng.random_palette_entry(&self.palette)
    }

    pub fn demonstrate_scope(&mut self) -> ScopeReport {
        lessons::demonstrate_scope(&mut self.counter, self.config.scope_bump)
    }

    /// Applies `marker` to `target` for `duration` (configured default when
    /// `None`).
    pub fn trigger_animation(
        &mut self,
        target: &str,
        marker: &str,
        duration: Option<Duration>,
    ) -> Result<()> {
        let duration = duration.unwrap_or_else(|| self.config.effect_duration());
        let now = self.now();
        self.effects
            .apply(&mut self.stage, target, marker, duration, now)
    }

    pub fn flip_card(&mut self, target: &str) -> Result<bool> {
        effects::flip_card(&mut self.stage, target)
    }

    /// `None` toggles. Returns whether the modal is visible afterwards.
    pub fn toggle_modal(&mut self, show: Option<bool>) -> bool {
        let visible = self.modal.set(show);
        self.reflect_surfaces();
        visible
    }

    /// Showing arms an auto-hide after `duration` (configured default when
    /// `None`); hiding is immediate.
    pub fn toggle_loading_spinner(&mut self, show: bool, duration: Option<Duration>) -> bool {
        if show {
            let duration = duration.unwrap_or_else(|| self.config.spinner_duration());
            let now = self.now();
            self.spinner.show_with_auto_hide(now, duration);
        } else {
            self.spinner.hide();
        }
        self.reflect_surfaces();
        self.spinner.is_visible()
    }

    pub fn update_result_display(
        &mut self,
        target: &str,
        content: impl Into<String>,
        background: Option<Color>,
    ) -> Result<()> {
        let now = self.now();
        let delay = self.config.display_delay();
        self.panels
            .update(&mut self.stage, target, content, background, now, delay)
    }

    /// Runs every deferred action that is due. Returns how many fired.
    pub fn tick(&mut self) -> usize {
        let now = self.now();
        let mut fired = 0;
        fired += usize::from(self.modal.poll(now));
        fired += usize::from(self.spinner.poll(now));
        fired += self.effects.poll(&mut self.stage, now);
        fired += self.panels.poll(&mut self.stage, now);
        if fired > 0 {
            self.reflect_surfaces();
        }
        fired
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        [
            self.modal.auto_hide_deadline(),
            self.spinner.auto_hide_deadline(),
            self.effects.next_deadline(),
            self.panels.next_deadline(),
        ]
        .into_iter()
        .fold(None, earliest)
    }

    /// Mirrors surface state onto the stage's surface elements.
    fn reflect_surfaces(&mut self) {
        let class = &self.config.visible_class;
        for (id, visible) in [
            (&self.config.modal_id, self.modal.is_visible()),
            (&self.config.spinner_id, self.spinner.is_visible()),
        ] {
            if let Some(el) = self.stage.by_id_mut(id) {
                el.set_class(class, visible);
            }
        }
    }
}
