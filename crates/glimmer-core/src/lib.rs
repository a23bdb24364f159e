//! # Components, Surfaces, and Markers
//!
//! Glimmer is a set of small headless demo components. Nothing here draws:
//! state lives in plain Rust values and a presentation layer reads it back.
//! There are four pieces:
//!
//! - `RandomSource` — bounded random integers and palette picks.
//! - `Counter` — the shared counter the scope lessons bump.
//! - `VisibilityToggle` — show/hide state for a surface, with auto-hide.
//! - `TransientEffects` — a marker class on a target for a bounded window.
//!
//! ## The playground
//!
//! `Playground` owns all of it plus a `Stage` of named elements:
//!
//! ```rust
//! use glimmer_core::*;
//!
//! let mut pg = Playground::new(PlaygroundConfig::default().with_seed(1)).unwrap();
//! let sum = pg.calculate_random_sum().unwrap();
//! assert_eq!(sum.sum, sum.num1 + sum.num2);
//! assert_eq!(pg.counter(), 1);
//!
//! assert!(pg.toggle_modal(None));
//! assert!(!pg.toggle_modal(Some(false)));
//! ```
//!
//! ## Deferred work
//!
//! Auto-hide, marker removal and staged panel updates are deadlines, not
//! callbacks. Each owner holds one `OneShot`, so re-triggering replaces the
//! pending deadline instead of stacking a second one. Nothing fires until
//! the host calls `tick()`:
//!
//! ```rust
//! use std::rc::Rc;
//! use glimmer_core::*;
//!
//! let clock = Rc::new(ManualClock::new());
//! let mut pg = Playground::with_clock(PlaygroundConfig::default(), clock.clone()).unwrap();
//!
//! pg.toggle_loading_spinner(true, Some(prelude::Duration::from_millis(100)));
//! clock.advance_ms(150);
//! pg.tick();
//! assert!(!pg.spinner().is_visible());
//! ```
//!
//! Surfaces publish through a `Signal<Visibility>`, so a renderer can
//! `subscribe` instead of polling.

pub mod clock;
pub mod color;
pub mod config;
pub mod counter;
pub mod display;
pub mod effects;
pub mod error;
pub mod lessons;
pub mod playground;
pub mod prelude;
pub mod random;
pub mod signal;
pub mod stage;
pub mod timer;
pub mod visibility;

pub use clock::*;
pub use color::*;
pub use config::*;
pub use counter::*;
pub use display::*;
pub use effects::*;
pub use error::*;
pub use lessons::{ScopeReport, SumResult};
pub use playground::*;
pub use random::*;
pub use signal::*;
pub use stage::*;
pub use timer::*;
pub use visibility::*;
