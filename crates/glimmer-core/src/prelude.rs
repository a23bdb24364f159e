pub use crate::clock::{Clock, ManualClock, SystemClock};
pub use crate::color::{Color, Palette};
pub use crate::config::PlaygroundConfig;
pub use crate::error::{Error, Result};
pub use crate::lessons::{ScopeReport, SumResult};
pub use crate::playground::Playground;
pub use crate::stage::{DisplayStyle, Element, ElementKey, Stage};
pub use crate::visibility::{Visibility, VisibilityToggle};
pub use web_time::{Duration, Instant};
