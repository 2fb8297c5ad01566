//! Looping morphing-text animation for ratatui.
//!
//! A [`MorphText`] cycles through a sequence of strings. Characters shared
//! between consecutive strings slide to their new positions; everything else
//! cross-fades. The driver is poll-based: call [`MorphText::frame`] (or
//! render the widget) once per host frame and it works out the rest from the
//! injected clock.
//!
//! ```no_run
//! use std::time::Duration;
//! use tui_morphtext::{MorphConfig, MorphText};
//!
//! let mut morph = MorphText::new(
//!     vec!["Design".into(), "Deliver".into()],
//!     MorphConfig {
//!         duration: Duration::from_millis(400),
//!         loop_forever: true,
//!         ..MorphConfig::default()
//!     },
//! )?;
//!
//! let frame = morph.frame()?;
//! for entry in frame.entries {
//!     println!("{} at x {}", entry.ch, entry.x);
//! }
//! # Ok::<(), tui_morphtext::MorphError>(())
//! ```

#![forbid(unsafe_code)]

pub mod compositor;
pub mod driver;
pub mod easing;
pub mod error;
pub mod layout;
pub mod matcher;
pub mod measure;
pub mod plan;
pub mod style;
pub mod widget;

pub use compositor::{Compositor, DrawEntry};
pub use driver::{Clock, MonotonicClock, MorphConfig, MorphFrame, MorphText};
pub use error::{MorphError, MorphResult};
pub use layout::{Glyph, LineLayout, layout};
pub use matcher::pair_glyphs;
pub use measure::{Caret, CellMeasurer, LineMetrics, Measure};
pub use plan::TransitionState;
pub use style::{TextStyle, blend_toward, scaled_alpha};
pub use widget::MIN_VISIBLE_SCALE;
