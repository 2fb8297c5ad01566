use std::time::{Duration, Instant};

use tracing::debug;

use crate::compositor::{Compositor, DrawEntry};
use crate::easing;
use crate::error::{MorphError, MorphResult};
use crate::measure::{CellMeasurer, Measure};
use crate::plan::TransitionState;
use crate::style::TextStyle;

/// Monotonic elapsed-time source driving the animation.
///
/// Injected so hosts can slave the morph to their own timebase and tests can
/// step time by hand. Successive calls must never go backwards.
pub trait Clock {
    fn now(&self) -> Duration;
}

/// Wall clock measured from its creation instant.
#[derive(Debug, Clone)]
pub struct MonotonicClock {
    origin: Instant,
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for MonotonicClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

pub struct MorphConfig {
    pub style: TextStyle,
    /// How long each morph animates.
    pub duration: Duration,
    /// How long a finished string stays on screen before the next morph.
    pub pause: Duration,
    /// Cycle through the sequence forever. `loop_count` is ignored.
    pub loop_forever: bool,
    /// Full passes through the sequence before completion. Must be positive.
    pub loop_count: u32,
    /// Shapes the shared animation clock before the per-channel selectors.
    pub clock_ease: fn(f32) -> f32,
    pub fade_in_ease: fn(f32) -> f32,
    pub fade_out_ease: fn(f32) -> f32,
    pub progress_ease: fn(f32) -> f32,
    /// Invoked at most once, when the last loop finishes.
    pub on_complete: Option<Box<dyn FnMut()>>,
}

impl Default for MorphConfig {
    fn default() -> Self {
        Self {
            style: TextStyle::default(),
            duration: Duration::from_millis(500),
            pause: Duration::from_millis(1500),
            loop_forever: false,
            loop_count: 1,
            clock_ease: easing::linear,
            fade_in_ease: easing::ease_in,
            fade_out_ease: easing::ease_out,
            progress_ease: easing::ease_in_out,
            on_complete: None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Transition { started: Duration },
    Paused { until: Duration },
    Completed,
    Disposed,
}

/// Scalars of a frame that has nothing left to animate.
const FINISHED: (f32, f32, f32) = (1.0, 0.0, 1.0);

/// One composited frame, borrowed from the driver until the next call.
#[derive(Debug)]
pub struct MorphFrame<'a> {
    pub entries: &'a [DrawEntry],
    pub line_height: f32,
}

/// Drives a sequence of strings through morph transitions, one frame per
/// poll.
///
/// The driver never schedules anything itself: the host calls
/// [`frame`](MorphText::frame) whenever it wants a repaint, and deadlines
/// are checked against the injected clock on each call. A missed deadline
/// costs nothing more than the frame arriving late.
pub struct MorphText<M = CellMeasurer, C = MonotonicClock> {
    texts: Vec<String>,
    config: MorphConfig,
    measurer: M,
    clock: C,
    state: TransitionState,
    compositor: Compositor,
    phase: Phase,
    index: usize,
    loops_left: u32,
}

impl MorphText {
    /// Morph through `texts` on the standard cell grid and wall clock.
    pub fn new(texts: Vec<String>, config: MorphConfig) -> MorphResult<Self> {
        Self::with_parts(texts, config, CellMeasurer, MonotonicClock::default())
    }
}

impl<M: Measure, C: Clock> MorphText<M, C> {
    /// Like [`MorphText::new`] with an explicit measurer and clock.
    pub fn with_parts(
        texts: Vec<String>,
        config: MorphConfig,
        measurer: M,
        clock: C,
    ) -> MorphResult<Self> {
        if texts.is_empty() {
            return Err(MorphError::config(
                "text sequence must contain at least one string",
            ));
        }

        if config.loop_count == 0 {
            return Err(MorphError::config("loop count must be at least one"));
        }

        let loops_left = config.loop_count;

        Ok(Self {
            texts,
            config,
            measurer,
            clock,
            state: TransitionState::default(),
            compositor: Compositor::new(),
            phase: Phase::Idle,
            index: 0,
            loops_left,
        })
    }

    /// Advance the animation to the current instant and composite a frame.
    ///
    /// Errors from the host measurer surface here; the sequence stays where
    /// it was, so a later call retries the same step.
    pub fn frame(&mut self) -> MorphResult<MorphFrame<'_>> {
        if self.phase == Phase::Disposed {
            return Ok(MorphFrame {
                entries: &[],
                line_height: 0.0,
            });
        }

        let now = self.clock.now();
        self.step(now)?;

        let (fade_in, fade_out, progress) = self.scalars(now);
        let entries = self
            .compositor
            .composite(&self.state, fade_in, fade_out, progress);

        Ok(MorphFrame {
            entries,
            line_height: self.state.line_height(),
        })
    }

    /// Tear the animation down: no further frames, no completion callback.
    pub fn dispose(&mut self) {
        debug!("morph sequence disposed");
        self.phase = Phase::Disposed;
        self.config.on_complete = None;
    }

    /// True once the configured loops have finished. Disposal does not
    /// count as completion.
    pub fn is_completed(&self) -> bool {
        self.phase == Phase::Completed
    }

    pub(crate) fn style(&self) -> TextStyle {
        self.config.style
    }

    fn step(&mut self, now: Duration) -> MorphResult<()> {
        match self.phase {
            Phase::Idle => {
                self.state
                    .retarget(&self.texts[self.index], &self.measurer, &self.config.style)?;
                debug!(text = %self.texts[self.index], "morph sequence started");
                self.phase = Phase::Transition { started: now };
            }
            Phase::Transition { started } => {
                let end = started + self.config.duration;

                // The finished frame renders from the Paused phase on this
                // same call; advancing waits for a later one.
                if now >= end {
                    self.phase = Phase::Paused {
                        until: end + self.config.pause,
                    };
                }
            }
            Phase::Paused { until } => {
                if now >= until {
                    self.advance(now)?;
                }
            }
            Phase::Completed | Phase::Disposed => {}
        }

        Ok(())
    }

    /// Move to the next string, or complete when the loops are spent.
    #[tracing::instrument(skip(self))]
    fn advance(&mut self, now: Duration) -> MorphResult<()> {
        let last = self.index + 1 == self.texts.len();

        if last && !self.config.loop_forever && self.loops_left == 1 {
            self.loops_left = 0;
            self.phase = Phase::Completed;
            debug!("morph sequence completed");

            if let Some(mut on_complete) = self.config.on_complete.take() {
                on_complete();
            }

            return Ok(());
        }

        let next = if last { 0 } else { self.index + 1 };

        self.state
            .retarget(&self.texts[next], &self.measurer, &self.config.style)?;

        self.index = next;

        if last && !self.config.loop_forever {
            self.loops_left -= 1;
        }

        debug!(index = self.index, text = %self.texts[self.index], "morph transition started");
        self.phase = Phase::Transition { started: now };

        Ok(())
    }

    fn scalars(&self, now: Duration) -> (f32, f32, f32) {
        let Phase::Transition { started } = self.phase else {
            return FINISHED;
        };

        // A repeated string has nothing to animate; the slot still runs its
        // full duration and pause.
        if self.state.settled() {
            return FINISHED;
        }

        let raw = if self.config.duration.is_zero() {
            1.0
        } else {
            (now.saturating_sub(started).as_secs_f32() / self.config.duration.as_secs_f32())
                .min(1.0)
        };

        let t = (self.config.clock_ease)(raw);

        (
            (self.config.fade_in_ease)(t),
            1.0 - (self.config.fade_out_ease)(t),
            (self.config.progress_ease)(t),
        )
    }
}
