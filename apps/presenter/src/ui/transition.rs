//! Slide change choreography: the outgoing slide fades out completely before
//! the incoming one is swapped in and its elements reveal on a stagger.

/// Fade and reveal durations, in seconds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionTiming {
    pub fade: f64,
    pub reveal: f64,
    pub stagger: f64,
}

impl TransitionTiming {
    /// Scales the stock 0.5 s fade / 0.8 s reveal / 0.2 s stagger to `fade_ms`.
    pub fn from_millis(fade_ms: u64) -> Self {
        let fade = fade_ms as f64 / 1000.0;
        Self {
            fade,
            reveal: fade * 1.6,
            stagger: fade * 0.4,
        }
    }

    /// Delay of the `step`-th staggered element.
    pub fn delay(&self, step: u32) -> f64 {
        self.stagger * f64::from(step)
    }

    /// Time until the last staggered element has settled.
    pub fn settle_time(&self, steps: u32) -> f64 {
        self.fade.max(self.delay(steps) + self.reveal)
    }
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self::from_millis(500)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Entering,
    Exiting,
}

#[derive(Debug, Clone)]
pub struct SlideTransition {
    timing: TransitionTiming,
    shown: usize,
    pending: Option<usize>,
    phase: Phase,
    started_at: f64,
}

impl SlideTransition {
    pub fn new(shown: usize, now: f64, timing: TransitionTiming) -> Self {
        Self {
            timing,
            shown,
            pending: None,
            phase: Phase::Entering,
            started_at: now,
        }
    }

    /// Index currently on screen; lags the navigator while exiting.
    pub fn shown(&self) -> usize {
        self.shown
    }

    pub fn pending(&self) -> Option<usize> {
        self.pending
    }

    pub fn is_exiting(&self) -> bool {
        self.phase == Phase::Exiting
    }

    /// Starts (or retargets) a change to `target`.
    pub fn request(&mut self, target: usize, now: f64) {
        match self.phase {
            Phase::Exiting => self.pending = Some(target),
            Phase::Entering => {
                self.pending = Some(target);
                self.phase = Phase::Exiting;
                self.started_at = now;
            }
        }
    }

    /// Swaps in the pending slide once the exit fade has finished and returns it.
    pub fn tick(&mut self, now: f64) -> Option<usize> {
        if self.phase != Phase::Exiting || now - self.started_at < self.timing.fade {
            return None;
        }
        let next = self.pending.take().unwrap_or(self.shown);
        self.shown = next;
        self.phase = Phase::Entering;
        self.started_at = now;
        Some(next)
    }

    pub fn slide_opacity(&self, now: f64) -> f32 {
        let p = progress(now - self.started_at, self.timing.fade);
        match self.phase {
            Phase::Entering => p,
            Phase::Exiting => 1.0 - p,
        }
    }

    /// Reveal progress of the `step`-th staggered element of the shown slide.
    pub fn reveal(&self, now: f64, step: u32) -> f32 {
        match self.phase {
            Phase::Exiting => 1.0,
            Phase::Entering => progress(
                now - self.started_at - self.timing.delay(step),
                self.timing.reveal,
            ),
        }
    }

    pub fn is_animating(&self, now: f64, steps: u32) -> bool {
        self.phase == Phase::Exiting || now - self.started_at < self.timing.settle_time(steps)
    }
}

/// Linear progress of `elapsed` through `duration`, clamped to `[0, 1]`.
pub fn progress(elapsed: f64, duration: f64) -> f32 {
    if duration <= 0.0 {
        return 1.0;
    }
    (elapsed / duration).clamp(0.0, 1.0) as f32
}

pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}
