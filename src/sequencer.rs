use std::time::{Duration, Instant};

use crate::theme::{Rgb, WHITE};

/// Offset at which the whiteout overlay starts rising.
pub const FLASH_RISE: Duration = Duration::from_millis(600);
/// Offset at which the detail view mounts and the cell marker clears.
pub const DETAIL_MOUNT: Duration = Duration::from_millis(2200);
/// Offset at which the overlay is gone and the guard releases.
pub const SEQUENCE_END: Duration = Duration::from_millis(2500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    FlashRising,
    WhiteoutFull,
    FadeOut,
}

/// The reveal transition: a single, non-reentrant run from day selection
/// to detail mount.
///
/// The guard is a plain bool checked and set inside `begin`, in the same
/// call as the triggering input event — never derived from state that is
/// published later — so two rapid selections can never both observe
/// "unlocked". Once started, a run always completes; there is no
/// cancellation path.
pub struct RevealSequencer {
    phase: Phase,
    in_flight: bool,
    /// Cell carrying the selection highlight until the detail mounts.
    clicked_day: Option<u8>,
    flash: Rgb,
    started_at: Option<Instant>,
}

impl RevealSequencer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            phase: Phase::Idle,
            in_flight: false,
            clicked_day: None,
            flash: WHITE,
            started_at: None,
        }
    }

    /// Accepts a day selection unless a run is already in flight. Returns
    /// whether the selection was accepted; a rejected call is a no-op for
    /// any day, including the one currently transitioning.
    pub fn begin(&mut self, day: u8, flash: Rgb, now: Instant) -> bool {
        if self.in_flight {
            return false;
        }
        self.in_flight = true;
        self.phase = Phase::FlashRising;
        self.clicked_day = Some(day);
        self.flash = flash;
        self.started_at = Some(now);
        true
    }

    /// Advances the run to whatever stage `now` has reached. Returns the
    /// day whose detail view should mount, exactly once per run, at the
    /// 2200 ms offset (or later if ticks are sparse).
    pub fn tick(&mut self, now: Instant) -> Option<u8> {
        let started = self.started_at?;
        let elapsed = now.duration_since(started);

        let mut mounted = None;
        if elapsed >= DETAIL_MOUNT {
            mounted = self.clicked_day.take();
        }

        if elapsed >= SEQUENCE_END {
            self.phase = Phase::Idle;
            self.in_flight = false;
            self.started_at = None;
        } else if elapsed >= DETAIL_MOUNT {
            self.phase = Phase::FadeOut;
        } else if elapsed >= FLASH_RISE {
            self.phase = Phase::WhiteoutFull;
        }

        mounted
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Rendering-facing lock state. The grid dims and ignores hover while
    /// this is set.
    #[must_use]
    pub fn locked(&self) -> bool {
        self.in_flight
    }

    #[must_use]
    pub fn clicked_day(&self) -> Option<u8> {
        self.clicked_day
    }

    #[must_use]
    pub fn flash(&self) -> Rgb {
        self.flash
    }

    /// Overlay coverage in [0, 1]: up over 600..2200 ms, back down over
    /// 2200..2500 ms.
    #[must_use]
    pub fn overlay_opacity(&self, now: Instant) -> f32 {
        let Some(started) = self.started_at else {
            return 0.0;
        };
        let elapsed = now.duration_since(started);
        if elapsed < FLASH_RISE {
            0.0
        } else if elapsed < DETAIL_MOUNT {
            let rise = (elapsed - FLASH_RISE).as_secs_f32();
            (rise / (DETAIL_MOUNT - FLASH_RISE).as_secs_f32()).min(1.0)
        } else if elapsed < SEQUENCE_END {
            let fall = (elapsed - DETAIL_MOUNT).as_secs_f32();
            1.0 - fall / (SEQUENCE_END - DETAIL_MOUNT).as_secs_f32()
        } else {
            0.0
        }
    }
}

impl Default for RevealSequencer {
    fn default() -> Self {
        Self::new()
    }
}
