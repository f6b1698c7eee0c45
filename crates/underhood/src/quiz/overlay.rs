//! Transient feedback surfaces: the answer popup and the hover tooltip.
//!
//! The popup is frame-timed the way everything else is — armed for a fixed
//! number of ticks and decremented once per update, so it never blocks the
//! loop and input stays live while it shows.

use crate::quiz::region::{RegionId, RegionRegistry};
use crate::quiz::session::GameState;
use glam::Vec2;

/// How long an answer popup stays up, in fixed-rate ticks (2s at 60Hz).
pub const POPUP_TICKS: u32 = 120;

/// An armed answer popup: which region was clicked and whether that was right.
#[derive(Debug, Clone, PartialEq)]
pub struct Popup {
    pub region: RegionId,
    pub text: String,
    pub correct: bool,
    ticks_left: u32,
}

impl Popup {
    pub fn ticks_left(&self) -> u32 {
        self.ticks_left
    }
}

/// Countdown holder for the single active popup. Arming while one is
/// showing replaces it and restarts the countdown.
#[derive(Debug, Default)]
pub struct PopupTimer {
    active: Option<Popup>,
}

impl PopupTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a popup over `region` for the next [`POPUP_TICKS`] ticks.
    pub fn arm(&mut self, region: RegionId, correct: bool) {
        self.active = Some(Popup {
            region,
            text: region.name().to_string(),
            correct,
            ticks_left: POPUP_TICKS,
        });
    }

    /// Advance one tick; the popup disappears when the countdown hits zero.
    pub fn tick(&mut self) {
        if let Some(popup) = &mut self.active {
            popup.ticks_left -= 1;
            if popup.ticks_left == 0 {
                self.active = None;
            }
        }
    }

    pub fn current(&self) -> Option<&Popup> {
        self.active.as_ref()
    }

    pub fn clear(&mut self) {
        self.active = None;
    }
}

/// Hover tooltip for the region under the cursor. Only shown mid-game.
#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub region: RegionId,
    pub text: String,
    /// Content-space anchor (the region's center).
    pub anchor: Vec2,
}

impl Tooltip {
    /// Tooltip for the hovered region, or None when nothing is hovered
    /// or the game is over.
    pub fn compute(
        registry: &RegionRegistry,
        hovered: Option<RegionId>,
        state: GameState,
    ) -> Option<Tooltip> {
        if state != GameState::Playing {
            return None;
        }
        let id = hovered?;
        let region = registry.get(id)?;
        let text = region.blurb.unwrap_or(region.name).to_string();
        Some(Tooltip {
            region: id,
            text,
            anchor: region.bounds.center(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popup_counts_down_and_clears() {
        let mut timer = PopupTimer::new();
        timer.arm(RegionId::OilCap, true);
        assert_eq!(timer.current().unwrap().ticks_left(), POPUP_TICKS);

        for _ in 0..POPUP_TICKS - 1 {
            timer.tick();
        }
        assert!(timer.current().is_some());
        timer.tick();
        assert!(timer.current().is_none());
    }

    #[test]
    fn rearming_restarts_the_countdown() {
        let mut timer = PopupTimer::new();
        timer.arm(RegionId::OilCap, false);
        for _ in 0..50 {
            timer.tick();
        }
        timer.arm(RegionId::Battery, true);
        let popup = timer.current().unwrap();
        assert_eq!(popup.region, RegionId::Battery);
        assert_eq!(popup.ticks_left(), POPUP_TICKS);
    }

    #[test]
    fn tick_without_popup_is_a_no_op() {
        let mut timer = PopupTimer::new();
        timer.tick();
        assert!(timer.current().is_none());
    }

    #[test]
    fn tooltip_only_while_playing() {
        let reg = RegionRegistry::new();
        let hovered = Some(RegionId::Battery);

        let tip = Tooltip::compute(&reg, hovered, GameState::Playing).unwrap();
        assert_eq!(tip.region, RegionId::Battery);
        assert_eq!(tip.anchor, reg.get(RegionId::Battery).unwrap().bounds.center());

        assert!(Tooltip::compute(&reg, hovered, GameState::Won).is_none());
        assert!(Tooltip::compute(&reg, None, GameState::Playing).is_none());
    }
}
