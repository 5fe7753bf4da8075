//! Door swing state machine
//!
//! Two states drive one continuously eased angle: `closed --toggle--> open`,
//! `open --toggle--> closed`, starting closed.

use std::f32::consts::FRAC_PI_2;

use serde::{Deserialize, Serialize};

use super::ease::{ease_toward, EaseRate};

/// Door target state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DoorState {
    #[default]
    Closed,
    Open,
}

impl DoorState {
    /// Swing angle in radians the door eases toward
    pub fn target_angle(&self) -> f32 {
        match self {
            DoorState::Closed => 0.0,
            DoorState::Open => -FRAC_PI_2,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            DoorState::Closed => DoorState::Open,
            DoorState::Open => DoorState::Closed,
        }
    }
}

/// Door state plus the current (animated) swing angle
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct DoorSwing {
    pub state: DoorState,
    /// Current swing about the hinge, radians
    pub angle: f32,
}

impl DoorSwing {
    /// Flip the target state; the angle follows on later ticks
    pub fn toggle(&mut self) {
        self.state = self.state.toggled();
    }

    /// One simulation step
    pub fn advance(self, dt: f32, rate: EaseRate) -> Self {
        Self {
            state: self.state,
            angle: ease_toward(self.angle, self.state.target_angle(), rate.factor(dt)),
        }
    }

    /// Whether the angle has reached its target
    pub fn is_settled(&self) -> bool {
        self.angle == self.state.target_angle()
    }

    pub fn is_open(&self) -> bool {
        self.state == DoorState::Open
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TICK: f32 = 1.0 / 60.0;

    #[test]
    fn test_initial_state_closed() {
        let swing = DoorSwing::default();
        assert_eq!(swing.state, DoorState::Closed);
        assert_eq!(swing.angle, 0.0);
        assert!(swing.is_settled());
    }

    #[test]
    fn test_toggle_cycles() {
        let mut swing = DoorSwing::default();
        swing.toggle();
        assert!(swing.is_open());
        swing.toggle();
        assert_eq!(swing.state, DoorState::Closed);
    }

    #[test]
    fn test_opening_is_monotonic_and_converges() {
        let mut swing = DoorSwing::default();
        swing.toggle();

        let target = -FRAC_PI_2;
        let mut previous = swing.angle;
        for _ in 0..100 {
            swing = swing.advance(TICK, EaseRate::DOOR);
            assert!(swing.angle <= previous, "moved away from target");
            assert!(swing.angle >= target, "overshot target");
            previous = swing.angle;
        }
        assert!((swing.angle - target).abs() < 1e-6);
        assert!(swing.is_settled());
    }

    #[test]
    fn test_closing_returns_to_zero() {
        let mut swing = DoorSwing {
            state: DoorState::Open,
            angle: -FRAC_PI_2,
        };
        swing.toggle();
        for _ in 0..100 {
            swing = swing.advance(TICK, EaseRate::DOOR);
            assert!(swing.angle <= 0.0);
        }
        assert_eq!(swing.angle, 0.0);
    }

    #[test]
    fn test_toggle_mid_swing_reverses() {
        let mut swing = DoorSwing::default();
        swing.toggle();
        for _ in 0..10 {
            swing = swing.advance(TICK, EaseRate::DOOR);
        }
        let midway = swing.angle;
        swing.toggle();
        swing = swing.advance(TICK, EaseRate::DOOR);
        assert!(swing.angle > midway);
    }

    #[test]
    fn test_advance_is_pure() {
        let mut swing = DoorSwing::default();
        swing.toggle();
        let rate = EaseRate::DOOR;
        assert_eq!(swing.advance(TICK, rate), swing.advance(TICK, rate));
    }
}
