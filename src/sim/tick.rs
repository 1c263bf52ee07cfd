//! Fixed-step simulation tick
//!
//! The host calls [`tick`] once per logical tick; step N's output state is
//! step N+1's input.

use glam::Vec2;

use super::proximity::{clamp_to_bounds, is_near, is_stable};
use super::state::{Bounds, SimEvent, SimState};

/// Directional intents held during a tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlInput {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

impl ControlInput {
    /// Net acceleration for this tick (screen space, y grows downward).
    ///
    /// Every held direction contributes, so opposing intents cancel.
    pub fn acceleration(&self, thrust: f32) -> Vec2 {
        let mut accel = Vec2::ZERO;
        if self.up {
            accel.y -= thrust;
        }
        if self.down {
            accel.y += thrust;
        }
        if self.left {
            accel.x -= thrust;
        }
        if self.right {
            accel.x += thrust;
        }
        accel
    }
}

/// Input for a single tick
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickInput {
    pub controls: ControlInput,
    /// Current rendering-surface size
    pub bounds: Bounds,
}

impl TickInput {
    pub fn new(controls: ControlInput, bounds: Bounds) -> Self {
        Self { controls, bounds }
    }

    /// No directions held
    pub fn idle(bounds: Bounds) -> Self {
        Self::new(ControlInput::default(), bounds)
    }
}

/// Advance the session by one tick.
///
/// Returns [`SimEvent::TaskComplete`] on the single tick that completes the
/// task. Once complete, further calls leave the state untouched.
pub fn tick(state: &mut SimState, input: &TickInput) -> Option<SimEvent> {
    if state.target.complete {
        return None;
    }

    state.time_ticks += 1;

    let astronaut = &mut state.astronaut;

    // Thrust, then drag, then Euler integration with a unit step
    astronaut.vel += input.controls.acceleration(astronaut.thrust);
    astronaut.vel *= astronaut.drag;
    astronaut.pos += astronaut.vel;

    // Clamping leaves velocity alone: pushing into a wall only bleeds off via drag
    astronaut.pos = clamp_to_bounds(astronaut.pos, astronaut.half_size(), input.bounds);

    let target = &mut state.target;
    if is_near(astronaut, target) && is_stable(astronaut.vel, state.stability_threshold) {
        target.stability_timer += 1;

        if target.stability_timer >= target.required_stability && !target.complete {
            target.complete = true;
            return Some(SimEvent::TaskComplete {
                tick: state.time_ticks,
            });
        }
    } else {
        target.stability_timer = 0;
    }

    None
}

/// Pure form of [`tick`]: returns the next state instead of mutating
pub fn step(state: SimState, input: &TickInput) -> (SimState, Option<SimEvent>) {
    let mut next = state;
    let event = tick(&mut next, input);
    (next, event)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tuning::Tuning;
    use proptest::prelude::*;

    const BOUNDS: Bounds = Bounds::new(1280.0, 720.0);

    /// Session with the astronaut parked on the target at rest
    fn parked() -> SimState {
        let mut state = SimState::new(&Tuning::default(), BOUNDS);
        state.astronaut.pos = state.target.pos;
        state
    }

    fn idle() -> TickInput {
        TickInput::idle(BOUNDS)
    }

    fn held(up: bool, down: bool, left: bool, right: bool) -> TickInput {
        TickInput::new(
            ControlInput {
                up,
                down,
                left,
                right,
            },
            BOUNDS,
        )
    }

    #[test]
    fn test_single_up_thrust_from_rest() {
        let mut state = SimState::new(&Tuning::default(), BOUNDS);
        state.astronaut.pos = Vec2::new(640.0, 360.0);
        let start = state.astronaut.pos;

        tick(&mut state, &held(true, false, false, false));

        assert!((state.astronaut.vel.y - -0.198).abs() < 1e-6);
        assert_eq!(state.astronaut.vel.x, 0.0);
        assert!((state.astronaut.pos.y - (start.y - 0.198)).abs() < 1e-4);
        assert_eq!(state.astronaut.pos.x, start.x);
    }

    #[test]
    fn test_opposing_inputs_cancel() {
        let controls = ControlInput {
            up: true,
            down: true,
            left: true,
            right: true,
        };
        assert_eq!(controls.acceleration(0.2), Vec2::ZERO);

        let mut state = SimState::new(&Tuning::default(), BOUNDS);
        state.astronaut.pos = Vec2::new(640.0, 360.0);
        tick(&mut state, &held(false, false, true, true));
        assert_eq!(state.astronaut.vel, Vec2::ZERO);
        assert_eq!(state.astronaut.pos, Vec2::new(640.0, 360.0));
    }

    #[test]
    fn test_start_position_is_in_bounds() {
        // Default anchor is the right edge
        let mut state = SimState::new(&Tuning::default(), BOUNDS);
        assert_eq!(state.astronaut.pos.x, 1280.0 - 125.0);
        tick(&mut state, &idle());
        assert_eq!(state.astronaut.pos.x, 1280.0 - 125.0);
    }

    #[test]
    fn test_clamp_keeps_velocity() {
        let mut state = SimState::new(&Tuning::default(), BOUNDS);
        state.astronaut.pos = Vec2::new(1155.0, 360.0);
        state.astronaut.vel = Vec2::new(3.0, 0.0);

        tick(&mut state, &idle());

        assert_eq!(state.astronaut.pos.x, 1155.0);
        assert!((state.astronaut.vel.x - 2.97).abs() < 1e-5);
    }

    #[test]
    fn test_completes_on_tick_120_not_before() {
        let mut state = parked();

        for i in 1..120 {
            assert_eq!(tick(&mut state, &idle()), None, "completed early at tick {i}");
            assert_eq!(state.target.stability_timer, i);
            assert!(!state.target.complete);
        }

        let event = tick(&mut state, &idle());
        assert_eq!(event, Some(SimEvent::TaskComplete { tick: 120 }));
        assert!(state.target.complete);
        assert_eq!(state.target.stability_timer, 120);
    }

    #[test]
    fn test_completion_event_is_one_shot() {
        let mut state = parked();
        let events = (0..300)
            .filter_map(|_| tick(&mut state, &idle()))
            .count();
        assert_eq!(events, 1);
        assert!(state.target.complete);
    }

    #[test]
    fn test_unstable_tick_resets_timer() {
        let mut state = parked();
        for _ in 0..119 {
            tick(&mut state, &idle());
        }
        assert_eq!(state.target.stability_timer, 119);

        // 0.1 * 0.99 is still above the 0.05 threshold after drag
        state.astronaut.vel.x = 0.1;
        assert_eq!(tick(&mut state, &idle()), None);
        assert_eq!(state.target.stability_timer, 0);
        assert!(!state.target.complete);

        // A full 120 qualifying ticks are needed again
        state.astronaut.vel = Vec2::ZERO;
        for _ in 0..119 {
            assert_eq!(tick(&mut state, &idle()), None);
        }
        assert!(!state.target.complete);
        assert!(tick(&mut state, &idle()).is_some());
        assert!(state.target.complete);
    }

    #[test]
    fn test_far_from_target_never_counts() {
        let mut state = SimState::new(&Tuning::default(), BOUNDS);
        state.astronaut.pos = Vec2::new(125.0, 125.0);
        state.target.stability_timer = 50;
        tick(&mut state, &idle());
        assert_eq!(state.target.stability_timer, 0);
    }

    #[test]
    fn test_no_op_after_completion() {
        let mut state = parked();
        while tick(&mut state, &idle()).is_none() {}

        let before = state;
        assert_eq!(tick(&mut state, &held(true, false, true, false)), None);
        assert_eq!(state, before);
    }

    #[test]
    fn test_step_matches_tick() {
        let mut mutated = parked();
        let input = held(false, true, false, true);
        let (next, event) = step(mutated, &input);
        let expected_event = tick(&mut mutated, &input);
        assert_eq!(next, mutated);
        assert_eq!(event, expected_event);
    }

    #[test]
    fn test_determinism() {
        let inputs = [
            held(true, false, false, false),
            held(false, false, true, false),
            idle(),
            held(false, true, false, true),
        ];

        let mut a = SimState::new(&Tuning::default(), BOUNDS);
        let mut b = SimState::new(&Tuning::default(), BOUNDS);
        for input in inputs.iter().cycle().take(400) {
            tick(&mut a, input);
            tick(&mut b, input);
        }
        assert_eq!(a, b);
    }

    fn arb_controls() -> impl Strategy<Value = ControlInput> {
        (any::<bool>(), any::<bool>(), any::<bool>(), any::<bool>()).prop_map(
            |(up, down, left, right)| ControlInput {
                up,
                down,
                left,
                right,
            },
        )
    }

    proptest! {
        #[test]
        fn prop_position_stays_in_bounds(
            controls in prop::collection::vec(arb_controls(), 1..200),
            width in 300.0f32..2000.0,
            height in 300.0f32..2000.0,
        ) {
            let bounds = Bounds::new(width, height);
            let mut state = SimState::new(&Tuning::default(), bounds);
            let half = state.astronaut.half_size();
            for controls in controls {
                tick(&mut state, &TickInput::new(controls, bounds));
                let pos = state.astronaut.pos;
                prop_assert!(pos.x >= half && pos.x <= width - half);
                prop_assert!(pos.y >= half && pos.y <= height - half);
            }
        }

        #[test]
        fn prop_timer_resets_on_any_failing_tick(
            prior in 0u32..119,
            vx in 0.06f32..5.0,
        ) {
            let mut state = parked();
            state.target.stability_timer = prior;
            // Above threshold even after one tick of drag
            state.astronaut.vel.x = vx;
            tick(&mut state, &idle());
            prop_assert_eq!(state.target.stability_timer, 0);
        }

        #[test]
        fn prop_complete_state_is_frozen(controls in arb_controls()) {
            let mut state = parked();
            state.target.complete = true;
            state.astronaut.vel = Vec2::new(1.0, -2.0);
            let before = state;
            prop_assert_eq!(tick(&mut state, &TickInput::new(controls, BOUNDS)), None);
            prop_assert_eq!(state, before);
        }

        #[test]
        fn prop_completion_never_reverts(
            controls in prop::collection::vec(arb_controls(), 0..200),
        ) {
            let mut state = parked();
            for _ in 0..120 {
                tick(&mut state, &idle());
            }
            prop_assert!(state.target.complete);
            for controls in controls {
                tick(&mut state, &TickInput::new(controls, BOUNDS));
                prop_assert!(state.target.complete);
            }
        }
    }
}
