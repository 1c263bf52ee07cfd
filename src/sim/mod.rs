//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - One logical tick per call, unit time step
//! - State passed in explicitly, no globals
//! - No rendering or platform dependencies

pub mod layout;
pub mod proximity;
pub mod state;
pub mod tick;

pub use layout::initial_positions;
pub use proximity::{clamp_to_bounds, is_near, is_stable, proximity_threshold_sq};
pub use state::{Astronaut, Bounds, SimEvent, SimState, Target};
pub use tick::{ControlInput, TickInput, step, tick};
