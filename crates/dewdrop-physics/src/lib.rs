//! Spring-physics simulation for the draggable liquid drop overlay.
//!
//! All state changes go through [`DropSimulator`]: pointer events via
//! [`DropSimulator::handle`] and frame ticks via [`DropSimulator::step`].
//! Time only advances through `step`, so tests can drive the simulation with
//! synthetic deltas and pointer sequences.

mod drop;
mod spring;

pub use drop::{DropPhase, DropSimulator, GRAVITY_PER_FRAME, IDLE_DELAY, SPAWN_TOP};
pub use spring::{FRICTION, Spring, TENSION};
