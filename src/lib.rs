//! A 2D platformer physics and collision core built from scratch in Rust.
//!
//! The crate advances axis-aligned dynamic bodies at a fixed timestep,
//! detects overlaps against static geometry and trigger volumes, orders the
//! resulting contacts by penetration severity, and resolves them with
//! positional push-out along the axis consistent with each body's motion.
//! Rendering, asset loading and raw input capture live outside: the
//! presentation layer drives [`StepScheduler::on_frame`] once per display
//! refresh and reads interpolated positions back.
//!
//! ```
//! use glam::DVec2;
//! use rusted_platformer::{PhysicsConfig, StepScheduler, World};
//!
//! let mut world = World::new();
//! let player = world.create_dynamic_body(DVec2::new(0.0, 0.0), 16.0, 16.0)?;
//! world.create_static_body(DVec2::new(-100.0, 100.0), 200.0, 10.0)?;
//!
//! let mut scheduler = StepScheduler::new(PhysicsConfig::default());
//! scheduler.on_frame(&mut world, 0.0);
//! scheduler.on_frame(&mut world, 16.7);
//! let pos = world.interpolated_position(player, scheduler.alpha());
//! # assert!(pos.is_some());
//! # Ok::<(), rusted_platformer::PhysicsError>(())
//! ```

pub mod error;
pub mod input;
pub mod math;
pub mod physics;

pub use error::PhysicsError;
pub use input::{Intent, IntentState, PlayerController};
pub use physics::{
    Aabb, Contact, DynamicBody, DynamicBodyHandle, PhysicsConfig, StaticBody, StaticBodyHandle,
    StepScheduler, SymbolicBody, SymbolicBodyHandle, TriggerEvent, World, WrapBounds,
    FIXED_TIMESTEP, MAX_FRAME_TIME,
};
