// Physics and collision core: AABB bodies, fixed-step integration,
// dynamic-vs-static contact detection and positional resolution

pub mod aabb;
pub mod body;
pub mod collision;
pub mod integrator;
pub mod resolver;
pub mod scheduler;
pub mod world;

pub use aabb::Aabb;
pub use body::{DynamicBody, StaticBody, SymbolicBody, TriggerEvent};
pub use collision::{detect, Contact};
pub use integrator::{integrate, PhysicsConfig, WrapBounds, GRAVITY_ACCEL, TERMINAL_VELOCITY};
pub use resolver::resolve;
pub use scheduler::{StepScheduler, FIXED_TIMESTEP, MAX_FRAME_TIME};
pub use world::{DynamicBodyHandle, StaticBodyHandle, SymbolicBodyHandle, World};
