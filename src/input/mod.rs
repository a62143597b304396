// Input boundary: movement intents and the player controller

pub mod controller;
pub mod intent;

pub use controller::PlayerController;
pub use intent::{Intent, IntentState};
