// Movement intents and their per-frame state
//
// The physics core never reads keyboards. The surrounding shell translates
// raw key events into intent presses/releases; this module keeps the
// bookkeeping that makes "just pressed" fire exactly once per physical
// press-release cycle no matter how often it is polled.

use std::collections::HashSet;

/// The resolved movement intents a player controller consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    MoveLeft,
    MoveRight,
    Jump,
}

/// Debounced intent state for a single player.
#[derive(Debug, Default)]
pub struct IntentState {
    /// Intents currently held down.
    pressed: HashSet<Intent>,
    /// Intents that went down since the last `end_frame`.
    just_pressed: HashSet<Intent>,
}

impl IntentState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a press event. Repeated press events while the intent is
    /// already down (key-repeat, multiple polls per frame) do not re-arm the
    /// just-pressed edge; only a release followed by a new press does.
    pub fn press(&mut self, intent: Intent) {
        if self.pressed.insert(intent) {
            self.just_pressed.insert(intent);
        }
    }

    /// Register a release event.
    pub fn release(&mut self, intent: Intent) {
        self.pressed.remove(&intent);
        self.just_pressed.remove(&intent);
    }

    /// Whether the intent is currently held.
    pub fn is_pressed(&self, intent: Intent) -> bool {
        self.pressed.contains(&intent)
    }

    /// Whether the intent went down this frame (non-consuming).
    pub fn just_pressed(&self, intent: Intent) -> bool {
        self.just_pressed.contains(&intent)
    }

    /// Take the just-pressed edge if armed. Consuming it means a frame that
    /// runs several fixed physics steps cannot observe the same press twice.
    pub fn consume_just_pressed(&mut self, intent: Intent) -> bool {
        self.just_pressed.remove(&intent)
    }

    /// Clear edge state. Call once per presentation frame after all steps.
    pub fn end_frame(&mut self) {
        self.just_pressed.clear();
    }

    /// Drop all state (scene switch).
    pub fn reset(&mut self) {
        self.pressed.clear();
        self.just_pressed.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_press_sets_pressed_and_edge() {
        let mut state = IntentState::new();
        state.press(Intent::Jump);
        assert!(state.is_pressed(Intent::Jump));
        assert!(state.just_pressed(Intent::Jump));
    }

    #[test]
    fn test_repeat_press_does_not_rearm_edge() {
        let mut state = IntentState::new();
        state.press(Intent::Jump);
        assert!(state.consume_just_pressed(Intent::Jump));

        // Key repeat while held: no new edge.
        state.press(Intent::Jump);
        assert!(!state.just_pressed(Intent::Jump));
    }

    #[test]
    fn test_release_then_press_rearms_edge() {
        let mut state = IntentState::new();
        state.press(Intent::Jump);
        state.end_frame();
        state.release(Intent::Jump);
        state.press(Intent::Jump);
        assert!(state.just_pressed(Intent::Jump));
    }

    #[test]
    fn test_consume_is_one_shot() {
        let mut state = IntentState::new();
        state.press(Intent::Jump);
        assert!(state.consume_just_pressed(Intent::Jump));
        assert!(!state.consume_just_pressed(Intent::Jump));
        // Still held, just no edge left.
        assert!(state.is_pressed(Intent::Jump));
    }

    #[test]
    fn test_end_frame_clears_edges_keeps_held() {
        let mut state = IntentState::new();
        state.press(Intent::MoveLeft);
        state.end_frame();
        assert!(state.is_pressed(Intent::MoveLeft));
        assert!(!state.just_pressed(Intent::MoveLeft));
    }

    #[test]
    fn test_release_clears_both() {
        let mut state = IntentState::new();
        state.press(Intent::MoveRight);
        state.release(Intent::MoveRight);
        assert!(!state.is_pressed(Intent::MoveRight));
        assert!(!state.just_pressed(Intent::MoveRight));
    }

    #[test]
    fn test_reset() {
        let mut state = IntentState::new();
        state.press(Intent::Jump);
        state.press(Intent::MoveLeft);
        state.reset();
        assert!(!state.is_pressed(Intent::Jump));
        assert!(!state.is_pressed(Intent::MoveLeft));
    }

    #[test]
    fn test_intents_are_independent() {
        let mut state = IntentState::new();
        state.press(Intent::MoveLeft);
        state.press(Intent::MoveRight);
        state.release(Intent::MoveLeft);
        assert!(!state.is_pressed(Intent::MoveLeft));
        assert!(state.is_pressed(Intent::MoveRight));
    }
}
