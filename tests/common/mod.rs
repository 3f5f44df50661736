//! Shared test infrastructure for spring-button integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use spring_button::{
    AudioSource, ButtonBody, ButtonConfig, ButtonController, ButtonMaterial, SpringJoint, Srgba,
};

// ============================================================================
// Mock Collaborators
// ============================================================================

/// Mock physics body; the test moves it directly between ticks
pub struct MockBody {
    pub y: f32,
    writes: usize,
}

impl MockBody {
    pub fn new(y: f32) -> Self {
        Self { y, writes: 0 }
    }

    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl ButtonBody for MockBody {
    fn local_y(&self) -> f32 {
        self.y
    }

    fn set_local_y(&mut self, y: f32) {
        self.y = y;
        self.writes += 1;
    }
}

/// Mock joint that records every tension it receives
pub struct MockJoint {
    history: heapless::Vec<f32, 64>,
}

impl MockJoint {
    pub fn new() -> Self {
        Self {
            history: heapless::Vec::new(),
        }
    }

    pub fn last_tension(&self) -> Option<f32> {
        self.history.last().copied()
    }

    pub fn history(&self) -> &[f32] {
        &self.history
    }
}

impl SpringJoint for MockJoint {
    fn set_spring(&mut self, tension: f32) {
        let _ = self.history.push(tension);
    }
}

/// Mock material that records every color it receives
pub struct MockMaterial {
    history: heapless::Vec<Srgba, 64>,
}

impl MockMaterial {
    pub fn new() -> Self {
        Self {
            history: heapless::Vec::new(),
        }
    }

    pub fn last_color(&self) -> Option<Srgba> {
        self.history.last().copied()
    }

    pub fn history(&self) -> &[Srgba] {
        &self.history
    }
}

impl ButtonMaterial for MockMaterial {
    fn set_color(&mut self, color: Srgba) {
        let _ = self.history.push(color);
    }
}

/// Clips used by the tests
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Clip {
    Click,
    Clack,
}

/// Mock audio source that records every clip it plays
pub struct MockAudio {
    played: heapless::Vec<Clip, 64>,
}

impl MockAudio {
    pub fn new() -> Self {
        Self {
            played: heapless::Vec::new(),
        }
    }

    pub fn played(&self) -> &[Clip] {
        &self.played
    }
}

impl AudioSource for MockAudio {
    type Clip = Clip;

    fn play(&mut self, clip: &Clip) {
        let _ = self.played.push(*clip);
    }
}

pub type TestController = ButtonController<MockBody, MockJoint, MockMaterial, MockAudio>;

// ============================================================================
// Test Helper Functions
// ============================================================================

/// Builds the reference configuration: travel [-0.02, 0.03], tolerance 0.01, wait 1s
pub fn reference_config() -> ButtonConfig<Clip> {
    ButtonConfig::builder()
        .bounds(-0.02, 0.03)
        .click_tolerance(0.01)
        .wait_time(1.0)
        .pressed_sound(Clip::Click)
        .released_sound(Clip::Clack)
        .build()
        .unwrap()
}

pub fn controller_with(config: ButtonConfig<Clip>) -> TestController {
    ButtonController::new(
        config,
        MockBody::new(0.0),
        MockJoint::new(),
        MockMaterial::new(),
        MockAudio::new(),
    )
}

pub fn reference_controller() -> TestController {
    controller_with(reference_config())
}

/// Moves the button to `y` and runs `frames` ticks of `dt`, collecting events
pub fn hold_at(
    controller: &mut TestController,
    y: f32,
    dt: f32,
    frames: usize,
) -> heapless::Vec<spring_button::ButtonEvent, 64> {
    let mut events = heapless::Vec::new();
    for _ in 0..frames {
        controller.body_mut().y = y;
        if let Some(event) = controller.tick(dt) {
            let _ = events.push(event);
        }
    }
    events
}

/// Compare two colors with floating-point tolerance
pub fn colors_equal(a: Srgba, b: Srgba) -> bool {
    const EPSILON: f32 = 0.001;
    (a.red - b.red).abs() < EPSILON
        && (a.green - b.green).abs() < EPSILON
        && (a.blue - b.blue).abs() < EPSILON
        && (a.alpha - b.alpha).abs() < EPSILON
}
