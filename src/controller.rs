//! Spring-mounted button controller and the engine collaborators it drives.
//!
//! Provides [`ButtonController`], which clamps the button's travel, detects
//! clicks near the bottom of its range, debounces them and toggles between
//! two states. Each state sets a spring stiffness, a material color and an
//! optional sound. The physics, rendering and audio engines stay outside;
//! the controller reaches them through the traits defined here.

use crate::config::ButtonConfig;
use crate::debounce::DebounceTimer;
use crate::event::ButtonEvent;
use crate::types::ButtonState;
use palette::Srgba;

/// The physics body carrying the button.
///
/// The physics subsystem owns the position. The controller reads it every tick
/// and may request an override write.
pub trait ButtonBody {
    /// Current vertical offset relative to the parent.
    fn local_y(&self) -> f32;

    /// Overrides the vertical offset relative to the parent.
    fn set_local_y(&mut self, y: f32);
}

/// Spring joint pulling the button back toward its rest position.
pub trait SpringJoint {
    /// Sets the joint stiffness. Zero leaves the joint slack.
    fn set_spring(&mut self, tension: f32);
}

/// Material rendered on the button mesh.
pub trait ButtonMaterial {
    /// Sets the material color.
    fn set_color(&mut self, color: Srgba);
}

/// Audio emitter attached to the button.
pub trait AudioSource {
    /// Handle to a playable clip.
    type Clip;

    /// Assigns `clip` and starts playing it from the beginning.
    ///
    /// Playback is fire-and-forget. A clip that is already playing is
    /// interrupted and restarted.
    fn play(&mut self, clip: &Self::Clip);
}

/// Controls one spring-mounted push button.
///
/// All work happens synchronously inside [`tick`](Self::tick), called once per
/// frame by the host. Within a tick the position is clamped first, then the
/// click threshold is checked, then the debounced toggle runs, and finally the
/// elapsed time advances.
///
/// # Type Parameters
/// * `B` - Physics body implementation type
/// * `J` - Spring joint implementation type
/// * `M` - Material implementation type
/// * `A` - Audio source implementation type
pub struct ButtonController<B: ButtonBody, J: SpringJoint, M: ButtonMaterial, A: AudioSource> {
    body: B,
    joint: J,
    material: M,
    audio: A,
    config: ButtonConfig<A::Clip>,
    state: ButtonState,
    debounce: DebounceTimer,
}

impl<B, J, M, A> ButtonController<B, J, M, A>
where
    B: ButtonBody,
    J: SpringJoint,
    M: ButtonMaterial,
    A: AudioSource,
{
    /// Creates a controller and runs [`init`](Self::init).
    ///
    /// The button ends up at rest: position at `max_y`, state `Inactive`,
    /// released spring tension, inactive color and no sound.
    pub fn new(config: ButtonConfig<A::Clip>, body: B, joint: J, material: M, audio: A) -> Self {
        let debounce = DebounceTimer::new(config.wait_time());
        let mut controller = Self {
            body,
            joint,
            material,
            audio,
            config,
            state: ButtonState::Inactive,
            debounce,
        };
        controller.init();
        controller
    }

    /// Puts the button back into its initial resting state.
    ///
    /// The debounce timer is primed so the first click toggles immediately.
    pub fn init(&mut self) {
        self.body.set_local_y(self.config.max_y());
        self.state = ButtonState::Inactive;
        self.debounce.prime();

        apply(
            &mut self.joint,
            &mut self.material,
            &mut self.audio,
            self.config.spring_tension_for(ButtonState::Inactive),
            self.config.color_for(ButtonState::Inactive),
            None,
        );

        debug!(
            "button initialized at y={}, spring={}",
            self.config.max_y(),
            self.config.released_spring_tension()
        );
    }

    /// Runs one frame of the button update.
    ///
    /// # Returns
    /// * `Some(event)` - The button toggled during this tick
    /// * `None` - No toggle happened
    pub fn tick(&mut self, delta_seconds: f32) -> Option<ButtonEvent> {
        let raw = self.body.local_y();
        if raw.is_nan() {
            warn!("button position is NaN, resetting to rest");
        }
        let y = self.config.clamp_position(raw);
        self.body.set_local_y(y);

        let event = if self.config.is_past_click_threshold(y) {
            self.try_toggle()
        } else {
            None
        };

        if !self.debounce.advance(delta_seconds) {
            warn!("ignoring invalid frame delta {}", delta_seconds);
        }

        event
    }

    /// Toggles the button if the debounce interval has elapsed.
    ///
    /// Entering `Pressed` slackens the spring, shows the active color, plays
    /// the pressed sound and pins the position to `min_y`. Entering `Inactive`
    /// stiffens the spring, shows the inactive color and plays the released
    /// sound; the spring is left to lift the button.
    ///
    /// Holding the button at the floor toggles it again every `wait_time`.
    pub fn try_toggle(&mut self) -> Option<ButtonEvent> {
        if !self.debounce.try_fire() {
            trace!("toggle suppressed, {} s since last toggle", self.debounce.elapsed());
            return None;
        }

        let next = self.state.toggled();
        self.state = next;

        let tension = self.config.spring_tension_for(next);
        apply(
            &mut self.joint,
            &mut self.material,
            &mut self.audio,
            tension,
            self.config.color_for(next),
            self.config.sound_for(next),
        );

        if next == ButtonState::Pressed {
            self.body.set_local_y(self.config.min_y());
        }

        debug!("button toggled to {:?}, spring={}", next, tension);
        Some(ButtonEvent::entering(next))
    }

    /// Applies a spring tension, a color and an optional sound to the collaborators.
    pub fn apply_state(&mut self, tension: f32, color: Srgba, sound: Option<&A::Clip>) {
        apply(&mut self.joint, &mut self.material, &mut self.audio, tension, color, sound);
    }

    /// Returns the current state.
    pub fn state(&self) -> ButtonState {
        self.state
    }

    /// Returns true if the button is currently pressed.
    pub fn is_pressed(&self) -> bool {
        self.state.is_pressed()
    }

    /// Seconds since the last toggle (or `wait_time` right after init).
    pub fn elapsed_since_toggle(&self) -> f32 {
        self.debounce.elapsed()
    }

    /// Current vertical position as reported by the body.
    pub fn position_y(&self) -> f32 {
        self.body.local_y()
    }

    pub fn config(&self) -> &ButtonConfig<A::Clip> {
        &self.config
    }

    pub fn body(&self) -> &B {
        &self.body
    }

    /// Mutable access to the body, for hosts that move it between ticks.
    pub fn body_mut(&mut self) -> &mut B {
        &mut self.body
    }

    pub fn joint(&self) -> &J {
        &self.joint
    }

    pub fn material(&self) -> &M {
        &self.material
    }

    pub fn audio(&self) -> &A {
        &self.audio
    }

    /// Releases the collaborators back to the host.
    pub fn into_parts(self) -> (B, J, M, A) {
        (self.body, self.joint, self.material, self.audio)
    }
}

fn apply<J: SpringJoint, M: ButtonMaterial, A: AudioSource>(
    joint: &mut J,
    material: &mut M,
    audio: &mut A,
    tension: f32,
    color: Srgba,
    sound: Option<&A::Clip>,
) {
    joint.set_spring(tension);
    material.set_color(color);
    if let Some(clip) = sound {
        audio.play(clip);
    }
}
