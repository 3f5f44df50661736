#![cfg_attr(not(feature = "std"), no_std)]

//! Controller for a spring-mounted push button in a 3D simulation.
//!
//! The user pushes the button down; once it travels past a threshold near the
//! bottom of its range it toggles between two states, each with its own spring
//! stiffness, material color and sound. A debounce interval separates toggles.
//!
//! # Core Concepts
//!
//! - **`ButtonController`**: Owns the button state and drives the collaborators once per frame
//! - **`ButtonConfig`**: Validated travel bounds, click tolerance, wait time, colors, tensions and sounds
//! - **`ButtonState`**: `Inactive` or `Pressed`
//! - **`ButtonEvent`**: Returned from `tick` when a toggle happens
//! - **`ButtonBody`**, **`SpringJoint`**, **`ButtonMaterial`**, **`AudioSource`**: Traits to implement for your engine
//! - **`DebounceTimer`**: Polled timer enforcing the minimum time between toggles
//!
//! Colors are `Srgba` (0.0-1.0 range). Time is in seconds as `f32`, positions
//! are local offsets along the button's travel axis.

// Re-export color types from palette for user convenience
pub use palette::{Srgb, Srgba};

mod fmt;

pub mod colors;
pub mod config;
pub mod controller;
pub mod debounce;
pub mod event;
pub mod types;

pub use colors::{BLACK, BLUE, GREEN, RED, WHITE};
pub use config::{ButtonConfig, ButtonConfigBuilder};
pub use controller::{AudioSource, ButtonBody, ButtonController, ButtonMaterial, SpringJoint};
pub use debounce::DebounceTimer;
pub use event::ButtonEvent;
pub use types::{ButtonState, ConfigError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn state_toggles_between_two_variants() {
        assert_eq!(ButtonState::default(), ButtonState::Inactive);
        assert_eq!(ButtonState::Inactive.toggled(), ButtonState::Pressed);
        assert_eq!(ButtonState::Pressed.toggled(), ButtonState::Inactive);
        assert_eq!(ButtonEvent::entering(ButtonState::Pressed), ButtonEvent::Pressed);
        assert_eq!(ButtonEvent::Released.new_state(), ButtonState::Inactive);
    }
}
