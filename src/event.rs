//! Events reported back to the host loop.

use crate::types::ButtonState;

/// A state toggle that happened during a tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonEvent {
    /// Button went from `Inactive` to `Pressed`.
    Pressed,
    /// Button went from `Pressed` to `Inactive`.
    Released,
}

impl ButtonEvent {
    /// Returns the state the button is in after this event.
    pub fn new_state(self) -> ButtonState {
        match self {
            ButtonEvent::Pressed => ButtonState::Pressed,
            ButtonEvent::Released => ButtonState::Inactive,
        }
    }

    /// Event for entering `state`.
    pub fn entering(state: ButtonState) -> Self {
        match state {
            ButtonState::Pressed => ButtonEvent::Pressed,
            ButtonState::Inactive => ButtonEvent::Released,
        }
    }
}
