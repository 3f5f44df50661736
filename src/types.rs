//! Core types shared by the controller and its configuration.

/// Logical state of the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ButtonState {
    /// Released. Spring is stiff and the inactive color is shown.
    #[default]
    Inactive,

    /// Pressed down. Spring is slack and the active color is shown.
    Pressed,
}

impl ButtonState {
    /// Returns the state a toggle moves to.
    #[inline]
    pub fn toggled(self) -> Self {
        match self {
            ButtonState::Inactive => ButtonState::Pressed,
            ButtonState::Pressed => ButtonState::Inactive,
        }
    }

    /// Returns true for [`ButtonState::Pressed`].
    #[inline]
    pub fn is_pressed(self) -> bool {
        self == ButtonState::Pressed
    }
}

/// Configuration validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Lower bound is above the upper bound.
    InvertedBounds,

    /// Click tolerance is below zero.
    NegativeClickTolerance,

    /// Wait time is below zero.
    NegativeWaitTime,

    /// A spring tension is below zero.
    NegativeSpringTension,

    /// A bound, tolerance, wait time or tension is NaN or infinite.
    NonFiniteValue,
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ConfigError::InvertedBounds => {
                write!(f, "minimum position must not exceed maximum position")
            }
            ConfigError::NegativeClickTolerance => {
                write!(f, "click tolerance must not be negative")
            }
            ConfigError::NegativeWaitTime => {
                write!(f, "wait time must not be negative")
            }
            ConfigError::NegativeSpringTension => {
                write!(f, "spring tension must not be negative")
            }
            ConfigError::NonFiniteValue => {
                write!(f, "configuration values must be finite")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConfigError {}
