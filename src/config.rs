use crate::colors::{GREEN, RED};
use crate::types::{ButtonState, ConfigError};
use palette::Srgba;

/// Default lower travel bound in local units.
pub const DEFAULT_MIN_Y: f32 = -0.02;
/// Default upper travel bound (rest position) in local units.
pub const DEFAULT_MAX_Y: f32 = 0.03;
/// Default distance above `min_y` that still counts as a click.
pub const DEFAULT_CLICK_TOLERANCE: f32 = 0.01;
/// Default debounce interval in seconds.
pub const DEFAULT_WAIT_TIME: f32 = 1.0;
/// Spring stiffness while pressed; zero lets the joint go slack.
pub const DEFAULT_PRESSED_SPRING_TENSION: f32 = 0.0;
/// Spring stiffness while released.
pub const DEFAULT_RELEASED_SPRING_TENSION: f32 = 1500.0;

/// Immutable button configuration.
///
/// Built through [`ButtonConfigBuilder`], which guarantees `min_y <= max_y`
/// and that every numeric field is finite and non-negative where it matters.
///
/// # Type Parameters
/// * `C` - The host's audio clip handle type
#[derive(Debug, Clone)]
pub struct ButtonConfig<C> {
    min_y: f32,
    max_y: f32,
    click_tolerance: f32,
    wait_time: f32,
    inactive_color: Srgba,
    active_color: Srgba,
    pressed_spring_tension: f32,
    released_spring_tension: f32,
    pressed_sound: Option<C>,
    released_sound: Option<C>,
}

impl<C> ButtonConfig<C> {
    /// Creates a builder seeded with the default values.
    pub fn builder() -> ButtonConfigBuilder<C> {
        ButtonConfigBuilder::new()
    }

    /// Clamps a position into `[min_y, max_y]`.
    ///
    /// NaN maps to `max_y`, the rest position. Applying this twice gives the
    /// same result as applying it once.
    #[inline]
    pub fn clamp_position(&self, y: f32) -> f32 {
        if y.is_nan() {
            return self.max_y;
        }
        y.clamp(self.min_y, self.max_y)
    }

    /// Position below which the button counts as clicked.
    #[inline]
    pub fn click_threshold(&self) -> f32 {
        self.min_y + self.click_tolerance
    }

    /// Returns true if `y` is strictly below the click threshold.
    #[inline]
    pub fn is_past_click_threshold(&self, y: f32) -> bool {
        y < self.click_threshold()
    }

    /// Spring tension applied while in `state`.
    pub fn spring_tension_for(&self, state: ButtonState) -> f32 {
        match state {
            ButtonState::Inactive => self.released_spring_tension,
            ButtonState::Pressed => self.pressed_spring_tension,
        }
    }

    /// Material color shown while in `state`.
    pub fn color_for(&self, state: ButtonState) -> Srgba {
        match state {
            ButtonState::Inactive => self.inactive_color,
            ButtonState::Pressed => self.active_color,
        }
    }

    /// Sound played when entering `state`, if any.
    pub fn sound_for(&self, state: ButtonState) -> Option<&C> {
        match state {
            ButtonState::Inactive => self.released_sound.as_ref(),
            ButtonState::Pressed => self.pressed_sound.as_ref(),
        }
    }

    pub fn min_y(&self) -> f32 {
        self.min_y
    }

    pub fn max_y(&self) -> f32 {
        self.max_y
    }

    pub fn click_tolerance(&self) -> f32 {
        self.click_tolerance
    }

    pub fn wait_time(&self) -> f32 {
        self.wait_time
    }

    pub fn inactive_color(&self) -> Srgba {
        self.inactive_color
    }

    pub fn active_color(&self) -> Srgba {
        self.active_color
    }

    pub fn pressed_spring_tension(&self) -> f32 {
        self.pressed_spring_tension
    }

    pub fn released_spring_tension(&self) -> f32 {
        self.released_spring_tension
    }

    pub fn pressed_sound(&self) -> Option<&C> {
        self.pressed_sound.as_ref()
    }

    pub fn released_sound(&self) -> Option<&C> {
        self.released_sound.as_ref()
    }
}

impl<C> Default for ButtonConfig<C> {
    fn default() -> Self {
        Self {
            min_y: DEFAULT_MIN_Y,
            max_y: DEFAULT_MAX_Y,
            click_tolerance: DEFAULT_CLICK_TOLERANCE,
            wait_time: DEFAULT_WAIT_TIME,
            inactive_color: RED,
            active_color: GREEN,
            pressed_spring_tension: DEFAULT_PRESSED_SPRING_TENSION,
            released_spring_tension: DEFAULT_RELEASED_SPRING_TENSION,
            pressed_sound: None,
            released_sound: None,
        }
    }
}

/// Builder for validated button configurations.
#[derive(Debug)]
pub struct ButtonConfigBuilder<C> {
    config: ButtonConfig<C>,
}

impl<C> ButtonConfigBuilder<C> {
    /// Creates a builder holding the default configuration.
    pub fn new() -> Self {
        Self {
            config: ButtonConfig::default(),
        }
    }

    /// Sets the travel bounds in local units.
    pub fn bounds(mut self, min_y: f32, max_y: f32) -> Self {
        self.config.min_y = min_y;
        self.config.max_y = max_y;
        self
    }

    /// Sets how far above `min_y` a position still counts as a click.
    pub fn click_tolerance(mut self, tolerance: f32) -> Self {
        self.config.click_tolerance = tolerance;
        self
    }

    /// Sets the minimum seconds between toggles.
    pub fn wait_time(mut self, seconds: f32) -> Self {
        self.config.wait_time = seconds;
        self
    }

    pub fn inactive_color(mut self, color: Srgba) -> Self {
        self.config.inactive_color = color;
        self
    }

    pub fn active_color(mut self, color: Srgba) -> Self {
        self.config.active_color = color;
        self
    }

    pub fn pressed_spring_tension(mut self, tension: f32) -> Self {
        self.config.pressed_spring_tension = tension;
        self
    }

    pub fn released_spring_tension(mut self, tension: f32) -> Self {
        self.config.released_spring_tension = tension;
        self
    }

    /// Sets the clip played on entering `Pressed`.
    pub fn pressed_sound(mut self, clip: C) -> Self {
        self.config.pressed_sound = Some(clip);
        self
    }

    /// Sets the clip played on entering `Inactive` through a toggle.
    pub fn released_sound(mut self, clip: C) -> Self {
        self.config.released_sound = Some(clip);
        self
    }

    /// Builds and validates the configuration.
    ///
    /// # Errors
    /// * `NonFiniteValue` - A numeric field is NaN or infinite
    /// * `InvertedBounds` - `min_y > max_y`
    /// * `NegativeClickTolerance` - Click tolerance below zero
    /// * `NegativeWaitTime` - Wait time below zero
    /// * `NegativeSpringTension` - Either spring tension below zero
    pub fn build(self) -> Result<ButtonConfig<C>, ConfigError> {
        let c = &self.config;

        let numeric = [
            c.min_y,
            c.max_y,
            c.click_tolerance,
            c.wait_time,
            c.pressed_spring_tension,
            c.released_spring_tension,
        ];
        if numeric.iter().any(|v| !v.is_finite()) {
            return Err(ConfigError::NonFiniteValue);
        }

        if c.min_y > c.max_y {
            return Err(ConfigError::InvertedBounds);
        }

        if c.click_tolerance < 0.0 {
            return Err(ConfigError::NegativeClickTolerance);
        }

        if c.wait_time < 0.0 {
            return Err(ConfigError::NegativeWaitTime);
        }

        if c.pressed_spring_tension < 0.0 || c.released_spring_tension < 0.0 {
            return Err(ConfigError::NegativeSpringTension);
        }

        Ok(self.config)
    }
}

impl<C> Default for ButtonConfigBuilder<C> {
    fn default() -> Self {
        Self::new()
    }
}
