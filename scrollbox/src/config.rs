//! Scroll box construction options.

use std::str::FromStr;

use crate::error::ConfigError;
use crate::extent::Axis;

/// How one axis scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AxisMode {
    /// Scrollable, scrollbar always shown.
    #[default]
    Enabled,
    /// Not scrollable; no extent, no scrollbar.
    Disabled,
    /// Scrollable, scrollbar shown only while the content overflows.
    OnDemand,
}

impl AxisMode {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Self::Disabled)
    }

    pub fn is_on_demand(&self) -> bool {
        matches!(self, Self::OnDemand)
    }
}

impl FromStr for AxisMode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "enabled" | "1" | "true" => Ok(Self::Enabled),
            "disabled" | "0" | "false" => Ok(Self::Disabled),
            "on_demand" | "on-demand" => Ok(Self::OnDemand),
            _ => Err(()),
        }
    }
}

/// Which axes a scroll box scrolls, and how.
///
/// Defaults to vertical scrolling with a permanent scrollbar and no
/// horizontal scrolling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScrollBoxOptions {
    pub vertical: AxisMode,
    pub horizontal: AxisMode,
}

impl Default for ScrollBoxOptions {
    fn default() -> Self {
        Self {
            vertical: AxisMode::Enabled,
            horizontal: AxisMode::Disabled,
        }
    }
}

impl ScrollBoxOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vertical(mut self, mode: AxisMode) -> Self {
        self.vertical = mode;
        self
    }

    pub fn horizontal(mut self, mode: AxisMode) -> Self {
        self.horizontal = mode;
        self
    }

    /// Build options from string pairs such as `("vertical", "on_demand")`.
    /// Axes not mentioned keep their defaults.
    pub fn from_pairs<'a, I>(pairs: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut options = Self::default();
        for (key, value) in pairs {
            match key {
                "vertical" => {
                    options.vertical = value
                        .parse()
                        .map_err(|_| ConfigError::invalid_axis_mode("vertical", value))?;
                }
                "horizontal" => {
                    options.horizontal = value
                        .parse()
                        .map_err(|_| ConfigError::invalid_axis_mode("horizontal", value))?;
                }
                other => return Err(ConfigError::UnknownOption(other.to_string())),
            }
        }
        Ok(options)
    }

    pub fn mode(&self, axis: Axis) -> AxisMode {
        match axis {
            Axis::Vertical => self.vertical,
            Axis::Horizontal => self.horizontal,
        }
    }
}
