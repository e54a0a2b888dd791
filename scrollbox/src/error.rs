//! Errors raised while configuring a scroll box.

use thiserror::Error;

/// Construction-time configuration errors. These are fatal to construction;
/// once built, a scroll box has no failing operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// An axis option was given a value other than enabled/disabled/on_demand.
    #[error("Invalid value '{value}' for {axis} scrolling")]
    InvalidAxisMode {
        /// The option name.
        axis: &'static str,
        /// The rejected value.
        value: String,
    },

    /// An option name that is not understood.
    #[error("Unknown option '{0}'")]
    UnknownOption(String),

    /// A key binding names an action the scroll box does not have.
    #[error("Unknown scroll action '{0}'")]
    UnknownAction(String),

    /// A style value could not be interpreted.
    #[error("Invalid style value '{value}' for '{key}'")]
    InvalidStyle {
        /// The style key.
        key: String,
        /// The rejected value.
        value: String,
    },
}

impl ConfigError {
    pub fn invalid_axis_mode(axis: &'static str, value: impl Into<String>) -> Self {
        Self::InvalidAxisMode {
            axis,
            value: value.into(),
        }
    }

    pub fn invalid_style(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidStyle {
            key: key.into(),
            value: value.into(),
        }
    }
}
