//! Editor configuration parsed from environment variables.

use crate::consts::{DEFAULT_BACK_IMAGE, DEFAULT_FRONT_IMAGE, DEFAULT_STAGE_HEIGHT, DEFAULT_STAGE_WIDTH};
use crate::garment::GarmentSide;

/// Error returned while building an [`EditorConfig`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// The side is neither `front` nor `back`.
    #[error("unknown garment side '{0}' (expected 'front' or 'back')")]
    UnknownSide(String),
    /// A numeric variable could not be parsed.
    #[error("{var} is not a number: {value}")]
    InvalidNumber { var: &'static str, value: String },
    /// A dimension is zero, negative, or not finite.
    #[error("{var} must be a positive number")]
    NonPositive { var: &'static str },
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditorConfig {
    pub side: GarmentSide,
    pub front_image: String,
    pub back_image: String,
    pub stage_width: f64,
    pub stage_height: f64,
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            side: GarmentSide::Front,
            front_image: DEFAULT_FRONT_IMAGE.to_string(),
            back_image: DEFAULT_BACK_IMAGE.to_string(),
            stage_width: DEFAULT_STAGE_WIDTH,
            stage_height: DEFAULT_STAGE_HEIGHT,
        }
    }
}

impl EditorConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `MOCKUP_SIDE`: `front` (default) or `back`
    /// - `MOCKUP_FRONT_IMAGE`: default `/crew-front.png`
    /// - `MOCKUP_BACK_IMAGE`: default `/crew-back.png`
    /// - `MOCKUP_STAGE_WIDTH`: default 1280
    /// - `MOCKUP_STAGE_HEIGHT`: default 800
    ///
    /// # Errors
    ///
    /// See [`EditorConfig::from_lookup`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::UnknownSide`] for an unrecognised side,
    /// [`ConfigError::InvalidNumber`] for unparsable stage dimensions, and
    /// [`ConfigError::NonPositive`] for dimensions that are not positive.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let side = match lookup("MOCKUP_SIDE") {
            Some(raw) => raw.parse()?,
            None => GarmentSide::default(),
        };
        let front_image = lookup("MOCKUP_FRONT_IMAGE").unwrap_or_else(|| DEFAULT_FRONT_IMAGE.to_string());
        let back_image = lookup("MOCKUP_BACK_IMAGE").unwrap_or_else(|| DEFAULT_BACK_IMAGE.to_string());
        let stage_width = parse_dimension("MOCKUP_STAGE_WIDTH", lookup("MOCKUP_STAGE_WIDTH"), DEFAULT_STAGE_WIDTH)?;
        let stage_height = parse_dimension("MOCKUP_STAGE_HEIGHT", lookup("MOCKUP_STAGE_HEIGHT"), DEFAULT_STAGE_HEIGHT)?;

        Ok(Self { side, front_image, back_image, stage_width, stage_height })
    }

    /// Image path for the configured side.
    #[must_use]
    pub fn image_path(&self) -> &str {
        match self.side {
            GarmentSide::Front => &self.front_image,
            GarmentSide::Back => &self.back_image,
        }
    }
}

fn parse_dimension(var: &'static str, raw: Option<String>, default: f64) -> Result<f64, ConfigError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    let value: f64 = raw
        .trim()
        .parse()
        .map_err(|_| ConfigError::InvalidNumber { var, value: raw.clone() })?;
    if !value.is_finite() || value <= 0.0 {
        return Err(ConfigError::NonPositive { var });
    }
    Ok(value)
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
