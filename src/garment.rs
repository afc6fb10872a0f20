//! Garment side and the backdrop group that content objects live in.
//!
//! The shirt image for the current side is centred on the stage. Its top-left
//! corner is the origin of the group that holds every content object, so
//! object positions are local to the backdrop while pointer events arrive in
//! stage space.

#[cfg(test)]
#[path = "garment_test.rs"]
mod garment_test;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::geom::{Bounds, Point};

/// Which side of the garment is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GarmentSide {
    #[default]
    Front,
    Back,
}

impl GarmentSide {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Front => "front",
            Self::Back => "back",
        }
    }
}

impl fmt::Display for GarmentSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GarmentSide {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "front" => Ok(Self::Front),
            "back" => Ok(Self::Back),
            _ => Err(ConfigError::UnknownSide(s.to_string())),
        }
    }
}

/// Placement of the garment image on the stage.
///
/// `origin` is the image's top-left corner in stage space and doubles as the
/// content group's origin.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Backdrop {
    pub origin: Point,
    pub width: f64,
    pub height: f64,
}

impl Backdrop {
    /// Centre an image of `image_width` x `image_height` on the stage.
    #[must_use]
    pub fn centered(stage_width: f64, stage_height: f64, image_width: f64, image_height: f64) -> Self {
        Self {
            origin: Point::new(stage_width / 2.0 - image_width / 2.0, stage_height / 2.0 - image_height / 2.0),
            width: image_width,
            height: image_height,
        }
    }

    /// Convert a group-local point to stage coordinates.
    #[must_use]
    pub fn local_to_stage(&self, local: Point) -> Point {
        local.offset(self.origin)
    }

    /// Convert a stage point to group-local coordinates.
    #[must_use]
    pub fn stage_to_local(&self, stage: Point) -> Point {
        Point { x: stage.x - self.origin.x, y: stage.y - self.origin.y }
    }

    /// Convert group-local bounds to stage coordinates.
    #[must_use]
    pub fn stage_bounds(&self, local: &Bounds) -> Bounds {
        local.translated(self.origin)
    }

    /// The image's own extent in stage coordinates.
    #[must_use]
    pub fn image_bounds(&self) -> Bounds {
        Bounds::new(self.origin.x, self.origin.y, self.width, self.height)
    }
}
