//! Shared numeric constants for the mockup canvas.

// ── Content ─────────────────────────────────────────────────────

/// Minimum width and height of any content object, in local units.
///
/// Absolute, not proportional: every size mutation is clamped to this.
pub const MIN_SIZE: f64 = 5.0;

/// Width given to content created without an explicit size.
pub const DEFAULT_CONTENT_WIDTH: f64 = 100.0;

/// Height given to content created without an explicit size.
pub const DEFAULT_CONTENT_HEIGHT: f64 = 100.0;

/// Fill used when a content object's style carries none.
pub const DEFAULT_FILL: &str = "#D94B4B";

// ── Stage ───────────────────────────────────────────────────────

/// Stage width used when no configuration overrides it.
pub const DEFAULT_STAGE_WIDTH: f64 = 1280.0;

/// Stage height used when no configuration overrides it.
pub const DEFAULT_STAGE_HEIGHT: f64 = 800.0;

// ── Garment images ──────────────────────────────────────────────

/// Image shown for the front of the shirt.
pub const DEFAULT_FRONT_IMAGE: &str = "/crew-front.png";

/// Image shown for the back of the shirt.
pub const DEFAULT_BACK_IMAGE: &str = "/crew-back.png";
