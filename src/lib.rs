//! Selection and transform engine for the t-shirt mockup editor.
//!
//! Content objects are rectangles placed over a garment image. This crate
//! owns the rules for selecting them (click, modifier toggle, rubber-band
//! drag-select) and for committing move, resize, and rotate gestures. The
//! rendering surface stays outside: it reports pointer events, exposes node
//! transforms through [`surface::SurfaceHandle`], and carries out the
//! [`engine::Action`]s the engine returns.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`engine`] | Top-level engine and testable [`engine::EngineCore`] |
//! | [`doc`] | Content objects and the in-memory store |
//! | [`geom`] | Points, bounds, rotated corners, intersection |
//! | [`garment`] | Garment side and backdrop group placement |
//! | [`input`] | Pointer payloads, rubber band, and gesture state |
//! | [`selection`] | Selection set and click rules |
//! | [`hit`] | Rubber-band hit-testing |
//! | [`transform`] | Drag and resize/rotate commits |
//! | [`surface`] | Rendering-surface capability and an in-memory surface |
//! | [`config`] | Environment configuration |
//! | [`consts`] | Shared numeric constants (size floor, defaults) |

pub mod config;
pub mod consts;
pub mod doc;
pub mod engine;
pub mod garment;
pub mod geom;
pub mod hit;
pub mod input;
pub mod selection;
pub mod surface;
pub mod transform;
