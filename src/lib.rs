//! Ray-marched pseudo-3D frames of a tile map.
//!
//! Each frame holds a top-down minimap with the traced visibility cone on the
//! left half and the projected wall columns on the right half.

pub mod animation;
pub mod camera;
pub mod casters;
pub mod color;
pub mod config;
pub mod encoder;
pub mod error;
pub mod framebuffer;
pub mod maze;
pub mod minimap;
pub mod palette;

pub use animation::{frame_filename, Animation, Scene};
pub use error::{RenderError, Result};
