//! Anti-aliased reflection lines for textures and cube maps.
//!
//! The core is a surface-agnostic line rasterizer: it walks the pixels of a
//! (possibly thick, anti-aliased) line and reports each one with a coverage
//! intensity to a caller-supplied [`PixelSink`]. Around it sit a small
//! rotation helper, uniform buffer initialization and an orchestrator that
//! redraws a rotated line onto the faces of a [`Surface`] and commits them
//! in one batch.
//!
//! # Quick Start
//!
//! ```ignore
//! use reflines::prelude::*;
//!
//! let mut cube = CubeMap::new(256);
//! let mut engine = Engine::new();
//! engine.rotate_right();
//! engine.update(&mut cube, &[CubeFace::PositiveY])?;
//! cube.save_faces("out")?;
//! ```

pub mod colors;
pub mod config;
pub mod cubemap;
pub mod engine;
pub mod error;
pub mod math;
pub mod render;
pub mod surface;
pub mod texture;

// Re-export commonly needed types at crate root for convenience
pub use config::Config;
pub use cubemap::{CubeFace, CubeMap};
pub use engine::{draw_center_line, update_line, update_line_with, Engine, RotationDial};
pub use error::{Error, Result};
pub use math::point::{rotate_point, Point2};
pub use render::framebuffer::{fill, PixelBuffer};
pub use render::rasterizer::{plot_line, plot_thick_line_aa, PixelSink, RasterizerType};
pub use surface::Surface;
pub use texture::Texture;

/// Prelude module for convenient imports.
///
/// # Example
/// ```ignore
/// use reflines::prelude::*;
/// ```
pub mod prelude {
    // Colors
    pub use crate::colors::{Color, BLACK, WHITE};

    // Configuration
    pub use crate::config::Config;

    // Orchestration
    pub use crate::engine::{draw_center_line, update_line, Engine, RotationDial};

    // Geometry
    pub use crate::math::point::{rotate_point, Point2};

    // Rendering
    pub use crate::render::framebuffer::{fill, FrameBuffer, PixelBuffer};
    pub use crate::render::rasterizer::{
        plot_line, plot_thick_line_aa, LineRasterizer, LineSpec, PixelSink, RasterizerType,
    };

    // Surfaces
    pub use crate::cubemap::{CubeFace, CubeMap};
    pub use crate::surface::Surface;
    pub use crate::texture::Texture;
}
