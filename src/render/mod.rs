//! Rasterization and the pixel storage it writes into.

pub mod framebuffer;
pub mod rasterizer;

pub use framebuffer::{fill, FrameBuffer, PixelBuffer};
pub use rasterizer::{
    plot_line, plot_thick_line_aa, BresenhamRasterizer, LineRasterizer, LineSpec, PixelSink,
    RasterizerDispatcher, RasterizerType, ThickLineRasterizer,
};
