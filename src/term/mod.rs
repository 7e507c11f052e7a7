//! Terminal rendering layer.
//!
//! Renders engine snapshots into a simple framebuffer and flushes it with
//! crossterm. No widget/layout library; the view draws its own border,
//! cells and panel so the cell aspect ratio stays under precise control.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
