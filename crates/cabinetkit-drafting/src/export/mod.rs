//! Export adapters: canvas draw command replay lists and SVG documents.

pub mod canvas;
pub mod svg;

pub use canvas::{draw_commands, screen_commands, DrawCommand};
pub use svg::{commands_to_svg, render_basic_svg, render_svg, SvgOptions};
