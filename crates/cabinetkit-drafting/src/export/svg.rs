//! SVG export
//!
//! The SVG writer replays [`DrawCommand`]s, so its coordinates are the draw
//! command coordinates printed with three decimals. Identical input yields
//! byte-identical documents.

use super::canvas::{draw_commands, screen_commands, DrawCommand};
use crate::basic;
use crate::geometry::{LineStyle, SemanticColor, WireframeGeometry};
use crate::projection::{ScreenTransform, ViewMode};
use cabinetkit_construction::CabinetDesign;
use serde::{Deserialize, Serialize};

/// Canvas the drawing is fitted into
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SvgOptions {
    pub width: f64,
    pub height: f64,
    /// Clear margin on every side, screen units
    pub padding: f64,
    /// Background fill; `None` leaves the canvas transparent
    pub background: Option<String>,
    pub font_family: String,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            padding: 24.0,
            background: Some("#ffffff".to_string()),
            font_family: "sans-serif".to_string(),
        }
    }
}

impl SvgOptions {
    /// Transform that fits `geometry` into this canvas
    pub fn fit(&self, geometry: &WireframeGeometry) -> ScreenTransform {
        ScreenTransform::fit(&geometry.bounds(), self.width, self.height, self.padding)
    }
}

/// Fit a detailed wireframe to the canvas and serialise it
pub fn render_svg(geometry: &WireframeGeometry, options: &SvgOptions) -> String {
    let transform = options.fit(geometry);
    commands_to_svg(&draw_commands(geometry, &transform), options)
}

/// Fit the basic tier of a design to the canvas and serialise it
pub fn render_basic_svg(design: &CabinetDesign, view: ViewMode, options: &SvgOptions) -> String {
    let transform = ScreenTransform::fit(
        &basic::bounds(design, view),
        options.width,
        options.height,
        options.padding,
    );
    let lines = basic::render(design, view, &transform);
    commands_to_svg(&screen_commands(&lines), options)
}

/// Serialise any command list as a standalone SVG document
pub fn commands_to_svg(commands: &[DrawCommand], options: &SvgOptions) -> String {
    let mut svg = String::new();
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\">\n",
        w = num(options.width),
        h = num(options.height),
    ));
    if let Some(background) = &options.background {
        svg.push_str(&format!(
            "<rect x=\"0\" y=\"0\" width=\"{}\" height=\"{}\" fill=\"{}\"/>\n",
            num(options.width),
            num(options.height),
            escape(background)
        ));
    }

    let mut color = SemanticColor::Structure;
    let mut width = color.weight();
    let mut style = LineStyle::Solid;

    for command in commands {
        match command {
            DrawCommand::SetStroke {
                color: c,
                width: w,
                style: s,
            } => {
                color = *c;
                width = *w;
                style = *s;
            }
            DrawCommand::Line { x1, y1, x2, y2 } => {
                svg.push_str(&format!(
                    "<line x1=\"{}\" y1=\"{}\" x2=\"{}\" y2=\"{}\" stroke=\"{}\" stroke-width=\"{}\"",
                    num(*x1),
                    num(*y1),
                    num(*x2),
                    num(*y2),
                    color.hex(),
                    num(width)
                ));
                if let Some(pattern) = style.dash_pattern() {
                    let dashes: Vec<String> = pattern.iter().map(|d| num(*d)).collect();
                    svg.push_str(&format!(" stroke-dasharray=\"{}\"", dashes.join(" ")));
                }
                svg.push_str(&format!(" data-meaning=\"{}\"/>\n", color.label()));
            }
            DrawCommand::Text { x, y, text, size } => {
                svg.push_str(&format!(
                    "<text x=\"{}\" y=\"{}\" font-size=\"{}\" font-family=\"{}\" fill=\"{}\">{}</text>\n",
                    num(*x),
                    num(*y),
                    num(*size),
                    escape(&options.font_family),
                    color.hex(),
                    escape(text)
                ));
            }
        }
    }

    svg.push_str("</svg>\n");
    svg
}

/// Fixed precision keeps output deterministic
fn num(value: f64) -> String {
    format!("{:.3}", value)
}

fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    out
}
