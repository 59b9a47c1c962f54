//! Canvas draw commands
//!
//! A flat replay list a 2D canvas (or the SVG writer) executes in order.
//! Stroke state is only emitted when it changes.

use crate::basic::ScreenLine;
use crate::geometry::{LineStyle, Point2D, SemanticColor, WireframeGeometry};
use crate::projection::ScreenTransform;
use serde::{Deserialize, Serialize};

/// Text size in screen units
pub const TEXT_SIZE: f64 = 10.0;

/// One canvas operation, in screen coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawCommand {
    SetStroke {
        color: SemanticColor,
        width: f64,
        style: LineStyle,
    },
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
    },
    /// Filled with the current stroke colour
    Text {
        x: f64,
        y: f64,
        text: String,
        size: f64,
    },
}

#[derive(Default)]
struct CommandBuffer {
    commands: Vec<DrawCommand>,
    stroke: Option<(SemanticColor, f64, LineStyle)>,
}

impl CommandBuffer {
    fn stroke(&mut self, color: SemanticColor, width: f64, style: LineStyle) {
        let next = Some((color, width, style));
        if self.stroke != next {
            self.stroke = next;
            self.commands.push(DrawCommand::SetStroke { color, width, style });
        }
    }

    fn line(&mut self, start: Point2D, end: Point2D) {
        self.commands.push(DrawCommand::Line {
            x1: start.x,
            y1: start.y,
            x2: end.x,
            y2: end.y,
        });
    }

    fn text(&mut self, at: Point2D, text: &str) {
        self.commands.push(DrawCommand::Text {
            x: at.x,
            y: at.y,
            text: text.to_string(),
            size: TEXT_SIZE,
        });
    }
}

/// Replay list for a wireframe: lines, then dimensions, then annotations
pub fn draw_commands(geometry: &WireframeGeometry, transform: &ScreenTransform) -> Vec<DrawCommand> {
    let view = geometry.view;
    let screen = |p| transform.to_screen(view, p);
    let mut buffer = CommandBuffer::default();

    for line in &geometry.lines {
        buffer.stroke(line.color, line.weight, line.style);
        buffer.line(screen(line.start), screen(line.end));
    }

    let dimension = SemanticColor::Dimension;
    for dim in &geometry.dimensions {
        buffer.stroke(dimension, dimension.weight(), LineStyle::Solid);
        buffer.line(screen(dim.start), screen(dim.line_start()));
        buffer.line(screen(dim.end), screen(dim.line_end()));
        buffer.line(screen(dim.line_start()), screen(dim.line_end()));
        buffer.text(screen(dim.text_anchor()), &dim.text);
    }

    for note in &geometry.annotations {
        buffer.stroke(note.color, note.color.weight(), LineStyle::Solid);
        buffer.text(screen(note.position), &note.text);
    }

    buffer.commands
}

/// Replay list for lines already in screen space
pub fn screen_commands(lines: &[ScreenLine]) -> Vec<DrawCommand> {
    let mut buffer = CommandBuffer::default();
    for line in lines {
        buffer.stroke(line.color, line.weight, line.style);
        buffer.line(line.start, line.end);
    }
    buffer.commands
}
