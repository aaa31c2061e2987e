//! Turns a laid-out grid into printable text.

use tracing::{debug, instrument};

use crate::adapter::TreeAdapter;
use crate::classify::{classify, FragmentKind};
use crate::errors::{RenderError, RenderResult};
use crate::layout::{Grid, LayoutEngine};
use crate::options::{Color, Orientation, RenderOptions};

/// Draws trees exposed through a [`TreeAdapter`].
///
/// Holds no per-render state, so one printer can render any number of
/// trees.
pub struct TreePrinter<A> {
    adapter: A,
    options: RenderOptions,
}

impl<A: TreeAdapter> TreePrinter<A> {
    pub fn new(adapter: A, options: RenderOptions) -> Self {
        Self { adapter, options }
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    pub fn adapter(&self) -> &A {
        &self.adapter
    }

    /// Runs the layout only, without coloring.
    pub fn layout(&self, node: &A::Node, depth: usize) -> RenderResult<Grid> {
        if self.options.orientation != Orientation::Vertical {
            return Err(RenderError::UnsupportedOrientation(self.options.orientation));
        }
        LayoutEngine::new(&self.adapter, &self.options).layout(node, depth)
    }

    /// Multi-line drawing of the subtree under `node`, no trailing newline.
    ///
    /// `depth` is the nesting `node` is assumed to sit at; it only matters
    /// for the max-depth cutoff.
    #[instrument(level = "debug", skip(self, node))]
    pub fn render(&self, node: &A::Node, depth: usize) -> RenderResult<String> {
        let grid = self.layout(node, depth)?;
        let text = paint_grid(&grid, &self.options)?;
        debug!(lines = grid.height(), width = grid.width(), "rendered");
        Ok(text)
    }

    /// Prints [`Self::render`] and a newline to stdout.
    pub fn display(&self, node: &A::Node, depth: usize) -> RenderResult<()> {
        println!("{}", self.render(node, depth)?);
        Ok(())
    }
}

pub fn paint_grid(grid: &Grid, options: &RenderOptions) -> RenderResult<String> {
    let mut lines = Vec::with_capacity(grid.height());
    for row in grid.rows() {
        let mut line = String::new();
        for fragment in row {
            match classify(fragment) {
                FragmentKind::Node => line.push_str(&paint_node(fragment, options)),
                FragmentKind::Structure => line.push_str(fragment),
                FragmentKind::LabelMarker => {
                    return Err(RenderError::LabelMarker(fragment.clone()));
                }
            }
        }
        lines.push(line);
    }
    Ok(lines.join("\n"))
}

/// Colors a node fragment. Leading spaces stay outside the escape codes.
/// Without border the outer bracket or bar glyphs turn into padding.
fn paint_node(fragment: &str, options: &RenderOptions) -> String {
    if options.color == Color::None {
        return fragment.to_string();
    }
    let body = fragment.trim_start_matches(' ');
    let spaces = &fragment[..fragment.len() - body.len()];
    let body = if options.border {
        body.to_string()
    } else {
        let chars: Vec<char> = body.chars().collect();
        let interior: String = match chars.len() {
            0..=2 => String::new(),
            n => chars[1..n - 1].iter().collect(),
        };
        format!(" {interior} ")
    };
    format!("{spaces}{}", options.color.paint(&body))
}
