//! Recursive vertical layout.
//!
//! Each subtree is laid out into its own rows of text fragments. A parent
//! places its children's rows side by side, draws a connector row above
//! them and centers its own box over the connector's junction.
//!
//! ```text
//!     [R]
//!  ┌───┼───┐
//! [A] [B] [C]
//! ```

use tracing::{debug, instrument, trace};

use crate::adapter::TreeAdapter;
use crate::errors::{RenderError, RenderResult};
use crate::format::{node_rows, row_width, value_lines, width, H_RULE, V_RULE};
use crate::options::RenderOptions;

/// Fragments whose concatenation is one printed line.
pub type Row = Vec<String>;

const TEE: char = '┬';

/// Rendered rows of a whole subtree, root first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Row>,
}

impl Grid {
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn into_rows(self) -> Vec<Row> {
        self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Width of the widest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(|r| row_width(r)).max().unwrap_or(0)
    }

    /// Rows joined without any coloring.
    pub fn lines(&self) -> Vec<String> {
        self.rows.iter().map(|r| r.concat()).collect()
    }
}

impl From<Vec<Row>> for Grid {
    fn from(rows: Vec<Row>) -> Self {
        Self { rows }
    }
}

pub struct LayoutEngine<'a, A: TreeAdapter> {
    adapter: &'a A,
    options: &'a RenderOptions,
}

impl<'a, A: TreeAdapter> LayoutEngine<'a, A> {
    pub fn new(adapter: &'a A, options: &'a RenderOptions) -> Self {
        Self { adapter, options }
    }

    /// Lays out the subtree under `node` as if it sat at nesting `depth`.
    pub fn layout(&self, node: &A::Node, depth: usize) -> RenderResult<Grid> {
        let rows = self.layout_node(node, depth, 0)?;
        debug!(rows = rows.len(), "layout complete");
        Ok(Grid { rows })
    }

    fn descends_from(&self, depth: usize) -> bool {
        self.options.max_depth.map_or(true, |max| depth < max)
    }

    #[instrument(level = "trace", skip(self, node))]
    fn layout_node(&self, node: &A::Node, depth: usize, level: usize) -> RenderResult<Vec<Row>> {
        if level > self.options.recursion_limit {
            return Err(RenderError::TooDeep {
                limit: self.options.recursion_limit,
            });
        }
        let label = self.adapter.label(node);
        let lines = value_lines(
            &label,
            self.options.trim_length,
            self.options.escape_newlines,
        );
        let children: Vec<A::Node> = self.adapter.children(node).into_iter().flatten().collect();

        if children.is_empty() || !self.descends_from(depth) {
            return Ok(node_rows("", &lines, self.options.border));
        }

        // below[0] collects one tee per child, below[1..] the children's rows
        let mut below: Vec<Row> = vec![Row::new()];
        let mut spacing_count = 0;
        for child in &children {
            let child_rows = self.layout_node(child, depth + 1, level + 1)?;
            place_child(&mut below, &child_rows, spacing_count);
            spacing_count = below.iter().map(|r| row_width(r)).max().unwrap_or(0) + 1;
        }

        let (connector, junction) = connector_row(&below[0]);
        trace!(%connector, junction, "connector");
        below[0] = vec![connector];

        let value_width = lines.first().map_or(0, |l| width(l));
        let spacing = if value_width < junction * 2 {
            " ".repeat(junction - value_width.div_ceil(2))
        } else {
            String::new()
        };

        let mut rows = node_rows(&spacing, &lines, self.options.border);
        rows.extend(below);
        Ok(rows)
    }
}

/// Appends a child's rows right of everything placed so far, starting at
/// column `spacing_count`, and adds its tee above the child's top box.
fn place_child(below: &mut Vec<Row>, child_rows: &[Row], spacing_count: usize) {
    for (l, line) in child_rows.iter().enumerate() {
        if l + 1 >= below.len() {
            below.push(Row::new());
        }
        if l == 0 {
            let last = line.last().map_or(0, |f| width(f));
            let middle = row_width(line) - last.div_ceil(2);
            let offset = spacing_count + middle - row_width(&below[0]);
            below[0].push(format!("{}{TEE}", " ".repeat(offset)));
        }
        let pad = spacing_count - row_width(&below[l + 1]);
        below[l + 1].push(" ".repeat(pad));
        below[l + 1].extend(line.iter().cloned());
    }
}

/// Turns the row of tees into the finished connector and returns it with
/// the column where the parent's line drops in.
fn connector_row(tees: &[String]) -> (String, usize) {
    let chars: Vec<char> = tees.concat().chars().collect();
    let leading = chars.iter().take_while(|&&c| c == ' ').count();
    let trailing = chars[leading..].iter().rev().take_while(|&&c| c == ' ').count();
    let span = &chars[leading..chars.len() - trailing];

    if tees.len() == 1 || span.len() < 2 {
        let keep = leading + span.len();
        let mut single = chars;
        single.truncate(keep);
        if let Some(last) = single.last_mut() {
            *last = V_RULE;
        }
        let junction = single.len().saturating_sub(1);
        return (single.into_iter().collect(), junction);
    }

    let mut bus: Vec<char> = Vec::with_capacity(leading + span.len());
    bus.extend(std::iter::repeat(' ').take(leading));
    bus.push('┌');
    bus.extend(
        span[1..span.len() - 1]
            .iter()
            .map(|&c| if c == ' ' { H_RULE } else { c }),
    );
    bus.push('┐');

    let middle = bus.len() - span.len().div_ceil(2);
    bus[middle] = junction_for(bus[middle]);
    (bus.into_iter().collect(), middle)
}

fn junction_for(c: char) -> char {
    match c {
        H_RULE => '┴',
        TEE => '┼',
        '┌' => '├',
        '┐' => '┤',
        other => other,
    }
}
