//! Box-drawn diagrams of arbitrary trees.
//!
//! ```
//! use boxtree::{Color, RenderOptions, TreeArena, TreePrinter};
//!
//! let mut tree = TreeArena::new();
//! let root = tree.insert_node("R", None);
//! for label in ["A", "B", "C"] {
//!     tree.insert_node(label, Some(root));
//! }
//!
//! let printer = TreePrinter::new(tree, RenderOptions::default().with_color(Color::None));
//! assert_eq!(
//!     printer.render(&root, 0).unwrap(),
//!     "    [R]\n ┌───┼───┐\n[A] [B] [C]"
//! );
//! ```

pub mod adapter;
pub mod arena;
pub mod classify;
pub mod cli;
pub mod config;
pub mod errors;
pub mod exitcode;
pub mod format;
pub mod layout;
pub mod options;
pub mod outline;
pub mod render;
pub mod util;

pub use adapter::{FnAdapter, TreeAdapter};
pub use arena::TreeArena;
pub use errors::{OutlineError, RenderError, RenderResult, SettingsError};
pub use layout::Grid;
pub use options::{Color, Orientation, RenderOptions};
pub use render::TreePrinter;

/// One-shot rendering without keeping a printer around.
pub fn render<A: TreeAdapter>(
    adapter: A,
    node: &A::Node,
    options: RenderOptions,
) -> RenderResult<String> {
    TreePrinter::new(adapter, options).render(node, 0)
}
