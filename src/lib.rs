//! # tabviz
//!
//! A small visualization facade: wrap a tabular data frame, pick a graph
//! strategy, and render it with optional hooks before and after the plot is
//! drawn.
//!
//! The coordinator ([`Visualization`](visualization::Visualization)) holds a
//! borrowed [`DataFrame`](data::DataFrame), a value column and a grouping
//! column, and delegates rendering to a pluggable [`Graph`](graph::Graph)
//! strategy selected by [`GraphKind`](graph::GraphKind). The drawing context
//! is an explicitly passed [`Surface`](surface::Surface) rather than ambient
//! global state, so hooks and tests can work with it directly.
//!
//! ## Quick Start
//!
//! ```
//! use tabviz::prelude::*;
//!
//! let mut df = DataFrame::new();
//! df.add_column_str("category", &["a", "b", "a"]);
//! df.add_column_f32("value", &[1.0, 2.0, 3.0]);
//!
//! let mut viz = Visualization::new(&df, "value", "category");
//! viz.set_graph(GraphKind::Bar);
//! viz.show(
//!     Some(PreHook::with_surface(|surface| {
//!         // customize the shared surface before the bars are drawn
//!         surface.set_pixel(0, 0, Rgba::BLACK);
//!     })),
//!     None,
//! )?;
//! # Ok::<(), tabviz::Error>(())
//! ```

#![warn(missing_docs)]
// Allow unwrap() in tests only - banned in production code
#![cfg_attr(test, allow(clippy::unwrap_used))]
// Allow common patterns in graphics/visualization code
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]

// ============================================================================
// Core Modules
// ============================================================================

/// Color types for surface rendering.
pub mod color;

/// Tabular data frame borrowed by the coordinator.
pub mod data;

/// The shared drawing surface (charting context).
pub mod surface;

/// Primitive rendering functions.
pub mod render;

/// Scale functions for data-to-pixel mappings.
pub mod scale;

// ============================================================================
// Visualization Modules
// ============================================================================

/// Graph strategies, the `GraphKind` selection, and render hooks.
pub mod graph;

/// The visualization coordinator.
pub mod visualization;

/// Output encoders (PNG).
pub mod output;

// ============================================================================
// Error Types
// ============================================================================

/// Error types for tabviz operations.
pub mod error;

pub use error::{Error, Result};

// ============================================================================
// Prelude
// ============================================================================

/// Commonly used types and traits for convenient imports.
///
/// ```
/// use tabviz::prelude::*;
/// ```
pub mod prelude {
    pub use crate::color::Rgba;
    pub use crate::data::{DataFrame, DataValue};
    pub use crate::error::{Error, Result};
    pub use crate::graph::{BarGraph, Graph, GraphKind, PostHook, PreHook};
    pub use crate::output::PngEncoder;
    pub use crate::scale::{LinearScale, Scale};
    pub use crate::surface::Surface;
    pub use crate::visualization::Visualization;
}
