//! Visualization coordinator.
//!
//! Holds a borrowed data frame, the value and grouping column selectors, and
//! the currently selected graph strategy, and sequences the render: pre-hook,
//! then the strategy's plot (which invokes the post-hook).

use std::path::Path;

use crate::color::Rgba;
use crate::data::DataFrame;
use crate::error::{Error, Result};
use crate::graph::{Graph, GraphKind, PostHook, PreHook};
use crate::output::PngEncoder;
use crate::surface::Surface;

/// Default surface width in pixels.
const DEFAULT_WIDTH: u32 = 800;
/// Default surface height in pixels.
const DEFAULT_HEIGHT: u32 = 600;

/// Coordinates a data frame, column selectors, and a pluggable graph strategy.
///
/// The data frame is owned by the caller and must outlive the coordinator;
/// the coordinator borrows it and never copies or mutates it. The strategy
/// starts unset and is selected with [`Visualization::set_graph`].
///
/// # Example
///
/// ```
/// use tabviz::prelude::*;
///
/// let mut df = DataFrame::new();
/// df.add_column_str("category", &["a", "b", "a"]);
/// df.add_column_f32("value", &[1.0, 2.0, 3.0]);
///
/// let mut viz = Visualization::new(&df, "value", "category");
/// viz.set_graph(GraphKind::Bar);
/// viz.show(None, None).unwrap();
/// ```
pub struct Visualization<'a> {
    data: &'a DataFrame,
    y: String,
    group_by: String,
    graph: Option<Box<dyn Graph + 'a>>,
    surface: Surface,
}

impl<'a> Visualization<'a> {
    /// Create a coordinator with the default 800x600 surface.
    ///
    /// `y` names the column holding plotted values, `group_by` the column to
    /// bucket by. Both are captured now and immutable thereafter; they are
    /// validated when the selected strategy plots.
    #[must_use]
    pub fn new(data: &'a DataFrame, y: &str, group_by: &str) -> Self {
        let surface = Surface::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
            .expect("default surface dimensions are nonzero");
        Self {
            data,
            y: y.to_string(),
            group_by: group_by.to_string(),
            graph: None,
            surface,
        }
    }

    /// Create a coordinator with explicit surface dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if width or height is zero.
    pub fn with_dimensions(
        data: &'a DataFrame,
        y: &str,
        group_by: &str,
        width: u32,
        height: u32,
    ) -> Result<Self> {
        Ok(Self {
            data,
            y: y.to_string(),
            group_by: group_by.to_string(),
            graph: None,
            surface: Surface::new(width, height)?,
        })
    }

    /// Whether a graph strategy is currently selected.
    #[must_use]
    pub fn has_graph(&self) -> bool {
        self.graph.is_some()
    }

    /// Select the graph strategy for `kind`.
    ///
    /// Constructs the strategy from the stored data frame and column
    /// selectors, replacing any previously selected strategy. May be called
    /// any number of times.
    pub fn set_graph(&mut self, kind: GraphKind) {
        self.graph = Some(kind.instantiate(self.data, &self.y, &self.group_by));
    }

    /// Render the selected graph, running the optional hooks around it.
    ///
    /// Sequence: the surface is cleared to white, the pre-hook runs (in its
    /// declared shape), then the strategy plots, invoking the post-hook after
    /// its drawing calls. The surface is shared state: anything the pre-hook
    /// draws is visible to the strategy, and the post-hook sees the finished
    /// chart.
    ///
    /// # Errors
    ///
    /// Returns [`Error::GraphNotSet`] before any hook runs if no strategy is
    /// selected, or the strategy's own error if plotting fails. A panicking
    /// hook unwinds to the caller; a pre-hook panic prevents the plot call.
    pub fn show(&mut self, pre: Option<PreHook<'_>>, post: Option<PostHook<'_>>) -> Result<()> {
        let Some(graph) = &self.graph else {
            return Err(Error::GraphNotSet);
        };

        self.surface.clear(Rgba::WHITE);

        if let Some(pre) = pre {
            pre.invoke(&mut self.surface);
        }

        graph.plot(&mut self.surface, post)
    }

    /// The drawing surface the chart is rendered onto.
    #[must_use]
    pub fn surface(&self) -> &Surface {
        &self.surface
    }

    /// Write the current surface contents to a PNG file.
    ///
    /// # Errors
    ///
    /// Returns an error if file creation or PNG encoding fails.
    pub fn save_png<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        PngEncoder::write_to_file(&self.surface, path)
    }
}

impl std::fmt::Debug for Visualization<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Visualization")
            .field("y", &self.y)
            .field("group_by", &self.group_by)
            .field("graph_set", &self.graph.is_some())
            .field("surface", &(self.surface.width(), self.surface.height()))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Rgba;
    use std::cell::{Cell, RefCell};

    fn sample_frame() -> DataFrame {
        let mut df = DataFrame::new();
        df.add_column_str("category", &["a", "b", "a"]);
        df.add_column_f32("value", &[1.0, 2.0, 3.0]);
        df
    }

    #[test]
    fn test_show_without_graph_fails() {
        let df = sample_frame();
        let mut viz = Visualization::new(&df, "value", "category");

        let result = viz.show(None, None);
        assert!(matches!(result, Err(Error::GraphNotSet)));
        assert!(result.unwrap_err().to_string().contains("set_graph"));
    }

    #[test]
    fn test_show_without_graph_runs_no_hooks() {
        let df = sample_frame();
        let mut viz = Visualization::new(&df, "value", "category");
        let pre_calls = Cell::new(0u32);
        let post_calls = Cell::new(0u32);

        let result = viz.show(
            Some(PreHook::bare(|| pre_calls.set(pre_calls.get() + 1))),
            Some(Box::new(|_: &mut Surface| {
                post_calls.set(post_calls.get() + 1);
            })),
        );

        assert!(result.is_err());
        assert_eq!(pre_calls.get(), 0);
        assert_eq!(post_calls.get(), 0);
    }

    #[test]
    fn test_show_after_set_graph() {
        let df = sample_frame();
        let mut viz = Visualization::new(&df, "value", "category");
        viz.set_graph(GraphKind::Bar);

        viz.show(None, None).unwrap();
        assert!(viz.surface().count_pixels(Rgba::STEEL_BLUE) > 0);
    }

    #[test]
    fn test_bare_pre_hook_runs_before_plot() {
        let df = sample_frame();
        let mut viz = Visualization::new(&df, "value", "category");
        viz.set_graph(GraphKind::Bar);
        let events = RefCell::new(Vec::new());

        viz.show(
            Some(PreHook::bare(|| events.borrow_mut().push("pre"))),
            Some(Box::new(|_: &mut Surface| {
                events.borrow_mut().push("post");
            })),
        )
        .unwrap();

        assert_eq!(*events.borrow(), vec!["pre", "post"]);
    }

    #[test]
    fn test_surface_pre_hook_state_visible_to_strategy() {
        let df = sample_frame();
        let mut viz = Visualization::new(&df, "value", "category");
        viz.set_graph(GraphKind::Bar);
        let seen = Cell::new(false);

        // The pre-hook marks a margin pixel; the strategy draws over the
        // surface without clearing, so the post-hook still sees the marker.
        viz.show(
            Some(PreHook::with_surface(|surface| {
                surface.set_pixel(0, 0, Rgba::GREEN);
                seen.set(surface.get_pixel(0, 0) == Some(Rgba::GREEN));
            })),
            Some(Box::new(|surface: &mut Surface| {
                assert_eq!(surface.get_pixel(0, 0), Some(Rgba::GREEN));
            })),
        )
        .unwrap();

        assert!(seen.get());
    }

    #[test]
    fn test_set_graph_replaces_strategy() {
        let df = sample_frame();
        let mut viz = Visualization::new(&df, "value", "category");

        assert!(!viz.has_graph());
        viz.set_graph(GraphKind::Bar);
        assert!(viz.has_graph());
        viz.set_graph(GraphKind::Bar);
        assert!(viz.has_graph());
        viz.show(None, None).unwrap();
    }

    #[test]
    fn test_show_repeatable() {
        let df = sample_frame();
        let mut viz = Visualization::new(&df, "value", "category");
        viz.set_graph(GraphKind::Bar);

        viz.show(None, None).unwrap();
        viz.show(None, None).unwrap();
    }

    #[test]
    fn test_with_dimensions() {
        let df = sample_frame();
        let viz = Visualization::with_dimensions(&df, "value", "category", 200, 100).unwrap();
        assert_eq!(viz.surface().width(), 200);
        assert_eq!(viz.surface().height(), 100);

        assert!(Visualization::with_dimensions(&df, "value", "category", 0, 100).is_err());
    }

    #[test]
    fn test_show_missing_column_error() {
        let df = sample_frame();
        let mut viz = Visualization::new(&df, "nope", "category");
        viz.set_graph(GraphKind::Bar);

        assert!(matches!(viz.show(None, None), Err(Error::MissingColumn(_))));
    }

    #[test]
    fn test_debug_format() {
        let df = sample_frame();
        let viz = Visualization::new(&df, "value", "category");
        let repr = format!("{viz:?}");
        assert!(repr.contains("value"));
        assert!(repr.contains("graph_set: false"));
    }
}
