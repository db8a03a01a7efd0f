//! Graph strategies and render hooks.
//!
//! A graph strategy encapsulates the rendering algorithm for one visual
//! representation of a data frame. The coordinator depends only on the
//! [`Graph`] trait, never on a concrete variant's internals.

mod bar;

pub use bar::BarGraph;

use crate::data::DataFrame;
use crate::error::Result;
use crate::surface::Surface;

/// Hook invoked after a strategy has issued its drawing calls.
///
/// Receives the drawing surface so the caller can annotate, restyle, or save
/// the rendered chart.
pub type PostHook<'h> = Box<dyn FnOnce(&mut Surface) + 'h>;

/// Hook invoked before the active strategy draws.
///
/// Callers pick the shape that matches what they need: [`PreHook::Bare`] when
/// the drawing surface is irrelevant, [`PreHook::WithSurface`] to receive the
/// shared context and customize it before the plot is drawn.
pub enum PreHook<'h> {
    /// Runs with no arguments.
    Bare(Box<dyn FnOnce() + 'h>),
    /// Runs with a handle to the drawing surface.
    WithSurface(Box<dyn FnOnce(&mut Surface) + 'h>),
}

impl<'h> PreHook<'h> {
    /// Wrap a closure that ignores the drawing surface.
    pub fn bare(f: impl FnOnce() + 'h) -> Self {
        PreHook::Bare(Box::new(f))
    }

    /// Wrap a closure that receives the drawing surface.
    pub fn with_surface(f: impl FnOnce(&mut Surface) + 'h) -> Self {
        PreHook::WithSurface(Box::new(f))
    }

    /// Invoke the hook in its declared shape.
    pub(crate) fn invoke(self, surface: &mut Surface) {
        match self {
            PreHook::Bare(f) => f(),
            PreHook::WithSurface(f) => f(surface),
        }
    }
}

impl std::fmt::Debug for PreHook<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PreHook::Bare(_) => f.write_str("PreHook::Bare(..)"),
            PreHook::WithSurface(_) => f.write_str("PreHook::WithSurface(..)"),
        }
    }
}

/// A pluggable rendering strategy.
pub trait Graph {
    /// Render this representation onto the surface.
    ///
    /// If a post-hook is supplied, the strategy invokes it exactly once after
    /// its drawing calls have been issued.
    ///
    /// # Errors
    ///
    /// Returns an error if the bound columns are missing or hold no plottable
    /// rows, or if the surface is too small to host the plot area.
    fn plot(&self, surface: &mut Surface, post: Option<PostHook<'_>>) -> Result<()>;
}

/// The closed set of supported graph strategies.
///
/// Each variant maps to exactly one strategy constructor in
/// [`GraphKind::instantiate`]; adding a kind means adding the variant plus one
/// match arm, and the exhaustive match turns a forgotten arm into a compile
/// error rather than a silent no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphKind {
    /// Bar chart: y values summed per grouping-column bucket.
    Bar,
}

impl GraphKind {
    /// Construct the strategy for this kind from a data frame and the value
    /// and grouping column selectors.
    #[must_use]
    pub fn instantiate<'a>(
        self,
        data: &'a DataFrame,
        y: &str,
        group_by: &str,
    ) -> Box<dyn Graph + 'a> {
        match self {
            GraphKind::Bar => Box::new(BarGraph::new(data, y, group_by)),
        }
    }
}
