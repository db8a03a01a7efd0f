//! Bar-graph strategy.
//!
//! Aggregation policy: rows are bucketed by the grouping column in first
//! appearance order and the y values of each bucket are summed. Rows whose y
//! cell is missing or non-numeric are skipped. Buckets with a non-positive
//! total get no bar (bar heights represent nonnegative magnitudes).
//!
//! The strategy draws over whatever is already on the surface; clearing the
//! background is the coordinator's job, so pre-hook customization survives.
//!
//! With more buckets than plot-area columns the per-bucket slot collapses to
//! zero and the 1px-wide bars overdraw at the left edge of the plot area.
//! The plot still succeeds; legibility at that density is the caller's
//! problem, not an error.

use std::collections::HashMap;

use crate::color::Rgba;
use crate::data::DataFrame;
use crate::error::{Error, Result};
use crate::render::{draw_line, draw_rect};
use crate::scale::{LinearScale, Scale};
use crate::surface::Surface;

use super::{Graph, PostHook};

/// Margin between the surface edge and the plot area, in pixels.
const MARGIN: u32 = 40;

/// Bar chart over a grouping column.
#[derive(Debug, Clone)]
pub struct BarGraph<'a> {
    data: &'a DataFrame,
    y: String,
    group_by: String,
    color: Rgba,
    axis_color: Rgba,
}

impl<'a> BarGraph<'a> {
    /// Create a bar graph bound to a data frame and column selectors.
    #[must_use]
    pub fn new(data: &'a DataFrame, y: &str, group_by: &str) -> Self {
        Self {
            data,
            y: y.to_string(),
            group_by: group_by.to_string(),
            color: Rgba::STEEL_BLUE,
            axis_color: Rgba::BLACK,
        }
    }

    /// Set the bar color.
    #[must_use]
    pub fn color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    /// Sum y values per grouping bucket, buckets in first-appearance order.
    fn group_totals(&self) -> Result<Vec<(String, f32)>> {
        let groups = self
            .data
            .get(&self.group_by)
            .ok_or_else(|| Error::MissingColumn(self.group_by.clone()))?;
        let values = self
            .data
            .get(&self.y)
            .ok_or_else(|| Error::MissingColumn(self.y.clone()))?;

        let mut order: Vec<String> = Vec::new();
        let mut totals: HashMap<String, f32> = HashMap::new();

        for (group, value) in groups.iter().zip(values) {
            let Some(v) = value.as_f32() else { continue };
            let key = group.group_key();
            if !totals.contains_key(&key) {
                order.push(key.clone());
            }
            *totals.entry(key).or_insert(0.0) += v;
        }

        if order.is_empty() {
            return Err(Error::EmptyData);
        }

        Ok(order
            .into_iter()
            .map(|key| {
                let total = totals.get(&key).copied().unwrap_or(0.0);
                (key, total)
            })
            .collect())
    }
}

impl Graph for BarGraph<'_> {
    fn plot(&self, surface: &mut Surface, post: Option<PostHook<'_>>) -> Result<()> {
        let totals = self.group_totals()?;

        let plot_w = surface.width().saturating_sub(2 * MARGIN);
        let plot_h = surface.height().saturating_sub(2 * MARGIN);
        if plot_w == 0 || plot_h == 0 {
            return Err(Error::InvalidDimensions {
                width: surface.width(),
                height: surface.height(),
            });
        }

        // Tallest bucket spans the full plot height. Totals are normalized
        // into a fixed (0, 1) domain so the scale stays well-formed even when
        // the tallest total is smaller than f32::EPSILON.
        let max_total = totals.iter().map(|(_, t)| *t).fold(f32::NEG_INFINITY, f32::max);
        let height_scale = if max_total > 0.0 {
            Some(LinearScale::new((0.0, 1.0), (0.0, plot_h as f32))?)
        } else {
            None
        };

        // X axis (bottom) and Y axis (left). Axes go down first so bars
        // stay visible even when a collapsed slot puts them on the axis.
        let bottom = (MARGIN + plot_h) as i32;
        let right = (MARGIN + plot_w) as i32;
        draw_line(surface, MARGIN as i32, bottom, right, bottom, self.axis_color);
        draw_line(surface, MARGIN as i32, MARGIN as i32, MARGIN as i32, bottom, self.axis_color);

        let slot = plot_w / totals.len() as u32;
        let bar_width = slot.saturating_sub(1).max(1);

        if let Some(scale) = &height_scale {
            for (i, (_, total)) in totals.iter().enumerate() {
                let bar_height = scale.scale((total / max_total).clamp(0.0, 1.0)) as u32;
                if bar_height == 0 {
                    continue;
                }

                let x_start = MARGIN + i as u32 * slot;
                let y_start = MARGIN + plot_h - bar_height;
                let (x, y) = (x_start as i32, y_start as i32);
                draw_rect(surface, x, y, bar_width, bar_height, self.color);
            }
        }

        if let Some(post) = post {
            post(surface);
        }

        Ok(())
    }
}
