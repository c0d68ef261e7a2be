//! Graph rendering to PNG.
//!
//! Nodes are placed with a spring layout and drawn as filled circles, one
//! color and size per [`NodeRole`]. Edges are arcs colored per [`EdgeRole`]
//! with an arrowhead at the target. Labels use an 8x8 bitmap font so no
//! system fonts are needed.

mod layout;
mod text;

use std::path::{Path, PathBuf};

use image::{Rgb, RgbImage};
use imageproc::drawing::{
    draw_cubic_bezier_curve_mut, draw_filled_circle_mut, draw_hollow_circle_mut, draw_polygon_mut,
};
use imageproc::point::Point as PixelPoint;

pub use layout::{Layout, LayoutOptions, Point};

use crate::error::{RenderError, RenderResult};
use crate::graph::{CitationGraph, EdgeRole, NodeRole};

/// Image title drawn above the graph.
pub const TITLE: &str = "Comprehensive Research Paper Network";

const BACKGROUND: Rgb<u8> = Rgb([255, 255, 255]);
const TEXT: Rgb<u8> = Rgb([20, 20, 20]);

// Base colors blended onto white at 0.6-0.7 opacity.
const MAIN_FILL: Rgb<u8> = Rgb([51, 153, 51]);
const CITED_FILL: Rgb<u8> = Rgb([102, 102, 255]);
const REFERENCING_FILL: Rgb<u8> = Rgb([255, 102, 102]);
const OUTLINE: Rgb<u8> = Rgb([90, 90, 90]);

/// Fill color of a node.
#[must_use]
pub const fn node_color(role: NodeRole) -> Rgb<u8> {
    match role {
        NodeRole::Main => MAIN_FILL,
        NodeRole::Cited => CITED_FILL,
        NodeRole::Referencing => REFERENCING_FILL,
    }
}

/// Radius of a node in pixels.
#[must_use]
pub const fn node_radius(role: NodeRole) -> i32 {
    match role {
        NodeRole::Main => 28,
        NodeRole::Cited | NodeRole::Referencing => 20,
    }
}

/// Stroke color of an edge.
#[must_use]
pub const fn edge_color(role: EdgeRole) -> Rgb<u8> {
    match role {
        EdgeRole::Cites => CITED_FILL,
        EdgeRole::CitedBy => REFERENCING_FILL,
    }
}

/// Rendering parameters.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Image width in pixels.
    pub width: u32,
    /// Image height in pixels.
    pub height: u32,
    /// Space kept free around the graph for labels.
    pub margin: u32,
    /// Arc curvature, as a fraction of the edge length.
    pub curvature: f32,
    /// Labels longer than this are cut with "...".
    pub label_max_chars: usize,
    /// Spring layout parameters.
    pub layout: LayoutOptions,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            width: 1600,
            height: 1200,
            margin: 140,
            curvature: 0.1,
            label_max_chars: 40,
            layout: LayoutOptions::default(),
        }
    }
}

/// What a render produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderSummary {
    /// Where the PNG was written (empty for in-memory draws).
    pub path: PathBuf,
    /// Nodes drawn.
    pub nodes_drawn: usize,
    /// Edges drawn.
    pub edges_drawn: usize,
}

/// Draws citation graphs.
#[derive(Debug, Clone, Default)]
pub struct Renderer {
    options: RenderOptions,
}

impl Renderer {
    /// Create a renderer with the given options.
    #[must_use]
    pub const fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Rendering parameters.
    #[must_use]
    pub const fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Draw `graph` and write it as PNG to `path`, creating the parent directory.
    ///
    /// # Errors
    ///
    /// Returns error if the directory cannot be created or the PNG cannot be written.
    pub fn render(&self, graph: &CitationGraph, path: &Path) -> RenderResult<RenderSummary> {
        if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)
                .map_err(|source| RenderError::Io { path: dir.to_path_buf(), source })?;
        }

        let (image, mut summary) = self.draw(graph);
        image.save(path)?;

        summary.path = path.to_path_buf();
        tracing::info!(
            path = %path.display(),
            nodes = summary.nodes_drawn,
            edges = summary.edges_drawn,
            "Rendered citation graph"
        );

        Ok(summary)
    }

    /// Draw `graph` into an in-memory image.
    #[must_use]
    pub fn draw(&self, graph: &CitationGraph) -> (RgbImage, RenderSummary) {
        let opts = &self.options;
        let layout = Layout::compute(graph, opts.layout);
        tracing::debug!(k = opts.layout.k, iterations = opts.layout.iterations, "Computed layout");

        let mut image = RgbImage::from_pixel(opts.width, opts.height, BACKGROUND);

        let mut edges_drawn = 0;
        for (source, target, role) in graph.edges() {
            let from = self.to_pixel(layout.position(source));
            let to = self.to_pixel(layout.position(target));
            let target_radius = graph.node(target).map_or(0, |n| node_radius(n.role));
            self.draw_edge(&mut image, from, to, target_radius as f32, edge_color(role));
            edges_drawn += 1;
        }

        let mut nodes_drawn = 0;
        for (index, node) in graph.nodes() {
            let (x, y) = self.to_pixel(layout.position(index));
            let center = (x.round() as i32, y.round() as i32);
            let radius = node_radius(node.role);
            draw_filled_circle_mut(&mut image, center, radius, node_color(node.role));
            draw_hollow_circle_mut(&mut image, center, radius, OUTLINE);
            nodes_drawn += 1;
        }

        for (index, node) in graph.nodes() {
            let (x, y) = self.to_pixel(layout.position(index));
            let label = text::truncate(&node.title, opts.label_max_chars);
            let top = y as i32 + node_radius(node.role) + 4;
            text::draw_centered(&mut image, &label, x as i32, top, 1, TEXT);
        }

        text::draw_centered(&mut image, TITLE, opts.width as i32 / 2, 24, 2, TEXT);

        (image, RenderSummary { path: PathBuf::new(), nodes_drawn, edges_drawn })
    }

    /// Map layout space `[-1, 1]` into the drawable area.
    fn to_pixel(&self, p: Point) -> (f32, f32) {
        let opts = &self.options;
        let margin = opts.margin as f32;
        let usable_w = (opts.width as f32 - 2.0 * margin).max(1.0);
        let usable_h = (opts.height as f32 - 2.0 * margin).max(1.0);
        (margin + (p.x + 1.0) / 2.0 * usable_w, margin + (p.y + 1.0) / 2.0 * usable_h)
    }

    /// Quadratic arc bent to the right of travel, with an arrowhead where it
    /// enters the target circle.
    fn draw_edge(
        &self,
        image: &mut RgbImage,
        from: (f32, f32),
        to: (f32, f32),
        target_radius: f32,
        color: Rgb<u8>,
    ) {
        let (dx, dy) = (to.0 - from.0, to.1 - from.1);
        let mid = ((from.0 + to.0) / 2.0, (from.1 + to.1) / 2.0);
        let rad = self.options.curvature;
        let control = (mid.0 + rad * dy, mid.1 - rad * dx);

        // Quadratic Bezier expressed as a cubic for imageproc.
        let c1 = (from.0 + 2.0 / 3.0 * (control.0 - from.0), from.1 + 2.0 / 3.0 * (control.1 - from.1));
        let c2 = (to.0 + 2.0 / 3.0 * (control.0 - to.0), to.1 + 2.0 / 3.0 * (control.1 - to.1));

        for offset in [0.0, 1.0] {
            let shift = |p: (f32, f32)| (p.0 + offset, p.1);
            draw_cubic_bezier_curve_mut(image, shift(from), shift(to), shift(c1), shift(c2), color);
        }

        let point_at = |t: f32| {
            let u = 1.0 - t;
            (
                u * u * from.0 + 2.0 * u * t * control.0 + t * t * to.0,
                u * u * from.1 + 2.0 * u * t * control.1 + t * t * to.1,
            )
        };

        let mut t = 1.0_f32;
        let mut tip = point_at(t);
        while t > 0.0 && (tip.0 - to.0).hypot(tip.1 - to.1) < target_radius {
            t -= 0.01;
            tip = point_at(t);
        }

        // Tangent of the quadratic at t.
        let tangent = (
            2.0 * (1.0 - t) * (control.0 - from.0) + 2.0 * t * (to.0 - control.0),
            2.0 * (1.0 - t) * (control.1 - from.1) + 2.0 * t * (to.1 - control.1),
        );
        let length = tangent.0.hypot(tangent.1);
        if length < f32::EPSILON {
            return;
        }
        let (ux, uy) = (tangent.0 / length, tangent.1 / length);

        let (arrow_len, half_width) = (14.0, 6.0);
        let base = (tip.0 - ux * arrow_len, tip.1 - uy * arrow_len);
        let corners = [
            PixelPoint::new(tip.0.round() as i32, tip.1.round() as i32),
            PixelPoint::new((base.0 - uy * half_width).round() as i32, (base.1 + ux * half_width).round() as i32),
            PixelPoint::new((base.0 + uy * half_width).round() as i32, (base.1 - ux * half_width).round() as i32),
        ];
        if corners[0] != corners[1] && corners[0] != corners[2] && corners[1] != corners[2] {
            draw_polygon_mut(image, &corners, color);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PaperRecord, PaperRef};

    fn sample_graph() -> CitationGraph {
        let paper = |t: &str| PaperRef { title: t.to_string(), doi: None, year: Some(2020) };
        let mut record = PaperRecord::empty();
        record.title = "Example Paper".to_string();
        record.cited_papers = vec![paper("Cited A"), paper("Cited B")];
        record.related_papers = vec![paper("Citing A"), paper("Citing B"), paper("Citing C")];
        CitationGraph::build(&record)
    }

    #[test]
    fn test_draw_counts_every_node_and_edge_once() {
        let graph = sample_graph();
        let (image, summary) = Renderer::default().draw(&graph);

        assert_eq!(image.dimensions(), (1600, 1200));
        assert_eq!(summary.nodes_drawn, 6);
        assert_eq!(summary.edges_drawn, 5);
    }

    #[test]
    fn test_main_node_is_green() {
        let graph = sample_graph();
        let renderer = Renderer::default();
        let (image, _) = renderer.draw(&graph);

        let layout = Layout::compute(&graph, renderer.options().layout);
        let (x, y) = renderer.to_pixel(layout.position(graph.main_node()));
        // Just off center, clear of any label text.
        let pixel = image.get_pixel(x as u32 + 10, y as u32 - 10);
        assert_eq!(*pixel, MAIN_FILL);
    }

    #[test]
    fn test_distinct_role_styles() {
        assert_ne!(node_color(NodeRole::Main), node_color(NodeRole::Cited));
        assert_ne!(node_color(NodeRole::Cited), node_color(NodeRole::Referencing));
        assert!(node_radius(NodeRole::Main) > node_radius(NodeRole::Cited));
        assert_ne!(edge_color(EdgeRole::Cites), edge_color(EdgeRole::CitedBy));
    }

    #[test]
    fn test_render_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("graph.png");

        let summary = Renderer::default().render(&sample_graph(), &path).unwrap();

        assert_eq!(summary.path, path);
        let reloaded = image::open(&path).unwrap();
        assert_eq!(reloaded.width(), 1600);
        assert_eq!(reloaded.height(), 1200);
    }
}
