//! Force-directed (Fruchterman-Reingold) node placement.

use petgraph::graph::NodeIndex;

use crate::graph::CitationGraph;

/// Golden angle in radians, spreads the initial spiral evenly.
const GOLDEN_ANGLE: f32 = 2.399_963;

/// Minimum distance used in force terms, avoids blowups for coincident nodes.
const MIN_DISTANCE: f32 = 0.01;

/// A position in layout space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl Point {
    const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Spring layout parameters.
#[derive(Debug, Clone, Copy)]
pub struct LayoutOptions {
    /// Optimal distance between nodes.
    pub k: f32,
    /// Number of cooling steps.
    pub iterations: usize,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self { k: 0.5, iterations: 50 }
    }
}

/// Node positions, rescaled so every coordinate lies in `[-1, 1]`.
#[derive(Debug, Clone)]
pub struct Layout {
    positions: Vec<Point>,
}

impl Layout {
    /// Position of a node.
    #[must_use]
    pub fn position(&self, node: NodeIndex) -> Point {
        self.positions[node.index()]
    }

    /// All positions, indexed by node index.
    #[must_use]
    pub fn positions(&self) -> &[Point] {
        &self.positions
    }

    /// Lay out `graph`. The initial placement is a fixed spiral, so the same
    /// graph always yields the same picture.
    #[must_use]
    pub fn compute(graph: &CitationGraph, options: LayoutOptions) -> Self {
        let n = graph.node_count();
        let mut pos = initial_positions(n);

        let mut adjacent = vec![vec![false; n]; n];
        for (a, b, _) in graph.edges() {
            adjacent[a.index()][b.index()] = true;
            adjacent[b.index()][a.index()] = true;
        }

        let mut temperature = extent(&pos) * 0.1;
        let cooling = temperature / (options.iterations as f32 + 1.0);
        let k = options.k;

        for _ in 0..options.iterations {
            let mut displacement = vec![Point::new(0.0, 0.0); n];

            for i in 0..n {
                for j in 0..n {
                    if i == j {
                        continue;
                    }
                    let dx = pos[i].x - pos[j].x;
                    let dy = pos[i].y - pos[j].y;
                    let distance = dx.hypot(dy).max(MIN_DISTANCE);

                    let mut force = k * k / (distance * distance);
                    if adjacent[i][j] {
                        force -= distance / k;
                    }
                    displacement[i].x += dx * force;
                    displacement[i].y += dy * force;
                }
            }

            for (p, d) in pos.iter_mut().zip(&displacement) {
                let length = d.x.hypot(d.y).max(MIN_DISTANCE);
                p.x += d.x * temperature / length;
                p.y += d.y * temperature / length;
            }

            temperature -= cooling;
        }

        Self { positions: rescale(pos) }
    }
}

fn initial_positions(n: usize) -> Vec<Point> {
    (0..n)
        .map(|i| {
            let radius = ((i as f32 + 0.5) / n as f32).sqrt() * 0.5;
            let angle = i as f32 * GOLDEN_ANGLE;
            Point::new(0.5 + radius * angle.cos(), 0.5 + radius * angle.sin())
        })
        .collect()
}

fn extent(pos: &[Point]) -> f32 {
    let (min_x, max_x) = bounds(pos.iter().map(|p| p.x));
    let (min_y, max_y) = bounds(pos.iter().map(|p| p.y));
    (max_x - min_x).max(max_y - min_y)
}

fn bounds(values: impl Iterator<Item = f32>) -> (f32, f32) {
    values.fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)))
}

/// Center on the origin and scale the largest coordinate to 1.
fn rescale(mut pos: Vec<Point>) -> Vec<Point> {
    if pos.is_empty() {
        return pos;
    }

    let n = pos.len() as f32;
    let mean_x = pos.iter().map(|p| p.x).sum::<f32>() / n;
    let mean_y = pos.iter().map(|p| p.y).sum::<f32>() / n;

    for p in &mut pos {
        p.x -= mean_x;
        p.y -= mean_y;
    }

    let lim = pos.iter().map(|p| p.x.abs().max(p.y.abs())).fold(0.0_f32, f32::max);
    if lim > f32::EPSILON {
        for p in &mut pos {
            p.x /= lim;
            p.y /= lim;
        }
    }

    pos
}
