//! Append-only visibility polygon.
//!
//! Vertices live in one flat `[x0, y0, x1, y1, …]` buffer so renderers can
//! walk the coordinates without re-materializing points. No deletion, no
//! reordering; the consumer treats the first and last vertex as adjacent.

use nalgebra::Vector2;

/// Ordered vertex sequence of a visibility region.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Polygon {
    coords: Vec<f64>,
}

impl Polygon {
    pub fn new() -> Self {
        Self { coords: Vec::new() }
    }

    pub fn with_capacity(vertices: usize) -> Self {
        Self {
            coords: Vec::with_capacity(2 * vertices),
        }
    }

    /// Append a vertex.
    #[inline]
    pub fn push(&mut self, x: f64, y: f64) {
        self.coords.push(x);
        self.coords.push(y);
    }

    /// Number of vertices.
    #[inline]
    pub fn len(&self) -> usize {
        self.coords.len() / 2
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// Vertex `i`; panics when out of range.
    #[inline]
    pub fn vertex(&self, i: usize) -> Vector2<f64> {
        Vector2::new(self.coords[2 * i], self.coords[2 * i + 1])
    }

    /// The contiguous coordinate buffer, valid until the next `push`.
    #[inline]
    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    /// Ray-casting parity test against edges (v[i], v[i-1]).
    ///
    /// An edge counts iff exactly one endpoint is strictly above `py`; a
    /// polygon with fewer than 3 vertices contains nothing.
    pub fn contains_point(&self, px: f64, py: f64) -> bool {
        let n = self.len();
        if n < 3 {
            return false;
        }
        let mut inside = false;
        for i in 0..n {
            let j = if i == 0 { n - 1 } else { i - 1 };
            let vi = self.vertex(i);
            let vj = self.vertex(j);
            if (vi.y > py) != (vj.y > py) {
                let x_cross = (vj.x - vi.x) * (py - vi.y) / (vj.y - vi.y) + vi.x;
                if px < x_cross {
                    inside = !inside;
                }
            }
        }
        inside
    }
}
