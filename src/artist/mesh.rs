use crate::core::BBox;
use crate::error::{PlotError, PlotResult};
use crate::render::Geometry;

/// Quadrilateral mesh of `rows x cols` cells colored by scalar values.
///
/// `x_edges` has `cols + 1` entries and `y_edges` has `rows + 1`; `values`
/// is row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Mesh {
    x_edges: Vec<f64>,
    y_edges: Vec<f64>,
    values: Vec<f64>,
    rows: usize,
    cols: usize,
    zorder: f64,
}

impl Mesh {
    pub fn new(
        x_edges: Vec<f64>,
        y_edges: Vec<f64>,
        values: Vec<f64>,
        rows: usize,
        cols: usize,
    ) -> PlotResult<Self> {
        validate_cells(values.len(), rows, cols)?;
        if x_edges.len() != cols + 1 || y_edges.len() != rows + 1 {
            return Err(PlotError::InvalidData(format!(
                "mesh of {rows}x{cols} cells needs {} x edges and {} y edges",
                cols + 1,
                rows + 1
            )));
        }
        if x_edges.iter().chain(&y_edges).any(|edge| !edge.is_finite()) {
            return Err(PlotError::InvalidData(
                "mesh edges must be finite".to_owned(),
            ));
        }
        Ok(Self {
            x_edges,
            y_edges,
            values,
            rows,
            cols,
            zorder: 0.0,
        })
    }

    /// Mesh on the integer grid `0..=cols` x `0..=rows`.
    pub fn from_values(values: Vec<f64>, rows: usize, cols: usize) -> PlotResult<Self> {
        validate_cells(values.len(), rows, cols)?;
        let x_edges = (0..=cols).map(|edge| edge as f64).collect();
        let y_edges = (0..=rows).map(|edge| edge as f64).collect();
        Self::new(x_edges, y_edges, values, rows, cols)
    }

    #[must_use]
    pub fn with_zorder(mut self, zorder: f64) -> Self {
        self.zorder = zorder;
        self
    }

    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub(crate) fn bbox(&self) -> BBox {
        let (left, right) = min_max(&self.x_edges);
        let (bottom, top) = min_max(&self.y_edges);
        BBox::new(left, right, bottom, top)
    }

    pub(crate) fn geometry(&self) -> Geometry {
        let cells = self.values.len();
        let mut vertices = Vec::with_capacity(cells * 4);
        let mut faces = Vec::with_capacity(cells * 2);
        let mut base: u32 = 0;
        for row in 0..self.rows {
            let (bottom, top) = (self.y_edges[row], self.y_edges[row + 1]);
            for col in 0..self.cols {
                let (left, right) = (self.x_edges[col], self.x_edges[col + 1]);
                vertices.extend([
                    [left, bottom, self.zorder],
                    [right, bottom, self.zorder],
                    [right, top, self.zorder],
                    [left, top, self.zorder],
                ]);
                faces.push([base, base + 1, base + 2]);
                faces.push([base, base + 2, base + 3]);
                base += 4;
            }
        }
        Geometry::Mesh {
            vertices,
            faces,
            cell_values: self.values.clone(),
        }
    }
}

fn min_max(values: &[f64]) -> (f64, f64) {
    values
        .iter()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(low, high), value| {
            (low.min(*value), high.max(*value))
        })
}

/// Checks `values_len == rows * cols` and that every vertex stays addressable
/// by a `u32` face index.
fn validate_cells(values_len: usize, rows: usize, cols: usize) -> PlotResult<()> {
    if rows == 0 || cols == 0 {
        return Err(PlotError::InvalidData(
            "mesh must have at least one cell".to_owned(),
        ));
    }
    let Some(cells) = rows.checked_mul(cols) else {
        return Err(PlotError::InvalidData(format!(
            "mesh of {rows}x{cols} cells overflows the cell count"
        )));
    };
    if values_len != cells {
        return Err(PlotError::InvalidData(format!(
            "mesh of {rows}x{cols} cells needs {cells} values, got {values_len}"
        )));
    }
    if cells.checked_mul(4).and_then(|vertices| u32::try_from(vertices).ok()).is_none() {
        return Err(PlotError::InvalidData(format!(
            "mesh of {rows}x{cols} cells exceeds the vertex index range"
        )));
    }
    Ok(())
}
