use serde::{Deserialize, Serialize};

use crate::artist::ArtistId;
use crate::error::{PlotError, PlotResult};
use crate::render::{Color, LineStrokeStyle};

/// Scene payload of one artist, in view space.
///
/// Vertices carry `[x, y, z]`, where `z` is the artist's draw order. Vertices
/// of values outside a log axis' domain are `NaN` and are expected to be
/// skipped by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry {
    Line {
        vertices: Vec<[f64; 3]>,
        color: Color,
        width: f64,
        style: LineStrokeStyle,
    },
    Markers {
        vertices: Vec<[f64; 3]>,
        color: Color,
        size: f64,
    },
    /// Several payloads sharing one handle (e.g. a line drawn with markers).
    Group(Vec<Geometry>),
    /// Quads split in two triangles each; `cell_values` holds one scalar per
    /// quad for the host's color mapping.
    Mesh {
        vertices: Vec<[f64; 3]>,
        faces: Vec<[u32; 3]>,
        cell_values: Vec<f64>,
    },
    /// Axis-aligned textured plane.
    Image {
        center: [f64; 3],
        width: f64,
        height: f64,
        rows: usize,
        cols: usize,
        values: Vec<f64>,
    },
}

impl Geometry {
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        match self {
            Self::Line { vertices, .. }
            | Self::Markers { vertices, .. }
            | Self::Mesh { vertices, .. } => vertices.len(),
            Self::Group(children) => children.iter().map(Self::vertex_count).sum(),
            Self::Image { .. } => 4,
        }
    }

    pub fn validate(&self) -> PlotResult<()> {
        match self {
            Self::Line { color, width, .. } => {
                color.validate()?;
                if !width.is_finite() || *width <= 0.0 {
                    return Err(PlotError::InvalidData(
                        "line width must be finite and > 0".to_owned(),
                    ));
                }
            }
            Self::Markers { color, size, .. } => {
                color.validate()?;
                if !size.is_finite() || *size <= 0.0 {
                    return Err(PlotError::InvalidData(
                        "marker size must be finite and > 0".to_owned(),
                    ));
                }
            }
            Self::Group(children) => {
                if children.is_empty() {
                    return Err(PlotError::InvalidData(
                        "geometry group must not be empty".to_owned(),
                    ));
                }
                for child in children {
                    child.validate()?;
                }
            }
            Self::Mesh {
                vertices,
                faces,
                cell_values,
            } => {
                if faces.len() != cell_values.len() * 2 {
                    return Err(PlotError::InvalidData(format!(
                        "mesh has {} faces for {} cells",
                        faces.len(),
                        cell_values.len()
                    )));
                }
                if faces
                    .iter()
                    .flatten()
                    .any(|index| *index as usize >= vertices.len())
                {
                    return Err(PlotError::InvalidData(
                        "mesh face index out of bounds".to_owned(),
                    ));
                }
            }
            Self::Image {
                width,
                height,
                rows,
                cols,
                values,
                ..
            } => {
                if !(width.is_finite() && height.is_finite()) || *width <= 0.0 || *height <= 0.0 {
                    return Err(PlotError::InvalidData(
                        "image plane must have a positive finite size".to_owned(),
                    ));
                }
                if rows.checked_mul(*cols) != Some(values.len()) {
                    return Err(PlotError::InvalidData(format!(
                        "image of {rows}x{cols} carries {} values",
                        values.len()
                    )));
                }
            }
        }
        Ok(())
    }
}

/// Handle passed to the scene host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Renderable {
    pub id: ArtistId,
    pub geometry: Geometry,
}

/// Orthographic camera extent in view space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CameraWindow {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl CameraWindow {
    #[must_use]
    pub fn center(self) -> (f64, f64) {
        (
            0.5 * (self.left + self.right),
            0.5 * (self.bottom + self.top),
        )
    }
}
