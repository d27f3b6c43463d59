//! Drawable artists owned by an [`Axes`](crate::api::Axes).
//!
//! Every artist reports its data-space extent, produces a view-space scene
//! payload, and declares which axis scales it can be drawn under.

mod image;
mod line;
mod mesh;
mod points;
mod projection;

use std::fmt;

use serde::{Deserialize, Serialize};

pub use image::Image;
pub use line::{Line, LineFormat};
pub use mesh::Mesh;
pub use points::Points;

use crate::core::{Axis, BBox, DEFAULT_BBOX_PADDING_RATIO, ScaleMode};
use crate::error::{PlotError, PlotResult};
use crate::render::{Color, Geometry};

/// Stable handle of an artist within one axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArtistId(pub u64);

impl fmt::Display for ArtistId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "artist-{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ArtistKind {
    Line,
    Points,
    Mesh,
    Image,
}

impl ArtistKind {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Points => "points",
            Self::Mesh => "mesh",
            Self::Image => "image",
        }
    }
}

impl fmt::Display for ArtistKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Artist {
    Line(Line),
    Points(Points),
    Mesh(Mesh),
    Image(Image),
}

impl Artist {
    #[must_use]
    pub fn kind(&self) -> ArtistKind {
        match self {
            Self::Line(_) => ArtistKind::Line,
            Self::Points(_) => ArtistKind::Points,
            Self::Mesh(_) => ArtistKind::Mesh,
            Self::Image(_) => ArtistKind::Image,
        }
    }

    /// Data-space extent with the default padding.
    #[must_use]
    pub fn bbox(&self) -> BBox {
        self.bbox_with_padding(DEFAULT_BBOX_PADDING_RATIO)
    }

    /// Data-space extent; `pad_ratio` applies to lines and points only.
    #[must_use]
    pub fn bbox_with_padding(&self, pad_ratio: f64) -> BBox {
        match self {
            Self::Line(line) => line.bbox(pad_ratio),
            Self::Points(points) => points.bbox(pad_ratio),
            Self::Mesh(mesh) => mesh.bbox(),
            Self::Image(image) => image.bbox(),
        }
    }

    #[must_use]
    pub fn geometry(&self) -> Geometry {
        match self {
            Self::Line(line) => line.geometry(),
            Self::Points(points) => points.geometry(),
            Self::Mesh(mesh) => mesh.geometry(),
            Self::Image(image) => image.geometry(),
        }
    }

    /// Meshes and images are only drawn on linear axes.
    #[must_use]
    pub fn supports_scale(&self, _axis: Axis, mode: ScaleMode) -> bool {
        match self {
            Self::Line(_) | Self::Points(_) => true,
            Self::Mesh(_) | Self::Image(_) => mode == ScaleMode::Linear,
        }
    }

    pub fn set_xscale(&mut self, mode: ScaleMode) -> PlotResult<()> {
        self.set_scale(Axis::X, mode)
    }

    pub fn set_yscale(&mut self, mode: ScaleMode) -> PlotResult<()> {
        self.set_scale(Axis::Y, mode)
    }

    /// Applies a scale to one axis of the artist, leaving it untouched when
    /// the scale is unsupported.
    pub fn set_scale(&mut self, axis: Axis, mode: ScaleMode) -> PlotResult<()> {
        if !self.supports_scale(axis, mode) {
            return Err(PlotError::UnsupportedScaleCapability {
                scale: mode,
                artists: vec![self.kind().to_string()],
            });
        }
        match self {
            Self::Line(line) => {
                let (xscale, yscale) = merge_scales(line.scales(), axis, mode);
                line.set_scales(xscale, yscale);
            }
            Self::Points(points) => {
                let (xscale, yscale) = merge_scales(points.scales(), axis, mode);
                points.set_scales(xscale, yscale);
            }
            Self::Mesh(_) | Self::Image(_) => {}
        }
        Ok(())
    }

    /// Color from the default cycle for artists created without one.
    pub(crate) fn set_default_color(&mut self, color: Color) {
        match self {
            Self::Line(line) => line.set_default_color(color),
            Self::Points(points) => points.set_default_color(color),
            Self::Mesh(_) | Self::Image(_) => {}
        }
    }

    /// Effective color, if the artist has a single one.
    #[must_use]
    pub fn color(&self) -> Option<Color> {
        match self {
            Self::Line(line) => line.color(),
            Self::Points(points) => points.color(),
            Self::Mesh(_) | Self::Image(_) => None,
        }
    }

    /// Number of data samples (cells for meshes and images).
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Line(line) => line.xdata().len(),
            Self::Points(points) => points.xdata().len(),
            Self::Mesh(mesh) => mesh.values().len(),
            Self::Image(image) => image.values().len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn merge_scales(
    (xscale, yscale): (ScaleMode, ScaleMode),
    axis: Axis,
    mode: ScaleMode,
) -> (ScaleMode, ScaleMode) {
    match axis {
        Axis::X => (mode, yscale),
        Axis::Y => (xscale, mode),
    }
}

impl From<Line> for Artist {
    fn from(line: Line) -> Self {
        Self::Line(line)
    }
}

impl From<Points> for Artist {
    fn from(points: Points) -> Self {
        Self::Points(points)
    }
}

impl From<Mesh> for Artist {
    fn from(mesh: Mesh) -> Self {
        Self::Mesh(mesh)
    }
}

impl From<Image> for Artist {
    fn from(image: Image) -> Self {
        Self::Image(image)
    }
}

#[cfg(test)]
mod tests {
    use super::{Artist, ArtistId, Image, Line, Mesh};
    use crate::core::{Axis, BBox, ScaleMode};
    use crate::error::PlotError;

    #[test]
    fn image_rejects_log_scale_without_changes() {
        let mut artist = Artist::from(Image::new(vec![0.0; 4], 2, 2).expect("image"));
        let err = artist.set_xscale(ScaleMode::Log).expect_err("log unsupported");
        assert!(matches!(
            err,
            PlotError::UnsupportedScaleCapability { scale: ScaleMode::Log, .. }
        ));
        assert!(artist.set_yscale(ScaleMode::Linear).is_ok());
        assert_eq!(artist.bbox(), BBox::new(0.0, 2.0, 0.0, 2.0));
    }

    #[test]
    fn mesh_supports_linear_only() {
        let artist = Artist::from(Mesh::from_values(vec![1.0], 1, 1).expect("mesh"));
        assert!(artist.supports_scale(Axis::X, ScaleMode::Linear));
        assert!(!artist.supports_scale(Axis::Y, ScaleMode::Log));
    }

    #[test]
    fn line_scale_switch_affects_one_axis() {
        let mut artist = Artist::from(Line::new(vec![1.0, 100.0], vec![1.0, 100.0]).expect("line"));
        artist.set_yscale(ScaleMode::Log).expect("log y");
        let bbox = artist.bbox_with_padding(0.0);
        assert_eq!((bbox.left, bbox.right), (1.0, 100.0));
        assert!((bbox.top - 100.0).abs() <= 1e-9);
    }

    #[test]
    fn artist_id_display_is_stable() {
        assert_eq!(ArtistId(7).to_string(), "artist-7");
    }
}
