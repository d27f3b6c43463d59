use crate::artist::projection::{padded_bbox, project_vertices, validate_samples};
use crate::core::{BBox, ScaleMode};
use crate::error::PlotResult;
use crate::render::{Color, Geometry};

/// Scatter markers.
#[derive(Debug, Clone, PartialEq)]
pub struct Points {
    x: Vec<f64>,
    y: Vec<f64>,
    color: Option<Color>,
    size: f64,
    zorder: f64,
    xscale: ScaleMode,
    yscale: ScaleMode,
}

impl Points {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> PlotResult<Self> {
        validate_samples(&x, &y)?;
        Ok(Self {
            x,
            y,
            color: None,
            size: 3.0,
            zorder: 0.0,
            xscale: ScaleMode::Linear,
            yscale: ScaleMode::Linear,
        })
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn with_zorder(mut self, zorder: f64) -> Self {
        self.zorder = zorder;
        self
    }

    #[must_use]
    pub fn xdata(&self) -> &[f64] {
        &self.x
    }

    #[must_use]
    pub fn ydata(&self) -> &[f64] {
        &self.y
    }

    #[must_use]
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn set_data(&mut self, x: Vec<f64>, y: Vec<f64>) -> PlotResult<()> {
        validate_samples(&x, &y)?;
        self.x = x;
        self.y = y;
        Ok(())
    }

    pub(crate) fn set_default_color(&mut self, color: Color) {
        self.color.get_or_insert(color);
    }

    pub(crate) fn scales(&self) -> (ScaleMode, ScaleMode) {
        (self.xscale, self.yscale)
    }

    pub(crate) fn set_scales(&mut self, xscale: ScaleMode, yscale: ScaleMode) {
        self.xscale = xscale;
        self.yscale = yscale;
    }

    pub(crate) fn bbox(&self, pad_ratio: f64) -> BBox {
        padded_bbox(&self.x, &self.y, self.xscale, self.yscale, pad_ratio)
    }

    pub(crate) fn geometry(&self) -> Geometry {
        Geometry::Markers {
            vertices: project_vertices(&self.x, &self.y, self.xscale, self.yscale, self.zorder),
            color: self.color.unwrap_or_else(|| Color::cycle(0)),
            size: self.size,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Points;
    use crate::core::ScaleMode;

    #[test]
    fn single_point_bbox_is_widened() {
        let points = Points::new(vec![4.0], vec![0.0]).expect("points");
        let bbox = points.bbox(0.03);
        assert_eq!((bbox.left, bbox.right), (2.0, 6.0));
        assert_eq!((bbox.bottom, bbox.top), (-0.5, 0.5));
    }

    #[test]
    fn log_bbox_ignores_non_positive_samples() {
        let mut points = Points::new(vec![0.0, 10.0, 1000.0], vec![1.0, 2.0, 3.0]).expect("points");
        points.set_scales(ScaleMode::Log, ScaleMode::Linear);
        let bbox = points.bbox(0.0);
        assert!((bbox.left - 10.0).abs() <= 1e-9);
        assert!((bbox.right - 1000.0).abs() <= 1e-9);
    }
}
