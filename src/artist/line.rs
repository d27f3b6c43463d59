use serde::{Deserialize, Serialize};

use crate::artist::projection::{padded_bbox, project_vertices, validate_samples};
use crate::core::{BBox, ScaleMode};
use crate::error::{PlotError, PlotResult};
use crate::render::{Color, Geometry, LineStrokeStyle};

/// Line depth sits behind markers and meshes of the same `zorder`.
const LINE_DEPTH_OFFSET: f64 = -50.0;

/// Which parts of a line artist get drawn, parsed from a format string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineFormat {
    pub line: bool,
    pub markers: bool,
    pub style: LineStrokeStyle,
}

impl LineFormat {
    /// Accepts `-` (solid), `--` (dashed) and `o` (markers), in any combination.
    pub fn parse(fmt: &str) -> PlotResult<Self> {
        if let Some(unknown) = fmt.chars().find(|ch| !matches!(ch, '-' | 'o')) {
            return Err(PlotError::InvalidData(format!(
                "unsupported line format character `{unknown}` in `{fmt}`"
            )));
        }
        let format = Self {
            line: fmt.contains('-'),
            markers: fmt.contains('o'),
            style: if fmt.contains("--") {
                LineStrokeStyle::Dashed
            } else {
                LineStrokeStyle::Solid
            },
        };
        if !format.line && !format.markers {
            return Err(PlotError::InvalidData(format!(
                "line format `{fmt}` draws nothing"
            )));
        }
        Ok(format)
    }
}

impl Default for LineFormat {
    fn default() -> Self {
        Self {
            line: true,
            markers: false,
            style: LineStrokeStyle::Solid,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    x: Vec<f64>,
    y: Vec<f64>,
    format: LineFormat,
    color: Option<Color>,
    width: f64,
    marker_size: f64,
    zorder: f64,
    xscale: ScaleMode,
    yscale: ScaleMode,
}

impl Line {
    pub fn new(x: Vec<f64>, y: Vec<f64>) -> PlotResult<Self> {
        validate_samples(&x, &y)?;
        Ok(Self {
            x,
            y,
            format: LineFormat::default(),
            color: None,
            width: 1.0,
            marker_size: 5.0,
            zorder: 0.0,
            xscale: ScaleMode::Linear,
            yscale: ScaleMode::Linear,
        })
    }

    pub fn with_format(mut self, fmt: &str) -> PlotResult<Self> {
        self.format = LineFormat::parse(fmt)?;
        Ok(self)
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }

    #[must_use]
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }

    #[must_use]
    pub fn with_marker_size(mut self, marker_size: f64) -> Self {
        self.marker_size = marker_size;
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
    pub fn format(&self) -> LineFormat {
        self.format
    }

    #[must_use]
    pub fn color(&self) -> Option<Color> {
        self.color
    }

    pub fn set_xdata(&mut self, x: Vec<f64>) -> PlotResult<()> {
        validate_samples(&x, &self.y)?;
        self.x = x;
        Ok(())
    }

    pub fn set_ydata(&mut self, y: Vec<f64>) -> PlotResult<()> {
        validate_samples(&self.x, &y)?;
        self.y = y;
        Ok(())
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
        let color = self.color.unwrap_or_else(|| Color::cycle(0));
        let vertices = project_vertices(
            &self.x,
            &self.y,
            self.xscale,
            self.yscale,
            self.zorder + LINE_DEPTH_OFFSET,
        );
        let line = Geometry::Line {
            vertices: vertices.clone(),
            color,
            width: self.width,
            style: self.format.style,
        };
        let markers = Geometry::Markers {
            vertices,
            color,
            size: self.marker_size,
        };
        match (self.format.line, self.format.markers) {
            (true, true) => Geometry::Group(vec![line, markers]),
            (false, true) => markers,
            _ => line,
        }
    }
}
