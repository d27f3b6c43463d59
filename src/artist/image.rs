use crate::core::BBox;
use crate::error::{PlotError, PlotResult};
use crate::render::Geometry;

/// Raster of `rows x cols` scalar values stretched over a data-space extent.
#[derive(Debug, Clone, PartialEq)]
pub struct Image {
    values: Vec<f64>,
    rows: usize,
    cols: usize,
    /// `[left, right, bottom, top]`.
    extent: [f64; 4],
    zorder: f64,
}

impl Image {
    /// Image covering `[0, cols] x [0, rows]`.
    pub fn new(values: Vec<f64>, rows: usize, cols: usize) -> PlotResult<Self> {
        validate_shape(&values, rows, cols)?;
        Ok(Self {
            values,
            rows,
            cols,
            extent: [0.0, cols as f64, 0.0, rows as f64],
            zorder: 0.0,
        })
    }

    pub fn with_extent(mut self, extent: [f64; 4]) -> PlotResult<Self> {
        self.set_extent(extent)?;
        Ok(self)
    }

    #[must_use]
    pub fn with_zorder(mut self, zorder: f64) -> Self {
        self.zorder = zorder;
        self
    }

    #[must_use]
    pub fn extent(&self) -> [f64; 4] {
        self.extent
    }

    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    #[must_use]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn set_extent(&mut self, extent: [f64; 4]) -> PlotResult<()> {
        let [left, right, bottom, top] = extent;
        if extent.iter().any(|bound| !bound.is_finite()) || right <= left || top <= bottom {
            return Err(PlotError::InvalidData(format!(
                "image extent {extent:?} must be finite with right > left and top > bottom"
            )));
        }
        self.extent = extent;
        Ok(())
    }

    pub fn set_array(&mut self, values: Vec<f64>, rows: usize, cols: usize) -> PlotResult<()> {
        validate_shape(&values, rows, cols)?;
        self.values = values;
        self.rows = rows;
        self.cols = cols;
        Ok(())
    }

    pub(crate) fn bbox(&self) -> BBox {
        let [left, right, bottom, top] = self.extent;
        BBox::new(left, right, bottom, top)
    }

    pub(crate) fn geometry(&self) -> Geometry {
        let [left, right, bottom, top] = self.extent;
        Geometry::Image {
            center: [0.5 * (left + right), 0.5 * (bottom + top), self.zorder],
            width: right - left,
            height: top - bottom,
            rows: self.rows,
            cols: self.cols,
            values: self.values.clone(),
        }
    }
}

fn validate_shape(values: &[f64], rows: usize, cols: usize) -> PlotResult<()> {
    if rows == 0 || cols == 0 {
        return Err(PlotError::InvalidData("image must not be empty".to_owned()));
    }
    let Some(pixels) = rows.checked_mul(cols) else {
        return Err(PlotError::InvalidData(format!(
            "image of {rows}x{cols} overflows the pixel count"
        )));
    };
    if values.len() != pixels {
        return Err(PlotError::InvalidData(format!(
            "image of {rows}x{cols} needs {pixels} values, got {}",
            values.len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::Image;
    use crate::core::BBox;
    use crate::render::Geometry;

    #[test]
    fn default_extent_follows_shape() {
        let image = Image::new(vec![0.0; 12], 3, 4).expect("image");
        assert_eq!(image.bbox(), BBox::new(0.0, 4.0, 0.0, 3.0));
    }

    #[test]
    fn plane_is_centered_on_extent() {
        let image = Image::new(vec![1.0; 4], 2, 2)
            .and_then(|image| image.with_extent([-2.0, 2.0, 10.0, 11.0]))
            .expect("image");
        let Geometry::Image {
            center,
            width,
            height,
            ..
        } = image.geometry()
        else {
            panic!("expected image geometry");
        };
        assert_eq!(center, [0.0, 10.5, 0.0]);
        assert_eq!((width, height), (4.0, 1.0));
    }

    #[test]
    fn invalid_extent_and_shape_are_rejected() {
        let mut image = Image::new(vec![0.0; 2], 1, 2).expect("image");
        assert!(image.set_extent([1.0, 0.0, 0.0, 1.0]).is_err());
        assert!(image.set_array(vec![0.0; 3], 2, 2).is_err());
        assert_eq!(image.extent(), [0.0, 2.0, 0.0, 1.0]);
    }

    #[test]
    fn overflowing_shapes_are_rejected() {
        assert!(Image::new(vec![0.0], usize::MAX, 2).is_err());
        let mut image = Image::new(vec![0.0; 2], 1, 2).expect("image");
        assert!(image.set_array(vec![0.0], 2, usize::MAX).is_err());
        assert_eq!(image.shape(), (1, 2));
    }
}
