use super::error::{Axis, LayoutError};

/// Side length of the square canvas every scene is projected into.
pub const CANVAS_SIZE: f32 = 100.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasPoint {
    pub x: f32,
    pub y: f32,
}

impl CanvasPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn midpoint(self, other: CanvasPoint) -> CanvasPoint {
        CanvasPoint::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

/// Bounds are kept halved so `max - min` stays finite for any pair of finite
/// coordinates, including values near `f64::MAX` of opposite sign.
#[derive(Debug, Clone, Copy, PartialEq)]
struct AxisRange {
    half_min: f64,
    half_span: f64,
}

impl AxisRange {
    fn fit(values: impl Iterator<Item = f64>) -> Option<Self> {
        let mut bounds: Option<(f64, f64)> = None;
        for value in values {
            bounds = Some(match bounds {
                Some((lo, hi)) => (lo.min(value), hi.max(value)),
                None => (value, value),
            });
        }
        bounds.map(|(min, max)| Self {
            half_min: min / 2.0,
            half_span: max / 2.0 - min / 2.0,
        })
    }

    fn is_degenerate(&self) -> bool {
        self.half_span == 0.0
    }

    /// Position of `value` along the range in `[0, 1]`.
    ///
    /// A collapsed range maps to 0.5, centering the axis, rather than to the
    /// leading edge a `span || 1` denominator would give.
    fn unit(&self, value: f64) -> f64 {
        if self.is_degenerate() {
            0.5
        } else {
            (value / 2.0 - self.half_min) / self.half_span
        }
    }
}

/// Linear map from arbitrary station coordinates onto the padded canvas.
///
/// The y axis is flipped so larger input `y` lands higher on screen. A
/// projection is fitted once per pass and is a pure function afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Projection {
    x: AxisRange,
    y: AxisRange,
    padding: f64,
}

impl Projection {
    pub fn fit<I>(points: I, padding: f32) -> Result<Self, LayoutError>
    where
        I: IntoIterator<Item = (f64, f64)>,
        I::IntoIter: Clone,
    {
        if !(0.0..CANVAS_SIZE / 2.0).contains(&padding) {
            return Err(LayoutError::invalid_input(format!(
                "padding {padding} must lie in [0, {})",
                CANVAS_SIZE / 2.0
            )));
        }
        let points = points.into_iter();
        if let Some((x, y)) = points.clone().find(|(x, y)| !x.is_finite() || !y.is_finite()) {
            return Err(LayoutError::invalid_input(format!(
                "station coordinate ({x}, {y}) is not finite"
            )));
        }
        let x = AxisRange::fit(points.clone().map(|(x, _)| x));
        let y = AxisRange::fit(points.map(|(_, y)| y));
        let (Some(x), Some(y)) = (x, y) else {
            return Err(LayoutError::invalid_input(
                "cannot normalize an empty station set",
            ));
        };
        Ok(Self {
            x,
            y,
            padding: f64::from(padding),
        })
    }

    pub fn project(&self, x: f64, y: f64) -> CanvasPoint {
        let extent = f64::from(CANVAS_SIZE) - 2.0 * self.padding;
        let nx = self.x.unit(x) * extent + self.padding;
        let ny = self.y.unit(y) * extent + self.padding;
        CanvasPoint::new(nx as f32, (f64::from(CANVAS_SIZE) - ny) as f32)
    }

    pub fn degenerate_axes(&self) -> Vec<Axis> {
        let mut axes = Vec::new();
        if self.x.is_degenerate() {
            axes.push(Axis::X);
        }
        if self.y.is_degenerate() {
            axes.push(Axis::Y);
        }
        axes
    }
}
