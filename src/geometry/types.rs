//! Core geometric data types.

/// One (x, y) data point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

impl Sample {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// True when both coordinates are finite numbers
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Sample {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box of a sample sequence
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Compute the bounding box of `samples`, or `None` when there are none
    pub fn from_samples(samples: &[Sample]) -> Option<Self> {
        let first = samples.first()?;
        let init = Self {
            min_x: first.x,
            max_x: first.x,
            min_y: first.y,
            max_y: first.y,
        };

        Some(samples.iter().skip(1).fold(init, |b, s| Self {
            min_x: b.min_x.min(s.x),
            max_x: b.max_x.max(s.x),
            min_y: b.min_y.min(s.y),
            max_y: b.max_y.max(s.y),
        }))
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }

    /// Widen any zero-length span to `min_span`, keeping it centred on the data
    pub fn with_min_span(mut self, min_span: f64) -> Self {
        if self.width() <= 0.0 {
            let mid = self.min_x;
            self.min_x = mid - min_span / 2.0;
            self.max_x = mid + min_span / 2.0;
        }
        if self.height() <= 0.0 {
            let mid = self.min_y;
            self.min_y = mid - min_span / 2.0;
            self.max_y = mid + min_span / 2.0;
        }
        self
    }
}

/// Marker category of a sample.
///
/// Derived from the literal text of the y token in the data file, not from
/// its numeric value: with every `.` removed, a token whose characters never
/// decrease is [`PointCategory::Ordered`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum PointCategory {
    /// Digit string is non-decreasing (drawn blue)
    Ordered,
    /// Anything else (drawn red)
    #[default]
    Unordered,
}

impl PointCategory {
    /// Classify a raw y token
    pub fn from_token(token: &str) -> Self {
        let chars: Vec<char> = token.chars().filter(|&c| c != '.').collect();
        let ordered = chars.windows(2).all(|pair| pair[0] <= pair[1]);
        Self::from(ordered)
    }

    #[inline]
    pub fn is_ordered(&self) -> bool {
        matches!(self, PointCategory::Ordered)
    }
}

impl From<bool> for PointCategory {
    fn from(ordered: bool) -> Self {
        if ordered {
            PointCategory::Ordered
        } else {
            PointCategory::Unordered
        }
    }
}
