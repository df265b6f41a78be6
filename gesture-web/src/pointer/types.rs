//! Geometry types shared by the pointer pipeline
//!
//! Normalized camera space (0-1) on the input side, viewport pixels on the
//! output side.

/// A landmark position in normalized camera coordinates (0-1)
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct NormalizedPoint {
    pub x: f32,
    pub y: f32,
}

impl NormalizedPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Build from raw coordinates, treating NaN/inf as an untracked landmark
    pub fn from_raw(x: f32, y: f32) -> Option<Self> {
        if x.is_finite() && y.is_finite() {
            Some(Self { x, y })
        } else {
            None
        }
    }
}

/// A position in viewport pixels
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenPoint {
    pub x: f32,
    pub y: f32,
}

impl ScreenPoint {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: ScreenPoint) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Pointer velocity in pixels per frame
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

impl Velocity {
    pub const ZERO: Velocity = Velocity { x: 0.0, y: 0.0 };

    pub fn magnitude(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

/// Viewport size in pixels
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    /// Negative or non-finite dimensions collapse to zero
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width: Self::sanitize(width),
            height: Self::sanitize(height),
        }
    }

    fn sanitize(v: f32) -> f32 {
        if v.is_finite() {
            v.max(0.0)
        } else {
            0.0
        }
    }

    pub fn center(&self) -> ScreenPoint {
        ScreenPoint::new(self.width / 2.0, self.height / 2.0)
    }

    /// Clamp each axis independently into [0, width] × [0, height]
    pub fn clamp(&self, p: ScreenPoint) -> ScreenPoint {
        ScreenPoint::new(p.x.clamp(0.0, self.width), p.y.clamp(0.0, self.height))
    }

    pub fn contains(&self, p: ScreenPoint) -> bool {
        (0.0..=self.width).contains(&p.x) && (0.0..=self.height).contains(&p.y)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_sanitizes_dimensions() {
        let vp = Viewport::new(-10.0, f32::NAN);
        assert_eq!(vp.width, 0.0);
        assert_eq!(vp.height, 0.0);
    }

    #[test]
    fn test_clamp_is_per_axis() {
        let vp = Viewport::new(800.0, 600.0);
        let p = vp.clamp(ScreenPoint::new(-5.0, 900.0));
        assert_eq!(p, ScreenPoint::new(0.0, 600.0));
        let inside = vp.clamp(ScreenPoint::new(400.0, 10.0));
        assert_eq!(inside, ScreenPoint::new(400.0, 10.0));
    }

    #[test]
    fn test_nan_landmark_is_absent() {
        assert!(NormalizedPoint::from_raw(f32::NAN, 0.5).is_none());
        assert!(NormalizedPoint::from_raw(0.2, 0.5).is_some());
    }

    #[test]
    fn test_distance() {
        let a = ScreenPoint::new(0.0, 0.0);
        let b = ScreenPoint::new(3.0, 4.0);
        assert!((a.distance_to(b) - 5.0).abs() < 1e-6);
    }
}
