//! Trigger zone geometry and bound actions
//!
//! Three circular zones sit a fixed inset from the top-right, bottom-left
//! and bottom-right corners. Centers are recomputed from the viewport on
//! every query so a resize moves them with the window.

use thiserror::Error;

use crate::pointer::{ScreenPoint, Viewport};

/// Distance from the viewport edges to each zone center (px)
pub const DEFAULT_INSET: f32 = 60.0;

/// Zone radius (px)
pub const DEFAULT_RADIUS: f32 = 40.0;

pub const TOP_RIGHT_URL: &str = "https://github.com";
pub const BOTTOM_LEFT_URL: &str = "https://google.com";
pub const BOTTOM_RIGHT_URL: &str = "https://youtube.com";

/// Zone identifiers, in hit-test priority order
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ZoneId {
    TopRight,
    BottomLeft,
    BottomRight,
}

impl ZoneId {
    pub const ALL: [ZoneId; 3] = [ZoneId::TopRight, ZoneId::BottomLeft, ZoneId::BottomRight];

    pub fn index(&self) -> usize {
        match self {
            ZoneId::TopRight => 0,
            ZoneId::BottomLeft => 1,
            ZoneId::BottomRight => 2,
        }
    }

    /// Stable name used across the JS bridge
    pub fn name(&self) -> &'static str {
        match self {
            ZoneId::TopRight => "top-right",
            ZoneId::BottomLeft => "bottom-left",
            ZoneId::BottomRight => "bottom-right",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        ZoneId::ALL.into_iter().find(|id| id.name() == name)
    }
}

/// What a zone does when a dwell on it is confirmed
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    OpenLink(String),
    /// Opens the link and marks the session completed
    Finish(String),
}

impl Action {
    pub fn url(&self) -> &str {
        match self {
            Action::OpenLink(url) | Action::Finish(url) => url,
        }
    }

    pub fn completes(&self) -> bool {
        matches!(self, Action::Finish(_))
    }
}

/// Invalid zone layout parameters
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("zone radius must be positive and finite, got {0}")]
    InvalidRadius(f32),
    #[error("zone inset must be non-negative and finite, got {0}")]
    InvalidInset(f32),
    #[error("zone {0} has an empty link")]
    EmptyLink(&'static str),
}

/// A zone resolved against the current viewport
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Zone<'a> {
    pub id: ZoneId,
    pub center: ScreenPoint,
    pub radius: f32,
    pub action: &'a Action,
}

impl Zone<'_> {
    /// Strictly inside: a pointer exactly on the rim does not count
    pub fn contains(&self, p: ScreenPoint) -> bool {
        self.center.distance_to(p) < self.radius
    }
}

/// Designer-chosen zone placement plus one action per zone
#[derive(Clone, Debug, PartialEq)]
pub struct ZoneLayout {
    inset: f32,
    radius: f32,
    actions: [Action; 3],
}

impl ZoneLayout {
    /// `actions` are indexed by `ZoneId::index()`
    pub fn new(inset: f32, radius: f32, actions: [Action; 3]) -> Result<Self, ConfigError> {
        if !radius.is_finite() || radius <= 0.0 {
            return Err(ConfigError::InvalidRadius(radius));
        }
        if !inset.is_finite() || inset < 0.0 {
            return Err(ConfigError::InvalidInset(inset));
        }
        for id in ZoneId::ALL {
            if actions[id.index()].url().trim().is_empty() {
                return Err(ConfigError::EmptyLink(id.name()));
            }
        }
        Ok(Self { inset, radius, actions })
    }

    pub fn action(&self, id: ZoneId) -> &Action {
        &self.actions[id.index()]
    }

    pub fn center(&self, id: ZoneId, viewport: Viewport) -> ScreenPoint {
        let right = viewport.width - self.inset;
        let bottom = viewport.height - self.inset;
        match id {
            ZoneId::TopRight => ScreenPoint::new(right, self.inset),
            ZoneId::BottomLeft => ScreenPoint::new(self.inset, bottom),
            ZoneId::BottomRight => ScreenPoint::new(right, bottom),
        }
    }

    /// All zones for this viewport, in priority order
    pub fn zones(&self, viewport: Viewport) -> [Zone<'_>; 3] {
        ZoneId::ALL.map(|id| Zone {
            id,
            center: self.center(id, viewport),
            radius: self.radius,
            action: self.action(id),
        })
    }
}

impl Default for ZoneLayout {
    fn default() -> Self {
        Self {
            inset: DEFAULT_INSET,
            radius: DEFAULT_RADIUS,
            actions: [
                Action::OpenLink(TOP_RIGHT_URL.to_string()),
                Action::OpenLink(BOTTOM_LEFT_URL.to_string()),
                Action::Finish(BOTTOM_RIGHT_URL.to_string()),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn links() -> [Action; 3] {
        [
            Action::OpenLink("a".into()),
            Action::OpenLink("b".into()),
            Action::Finish("c".into()),
        ]
    }

    #[test]
    fn test_default_centers_follow_viewport() {
        let layout = ZoneLayout::default();
        let vp = Viewport::new(1000.0, 800.0);
        let zones = layout.zones(vp);

        assert_eq!(zones[0].center, ScreenPoint::new(940.0, 60.0));
        assert_eq!(zones[1].center, ScreenPoint::new(60.0, 740.0));
        assert_eq!(zones[2].center, ScreenPoint::new(940.0, 740.0));
        assert!(zones[2].action.completes());
    }

    #[test]
    fn test_contains_is_strict() {
        let layout = ZoneLayout::default();
        let zone = layout.zones(Viewport::new(1000.0, 800.0))[0];
        assert!(zone.contains(ScreenPoint::new(940.0, 60.0)));
        assert!(zone.contains(ScreenPoint::new(940.0, 99.0)));
        assert!(!zone.contains(ScreenPoint::new(940.0, 100.0)));
    }

    #[test]
    fn test_zone_names_round_trip() {
        for id in ZoneId::ALL {
            assert_eq!(ZoneId::from_name(id.name()), Some(id));
        }
        assert_eq!(ZoneId::from_name("center"), None);
    }

    #[test]
    fn test_layout_rejects_bad_parameters() {
        assert_eq!(ZoneLayout::new(60.0, 0.0, links()), Err(ConfigError::InvalidRadius(0.0)));
        assert_eq!(ZoneLayout::new(-1.0, 40.0, links()), Err(ConfigError::InvalidInset(-1.0)));

        let mut bad = links();
        bad[1] = Action::OpenLink("  ".into());
        assert_eq!(ZoneLayout::new(60.0, 40.0, bad), Err(ConfigError::EmptyLink("bottom-left")));

        assert!(ZoneLayout::new(20.0, 15.0, links()).is_ok());
    }
}
