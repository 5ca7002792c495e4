// src/hotspot.rs
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Centre of the reference image in normalized (percentage) coordinates.
pub const CENTER: f64 = 50.0;

/// Scale of the untransformed image. The viewer starts and resets here.
pub const BASE_SCALE: f64 = 1.0;

/// A labeled location over the reference image. `x` and `y` are percentages
/// of the image width and height.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointOfInterest {
    pub key: String,
    pub x: f64,
    pub y: f64,
    pub description: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoomConfig {
    pub min_scale: f64,
    pub max_scale: f64,
    pub step: f64,
    /// Scale used when a point is selected.
    pub focus_scale: f64,
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self {
            min_scale: 1.0,
            max_scale: 2.2,
            step: 0.2,
            focus_scale: 1.6,
        }
    }
}

impl ZoomConfig {
    fn clamp(&self, scale: f64) -> f64 {
        scale.clamp(self.min_scale, self.max_scale)
    }

    /// One step up or down the `BASE_SCALE + n * step` grid. A scale between
    /// grid lines moves to the neighbouring line in that direction.
    fn step_from(&self, scale: f64, up: bool) -> f64 {
        // Float noise must not push an on-grid scale off its own line.
        const SLACK: f64 = 1e-9;
        let index = (scale - BASE_SCALE) / self.step;
        let next = if up {
            (index + SLACK).floor() + 1.0
        } else {
            (index - SLACK).ceil() - 1.0
        };
        let snapped = BASE_SCALE + next * self.step;
        self.clamp((snapped * 1e9).round() / 1e9)
    }
}

/// Keyboard shortcuts understood by the viewer.
#[derive(Debug, Clone, PartialEq)]
pub enum KeyCommand {
    ZoomIn,
    ZoomOut,
    Reset,
    Next,
    Previous,
    Select(String),
}

impl KeyCommand {
    /// Maps a `KeyboardEvent.key` value. `entry` is the point whose own
    /// element received the key; Enter selects that point and nothing else.
    pub fn from_key(key: &str, entry: Option<&str>) -> Option<Self> {
        match key {
            "+" | "=" => Some(Self::ZoomIn),
            "-" | "_" => Some(Self::ZoomOut),
            "r" | "R" => Some(Self::Reset),
            "ArrowDown" => Some(Self::Next),
            "ArrowUp" => Some(Self::Previous),
            "Enter" => entry.map(|entry| Self::Select(entry.to_string())),
            _ => None,
        }
    }
}

/// Where markers are drawn relative to the zoomed image.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarkerProjection {
    /// Markers keep their layout position; only the image moves beneath them.
    #[default]
    Overlay,
    /// Markers are carried through the image transform.
    FollowImage,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Offset {
    pub dx: f64,
    pub dy: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewportState {
    pub active_key: Option<String>,
    pub scale: f64,
    pub offset: Offset,
}

#[derive(Debug, Error, PartialEq)]
pub enum HotspotError {
    #[error("unknown point of interest: {0}")]
    UnknownPoint(String),
}

/// Selection and pan/zoom state for one reference image and its points.
///
/// The marker overlay and the description list both read `active_key` from
/// here; neither keeps its own copy of the selection.
#[derive(Debug, Clone, PartialEq)]
pub struct HotspotViewer {
    points: Vec<PointOfInterest>,
    zoom: ZoomConfig,
    viewport: ViewportState,
    image_failed: bool,
}

impl HotspotViewer {
    /// `points` is expected to be validated already (non-empty, unique keys).
    pub fn new(points: Vec<PointOfInterest>, zoom: ZoomConfig) -> Self {
        let active_key = points.first().map(|p| p.key.clone());
        Self {
            points,
            zoom,
            viewport: ViewportState {
                active_key,
                scale: zoom.clamp(BASE_SCALE),
                offset: Offset::default(),
            },
            image_failed: false,
        }
    }

    pub fn points(&self) -> &[PointOfInterest] {
        &self.points
    }

    pub fn viewport(&self) -> &ViewportState {
        &self.viewport
    }

    pub fn active_key(&self) -> Option<&str> {
        self.viewport.active_key.as_deref()
    }

    pub fn active_point(&self) -> Option<&PointOfInterest> {
        let key = self.active_key()?;
        self.points.iter().find(|p| p.key == key)
    }

    pub fn is_active(&self, key: &str) -> bool {
        self.active_key() == Some(key)
    }

    pub fn image_failed(&self) -> bool {
        self.image_failed
    }

    fn find(&self, key: &str) -> Result<&PointOfInterest, HotspotError> {
        self.points
            .iter()
            .find(|p| p.key == key)
            .ok_or_else(|| HotspotError::UnknownPoint(key.to_string()))
    }

    /// Hover/focus path: moves the selection without touching the transform.
    pub fn highlight(&mut self, key: &str) -> Result<(), HotspotError> {
        let point = self.find(key)?;
        self.viewport.active_key = Some(point.key.clone());
        Ok(())
    }

    /// Click path: moves the selection and pans/zooms toward the point.
    pub fn select_point(&mut self, key: &str) -> Result<(), HotspotError> {
        let point = self.find(key)?;
        let (x, y) = (point.x, point.y);
        self.viewport.active_key = Some(point.key.clone());
        self.focus_on(x, y, self.zoom.focus_scale);
        Ok(())
    }

    /// Translate so the point at `(x, y)` moves toward the image centre.
    ///
    /// The translation is divided by the scale because it is expressed in the
    /// same percentage space that the scale then magnifies.
    pub fn focus_on(&mut self, x: f64, y: f64, scale: f64) {
        let scale = self.zoom.clamp(scale);
        self.viewport.scale = scale;
        self.viewport.offset = Offset {
            dx: (CENTER - x) / scale,
            dy: (CENTER - y) / scale,
        };
    }

    pub fn zoom_in(&mut self) {
        self.viewport.scale = self.zoom.step_from(self.viewport.scale, true);
    }

    pub fn zoom_out(&mut self) {
        self.viewport.scale = self.zoom.step_from(self.viewport.scale, false);
    }

    /// Clears the transform. The selection is kept.
    pub fn reset(&mut self) {
        self.viewport.scale = self.zoom.clamp(BASE_SCALE);
        self.viewport.offset = Offset::default();
    }

    /// A freshly loaded image must not inherit the previous transform.
    pub fn image_loaded(&mut self) {
        self.image_failed = false;
        self.reset();
    }

    pub fn image_load_failed(&mut self) {
        self.image_failed = true;
    }

    /// Select the point after (or before, when `forward` is false) the active
    /// one, wrapping at either end.
    pub fn select_adjacent(&mut self, forward: bool) -> Result<(), HotspotError> {
        let len = self.points.len();
        if len == 0 {
            return Ok(());
        }
        let current = self
            .active_key()
            .and_then(|key| self.points.iter().position(|p| p.key == key));
        let next = match (current, forward) {
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
            (None, true) => 0,
            (None, false) => len - 1,
        };
        let key = self.points[next].key.clone();
        self.select_point(&key)
    }

    pub fn apply_key(&mut self, command: KeyCommand) -> Result<(), HotspotError> {
        match command {
            KeyCommand::ZoomIn => {
                self.zoom_in();
                Ok(())
            }
            KeyCommand::ZoomOut => {
                self.zoom_out();
                Ok(())
            }
            KeyCommand::Reset => {
                self.reset();
                Ok(())
            }
            KeyCommand::Next => self.select_adjacent(true),
            KeyCommand::Previous => self.select_adjacent(false),
            KeyCommand::Select(key) => self.select_point(&key),
        }
    }

    /// CSS transform for the image; the origin is expected at the centre.
    pub fn transform_css(&self) -> String {
        format!(
            "translate({}%, {}%) scale({})",
            self.viewport.offset.dx, self.viewport.offset.dy, self.viewport.scale
        )
    }

    pub fn zoom_percent(&self) -> i32 {
        (self.viewport.scale * 100.0).round() as i32
    }

    /// Position of a marker within the image box, in percent.
    pub fn marker_position(
        &self,
        point: &PointOfInterest,
        projection: MarkerProjection,
    ) -> (f64, f64) {
        match projection {
            MarkerProjection::Overlay => (point.x, point.y),
            MarkerProjection::FollowImage => {
                let s = self.viewport.scale;
                let Offset { dx, dy } = self.viewport.offset;
                (
                    CENTER + dx + s * (point.x - CENTER),
                    CENTER + dy + s * (point.y - CENTER),
                )
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn poi(key: &str, x: f64, y: f64, description: &str) -> PointOfInterest {
        PointOfInterest {
            key: key.to_string(),
            x,
            y,
            description: description.to_string(),
        }
    }

    fn default_points() -> Vec<PointOfInterest> {
        vec![
            poi("Appearance", 64.0, 22.0, "Uniform colour."),
            poi("Size / Diameter", 35.0, 28.0, "Grade diameter."),
            poi("Weight", 50.0, 75.0, "Lot weight."),
            poi("Firmness", 28.0, 55.0, "Penetrometer."),
            poi("Skin Condition", 78.0, 55.0, "No wrinkles."),
            poi("Flavor & Aroma", 56.0, 40.0, "Sensory."),
            poi("Defects", 18.0, 35.0, "Insect damage."),
        ]
    }

    fn viewer() -> HotspotViewer {
        HotspotViewer::new(default_points(), ZoomConfig::default())
    }

    #[test]
    fn test_initial_state() {
        let v = viewer();
        assert_eq!(v.active_key(), Some("Appearance"));
        assert_eq!(v.viewport().scale, 1.0);
        assert_eq!(v.viewport().offset, Offset::default());
        assert!(!v.image_failed());
    }

    #[test]
    fn test_select_every_point() {
        let mut v = viewer();
        for p in default_points() {
            v.select_point(&p.key).unwrap();
            assert_eq!(v.active_key(), Some(p.key.as_str()));
            assert_eq!(v.active_point(), Some(&p));
        }
    }

    #[test]
    fn test_select_firmness_scenario() {
        let mut v = viewer();
        v.select_point("Firmness").unwrap();
        assert_eq!(v.viewport().scale, 1.6);
        assert!((v.viewport().offset.dx - 13.75).abs() < EPS);
        assert!((v.viewport().offset.dy - (-3.125)).abs() < EPS);
    }

    #[test]
    fn test_focus_on_offsets_across_scales() {
        let mut v = viewer();
        for p in default_points() {
            for scale in [1.0, 1.2, 1.6, 2.0, 2.2] {
                v.focus_on(p.x, p.y, scale);
                assert_eq!(v.viewport().scale, scale);
                assert!((v.viewport().offset.dx - (50.0 - p.x) / scale).abs() < EPS);
                assert!((v.viewport().offset.dy - (50.0 - p.y) / scale).abs() < EPS);
            }
        }
    }

    #[test]
    fn test_focus_on_clamps_scale_first() {
        let mut v = viewer();
        v.focus_on(30.0, 70.0, 5.0);
        assert_eq!(v.viewport().scale, 2.2);
        assert!((v.viewport().offset.dx - 20.0 / 2.2).abs() < EPS);

        v.focus_on(30.0, 70.0, 0.5);
        assert_eq!(v.viewport().scale, 1.0);
        assert!((v.viewport().offset.dy - (-20.0)).abs() < EPS);
    }

    #[test]
    fn test_unknown_key_leaves_state_alone() {
        let mut v = viewer();
        v.select_point("Weight").unwrap();
        let before = v.clone();
        assert_eq!(
            v.select_point("Colour"),
            Err(HotspotError::UnknownPoint("Colour".to_string()))
        );
        assert!(v.highlight("Colour").is_err());
        assert_eq!(v, before);
    }

    #[test]
    fn test_highlight_keeps_transform() {
        let mut v = viewer();
        v.select_point("Weight").unwrap();
        let viewport = v.viewport().clone();
        v.highlight("Defects").unwrap();
        assert_eq!(v.active_key(), Some("Defects"));
        assert_eq!(v.viewport().scale, viewport.scale);
        assert_eq!(v.viewport().offset, viewport.offset);
    }

    #[test]
    fn test_zoom_out_floor() {
        let mut v = viewer();
        v.zoom_in();
        v.zoom_out();
        assert_eq!(v.viewport().scale, 1.0);
        v.zoom_out();
        assert_eq!(v.viewport().scale, 1.0);
    }

    #[test]
    fn test_zoom_in_saturates() {
        let mut v = viewer();
        for _ in 0..10 {
            v.zoom_in();
            assert!(v.viewport().scale <= 2.2);
        }
        assert_eq!(v.viewport().scale, 2.2);
    }

    #[test]
    fn test_zoom_keeps_offset() {
        let mut v = viewer();
        v.select_point("Skin Condition").unwrap();
        let offset = v.viewport().offset;
        v.zoom_in();
        assert_eq!(v.viewport().scale, 1.8);
        assert_eq!(v.viewport().offset, offset);
    }

    #[test]
    fn test_zoom_snaps_to_configured_step() {
        let zoom = ZoomConfig {
            min_scale: 1.0,
            max_scale: 2.0,
            step: 0.125,
            focus_scale: 1.5,
        };
        let mut v = HotspotViewer::new(default_points(), zoom);
        for _ in 0..4 {
            v.zoom_in();
        }
        assert_eq!(v.viewport().scale, 1.5);
        for _ in 0..10 {
            v.zoom_in();
        }
        assert_eq!(v.viewport().scale, 2.0);
        for _ in 0..3 {
            v.zoom_out();
        }
        assert_eq!(v.viewport().scale, 1.625);
    }

    #[test]
    fn test_fine_zoom_step_still_moves() {
        let zoom = ZoomConfig {
            step: 0.004,
            ..ZoomConfig::default()
        };
        let mut v = HotspotViewer::new(default_points(), zoom);
        v.zoom_in();
        assert_eq!(v.viewport().scale, 1.004);
        v.zoom_in();
        assert_eq!(v.viewport().scale, 1.008);
        v.zoom_out();
        v.zoom_out();
        assert_eq!(v.viewport().scale, 1.0);
    }

    #[test]
    fn test_zoom_from_between_grid_lines() {
        let mut v = viewer();
        v.focus_on(50.0, 50.0, 1.5);
        v.zoom_in();
        assert_eq!(v.viewport().scale, 1.6);

        v.focus_on(50.0, 50.0, 1.5);
        v.zoom_out();
        assert_eq!(v.viewport().scale, 1.4);
    }

    #[test]
    fn test_reset_returns_to_base_scale() {
        let zoom = ZoomConfig {
            min_scale: 0.8,
            max_scale: 2.0,
            step: 0.2,
            focus_scale: 1.6,
        };
        let mut v = HotspotViewer::new(default_points(), zoom);
        assert_eq!(v.viewport().scale, BASE_SCALE);
        v.zoom_out();
        assert_eq!(v.viewport().scale, 0.8);
        v.reset();
        assert_eq!(v.viewport().scale, BASE_SCALE);
    }

    #[test]
    fn test_reset_preserves_selection() {
        let mut v = viewer();
        v.select_point("Defects").unwrap();
        v.zoom_in();
        v.reset();
        assert_eq!(v.viewport().scale, 1.0);
        assert_eq!(v.viewport().offset, Offset::default());
        assert_eq!(v.active_key(), Some("Defects"));
    }

    #[test]
    fn test_image_load_resets_and_clears_failure() {
        let mut v = viewer();
        v.select_point("Firmness").unwrap();
        v.image_load_failed();
        assert!(v.image_failed());
        // Markers and list still have everything they need.
        assert_eq!(v.points().len(), 7);
        assert_eq!(v.active_key(), Some("Firmness"));

        v.image_loaded();
        assert!(!v.image_failed());
        assert_eq!(v.viewport().scale, 1.0);
        assert_eq!(v.active_key(), Some("Firmness"));
    }

    #[test]
    fn test_select_adjacent_wraps() {
        let mut v = viewer();
        v.select_adjacent(false).unwrap();
        assert_eq!(v.active_key(), Some("Defects"));
        v.select_adjacent(true).unwrap();
        assert_eq!(v.active_key(), Some("Appearance"));
        v.select_adjacent(true).unwrap();
        assert_eq!(v.active_key(), Some("Size / Diameter"));
        assert_eq!(v.viewport().scale, 1.6);
    }

    #[test]
    fn test_key_commands() {
        assert_eq!(KeyCommand::from_key("+", None), Some(KeyCommand::ZoomIn));
        assert_eq!(KeyCommand::from_key("_", None), Some(KeyCommand::ZoomOut));
        assert_eq!(KeyCommand::from_key("R", None), Some(KeyCommand::Reset));
        assert_eq!(KeyCommand::from_key("ArrowUp", None), Some(KeyCommand::Previous));
        assert_eq!(KeyCommand::from_key("Enter", None), None);
        assert_eq!(KeyCommand::from_key("x", Some("Weight")), None);
        assert_eq!(
            KeyCommand::from_key("Enter", Some("Weight")),
            Some(KeyCommand::Select("Weight".to_string()))
        );
    }

    #[test]
    fn test_enter_selects_the_focused_entry() {
        let mut v = viewer();
        // Keyboard focus on Firmness, then the pointer hovers Defects.
        v.highlight("Firmness").unwrap();
        v.highlight("Defects").unwrap();

        let command = KeyCommand::from_key("Enter", Some("Firmness")).unwrap();
        v.apply_key(command).unwrap();
        assert_eq!(v.active_key(), Some("Firmness"));
        assert!((v.viewport().offset.dx - 13.75).abs() < EPS);
        assert!((v.viewport().offset.dy - (-3.125)).abs() < EPS);
    }

    #[test]
    fn test_transform_css() {
        let mut v = viewer();
        assert_eq!(v.transform_css(), "translate(0%, 0%) scale(1)");
        v.focus_on(50.0, 30.0, 2.0);
        assert_eq!(v.transform_css(), "translate(0%, 10%) scale(2)");
        assert_eq!(v.zoom_percent(), 200);
    }

    #[test]
    fn test_marker_projection() {
        let mut v = viewer();
        let firmness = v.points()[3].clone();
        v.select_point("Firmness").unwrap();
        assert_eq!(
            v.marker_position(&firmness, MarkerProjection::Overlay),
            (28.0, 55.0)
        );

        // At scale 1 the focus offset carries the point exactly to the centre.
        v.focus_on(firmness.x, firmness.y, 1.0);
        let (x, y) = v.marker_position(&firmness, MarkerProjection::FollowImage);
        assert!((x - CENTER).abs() < EPS);
        assert!((y - CENTER).abs() < EPS);

        // The image centre never moves under scale alone.
        v.reset();
        v.zoom_in();
        let centre = poi("c", 50.0, 50.0, "");
        assert_eq!(
            v.marker_position(&centre, MarkerProjection::FollowImage),
            (50.0, 50.0)
        );
    }
}
