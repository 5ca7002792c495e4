// src/site_config.rs
use crate::hotspot::{MarkerProjection, PointOfInterest, ZoomConfig, BASE_SCALE};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Sections rendered by the site, in document order.
pub const SECTION_IDS: [&str; 7] = [
    "home",
    "about",
    "sourcing",
    "quality",
    "esg",
    "guarantee",
    "contact",
];

const EMBEDDED_SITE: &str = include_str!("../assets/site.json");

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid site config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("quality section has no points of interest")]
    NoPoints,

    #[error("duplicate point of interest key: {0}")]
    DuplicatePoint(String),

    #[error("point {key} lies outside the image: ({x}, {y})")]
    PointOutOfRange { key: String, x: f64, y: f64 },

    #[error("invalid zoom range: min {min}, max {max}, step {step}, focus {focus}")]
    InvalidZoom {
        min: f64,
        max: f64,
        step: f64,
        focus: f64,
    },

    #[error("duplicate navigation id: {0}")]
    DuplicateNav(String),

    #[error("navigation id {0} has no matching section")]
    UnknownSection(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub company: CompanyInfo,
    pub nav: Vec<NavEntry>,
    pub hero: HeroConfig,
    pub about: AboutConfig,
    pub sourcing: Vec<InfoCard>,
    pub quality: QualityConfig,
    pub esg: Vec<InfoCard>,
    pub guarantee: GuaranteeConfig,
    pub contact: ContactConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompanyInfo {
    pub name: String,
    pub legal_name: String,
    pub slogan: String,
    pub logo: String,
    pub website: String,
    pub footer_note: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NavEntry {
    pub id: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HeroConfig {
    pub pill: String,
    pub headline: String,
    pub tagline: String,
    pub background: String,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Pill {
    #[serde(default)]
    pub icon: Option<String>,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AboutConfig {
    pub heading: String,
    pub quote: String,
    pub question: String,
    pub body: String,
    pub brand_line: String,
    pub brand_body: String,
    #[serde(default)]
    pub pills: Vec<Pill>,
    pub principles_title: String,
    #[serde(default)]
    pub principles: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoCard {
    #[serde(default)]
    pub icon: Option<String>,
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QualityConfig {
    pub image: String,
    pub title: String,
    pub hint: String,
    #[serde(default)]
    pub marker_projection: MarkerProjection,
    #[serde(default)]
    pub zoom: ZoomConfig,
    pub points: Vec<PointOfInterest>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GuaranteeConfig {
    pub image: String,
    pub heading: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactConfig {
    pub heading: String,
    pub intro: String,
    pub email: String,
    pub phone: String,
    pub office_title: String,
    pub office_lines: Vec<String>,
    pub form_title: String,
    pub form_intro: String,
}

impl SiteConfig {
    /// The site content compiled into the binary.
    pub fn embedded() -> Result<Self, ConfigError> {
        Self::from_json(EMBEDDED_SITE)
    }

    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: SiteConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = HashSet::new();
        for entry in &self.nav {
            if !seen.insert(entry.id.as_str()) {
                return Err(ConfigError::DuplicateNav(entry.id.clone()));
            }
            if !SECTION_IDS.contains(&entry.id.as_str()) {
                return Err(ConfigError::UnknownSection(entry.id.clone()));
            }
        }
        self.quality.validate()
    }
}

impl QualityConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let zoom = &self.zoom;
        let zoom_ok = zoom.min_scale > 0.0
            && (zoom.min_scale..=zoom.max_scale).contains(&BASE_SCALE)
            && zoom.step.is_finite()
            && zoom.step > 0.0
            && (zoom.min_scale..=zoom.max_scale).contains(&zoom.focus_scale);
        if !zoom_ok {
            return Err(ConfigError::InvalidZoom {
                min: zoom.min_scale,
                max: zoom.max_scale,
                step: zoom.step,
                focus: zoom.focus_scale,
            });
        }

        if self.points.is_empty() {
            return Err(ConfigError::NoPoints);
        }

        let mut keys = HashSet::new();
        for point in &self.points {
            if !keys.insert(point.key.as_str()) {
                return Err(ConfigError::DuplicatePoint(point.key.clone()));
            }
            let in_range = |v: f64| v.is_finite() && (0.0..=100.0).contains(&v);
            if !in_range(point.x) || !in_range(point.y) {
                return Err(ConfigError::PointOutOfRange {
                    key: point.key.clone(),
                    x: point.x,
                    y: point.y,
                });
            }
        }
        Ok(())
    }
}
