//! Scene configuration, fixed for the lifetime of one scene.

use serde::{Deserialize, Serialize};

use crate::animation::RadialSlideAnimator;
use crate::clock::{ClockFormatter, TickTimer};
use crate::error::{Result, SceneError};
use crate::math::PolygonSpec;

/// Default number of case walls
pub const DEFAULT_SEGMENT_COUNT: usize = 7;

/// Default clock refresh interval (in seconds).
pub const DEFAULT_TICK_INTERVAL: f32 = 1.0;

/// Default convergence rate of the drawer slide (per second).
pub const DEFAULT_SLIDE_RATE: f32 = 8.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub segment_count: usize,
    pub outer_radius: f32,
    pub inner_radius: f32,
    pub case_height: f32,
    pub drawer: DrawerConfig,
    pub side_panel_face: usize,
    /// Gap left between a panel's edge and its face's corners
    pub panel_clearance: f32,
    /// Turntable speed of the panel ring, radians per second
    pub ring_spin_speed: f32,
    pub clock: ClockConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawerConfig {
    pub face: usize,
    pub closed_distance: f32,
    pub open_distance: f32,
    pub slide_rate: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockConfig {
    pub locale: String,
    pub use_24_hour: bool,
    pub tick_interval: f32,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            segment_count: DEFAULT_SEGMENT_COUNT,
            outer_radius: 3.0,
            inner_radius: 1.2,
            case_height: 1.0,
            drawer: DrawerConfig::default(),
            side_panel_face: 0,
            panel_clearance: 0.05,
            ring_spin_speed: 0.2,
            clock: ClockConfig::default(),
        }
    }
}

impl Default for DrawerConfig {
    fn default() -> Self {
        Self {
            face: 3,
            closed_distance: 1.1,
            open_distance: 2.6,
            slide_rate: DEFAULT_SLIDE_RATE,
        }
    }
}

impl Default for ClockConfig {
    fn default() -> Self {
        Self {
            locale: "en_US".to_string(),
            use_24_hour: true,
            tick_interval: DEFAULT_TICK_INTERVAL,
        }
    }
}

impl SceneConfig {
    /// Parses a JSON document; missing fields take their defaults.
    pub fn from_json_str(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }

    pub fn polygon(&self) -> Result<PolygonSpec> {
        PolygonSpec::new(
            self.segment_count,
            self.outer_radius,
            self.inner_radius,
            self.case_height,
        )
    }

    pub fn formatter(&self) -> Result<ClockFormatter> {
        ClockFormatter::from_locale_name(&self.clock.locale, self.clock.use_24_hour)
    }

    /// Checks every setting a scene needs before its first frame.
    pub fn validate(&self) -> Result<()> {
        let spec = self.polygon()?;
        let drawer = spec.face(self.drawer.face)?;
        let side = spec.face(self.side_panel_face)?;
        if drawer == side {
            return Err(SceneError::FaceOccupied(side.get()));
        }

        for (name, value) in [
            ("closed distance", self.drawer.closed_distance),
            ("open distance", self.drawer.open_distance),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(SceneError::NonPositiveDimension { name, value });
            }
        }
        if !self.panel_clearance.is_finite() || self.panel_clearance < 0.0 {
            return Err(SceneError::NonPositiveDimension {
                name: "panel clearance",
                value: self.panel_clearance,
            });
        }
        if !self.ring_spin_speed.is_finite() {
            return Err(SceneError::NonPositiveDimension {
                name: "ring spin speed",
                value: self.ring_spin_speed,
            });
        }

        spec.fitted_width(spec.inner_radius(), self.panel_clearance)?;
        RadialSlideAnimator::new(self.drawer.slide_rate)?;
        TickTimer::new(self.clock.tick_interval)?;
        self.formatter()?;
        Ok(())
    }
}
