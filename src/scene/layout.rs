//! Static placement of everything mounted on the case.

use serde::Serialize;

use crate::error::Result;
use crate::math::{FaceIndex, Placement, PolygonSpec};

/// Lift that keeps the clock face from z-fighting with the lid
const CLOCK_FACE_LIFT: f32 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MountedPanel {
    pub face: FaceIndex,
    pub placement: Placement,
    pub width: f32,
}

/// Where the ring panels, side panel and clock face sit on a case.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelLayout {
    /// Ring panels in face order, against the inner wall, before any spin
    pub ring: Vec<MountedPanel>,
    pub side_panel: MountedPanel,
    /// Width of the drawer front, sized like a ring panel
    pub drawer_width: f32,
    pub clock_height: f32,
}

impl PanelLayout {
    /// Lays out a ring panel on every face not taken by the drawer or the
    /// side panel.
    pub fn new(
        spec: &PolygonSpec,
        drawer: FaceIndex,
        side_panel: FaceIndex,
        clearance: f32,
    ) -> Result<Self> {
        let inner = spec.inner_radius();
        let outer = spec.outer_radius();
        let ring_width = spec.fitted_width(inner, clearance)?;
        let ring_distance = spec.apothem(inner);

        let ring = spec
            .faces()
            .filter(|&face| face != drawer && face != side_panel)
            .map(|face| MountedPanel {
                face,
                placement: spec.placement(face, ring_distance),
                width: ring_width,
            })
            .collect();

        let side_panel = MountedPanel {
            face: side_panel,
            placement: spec.placement(side_panel, spec.apothem(outer)),
            width: spec.fitted_width(outer, clearance)?,
        };

        Ok(Self {
            ring,
            side_panel,
            drawer_width: ring_width,
            clock_height: spec.case_height() + CLOCK_FACE_LIFT,
        })
    }

    pub fn ring_panel(&self, face: usize) -> Option<&MountedPanel> {
        self.ring.iter().find(|panel| panel.face.get() == face)
    }
}
