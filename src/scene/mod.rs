//! Per-frame state of the septagon case, driven by an external renderer.
//!
//! The renderer owns the loop. Each frame it calls [`CaseScene::frame`] and
//! moves its objects to the returned poses; each timer tick it calls
//! [`CaseScene::tick`] and pushes the snapshot to the clock label.

mod interaction;
mod layout;

pub use interaction::{CursorHint, InteractionEvent, TargetId};
pub use layout::{MountedPanel, PanelLayout};

use serde::Serialize;

use crate::animation::{RadialSlideAnimator, SlideState, Spin};
use crate::clock::{ClockDisplay, ClockSnapshot};
use crate::config::SceneConfig;
use crate::error::{Result, SceneError};
use crate::math::{Placement, PolygonSpec};
use crate::traits::{InstantSource, InteractionHandler};

/// Poses for one rendered frame.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FrameOutput {
    pub drawer: Placement,
    pub drawer_open: bool,
    pub side_panel: Placement,
    /// Ring panels with the turntable spin applied
    pub ring: Vec<(TargetId, Placement)>,
    pub ring_angle: f32,
    pub cursor: CursorHint,
}

pub struct CaseScene {
    spec: PolygonSpec,
    layout: PanelLayout,
    drawer: SlideState,
    animator: RadialSlideAnimator,
    spin: Spin,
    clock: ClockDisplay,
    hovered: Option<TargetId>,
}

impl CaseScene {
    /// Builds the scene, rejecting any bad setting before the first frame.
    pub fn new(config: &SceneConfig) -> Result<Self> {
        config.validate()?;

        let spec = config.polygon()?;
        let drawer_face = spec.face(config.drawer.face)?;
        let side_face = spec.face(config.side_panel_face)?;
        let layout = PanelLayout::new(&spec, drawer_face, side_face, config.panel_clearance)?;

        let drawer = SlideState::new(
            &spec,
            drawer_face,
            config.drawer.closed_distance,
            config.drawer.open_distance,
        );
        let animator = RadialSlideAnimator::new(config.drawer.slide_rate)?;
        let clock = ClockDisplay::new(config.formatter()?, config.clock.tick_interval)?;

        log::info!(
            "built {}-sided case: drawer on face {}, side panel on face {}, {} ring panels",
            spec.segment_count(),
            drawer_face.get(),
            side_face.get(),
            layout.ring.len()
        );

        Ok(Self {
            spec,
            layout,
            drawer,
            animator,
            spin: Spin::new(config.ring_spin_speed),
            clock,
            hovered: None,
        })
    }

    pub fn spec(&self) -> &PolygonSpec {
        &self.spec
    }

    pub fn layout(&self) -> &PanelLayout {
        &self.layout
    }

    pub fn drawer(&self) -> &SlideState {
        &self.drawer
    }

    pub fn is_drawer_open(&self) -> bool {
        self.drawer.is_open
    }

    pub fn hovered(&self) -> Option<TargetId> {
        self.hovered
    }

    pub fn cursor(&self) -> CursorHint {
        CursorHint::for_hovered(self.hovered)
    }

    pub fn clock_snapshot(&self) -> Option<&ClockSnapshot> {
        self.clock.latest()
    }

    /// Advances the animations by `elapsed` seconds.
    ///
    /// Nothing is mutated if `elapsed` is rejected.
    pub fn frame(&mut self, elapsed: f32) -> Result<FrameOutput> {
        let mut drawer = self.drawer;
        let drawer_pose = self.animator.step(&mut drawer, elapsed)?;
        let ring_angle = self.spin.advance(elapsed)?;
        self.drawer = drawer;

        let ring = self
            .layout
            .ring
            .iter()
            .map(|panel| {
                (
                    TargetId::RingPanel(panel.face.get()),
                    panel.placement.rotated_about_center(ring_angle),
                )
            })
            .collect();

        Ok(FrameOutput {
            drawer: drawer_pose,
            drawer_open: self.drawer.is_open,
            side_panel: self.layout.side_panel.placement,
            ring,
            ring_angle,
            cursor: self.cursor(),
        })
    }

    /// Feeds the clock's tick timer; returns a snapshot when the label is due.
    pub fn tick(&mut self, elapsed: f32, source: &dyn InstantSource) -> Result<Option<ClockSnapshot>> {
        self.clock.update(elapsed, source)
    }

    fn check_target(&self, target: TargetId) -> Result<()> {
        match target {
            TargetId::RingPanel(index) => {
                self.spec.face(index)?;
                if self.layout.ring_panel(index).is_none() {
                    return Err(SceneError::UnknownTarget(target));
                }
                Ok(())
            }
            TargetId::Drawer | TargetId::SidePanel | TargetId::ClockFace => Ok(()),
        }
    }
}

impl InteractionHandler for CaseScene {
    fn handle(&mut self, event: InteractionEvent) -> Result<()> {
        self.check_target(event.target())?;

        match event {
            InteractionEvent::Click(TargetId::Drawer) => {
                self.drawer.toggle();
                log::debug!(
                    "drawer {} at distance {:.3}",
                    if self.drawer.is_open { "opening" } else { "closing" },
                    self.drawer.current_distance
                );
            }
            InteractionEvent::Click(target) => {
                log::debug!("ignoring click on {:?}", target);
            }
            InteractionEvent::HoverEnter(target) => {
                self.hovered = Some(target);
                log::debug!("hover {:?}, cursor {:?}", target, self.cursor());
            }
            InteractionEvent::HoverLeave(target) => {
                if self.hovered == Some(target) {
                    self.hovered = None;
                    log::debug!("hover left {:?}", target);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scene_starts_closed_at_closed_distance() {
        let mut scene = CaseScene::new(&SceneConfig::default()).unwrap();
        let out = scene.frame(0.0).unwrap();
        assert!(!out.drawer_open);
        assert!((out.drawer.radial_distance() - 1.1).abs() < 1e-5);
    }

    #[test]
    fn test_bad_elapsed_leaves_state_alone() {
        let mut scene = CaseScene::new(&SceneConfig::default()).unwrap();
        scene.handle(InteractionEvent::Click(TargetId::Drawer)).unwrap();
        scene.frame(0.1).unwrap();
        let before = *scene.drawer();

        assert!(scene.frame(-0.1).is_err());
        assert_eq!(*scene.drawer(), before);
    }

    #[test]
    fn test_hover_leave_only_clears_matching_target() {
        let mut scene = CaseScene::new(&SceneConfig::default()).unwrap();
        scene.handle(InteractionEvent::HoverEnter(TargetId::Drawer)).unwrap();
        scene.handle(InteractionEvent::HoverLeave(TargetId::SidePanel)).unwrap();
        assert_eq!(scene.cursor(), CursorHint::Pointer);
        scene.handle(InteractionEvent::HoverLeave(TargetId::Drawer)).unwrap();
        assert_eq!(scene.cursor(), CursorHint::Default);
    }
}
