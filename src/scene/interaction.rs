use serde::Serialize;

/// Scene objects the platform can hit-test against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TargetId {
    Drawer,
    SidePanel,
    /// Static panel of the rotating ring, by face index
    RingPanel(usize),
    ClockFace,
}

impl TargetId {
    /// Whether clicking the target does something
    pub fn is_interactive(self) -> bool {
        matches!(self, TargetId::Drawer)
    }
}

/// Pointer/tap input, already resolved to a target by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractionEvent {
    Click(TargetId),
    HoverEnter(TargetId),
    HoverLeave(TargetId),
}

impl InteractionEvent {
    pub fn target(self) -> TargetId {
        match self {
            InteractionEvent::Click(target)
            | InteractionEvent::HoverEnter(target)
            | InteractionEvent::HoverLeave(target) => target,
        }
    }
}

/// Cursor style the platform should show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum CursorHint {
    #[default]
    Default,
    Pointer,
}

impl CursorHint {
    pub fn for_hovered(hovered: Option<TargetId>) -> Self {
        match hovered {
            Some(target) if target.is_interactive() => CursorHint::Pointer,
            _ => CursorHint::Default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_only_drawer_is_interactive() {
        assert!(TargetId::Drawer.is_interactive());
        assert!(!TargetId::SidePanel.is_interactive());
        assert!(!TargetId::RingPanel(1).is_interactive());
        assert!(!TargetId::ClockFace.is_interactive());
    }

    #[test]
    fn test_cursor_hint() {
        assert_eq!(CursorHint::for_hovered(None), CursorHint::Default);
        assert_eq!(CursorHint::for_hovered(Some(TargetId::Drawer)), CursorHint::Pointer);
        assert_eq!(CursorHint::for_hovered(Some(TargetId::ClockFace)), CursorHint::Default);
    }

    #[test]
    fn test_target_hash() {
        let mut set = HashSet::new();
        set.insert(TargetId::RingPanel(1));
        set.insert(TargetId::RingPanel(1));
        set.insert(TargetId::RingPanel(2));
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_event_target() {
        assert_eq!(InteractionEvent::HoverLeave(TargetId::SidePanel).target(), TargetId::SidePanel);
    }
}
