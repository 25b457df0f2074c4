//! Highlight state of the Region Explorer.
//!
//! Two independent pieces of transient state decide what the diagram
//! shows: the region under the pointer and the region pinned by a click.
//! A pinned region overrides hover until it is released.

use bayes_model::Region;

/// Hover and lock state of one mounted explorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RegionExplorer {
    /// Region under the pointer (cleared on leave)
    hovered: Region,
    /// Region pinned by a click
    locked: Region,
}

impl RegionExplorer {
    /// Creates an explorer with nothing highlighted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Pointer entered a control bound to `region`.
    ///
    /// Ignored while a region is locked.
    pub fn pointer_enter(&mut self, region: Region) {
        if self.locked.is_none() {
            self.hovered = region;
        }
    }

    /// Pointer left a control.
    ///
    /// Ignored while a region is locked.
    pub fn pointer_leave(&mut self) {
        if self.locked.is_none() {
            self.hovered = Region::None;
        }
    }

    /// Click on a control bound to `region`.
    ///
    /// Clicking the locked region releases the lock and clears the
    /// highlight; clicking any other region locks it.
    pub fn click(&mut self, region: Region) {
        if self.locked == region {
            tracing::debug!("Unlocked region {}", region);
            self.locked = Region::None;
            self.hovered = Region::None;
        } else {
            tracing::debug!("Locked region {}", region);
            self.locked = region;
            self.hovered = region;
        }
    }

    /// Click on the diagram background: clears both lock and hover.
    pub fn click_background(&mut self) {
        if self.locked.is_some() {
            tracing::debug!("Background click released lock on {}", self.locked);
        }
        self.locked = Region::None;
        self.hovered = Region::None;
    }

    /// The region currently drawn as highlighted.
    pub fn effective(&self) -> Region {
        if self.locked.is_some() {
            self.locked
        } else {
            self.hovered
        }
    }

    pub fn hovered(&self) -> Region {
        self.hovered
    }

    pub fn locked(&self) -> Region {
        self.locked
    }

    pub fn is_locked(&self) -> bool {
        self.locked.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let explorer = RegionExplorer::new();
        assert_eq!(explorer.effective(), Region::None);
        assert!(!explorer.is_locked());
    }

    #[test]
    fn test_hover_and_leave() {
        let mut explorer = RegionExplorer::new();
        explorer.pointer_enter(Region::Conditional);
        assert_eq!(explorer.effective(), Region::Conditional);

        explorer.pointer_leave();
        assert_eq!(explorer.effective(), Region::None);
    }

    #[test]
    fn test_click_toggles_lock() {
        let mut explorer = RegionExplorer::new();
        explorer.click(Region::Intersection);
        assert_eq!(explorer.locked(), Region::Intersection);
        assert_eq!(explorer.hovered(), Region::Intersection);

        explorer.click(Region::Intersection);
        assert_eq!(explorer.locked(), Region::None);
        assert_eq!(explorer.effective(), Region::None);
    }

    #[test]
    fn test_lock_overrides_hover() {
        let mut explorer = RegionExplorer::new();
        explorer.click(Region::Intersection);

        explorer.pointer_enter(Region::Evidence);
        assert_eq!(explorer.effective(), Region::Intersection);
        // The hover field is not touched while locked
        assert_eq!(explorer.hovered(), Region::Intersection);

        explorer.pointer_leave();
        assert_eq!(explorer.effective(), Region::Intersection);
    }

    #[test]
    fn test_click_other_region_moves_lock() {
        let mut explorer = RegionExplorer::new();
        explorer.click(Region::Intersection);
        explorer.click(Region::Evidence);
        assert_eq!(explorer.locked(), Region::Evidence);
        assert_eq!(explorer.effective(), Region::Evidence);
    }

    #[test]
    fn test_background_click_resets_everything() {
        let mut explorer = RegionExplorer::new();
        explorer.pointer_enter(Region::Evidence);
        explorer.click_background();
        assert_eq!(explorer, RegionExplorer::new());

        explorer.click(Region::Conditional);
        explorer.click_background();
        assert_eq!(explorer, RegionExplorer::new());

        // Harmless on an already clear explorer
        explorer.click_background();
        assert_eq!(explorer.effective(), Region::None);
    }
}
