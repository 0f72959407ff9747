//! The captured right-click target.

/// Holds at most one anchor. Setting a new anchor replaces the old one.
///
/// The host owns the slot, writes it on every right-click and passes
/// [`AnchorSlot::get`] to [`LocatorEngine::locate`]. A stale anchor stays in
/// place until it is replaced or cleared.
///
/// [`LocatorEngine::locate`]: crate::LocatorEngine::locate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorSlot<Id> {
    current: Option<Id>,
}

impl<Id> Default for AnchorSlot<Id> {
    fn default() -> Self {
        Self { current: None }
    }
}

impl<Id: Copy> AnchorSlot<Id> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capture a new anchor, returning the one it replaces.
    pub fn set(&mut self, anchor: Id) -> Option<Id> {
        self.current.replace(anchor)
    }

    pub fn get(&self) -> Option<Id> {
        self.current
    }

    pub fn clear(&mut self) -> Option<Id> {
        self.current.take()
    }

    pub fn is_set(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_slot() {
        let slot: AnchorSlot<u32> = AnchorSlot::new();
        assert!(!slot.is_set());
        assert_eq!(slot.get(), None);
    }

    #[test]
    fn test_set_replaces() {
        let mut slot = AnchorSlot::new();
        assert_eq!(slot.set(1), None);
        assert_eq!(slot.set(2), Some(1));
        assert_eq!(slot.get(), Some(2));
    }

    #[test]
    fn test_read_does_not_consume() {
        let mut slot = AnchorSlot::new();
        slot.set(7);
        assert_eq!(slot.get(), Some(7));
        assert_eq!(slot.get(), Some(7));
    }

    #[test]
    fn test_clear() {
        let mut slot = AnchorSlot::new();
        slot.set(3);
        assert_eq!(slot.clear(), Some(3));
        assert!(!slot.is_set());
    }
}
