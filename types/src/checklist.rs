//! Guidelines acceptance checklist.

/// The five contest rules a participant must accept before proceeding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChecklistItem {
    StableConnection,
    NoTabSwitching,
    NoReload,
    SingleDevice,
    FollowInstructions,
}

impl ChecklistItem {
    pub const ALL: [ChecklistItem; 5] = [
        ChecklistItem::StableConnection,
        ChecklistItem::NoTabSwitching,
        ChecklistItem::NoReload,
        ChecklistItem::SingleDevice,
        ChecklistItem::FollowInstructions,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ChecklistItem::StableConnection => {
                "Stable and uninterrupted internet connection is required."
            }
            ChecklistItem::NoTabSwitching => {
                "Do not switch tabs during the contest; repeated switches may lead to disqualification."
            }
            ChecklistItem::NoReload => {
                "Avoid refreshing, closing, or reloading the contest window."
            }
            ChecklistItem::SingleDevice => {
                "Use a single device and browser throughout the contest."
            }
            ChecklistItem::FollowInstructions => {
                "Follow all on-screen instructions carefully."
            }
        }
    }
}

/// Acceptance state of the five checklist items, all unchecked by default.
#[derive(Debug, Clone, Copy, Default)]
pub struct Checklist {
    checked: [bool; 5],
}

impl Checklist {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle(&mut self, index: usize) {
        if let Some(flag) = self.checked.get_mut(index) {
            *flag = !*flag;
        }
    }

    #[must_use]
    pub fn is_checked(&self, index: usize) -> bool {
        self.checked.get(index).copied().unwrap_or(false)
    }

    /// Progression to the login phase unlocks only when every item is checked.
    #[must_use]
    pub fn all_checked(&self) -> bool {
        self.checked.iter().all(|flag| *flag)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.checked.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_unchecked_by_default() {
        let checklist = Checklist::new();
        assert!(!checklist.all_checked());
        for i in 0..checklist.len() {
            assert!(!checklist.is_checked(i));
        }
    }

    #[test]
    fn toggle_flips_single_item() {
        let mut checklist = Checklist::new();
        checklist.toggle(2);
        assert!(checklist.is_checked(2));
        assert!(!checklist.is_checked(1));
        checklist.toggle(2);
        assert!(!checklist.is_checked(2));
    }

    #[test]
    fn all_checked_requires_every_item() {
        let mut checklist = Checklist::new();
        for i in 0..4 {
            checklist.toggle(i);
        }
        assert!(!checklist.all_checked());
        checklist.toggle(4);
        assert!(checklist.all_checked());
    }

    #[test]
    fn out_of_range_toggle_is_ignored() {
        let mut checklist = Checklist::new();
        checklist.toggle(99);
        assert!(!checklist.all_checked());
    }
}
