use crate::domain::events::DashboardEvent;
use crate::domain::market_data::RangeToken;

/// Canonical UI state of the dashboard: active range(s), full-screen and compare flags.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InteractionState {
    active_ranges: Vec<RangeToken>,
    full_screen: bool,
    compare: bool,
}

/// Named mutations of [`InteractionState`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Intent {
    SetActiveRange(RangeToken),
    ToggleFullScreen,
    ToggleCompare,
}

impl Default for InteractionState {
    fn default() -> Self {
        Self::new(RangeToken::default())
    }
}

impl InteractionState {
    pub fn new(initial: RangeToken) -> Self {
        Self { active_ranges: vec![initial], full_screen: false, compare: false }
    }

    pub fn active_ranges(&self) -> &[RangeToken] {
        &self.active_ranges
    }

    /// First active range; drives the header readout.
    pub fn primary_range(&self) -> Option<RangeToken> {
        self.active_ranges.first().copied()
    }

    pub fn is_active(&self, range: RangeToken) -> bool {
        self.active_ranges.contains(&range)
    }

    pub fn full_screen(&self) -> bool {
        self.full_screen
    }

    pub fn compare(&self) -> bool {
        self.compare
    }

    /// Single mode replaces the selection; compare mode toggles membership.
    pub fn set_active_range(&mut self, range: RangeToken) {
        if !self.compare {
            self.active_ranges = vec![range];
        } else if let Some(position) = self.active_ranges.iter().position(|r| *r == range) {
            self.active_ranges.remove(position);
        } else {
            self.active_ranges.push(range);
        }
    }

    pub fn toggle_full_screen(&mut self) {
        self.full_screen = !self.full_screen;
    }

    /// Leaving compare mode keeps only the first active range.
    pub fn toggle_compare(&mut self) {
        self.compare = !self.compare;
        if !self.compare {
            self.active_ranges.truncate(1);
        }
    }

    /// Apply an intent and describe what changed.
    pub fn apply(&mut self, intent: Intent) -> DashboardEvent {
        match intent {
            Intent::SetActiveRange(range) => {
                self.set_active_range(range);
                DashboardEvent::RangesChanged { active: self.active_ranges.clone() }
            }
            Intent::ToggleFullScreen => {
                self.toggle_full_screen();
                DashboardEvent::FullScreenToggled { full_screen: self.full_screen }
            }
            Intent::ToggleCompare => {
                let before = self.active_ranges.len();
                self.toggle_compare();
                if self.active_ranges.len() != before {
                    crate::log_debug!(
                        crate::domain::logging::LogComponent::Domain("InteractionState"),
                        "compare off: kept {:?} of {} ranges",
                        self.active_ranges,
                        before
                    );
                }
                DashboardEvent::CompareToggled { compare: self.compare }
            }
        }
    }
}
