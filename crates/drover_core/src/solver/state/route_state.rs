use crate::problem::{amount::Amount, skill::SkillSet};

/// Derived data cached alongside a route.
///
/// `loads[0]` is the (empty) load when leaving the start location and
/// `loads[i + 1]` the cumulative load after visiting position `i`. Entries at
/// index `stale_from + 1` and beyond are out of date until the next refresh.
#[derive(Debug, Clone, Default)]
pub struct RouteState {
    pub(super) loads: Vec<Amount>,
    pub(super) stale_from: usize,
    pub(super) tracks_loads: bool,
    pub(super) skills: Option<SkillSet>,
}

impl RouteState {
    pub(super) fn new(capacity_dimensions: usize, tracks_loads: bool, skills: Option<SkillSet>) -> Self {
        RouteState {
            loads: if tracks_loads {
                vec![Amount::with_dimensions(capacity_dimensions)]
            } else {
                Vec::new()
            },
            stale_from: 0,
            tracks_loads,
            skills,
        }
    }

    /// Called by the route after a job was inserted at `position`.
    pub(crate) fn on_insert(&mut self, position: usize) {
        if self.tracks_loads {
            self.loads.insert(position + 1, Amount::EMPTY);
        }
        self.stale_from = self.stale_from.min(position);
    }

    /// Called by the route after the job at `position` was removed.
    pub(crate) fn on_remove(&mut self, position: usize) {
        if self.tracks_loads {
            self.loads.remove(position + 1);
        }
        self.stale_from = self.stale_from.min(position);
    }

    /// First route position whose cached state is out of date. Equal to the
    /// route length when everything is fresh.
    pub fn stale_from(&self) -> usize {
        self.stale_from
    }
}
