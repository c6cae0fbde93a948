//! Target lock: which enemy the calculator evaluates.
//!
//! The target changes only on [`TargetLockManager::cycle_target`]. Stat
//! updates never retarget, so the displayed verdict does not oscillate between
//! enemies during a teamfight.

use crate::ids::ChampionId;

/// `current` is always `None` or a member of `known`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TargetLockState {
    current: Option<ChampionId>,
    /// Detection order; never reordered.
    known: Vec<ChampionId>,
}

impl TargetLockState {
    pub fn current(&self) -> Option<&ChampionId> {
        self.current.as_ref()
    }

    pub fn known(&self) -> &[ChampionId] {
        &self.known
    }

    pub fn is_locked_on(&self, id: &ChampionId) -> bool {
        self.current.as_ref() == Some(id)
    }
}

#[derive(Clone, Debug, Default)]
pub struct TargetLockManager {
    state: TargetLockState,
}

impl TargetLockManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `id` in first-seen order and locks onto it if nothing is locked.
    ///
    /// Returns true when this call changed the locked target.
    pub fn register_detected_enemy(&mut self, id: ChampionId) -> bool {
        if id.is_empty() {
            return false;
        }
        if !self.state.known.contains(&id) {
            self.state.known.push(id.clone());
        }
        if self.state.current.is_none() {
            self.state.current = Some(id);
            return true;
        }
        false
    }

    /// Advances to the next known enemy, wrapping. No-op with fewer than two.
    pub fn cycle_target(&mut self) -> Option<&ChampionId> {
        let known = &self.state.known;
        if known.len() >= 2 {
            let next = match &self.state.current {
                Some(current) => known
                    .iter()
                    .position(|k| k == current)
                    .map_or(0, |i| (i + 1) % known.len()),
                None => 0,
            };
            self.state.current = Some(known[next].clone());
        }
        self.state.current.as_ref()
    }

    pub fn current_target(&self) -> Option<&ChampionId> {
        self.state.current.as_ref()
    }

    pub fn known_enemies(&self) -> &[ChampionId] {
        &self.state.known
    }

    pub fn state(&self) -> &TargetLockState {
        &self.state
    }
}
