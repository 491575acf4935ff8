use crate::constants::REVEAL_THRESHOLD;
use fnv::FnvHashMap;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RevealState {
    #[default]
    Hidden,
    Visible,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Subscription {
    Observing,
    Released,
}

#[derive(Clone, Debug)]
pub struct RevealTrigger {
    state: RevealState,
    subscription: Subscription,
    threshold: f32,
}

impl RevealTrigger {
    pub fn new() -> Self {
        Self::with_threshold(REVEAL_THRESHOLD)
    }

    pub fn with_threshold(threshold: f32) -> Self {
        Self {
            state: RevealState::Hidden,
            subscription: Subscription::Observing,
            threshold,
        }
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn is_visible(&self) -> bool {
        self.state == RevealState::Visible
    }

    pub fn is_observing(&self) -> bool {
        self.subscription == Subscription::Observing
    }

    /// Feed one intersection ratio. Returns `true` only on the call that
    /// makes the section visible; the caller should unobserve the element then.
    pub fn observe(&mut self, ratio: f32) -> bool {
        if !self.is_observing() || self.is_visible() {
            return false;
        }
        if ratio.is_finite() && ratio >= self.threshold {
            self.state = RevealState::Visible;
            self.subscription = Subscription::Released;
            return true;
        }
        false
    }

    /// Section removed from the page before (or after) it fired.
    pub fn unmount(&mut self) {
        self.subscription = Subscription::Released;
    }
}

impl Default for RevealTrigger {
    fn default() -> Self {
        Self::new()
    }
}

/// Independent triggers keyed by section element id.
#[derive(Debug, Default)]
pub struct RevealRegistry {
    sections: FnvHashMap<String, RevealTrigger>,
}

impl RevealRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start tracking a section. Re-mounting an id resets it to Hidden.
    pub fn mount(&mut self, id: impl Into<String>) {
        self.sections.insert(id.into(), RevealTrigger::new());
    }

    pub fn unmount(&mut self, id: &str) -> Option<RevealTrigger> {
        self.sections.remove(id).map(|mut t| {
            t.unmount();
            t
        })
    }

    /// Page is being hidden. A page kept in the back/forward cache (`persisted`)
    /// comes back still mounted, so nothing is released. Otherwise every section
    /// is unmounted and its id returned, sorted, for the caller to disconnect.
    pub fn page_hide(&mut self, persisted: bool) -> Vec<String> {
        if persisted {
            return Vec::new();
        }
        let mut ids: Vec<String> = self.sections.drain().map(|(id, _)| id).collect();
        ids.sort();
        ids
    }

    pub fn observe(&mut self, id: &str, ratio: f32) -> bool {
        let fired = self
            .sections
            .get_mut(id)
            .map(|t| t.observe(ratio))
            .unwrap_or(false);
        if fired {
            log::info!("[reveal] section '{}' visible (ratio {:.2})", id, ratio);
        }
        fired
    }

    pub fn state(&self, id: &str) -> Option<RevealState> {
        self.sections.get(id).map(|t| t.state())
    }

    pub fn is_observing(&self, id: &str) -> bool {
        self.sections
            .get(id)
            .map(|t| t.is_observing())
            .unwrap_or(false)
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }
}
