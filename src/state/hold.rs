// Long-press hold tracking, kept free of browser types so it can run anywhere
use crate::model::{ContactPoint, HoldConfig};
use std::time::Duration;

/// The one hold currently waiting for its deadline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PendingHold {
    pub origin: ContactPoint,
    /// Identifies the deadline armed for this hold.
    pub generation: u64,
}

/// What the caller has to do with its deadline timer after an event.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transition {
    /// Cancel any running deadline and schedule a new one for `generation`.
    Armed { generation: u64, delay: Duration },
    /// Cancel the running deadline.
    Disarmed,
    Unchanged,
}

#[derive(Debug, Clone)]
pub struct HoldTracker {
    config: HoldConfig,
    pending: Option<PendingHold>,
    next_generation: u64,
}

impl HoldTracker {
    pub fn new(config: HoldConfig) -> Self {
        Self {
            config,
            pending: None,
            next_generation: 0,
        }
    }

    pub fn pending(&self) -> Option<&PendingHold> {
        self.pending.as_ref()
    }

    pub fn is_holding(&self) -> bool {
        self.pending.is_some()
    }

    /// Only a single contact starts a hold; multi-touch leaves state as it is.
    pub fn touch_start(&mut self, contacts: &[ContactPoint]) -> Transition {
        let [origin] = contacts else {
            return Transition::Unchanged;
        };
        self.next_generation = self.next_generation.wrapping_add(1);
        let generation = self.next_generation;
        self.pending = Some(PendingHold {
            origin: *origin,
            generation,
        });
        Transition::Armed {
            generation,
            delay: self.config.hold_duration(),
        }
    }

    pub fn touch_move(&mut self, primary: Option<ContactPoint>) -> Transition {
        let (Some(hold), Some(current)) = (self.pending.as_ref(), primary) else {
            return Transition::Unchanged;
        };
        if hold.origin.distance_sq(&current) > self.config.drift_sq() {
            self.pending = None;
            Transition::Disarmed
        } else {
            Transition::Unchanged
        }
    }

    /// Shared by touch-end and touch-cancel.
    pub fn touch_end(&mut self) -> Transition {
        match self.pending.take() {
            Some(_) => Transition::Disarmed,
            None => Transition::Unchanged,
        }
    }

    /// Deadline callback. Returns the origin to fire at, or `None` when the
    /// deadline belongs to a hold that was already replaced or cancelled.
    pub fn expire(&mut self, generation: u64) -> Option<ContactPoint> {
        match self.pending {
            Some(hold) if hold.generation == generation => {
                self.pending = None;
                Some(hold.origin)
            }
            _ => None,
        }
    }

    /// Drops any hold without reporting it, used on teardown.
    pub fn reset(&mut self) {
        self.pending = None;
    }
}

impl Default for HoldTracker {
    fn default() -> Self {
        Self::new(HoldConfig::default())
    }
}
