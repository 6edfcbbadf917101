// Copyright @yucwang 2026

use std::fmt;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct SubscriptionId(u64);

/// Payload-free notification with any number of listeners. Listeners run
/// synchronously, in connection order, inside `emit`.
pub struct Signal {
    next_id: u64,
    slots: Vec<(SubscriptionId, Box<dyn FnMut()>)>,
}

impl Default for Signal {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Signal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal").field("slots", &self.slots.len()).finish()
    }
}

impl Signal {
    pub fn new() -> Self {
        Self { next_id: 0, slots: Vec::new() }
    }

    pub fn connect<F>(&mut self, slot: F) -> SubscriptionId
        where F: FnMut() + 'static {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.slots.push((id, Box::new(slot)));
        id
    }

    pub fn disconnect(&mut self, id: SubscriptionId) -> bool {
        let before = self.slots.len();
        self.slots.retain(|(slot_id, _)| *slot_id != id);
        self.slots.len() != before
    }

    pub fn emit(&mut self) {
        for (_, slot) in self.slots.iter_mut() {
            slot();
        }
    }
}
