use std::collections::{HashSet, VecDeque};

/// Bounded record of recently delivered messages.
/// Keeps at most `capacity` distinct texts and evicts the oldest first.
#[derive(Debug)]
pub struct SentMessages {
    order: VecDeque<String>,
    seen: HashSet<String>,
    capacity: usize,
}

impl SentMessages {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            order: VecDeque::with_capacity(capacity),
            seen: HashSet::with_capacity(capacity),
            capacity,
        }
    }

    pub fn contains(&self, message: &str) -> bool {
        self.seen.contains(message)
    }

    pub fn record(&mut self, message: String) {
        if self.seen.contains(&message) {
            return;
        }
        if self.order.len() == self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.seen.remove(&oldest);
            }
        }
        self.seen.insert(message.clone());
        self.order.push_back(message);
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }
}
