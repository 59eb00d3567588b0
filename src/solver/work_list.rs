use std::collections::{HashSet, VecDeque};

use crate::solver::store::Arc;

/// The AC-3 worklist: a FIFO queue of arcs awaiting a revise pass.
///
/// An arc already sitting in the queue is not enqueued a second time; a
/// single pending pass over it already covers any number of triggering
/// domain changes. Arc order affects work volume only, never the fixed
/// point that propagation reaches.
pub struct WorkList {
    queue: VecDeque<Arc>,
    queue_members: HashSet<Arc>,
}

impl WorkList {
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            queue_members: HashSet::new(),
        }
    }

    pub fn push_back(&mut self, arc: Arc) {
        if self.queue_members.insert(arc) {
            self.queue.push_back(arc);
        }
    }

    pub fn pop_front(&mut self) -> Option<Arc> {
        let arc = self.queue.pop_front()?;
        self.queue_members.remove(&arc);
        Some(arc)
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Default for WorkList {
    fn default() -> Self {
        Self::new()
    }
}
