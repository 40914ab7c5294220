//! Memento: immutable snapshots of mutable state, stored append-only.

/// A snapshot of the originator's state at capture time. Never mutated
/// after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Memento {
    state: String,
}

impl Memento {
    pub fn state(&self) -> &str {
        &self.state
    }
}

#[derive(Debug, Default)]
pub struct Originator {
    pub state: String,
}

impl Originator {
    pub fn save(&self) -> Memento {
        Memento {
            state: self.state.clone(),
        }
    }

    pub fn restore(&mut self, memento: &Memento) {
        self.state = memento.state.clone();
    }
}

/// Owns the snapshot history. Snapshots are appended in capture order
/// and never reordered or removed.
#[derive(Default)]
pub struct CareTaker {
    mementos: Vec<Memento>,
}

impl CareTaker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, memento: Memento) {
        self.mementos.push(memento);
    }

    /// Out-of-range indices are an explicit `None`, not a panic.
    pub fn get(&self, index: usize) -> Option<&Memento> {
        self.mementos.get(index)
    }

    pub fn len(&self) -> usize {
        self.mementos.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mementos.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capture_then_restore_round_trips() {
        let mut originator = Originator {
            state: "Hello World".to_string(),
        };
        let snapshot = originator.save();

        originator.state = "Goodbye World".to_string();
        originator.restore(&snapshot);
        assert_eq!(originator.state, "Hello World");
    }

    #[test]
    fn restore_is_idempotent() {
        let mut originator = Originator {
            state: "Hello World".to_string(),
        };
        let snapshot = originator.save();

        originator.state = "changed".to_string();
        originator.restore(&snapshot);
        originator.restore(&snapshot);
        assert_eq!(originator.state, "Hello World");
    }

    #[test]
    fn history_grows_by_one_per_capture_and_keeps_order() {
        let mut originator = Originator::default();
        let mut care_taker = CareTaker::new();
        assert!(care_taker.is_empty());

        originator.state = "first".to_string();
        care_taker.add(originator.save());
        assert_eq!(care_taker.len(), 1);

        originator.state = "second".to_string();
        care_taker.add(originator.save());
        assert_eq!(care_taker.len(), 2);

        assert_eq!(care_taker.get(0).map(Memento::state), Some("first"));
        assert_eq!(care_taker.get(1).map(Memento::state), Some("second"));
    }

    #[test]
    fn restoring_does_not_touch_stored_snapshots() {
        let mut originator = Originator {
            state: "kept".to_string(),
        };
        let mut care_taker = CareTaker::new();
        care_taker.add(originator.save());

        originator.state = "mutated".to_string();
        let snapshot = care_taker.get(0).cloned().unwrap();
        originator.restore(&snapshot);

        assert_eq!(care_taker.len(), 1);
        assert_eq!(care_taker.get(0).map(Memento::state), Some("kept"));
    }

    #[test]
    fn out_of_range_index_is_none() {
        let care_taker = CareTaker::new();
        assert_eq!(care_taker.get(0), None);
    }
}
