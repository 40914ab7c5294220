//! Mediator: colleagues exchange messages through a central registry.

use std::collections::HashMap;

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MediatorError {
    #[error("no colleague registered with id {0}")]
    UnknownColleague(u32),
}

pub struct Colleague {
    id: u32,
}

impl Colleague {
    pub fn new(id: u32) -> Self {
        Self { id }
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn receive_msg(&self, msg: &str) -> String {
        format!("Hello World! I'm colleague {}, I got msg: {}", self.id, msg)
    }
}

/// Looks up the target by id and delivers synchronously. No queuing,
/// no broadcast; registration is last-write-wins per id.
#[derive(Default)]
pub struct Mediator {
    colleagues: HashMap<u32, Colleague>,
}

impl Mediator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, colleague: Colleague) {
        self.colleagues.insert(colleague.id, colleague);
    }

    pub fn send(&self, to: u32, msg: &str) -> Result<String, MediatorError> {
        self.colleagues
            .get(&to)
            .map(|c| c.receive_msg(msg))
            .ok_or(MediatorError::UnknownColleague(to))
    }
}
