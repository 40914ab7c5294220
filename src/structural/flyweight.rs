//! Flyweight: shared animal instances cached by name.
//!
//! The cache is a process-wide map behind a mutex, so lookups are
//! create-if-absent and safe from any thread. At most one animal exists
//! per name for the lifetime of the process.

use std::collections::HashMap;
use std::sync::Mutex;

use lazy_static::lazy_static;
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Animal {
    id: u64,
}

impl Animal {
    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn say(&self) -> String {
        format!("Hello World! I'm animal {}", self.id)
    }
}

lazy_static! {
    static ref ANIMALS: Mutex<HashMap<String, Animal>> = Mutex::new(HashMap::new());
}

pub struct AnimalFactory;

impl AnimalFactory {
    /// Returns the animal cached under `name`, creating it if absent.
    ///
    /// Repeated calls with the same name always return an animal with
    /// the same id; distinct names never share an entry.
    pub fn get_animal(name: &str) -> Animal {
        let mut animals = ANIMALS.lock().unwrap();
        *animals
            .entry(name.to_string())
            .or_insert_with(|| Animal {
                id: rand::thread_rng().gen(),
            })
    }
}
