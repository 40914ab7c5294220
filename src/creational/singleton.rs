//! Singleton: one process-wide instance behind a one-shot initializer.

use std::sync::OnceLock;

use rand::Rng;

pub struct HelloWorld {
    id: u64,
}

impl HelloWorld {
    /// Returns the shared instance, constructing it on first call.
    ///
    /// The id is drawn once; every caller on every thread sees the same
    /// instance at the same address afterwards.
    pub fn instance() -> &'static HelloWorld {
        static INSTANCE: OnceLock<HelloWorld> = OnceLock::new();
        INSTANCE.get_or_init(|| HelloWorld {
            id: rand::thread_rng().gen(),
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn say(&self) -> String {
        format!("hello world: {}", self.id)
    }
}
