//! State: a context cycling through a closed set of moods.

/// The closed state set. `Undefined` only ever appears as the starting
/// state; the transition table maps it to `Good` on the first request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mood {
    Good,
    Bad,
    #[default]
    Undefined,
}

impl Mood {
    /// Total transition table: Good -> Bad, Bad -> Good, Undefined -> Good.
    pub fn next(self) -> Mood {
        match self {
            Mood::Good => Mood::Bad,
            Mood::Bad | Mood::Undefined => Mood::Good,
        }
    }
}

#[derive(Debug, Default)]
pub struct Context {
    state: Mood,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> Mood {
        self.state
    }

    /// Applies one transition, then reports the new state's line.
    pub fn request(&mut self) -> &'static str {
        self.state = self.state.next();
        match self.state {
            Mood::Bad => "Hello World! I'm bad",
            // next() never yields Undefined, so the rest is Good.
            Mood::Good | Mood::Undefined => "Hello World! I'm good",
        }
    }
}
