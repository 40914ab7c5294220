//! Facade: one call that drives a couple of subsystem objects.

#[derive(Default)]
pub struct Tom;

impl Tom {
    pub fn say_tom(&self) -> String {
        "Hello World! I'm Tom".to_string()
    }
}

#[derive(Default)]
pub struct Jerry;

impl Jerry {
    pub fn say_jerry(&self) -> String {
        "Hello World! I'm Jerry".to_string()
    }
}

#[derive(Default)]
pub struct House {
    tom: Tom,
    jerry: Jerry,
}

impl House {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn all_say(&self) -> Vec<String> {
        vec![self.tom.say_tom(), self.jerry.say_jerry()]
    }
}
