//! Bridge: an abstraction delegating to a swappable implementor.

pub trait Mouth {
    fn say(&self) -> String;
}

pub struct HelloMouth;

impl Mouth for HelloMouth {
    fn say(&self) -> String {
        "Hello World".to_string()
    }
}

/// The abstraction side: speaks with whatever mouth it was given.
pub struct Person {
    mouth: Box<dyn Mouth>,
}

impl Person {
    pub fn new(mouth: Box<dyn Mouth>) -> Self {
        Self { mouth }
    }

    pub fn speak(&self) -> String {
        self.mouth.say()
    }
}
