//! Adapter: wrap an incompatible type behind the interface callers expect.

/// Target interface the client code works against.
pub trait Speaker {
    fn say(&self) -> String;
}

/// Existing type with the right behavior but the wrong method name.
pub struct HelloWorld;

impl HelloWorld {
    pub fn say_hello(&self) -> String {
        "Hello World".to_string()
    }
}

pub struct Adapter {
    hw: HelloWorld,
}

impl Adapter {
    pub fn new(hw: HelloWorld) -> Self {
        Self { hw }
    }
}

impl Speaker for Adapter {
    fn say(&self) -> String {
        self.hw.say_hello()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adapter_forwards_to_the_adaptee() {
        let target: Box<dyn Speaker> = Box::new(Adapter::new(HelloWorld));
        assert_eq!(target.say(), HelloWorld.say_hello());
    }
}
