//! Prototype: clone a configured instance instead of rebuilding it.

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    hello: String,
    world: String,
}

impl Options {
    pub fn new(hello: impl Into<String>, world: impl Into<String>) -> Self {
        Self {
            hello: hello.into(),
            world: world.into(),
        }
    }

    pub fn render(&self) -> String {
        format!("{} {}", self.hello, self.world)
    }
}
