//! Builder: fluent, step-by-step construction of a greeting.

pub struct HelloWorld {
    hello: String,
    world: String,
}

impl HelloWorld {
    pub fn say(&self) -> String {
        format!("{} {}", self.hello, self.world)
    }
}

/// Chainable builder for [`HelloWorld`]; unset parts stay empty.
#[derive(Default)]
pub struct HelloWorldBuilder {
    hello: String,
    world: String,
}

impl HelloWorldBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn hello(mut self, hello: impl Into<String>) -> Self {
        self.hello = hello.into();
        self
    }

    pub fn world(mut self, world: impl Into<String>) -> Self {
        self.world = world.into();
        self
    }

    pub fn build(self) -> HelloWorld {
        HelloWorld {
            hello: self.hello,
            world: self.world,
        }
    }
}
