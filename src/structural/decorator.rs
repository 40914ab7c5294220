//! Decorator: forward the call, then add one extra behavior.

pub trait Person {
    fn say(&self) -> String;
}

pub struct Tom;

impl Person for Tom {
    fn say(&self) -> String {
        "Hello World! I'm Tom".to_string()
    }
}

/// Wraps any [`Person`] and tacks an extra line onto whatever it says.
pub struct AnnoyingPerson {
    inner: Box<dyn Person>,
}

impl AnnoyingPerson {
    pub fn new(inner: Box<dyn Person>) -> Self {
        Self { inner }
    }
}

impl Person for AnnoyingPerson {
    fn say(&self) -> String {
        format!("{}\nI'm annoying!", self.inner.say())
    }
}
