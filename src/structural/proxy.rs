//! Proxy: defer building the real subject until the first request.

use std::cell::OnceCell;

pub trait Subject {
    fn request(&self) -> String;
}

pub struct TomSubject;

impl Subject for TomSubject {
    fn request(&self) -> String {
        "Hello World! I'm Tom".to_string()
    }
}

#[derive(Default)]
pub struct Proxy {
    tom: OnceCell<TomSubject>,
}

impl Proxy {
    pub fn new() -> Self {
        Self::default()
    }

    /// True once the real subject has been constructed.
    pub fn initialized(&self) -> bool {
        self.tom.get().is_some()
    }
}

impl Subject for Proxy {
    fn request(&self) -> String {
        self.tom.get_or_init(|| TomSubject).request()
    }
}
