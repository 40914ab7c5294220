//! Factory method: creation deferred to a factory trait implementation.

pub struct Speaker {
    pub words: String,
}

pub trait SpeakerFactory {
    fn create_speaker(&self) -> Speaker;
}

pub struct HelloWorldFactory;

impl SpeakerFactory for HelloWorldFactory {
    fn create_speaker(&self) -> Speaker {
        Speaker {
            words: "Hello World".to_string(),
        }
    }
}
