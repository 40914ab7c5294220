//! Abstract factory: families of speakers built through a factory trait.

pub trait PositiveSpeaker {
    fn good_say(&self) -> String;
}

pub trait NegativeSpeaker {
    fn bad_say(&self) -> String;
}

/// The abstract factory: one creation method per product family member.
pub trait SpeakerFactory {
    fn create_positive_speaker(&self) -> Box<dyn PositiveSpeaker>;
    fn create_negative_speaker(&self) -> Box<dyn NegativeSpeaker>;
}

pub struct SimplePositiveSpeaker;

impl PositiveSpeaker for SimplePositiveSpeaker {
    fn good_say(&self) -> String {
        "Hello World!".to_string()
    }
}

pub struct SimpleNegativeSpeaker;

impl NegativeSpeaker for SimpleNegativeSpeaker {
    fn bad_say(&self) -> String {
        "Goodbye World!".to_string()
    }
}

pub struct SimpleSpeakerFactory;

impl SpeakerFactory for SimpleSpeakerFactory {
    fn create_positive_speaker(&self) -> Box<dyn PositiveSpeaker> {
        Box::new(SimplePositiveSpeaker)
    }

    fn create_negative_speaker(&self) -> Box<dyn NegativeSpeaker> {
        Box::new(SimpleNegativeSpeaker)
    }
}

pub struct ExtremePositiveSpeaker;

impl PositiveSpeaker for ExtremePositiveSpeaker {
    fn good_say(&self) -> String {
        "Hello Hello Hello World Very Very Very Much!!!".to_string()
    }
}

pub struct ExtremeNegativeSpeaker;

impl NegativeSpeaker for ExtremeNegativeSpeaker {
    fn bad_say(&self) -> String {
        "Goodbye Goodbye Goodbye World Very Very Very Much!!!".to_string()
    }
}

pub struct ExtremeSpeakerFactory;

impl SpeakerFactory for ExtremeSpeakerFactory {
    fn create_positive_speaker(&self) -> Box<dyn PositiveSpeaker> {
        Box::new(ExtremePositiveSpeaker)
    }

    fn create_negative_speaker(&self) -> Box<dyn NegativeSpeaker> {
        Box::new(ExtremeNegativeSpeaker)
    }
}
