//! Composite: a group of speakers that is itself a speaker.

pub trait Speaker {
    fn say(&self) -> String;
}

pub struct Tom;

impl Speaker for Tom {
    fn say(&self) -> String {
        "Hello World! I'm Tom".to_string()
    }
}

pub struct Jerry;

impl Speaker for Jerry {
    fn say(&self) -> String {
        "Hello World! I'm Jerry".to_string()
    }
}

pub struct World {
    pub speakers: Vec<Box<dyn Speaker>>,
}

impl Speaker for World {
    /// One line per child, in insertion order.
    fn say(&self) -> String {
        self.speakers
            .iter()
            .map(|s| s.say())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn world_speaks_for_every_member() {
        let world = World {
            speakers: vec![Box::new(Tom), Box::new(Jerry)],
        };
        assert_eq!(world.say(), "Hello World! I'm Tom\nHello World! I'm Jerry");
    }

    #[test]
    fn empty_world_is_silent() {
        let world = World { speakers: vec![] };
        assert_eq!(world.say(), "");
    }

    #[test]
    fn worlds_nest() {
        let inner = World {
            speakers: vec![Box::new(Jerry)],
        };
        let outer = World {
            speakers: vec![Box::new(Tom), Box::new(inner)],
        };
        assert_eq!(outer.say(), "Hello World! I'm Tom\nHello World! I'm Jerry");
    }
}
