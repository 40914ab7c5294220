//! Chain of responsibility: a request walks a successor-linked chain.

/// A handler node: matches on its own name or passes the request on.
pub struct Person {
    name: String,
    successor: Option<Box<Person>>,
}

/// Result of walking the chain, including how many nodes were visited.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandleOutcome {
    Handled { by: String, visited: usize },
    NotFound { visited: usize },
}

impl HandleOutcome {
    /// The line the demo prints for this outcome.
    pub fn report(&self, requested: &str) -> String {
        match self {
            HandleOutcome::Handled { by, .. } => format!("Hello World! I'm {}", by),
            HandleOutcome::NotFound { .. } => format!("{} not found in this world!", requested),
        }
    }
}

impl Person {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            successor: None,
        }
    }

    pub fn with_successor(name: impl Into<String>, successor: Person) -> Self {
        Self {
            name: name.into(),
            successor: Some(Box::new(successor)),
        }
    }

    /// Walks the chain front to back, visiting each node at most once.
    /// A chain with no match terminates with `NotFound` rather than a fault.
    pub fn handle_request(&self, name: &str) -> HandleOutcome {
        let mut node = self;
        let mut visited = 1;
        loop {
            if node.name == name {
                return HandleOutcome::Handled {
                    by: node.name.clone(),
                    visited,
                };
            }
            match &node.successor {
                Some(next) => {
                    node = next;
                    visited += 1;
                }
                None => return HandleOutcome::NotFound { visited },
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn the_world() -> Person {
        let peter = Person::new("Peter");
        let fox = Person::with_successor("Fox", peter);
        let steven = Person::with_successor("Steven", fox);
        Person::with_successor("", steven)
    }

    #[test]
    fn match_at_depth_k_visits_k_plus_one_nodes() {
        let chain = the_world();
        assert_eq!(
            chain.handle_request("Steven"),
            HandleOutcome::Handled {
                by: "Steven".to_string(),
                visited: 2
            }
        );
        assert_eq!(
            chain.handle_request("Peter"),
            HandleOutcome::Handled {
                by: "Peter".to_string(),
                visited: 4
            }
        );
    }

    #[test]
    fn miss_visits_every_node() {
        let chain = the_world();
        assert_eq!(
            chain.handle_request("Tom"),
            HandleOutcome::NotFound { visited: 4 }
        );
    }

    #[test]
    fn outcome_reports_the_demo_lines() {
        let chain = the_world();
        assert_eq!(
            chain.handle_request("Fox").report("Fox"),
            "Hello World! I'm Fox"
        );
        assert_eq!(
            chain.handle_request("Tom").report("Tom"),
            "Tom not found in this world!"
        );
    }

    #[test]
    fn single_node_chain() {
        let alone = Person::new("Peter");
        assert_eq!(
            alone.handle_request("Peter"),
            HandleOutcome::Handled {
                by: "Peter".to_string(),
                visited: 1
            }
        );
        assert_eq!(
            alone.handle_request("Fox"),
            HandleOutcome::NotFound { visited: 1 }
        );
    }
}
