//! Visitor: operations over a closed set of person variants.

/// The visitable variants. A closed enum keeps dispatch exhaustive at
/// compile time instead of downcasting at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Person {
    Tom,
    Jerry,
}

impl Person {
    pub fn name(&self) -> &'static str {
        match self {
            Person::Tom => "Tom",
            Person::Jerry => "Jerry",
        }
    }

    pub fn accept(&self, visitor: &dyn PersonVisitor) -> String {
        visitor.visit(*self)
    }
}

pub trait PersonVisitor {
    fn visit(&self, person: Person) -> String;
}

pub struct Greeter;

impl PersonVisitor for Greeter {
    fn visit(&self, person: Person) -> String {
        format!("Hello World! You are {}", person.name())
    }
}

/// Element collection: visits every resident in insertion order.
pub struct House {
    persons: Vec<Person>,
}

impl Default for House {
    fn default() -> Self {
        Self {
            persons: vec![Person::Tom, Person::Jerry],
        }
    }
}

impl House {
    pub fn new(persons: Vec<Person>) -> Self {
        Self { persons }
    }

    pub fn accept(&self, visitor: &dyn PersonVisitor) -> Vec<String> {
        self.persons.iter().map(|p| p.accept(visitor)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn greeter_names_each_variant() {
        assert_eq!(Person::Tom.accept(&Greeter), "Hello World! You are Tom");
        assert_eq!(Person::Jerry.accept(&Greeter), "Hello World! You are Jerry");
    }

    #[test]
    fn house_visits_residents_in_order() {
        let house = House::default();
        assert_eq!(
            house.accept(&Greeter),
            vec!["Hello World! You are Tom", "Hello World! You are Jerry"]
        );
    }

    #[test]
    fn another_visitor_reuses_the_same_elements() {
        struct Counter;

        impl PersonVisitor for Counter {
            fn visit(&self, person: Person) -> String {
                person.name().len().to_string()
            }
        }

        let house = House::new(vec![Person::Jerry, Person::Tom]);
        assert_eq!(house.accept(&Counter), vec!["5", "3"]);
    }
}
