//! Command: mutations on a shared receiver packaged behind one trait.

use std::cell::RefCell;
use std::rc::Rc;

use rand::Rng;

const NAMES: [&str; 3] = ["Tom", "Jerry", "Faker"];

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub age: u32,
}

impl Person {
    pub fn say(&self) -> String {
        format!("I'm {}, I am {} years old.", self.name, self.age)
    }
}

pub trait Command {
    fn execute(&self);
}

/// Gives the receiver a random name out of a fixed set.
pub struct RandName {
    pub person: Rc<RefCell<Person>>,
}

impl Command for RandName {
    fn execute(&self) {
        let pick = rand::thread_rng().gen_range(0..NAMES.len());
        self.person.borrow_mut().name = NAMES[pick].to_string();
    }
}

pub struct IncreaseAge {
    pub person: Rc<RefCell<Person>>,
}

impl Command for IncreaseAge {
    fn execute(&self) {
        self.person.borrow_mut().age += 1;
    }
}

/// Invoker: runs its command list in order.
pub struct Grow {
    pub cmds: Vec<Box<dyn Command>>,
}

impl Grow {
    pub fn call(&self) {
        for cmd in &self.cmds {
            cmd.execute();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grow_for(person: &Rc<RefCell<Person>>) -> Grow {
        Grow {
            cmds: vec![
                Box::new(RandName {
                    person: Rc::clone(person),
                }),
                Box::new(IncreaseAge {
                    person: Rc::clone(person),
                }),
            ],
        }
    }

    #[test]
    fn each_call_ages_the_person_by_one() {
        let person = Rc::new(RefCell::new(Person::default()));
        let grow = grow_for(&person);

        grow.call();
        grow.call();
        grow.call();
        assert_eq!(person.borrow().age, 3);
    }

    #[test]
    fn rand_name_picks_from_the_fixed_set() {
        let person = Rc::new(RefCell::new(Person::default()));
        let grow = grow_for(&person);

        grow.call();
        let name = person.borrow().name.clone();
        assert!(NAMES.contains(&name.as_str()));
    }

    #[test]
    fn say_reports_name_and_age() {
        let person = Person {
            name: "Tom".to_string(),
            age: 2,
        };
        assert_eq!(person.say(), "I'm Tom, I am 2 years old.");
    }
}
