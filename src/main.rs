//! Demonstration driver: exercises every pattern once, in a fixed order,
//! and prints one labeled section per pattern.

use std::cell::RefCell;
use std::rc::Rc;

use colored::Colorize;

use hello_design_patterns::behavioral::chain_of_responsibility;
use hello_design_patterns::behavioral::command::{self, Grow, IncreaseAge, RandName};
use hello_design_patterns::behavioral::interpreter::{HelloInterpreter, Println};
use hello_design_patterns::behavioral::mediator::{Colleague, Mediator};
use hello_design_patterns::behavioral::memento::{CareTaker, Originator};
use hello_design_patterns::behavioral::state;
use hello_design_patterns::creational::abstract_factory::{
    ExtremeSpeakerFactory, SimpleSpeakerFactory, SpeakerFactory,
};
use hello_design_patterns::creational::builder::HelloWorldBuilder;
use hello_design_patterns::creational::factory_method::{
    self, HelloWorldFactory, SpeakerFactory as _,
};
use hello_design_patterns::creational::prototype::Options;
use hello_design_patterns::creational::singleton;
use hello_design_patterns::structural::adapter::{self, Adapter, Speaker as _};
use hello_design_patterns::structural::bridge::{HelloMouth, Person as BridgePerson};
use hello_design_patterns::structural::composite::{self, Speaker as _, World};
use hello_design_patterns::structural::decorator::{self, AnnoyingPerson, Person as _};
use hello_design_patterns::structural::facade;
use hello_design_patterns::structural::flyweight::AnimalFactory;
use hello_design_patterns::structural::proxy::{Proxy, Subject as _};

fn try_abstract_factory(factory: &dyn SpeakerFactory) {
    let positive = factory.create_positive_speaker();
    let negative = factory.create_negative_speaker();
    println!("{}", positive.good_say());
    println!("{}", negative.bad_say());
}

fn main() {
    println!("{}\n", "We are creational patterns!".bold());

    println!("1. Abstract Factory: ");
    try_abstract_factory(&SimpleSpeakerFactory);
    try_abstract_factory(&ExtremeSpeakerFactory);
    println!();

    println!("2. Builder: ");
    let hw = HelloWorldBuilder::new().hello("hello").world("world").build();
    println!("{}", hw.say());
    println!();

    println!("3. Factory method: ");
    let speaker: factory_method::Speaker = HelloWorldFactory.create_speaker();
    println!("{}", speaker.words);
    println!();

    println!("4. Prototype: ");
    let options = Options::new("hello", "world");
    println!("{}", options.clone().render());
    println!();

    println!("5. Singleton: ");
    println!("{}", singleton::HelloWorld::instance().say());
    println!("{}", singleton::HelloWorld::instance().say());

    println!("\n{}\n", "We are structural patterns!".bold());

    println!("6. Adapter: ");
    let target: Box<dyn adapter::Speaker> = Box::new(Adapter::new(adapter::HelloWorld));
    println!("{}", target.say());
    println!();

    println!("7. Bridge: ");
    let tom = BridgePerson::new(Box::new(HelloMouth));
    println!("{}", tom.speak());
    println!();

    println!("8. Composite: ");
    let world = World {
        speakers: vec![Box::new(composite::Tom), Box::new(composite::Jerry)],
    };
    println!("{}", world.say());
    println!();

    println!("9. Decorator: ");
    let dec = AnnoyingPerson::new(Box::new(decorator::Tom));
    println!("{}", dec.say());
    println!();

    println!("10. Facade: ");
    let house = facade::House::new();
    for line in house.all_say() {
        println!("{}", line);
    }
    println!();

    println!("11. Flyweight: ");
    println!("{}", AnimalFactory::get_animal("Tom").say());
    println!("{}", AnimalFactory::get_animal("Tom").say());
    println!("{}", AnimalFactory::get_animal("Jerry").say());
    println!("{}", AnimalFactory::get_animal("Tom").say());
    println!("{}", AnimalFactory::get_animal("Jerry").say());
    println!();

    println!("12. Proxy: ");
    let proxy = Proxy::new();
    println!("{}", proxy.request());
    println!();

    println!("{}\n", "We are behavioral patterns!".bold());

    println!("13. Chain of Responsibility: ");
    let peter = chain_of_responsibility::Person::new("Peter");
    let fox = chain_of_responsibility::Person::with_successor("Fox", peter);
    let steven = chain_of_responsibility::Person::with_successor("Steven", fox);
    let the_world = chain_of_responsibility::Person::with_successor("", steven);

    for name in ["Peter", "Fox", "Tom"] {
        println!("{}", the_world.handle_request(name).report(name));
    }
    println!();

    println!("14. Command: ");
    let person = Rc::new(RefCell::new(command::Person::default()));
    let grow = Grow {
        cmds: vec![
            Box::new(RandName {
                person: Rc::clone(&person),
            }),
            Box::new(IncreaseAge {
                person: Rc::clone(&person),
            }),
        ],
    };
    for _ in 0..3 {
        grow.call();
        println!("{}", person.borrow().say());
    }
    println!();

    println!("15. Interpreter: ");
    let mut hello_inter = HelloInterpreter::new();
    hello_inter.reg_func("println", Box::new(Println));
    match hello_inter.interpret("println('hello world')") {
        Ok(output) => println!("{}", output),
        Err(err) => println!("{}", err),
    }
    println!();

    println!("16. Iterator: ");
    println!("skip\n");

    println!("17. Mediator: ");
    let mut mediator = Mediator::new();
    mediator.register(Colleague::new(1));
    mediator.register(Colleague::new(2));
    mediator.register(Colleague::new(3));

    for (to, msg) in [(2, "Hello Tom"), (1, "Hello Jerry"), (1, "Hello Jerry")] {
        match mediator.send(to, msg) {
            Ok(line) => println!("{}", line),
            Err(err) => println!("{}", err),
        }
    }
    println!();

    println!("18. Memento: ");
    let mut originator = Originator::default();
    let mut care_taker = CareTaker::new();
    originator.state = "Hello World".to_string();
    care_taker.add(originator.save());
    originator.state = "Goodbye World".to_string();
    care_taker.add(originator.save());
    println!("Current State: {}", originator.state);
    if let Some(snapshot) = care_taker.get(0) {
        originator.restore(snapshot);
    }
    println!("Current State: {}", originator.state);
    println!();

    println!("19. Observer: ");
    println!("skip");
    println!();

    println!("20. State: ");
    let mut ctx = state::Context::new();
    println!("{}", ctx.request());
    println!("{}", ctx.request());
    println!("{}", ctx.request());
}
