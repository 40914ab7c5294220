//! Behavioral patterns: routing requests across collaborating objects.

pub mod chain_of_responsibility;
pub mod command;
pub mod interpreter;
pub mod mediator;
pub mod memento;
pub mod state;
pub mod visitor;
