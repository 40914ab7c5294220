//! Interpreter: a one-call-form language dispatching to registered functions.

use std::collections::HashMap;

use thiserror::Error;

/// A function callable from the interpreted language.
pub trait HelloFn {
    fn invoke(&self, arg: &str) -> String;
}

/// The built-in `println` function: evaluates to its argument.
pub struct Println;

impl HelloFn for Println {
    fn invoke(&self, arg: &str) -> String {
        arg.to_string()
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum InterpretError {
    #[error("malformed expression: {0:?}")]
    Malformed(String),
    #[error("unknown function: {0:?}")]
    UnknownFunction(String),
}

/// Registry of named functions plus the tiny `name('arg')` evaluator.
#[derive(Default)]
pub struct HelloInterpreter {
    funcs: HashMap<String, Box<dyn HelloFn>>,
}

impl HelloInterpreter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reg_func(&mut self, name: impl Into<String>, f: Box<dyn HelloFn>) {
        self.funcs.insert(name.into(), f);
    }

    /// Evaluates an expression of the form `name('arg')`.
    pub fn interpret(&self, expr: &str) -> Result<String, InterpretError> {
        let malformed = || InterpretError::Malformed(expr.to_string());

        let open = expr.find('(').ok_or_else(malformed)?;
        let close = expr.rfind(')').filter(|c| *c > open).ok_or_else(malformed)?;

        let name = expr[..open].trim();
        let arg = expr[open + 1..close].trim().trim_matches('\'');

        let f = self
            .funcs
            .get(name)
            .ok_or_else(|| InterpretError::UnknownFunction(name.to_string()))?;
        Ok(f.invoke(arg))
    }
}
