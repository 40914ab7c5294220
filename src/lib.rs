//! Hello-world sized implementations of the classic GoF design patterns.
//!
//! Each pattern lives in its own module under one of the three classic
//! groups, with just enough types to show the pattern's shape. The
//! `hello-design-patterns` binary walks through every module in order
//! and prints one short demonstration per pattern.
//!
//! Run the full tour with:
//! ```bash
//! cargo run
//! ```

pub mod behavioral;
pub mod creational;
pub mod structural;
