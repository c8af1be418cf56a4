//! # linetext-core — Line-addressable text values
//!
//! This crate contains the value types that the rest of linetext builds on:
//!
//! - **[`separator`]** — which character sequences end a line, and the one
//!   canonical separator used whenever lines are joined
//! - **[`text`]** — `Text`, an immutable string with a line-oriented view
//! - **[`position`]** — `Position` (a `Location` or the "not in text"
//!   sentinel), 0-indexed
//! - **[`search`]** — literal search over a `Text`, reporting `Position`s
//! - **[`indent`]** — indentation transforms and separator canonicalization
//! - **[`error`]** — the error type shared by all fallible operations
//!
//! Reading is tolerant, writing is canonical: lines are split on `\n`,
//! `\r\n` and `\r`, but every `Text` this crate builds from lines is joined
//! with `\n` only.

pub mod error;
pub mod escape;
pub mod indent;
pub mod position;
pub mod search;
pub mod separator;
pub mod text;

pub use error::{InvalidArgument, Result, TextError};
pub use position::{BeyondText, Location, Position};
pub use separator::LineSeparator;
pub use text::Text;
