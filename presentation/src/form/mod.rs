//! Interactive medication form
//!
//! [`FormRepl`] reads commands with rustyline and applies them to a
//! `FormController`; [`FormPresenter`] renders the resulting events.

pub mod presenter;
pub mod repl;

pub use presenter::FormPresenter;
pub use repl::{FormCommand, FormRepl};
