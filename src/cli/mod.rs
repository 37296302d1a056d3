//! Interactive front end
//!
//! Bridges line-oriented user input with the expense store: form validation
//! on the way in, table and totals rendering on the way out.

pub mod form;
pub mod shell;

pub use form::{today, ExpenseForm};
pub use shell::{split_args, Flow, Shell, ShellCommand};
