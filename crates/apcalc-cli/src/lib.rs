//! # apcalc-cli
//!
//! Front-end plumbing for apcalc: expression tokenizing, the interactive
//! REPL, result presentation, console styling and shell completion.

pub mod completion;
pub mod expression;
pub mod output;
pub mod presenter;
pub mod repl;
pub mod ui;

pub use expression::{Expression, ExpressionError};
pub use presenter::CliPresenter;
pub use repl::Repl;
