//! shell_tmpl: build shell commands from a literal skeleton plus escaped
//! values, then run them and parse the output.
//!
//! Values are escaped per dialect: ANSI-C quoting for bash and zsh, octal
//! double-quoted runs for dash and other POSIX shells. The literal skeleton is
//! never inspected.

pub mod error;
pub mod value;
pub mod tmpl;
pub mod render;
pub mod shell;
pub mod parse;
#[cfg(feature = "exec")]
pub mod exec;
pub mod prelude;
pub mod easy;
pub mod macros;

pub use error::{ExecError, SyntaxError};
