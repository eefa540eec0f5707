//! shell_tmpl::prelude - grab-and-go imports for building and running commands

pub use crate::easy::{esc_bash, esc_dash, escape};
pub use crate::error::{ExecError, ExecFailure, ExitInfo, ParseError, SyntaxError};
pub use crate::render::{Dialect, Escaper};
pub use crate::shell::{Shell, Store, VariableResolver};
pub use crate::tmpl::Template;
pub use crate::value::{Number, Value};
pub use crate::{sx_bash, sx_cmd, sx_dash};

#[cfg(feature = "exec")]
pub use crate::easy::{run_fields, run_json, run_lines, run_null_separated, run_text};
#[cfg(feature = "exec")]
pub use crate::exec::run_with;
