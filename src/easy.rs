//! Easy mode helpers: render for a fixed dialect, or run and parse in one call.

use crate::render::Dialect;
use crate::tmpl::Template;

/// Render `tpl` for `dialect` without running anything.
pub fn escape(dialect: Dialect, tpl: &Template) -> String {
    tpl.render(dialect)
}

pub fn esc_bash(tpl: &Template) -> String { escape(Dialect::Bash, tpl) }

pub fn esc_dash(tpl: &Template) -> String { escape(Dialect::PosixDash, tpl) }

#[cfg(feature = "exec")]
pub use self::run::*;

#[cfg(feature = "exec")]
mod run {
    use serde::de::DeserializeOwned;

    use crate::error::ExecError;
    use crate::exec::run_with;
    use crate::parse;
    use crate::tmpl::Template;

    pub async fn run_text(tpl: &Template) -> Result<String, ExecError> {
        run_with(tpl, |out| Ok(parse::text(&out))).await
    }

    pub async fn run_lines(tpl: &Template) -> Result<Vec<String>, ExecError> {
        run_with(tpl, |out| Ok(parse::lines(&out))).await
    }

    pub async fn run_null_separated(tpl: &Template) -> Result<Vec<String>, ExecError> {
        run_with(tpl, |out| Ok(parse::null_separated(&out))).await
    }

    pub async fn run_fields(tpl: &Template) -> Result<Vec<Vec<String>>, ExecError> {
        run_with(tpl, |out| Ok(parse::fields(&out))).await
    }

    pub async fn run_json<T: DeserializeOwned>(tpl: &Template) -> Result<T, ExecError> {
        run_with(tpl, |out| parse::json(&out)).await
    }
}
