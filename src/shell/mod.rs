//! Which shell runs the command, and which dialect escapes for it.

use std::collections::HashMap;

use crate::render::Dialect;
use crate::tmpl::Template;

/// Environment variable naming the interactive shell.
pub const SHELL_VAR: &str = "SHELL";
pub const DEFAULT_SHELL: &str = "bash";

pub trait VariableResolver {
    fn get(&self, key: &str) -> Option<String>;
}

/// Reads the process environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct Env;

impl VariableResolver for Env {
    fn get(&self, key: &str) -> Option<String> { std::env::var(key).ok() }
}

/// Fixed set of variables, for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct Store { m: HashMap<String, String> }

impl Store {
    pub fn new() -> Self { Self::default() }
    pub fn with(mut self, k: &str, v: &str) -> Self { self.m.insert(k.into(), v.into()); self }
}

impl VariableResolver for Store {
    fn get(&self, key: &str) -> Option<String> { self.m.get(key).cloned() }
}

/// Pick the dialect from the shell executable's basename.
///
/// Only `bash` and `zsh` get ANSI-C quoting; anything else is assumed to be
/// a POSIX shell.
pub fn select_dialect(shell_path: &str) -> Dialect {
    let name = shell_path.rsplit('/').next().unwrap_or(shell_path);
    match name {
        "bash" | "zsh" => Dialect::Bash,
        _ => Dialect::PosixDash,
    }
}

/// A shell executable and the dialect used to escape commands for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shell {
    path: String,
    dialect: Dialect,
}

impl Shell {
    pub fn new(path: impl Into<String>) -> Self {
        let path = path.into();
        let dialect = select_dialect(&path);
        Shell { path, dialect }
    }

    /// Resolve the shell from `$SHELL`, falling back to `bash` when it is unset or empty.
    pub fn from_resolver<V: VariableResolver>(vars: &V) -> Self {
        match vars.get(SHELL_VAR) {
            Some(path) if !path.is_empty() => Shell::new(path),
            _ => Shell::new(DEFAULT_SHELL),
        }
    }

    pub fn from_env() -> Self { Self::from_resolver(&Env) }

    /// Override the dialect derived from the path.
    pub fn with_dialect(mut self, dialect: Dialect) -> Self {
        self.dialect = dialect;
        self
    }

    pub fn path(&self) -> &str { &self.path }

    pub fn dialect(&self) -> Dialect { self.dialect }

    pub fn escape(&self, tpl: &Template) -> String { tpl.render(self.dialect) }
}

impl Default for Shell {
    fn default() -> Self { Shell::new(DEFAULT_SHELL) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialect_from_basename() {
        assert_eq!(select_dialect("bash"), Dialect::Bash);
        assert_eq!(select_dialect("/bin/bash"), Dialect::Bash);
        assert_eq!(select_dialect("/usr/local/bin/zsh"), Dialect::Bash);
        assert_eq!(select_dialect("/bin/dash"), Dialect::PosixDash);
        assert_eq!(select_dialect("/bin/sh"), Dialect::PosixDash);
        assert_eq!(select_dialect("/usr/bin/fish"), Dialect::PosixDash);
        assert_eq!(select_dialect("/opt/bash/bin/mksh"), Dialect::PosixDash);
        assert_eq!(select_dialect("/bin/bash5"), Dialect::PosixDash);
    }

    #[test]
    fn resolver_defaults_to_bash() {
        let sh = Shell::from_resolver(&Store::new());
        assert_eq!(sh.path(), "bash");
        assert_eq!(sh.dialect(), Dialect::Bash);

        let sh = Shell::from_resolver(&Store::new().with(SHELL_VAR, ""));
        assert_eq!(sh.path(), "bash");
    }

    #[test]
    fn resolver_reads_shell_var() {
        let sh = Shell::from_resolver(&Store::new().with(SHELL_VAR, "/bin/dash"));
        assert_eq!(sh.path(), "/bin/dash");
        assert_eq!(sh.dialect(), Dialect::PosixDash);
    }

    #[test]
    fn explicit_dialect_wins() {
        let sh = Shell::new("/bin/sh").with_dialect(Dialect::Bash);
        let tpl = Template::parse("echo {}", ["a b"]).unwrap();
        assert_eq!(sh.escape(&tpl), "echo $'a b'");
    }
}
