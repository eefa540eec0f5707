//! Terse macros for everyday usage

/// Build a [`Template`](crate::tmpl::Template) from a `{}` skeleton.
///
/// ```
/// let t = shell_tmpl::sx_cmd!("grep -r {} {}", "needle", "src/").unwrap();
/// assert_eq!(t.args().len(), 2);
/// ```
#[macro_export]
macro_rules! sx_cmd {
    ($skel:expr $(,)?) => {{
        $crate::tmpl::Template::parse($skel, ::std::vec::Vec::<$crate::value::Value>::new())
    }};
    ($skel:expr, $( $arg:expr ),+ $(,)?) => {{
        $crate::tmpl::Template::parse(
            $skel,
            ::std::vec![ $( $crate::value::Value::from($arg) ),+ ],
        )
    }};
}

/// Render a `{}` skeleton with bash (ANSI-C) quoting.
///
/// ```
/// assert_eq!(shell_tmpl::sx_bash!("cmd {}", "foo bar").unwrap(), "cmd $'foo bar'");
/// ```
#[macro_export]
macro_rules! sx_bash {
    ($($t:tt)*) => {{
        $crate::sx_cmd!($($t)*).map(|t| $crate::easy::esc_bash(&t))
    }};
}

/// Render a `{}` skeleton with POSIX/dash quoting.
///
/// ```
/// assert_eq!(shell_tmpl::sx_dash!("cmd {}", "foo bar").unwrap(), "cmd foo\\ bar");
/// ```
#[macro_export]
macro_rules! sx_dash {
    ($($t:tt)*) => {{
        $crate::sx_cmd!($($t)*).map(|t| $crate::easy::esc_dash(&t))
    }};
}
