//! crates/print/src/callsite.rs
//! Identity of the code location that issued a print call.

use std::fmt;

/// Function name and line of a print call site.
///
/// Built by the [`callsite!`](crate::callsite) macro so the location is
/// captured where the macro expands, not inside the shared facade.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct CallSite {
    function: &'static str,
    line: u32,
}

impl CallSite {
    /// Creates a call site from a function path and a line.
    ///
    /// `function_path` may be a fully qualified path; only its last
    /// meaningful segment is kept (see [`enclosing_function`]).
    #[must_use]
    pub fn new(function_path: &'static str, line: u32) -> Self {
        Self {
            function: enclosing_function(function_path),
            line,
        }
    }

    /// Returns the bare name of the enclosing function.
    #[must_use]
    pub const fn function(&self) -> &'static str {
        self.function
    }

    /// Returns the source line of the call.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }
}

impl fmt::Display for CallSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.function, self.line)
    }
}

// Marker item the `callsite!` macro declares inside the caller.
const MARKER_SUFFIX: &str = "::__print_callsite";

/// Reduces a type path produced inside a function to that function's name.
///
/// Strips the marker item, closure segments, and the leading module path:
/// `app::net::connect::{{closure}}::__print_callsite` becomes `connect`.
///
/// ```
/// use print::enclosing_function;
///
/// assert_eq!(enclosing_function("app::net::connect::__print_callsite"), "connect");
/// assert_eq!(enclosing_function("app::run::{{closure}}::__print_callsite"), "run");
/// assert_eq!(enclosing_function("main"), "main");
/// ```
#[must_use]
pub fn enclosing_function(path: &'static str) -> &'static str {
    let mut path = path.strip_suffix(MARKER_SUFFIX).unwrap_or(path);
    while let Some(outer) = path.strip_suffix("::{{closure}}") {
        path = outer;
    }
    match path.rfind("::") {
        Some(index) => &path[index + 2..],
        None => path,
    }
}

/// Captures the [`CallSite`] of the expansion point.
///
/// ```
/// fn connect() -> print::CallSite {
///     print::callsite!()
/// }
///
/// let site = connect();
/// assert_eq!(site.function(), "connect");
/// assert!(site.line() > 0);
/// ```
#[macro_export]
macro_rules! callsite {
    () => {{
        fn __print_callsite() {}
        fn __print_type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        $crate::CallSite::new(__print_type_name_of(__print_callsite), ::core::line!())
    }};
}
