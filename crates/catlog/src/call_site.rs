//! crates/catlog/src/call_site.rs
//! Source location of a print call.

/// File, enclosing function, and line of the expression that issued a print.
///
/// The [`call_site!`](crate::call_site) macro captures these automatically;
/// callers without macros construct the value with [`CallSite::new`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct CallSite {
    file: &'static str,
    function: &'static str,
    line: u32,
}

impl CallSite {
    /// Creates a call site from explicit parts.
    #[must_use]
    pub const fn new(file: &'static str, function: &'static str, line: u32) -> Self {
        Self {
            file,
            function,
            line,
        }
    }

    /// Source file path as reported by `file!()`.
    #[must_use]
    pub const fn file(&self) -> &'static str {
        self.file
    }

    /// Path of the enclosing function, for example `app::net::connect`.
    #[must_use]
    pub const fn function(&self) -> &'static str {
        self.function
    }

    /// One-based source line.
    #[must_use]
    pub const fn line(&self) -> u32 {
        self.line
    }
}

/// Strips the helper suffixes left by [`function_name!`](crate::function_name).
///
/// `type_name` of the probe function reads `path::to::caller::__probe`,
/// with one `::{{closure}}` segment per enclosing closure in between.
#[doc(hidden)]
#[must_use]
pub fn trim_probe_name(name: &'static str) -> &'static str {
    let mut name = name.strip_suffix("::__probe").unwrap_or(name);
    while let Some(stripped) = name.strip_suffix("::{{closure}}") {
        name = stripped;
    }
    name
}
