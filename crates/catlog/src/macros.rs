//! crates/catlog/src/macros.rs
//! Call-site capturing macros.

/// Expands to the path of the enclosing function as a `&'static str`.
///
/// Closures report the function they are defined in.
///
/// ```
/// fn connect() -> &'static str {
///     catlog::function_name!()
/// }
/// assert!(connect().ends_with("connect"));
/// ```
#[macro_export]
macro_rules! function_name {
    () => {{
        fn __probe() {}
        fn __type_name_of<T>(_: T) -> &'static str {
            ::core::any::type_name::<T>()
        }
        $crate::__private::trim_probe_name(__type_name_of(__probe))
    }};
}

/// Expands to a [`CallSite`](crate::CallSite) for the current location.
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new(::core::file!(), $crate::function_name!(), ::core::line!())
    };
}

/// Prints the items under `category` with the call site filled in.
///
/// Items are any [`Loggable`](crate::Loggable) expressions; `None` values are
/// skipped. Optional `separator = ...` and `terminator = ...` settings come
/// right after the category, in that order.
///
/// ```
/// use catlog::{log_print, Category};
///
/// let peer: Option<&str> = None;
/// log_print!(Category::NETWORK, "connected", 443, peer);
/// log_print!(Category::OPERATIONS, separator = ", ", "copy", "verify");
/// log_print!(Category::GENERAL, terminator = "", "progress:");
/// log_print!(Category::GENERAL, separator = "", terminator = "\n", "a", "b");
/// ```
#[macro_export]
macro_rules! log_print {
    ($category:expr, separator = $separator:expr, terminator = $terminator:expr $(, $item:expr)* $(,)?) => {
        $crate::Category::print(
            $category,
            &[$(&$item as &dyn $crate::Loggable),*],
            $crate::LineLayout::new($separator, $terminator),
            $crate::call_site!(),
        )
    };
    ($category:expr, separator = $separator:expr $(, $item:expr)* $(,)?) => {
        $crate::Category::print(
            $category,
            &[$(&$item as &dyn $crate::Loggable),*],
            $crate::LineLayout::DEFAULT.with_separator($separator),
            $crate::call_site!(),
        )
    };
    ($category:expr, terminator = $terminator:expr $(, $item:expr)* $(,)?) => {
        $crate::Category::print(
            $category,
            &[$(&$item as &dyn $crate::Loggable),*],
            $crate::LineLayout::DEFAULT.with_terminator($terminator),
            $crate::call_site!(),
        )
    };
    ($category:expr $(, $item:expr)* $(,)?) => {
        $crate::Category::print(
            $category,
            &[$(&$item as &dyn $crate::Loggable),*],
            $crate::LineLayout::DEFAULT,
            $crate::call_site!(),
        )
    };
}

/// Prints under [`Category::GENERAL`](crate::Category::GENERAL).
///
/// # Example
/// ```ignore
/// log_general!("started", version);
/// ```
#[macro_export]
macro_rules! log_general {
    ($($arg:tt)*) => {
        $crate::log_print!($crate::Category::GENERAL, $($arg)*)
    };
}

/// Prints under [`Category::NETWORK`](crate::Category::NETWORK).
///
/// # Example
/// ```ignore
/// log_network!("GET", url, status);
/// ```
#[macro_export]
macro_rules! log_network {
    ($($arg:tt)*) => {
        $crate::log_print!($crate::Category::NETWORK, $($arg)*)
    };
}

/// Prints under [`Category::OPERATIONS`](crate::Category::OPERATIONS).
///
/// # Example
/// ```ignore
/// log_operations!("import finished in", elapsed_ms, "ms");
/// ```
#[macro_export]
macro_rules! log_operations {
    ($($arg:tt)*) => {
        $crate::log_print!($crate::Category::OPERATIONS, $($arg)*)
    };
}
