//! crates/catlog/src/item.rs
//! Values accepted as items of a print call.

use std::borrow::Cow;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

use catlog_sink::LineLayout;

/// A value that can appear among the items of a print call.
///
/// Items render to their human-readable text. Absent values (`None`, at any
/// nesting depth) render to nothing and are dropped from the line instead of
/// leaving a placeholder. Wrap any other [`Display`](fmt::Display) type with
/// [`display`] or any [`Debug`](fmt::Debug) type with [`debug`].
pub trait Loggable {
    /// Text for this item, or `None` when the item should be skipped.
    fn log_text(&self) -> Option<String>;
}

macro_rules! impl_loggable_via_display {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Loggable for $ty {
                fn log_text(&self) -> Option<String> {
                    Some(self.to_string())
                }
            }
        )*
    };
}

impl_loggable_via_display!(
    str, String, char, bool,
    i8, i16, i32, i64, i128, isize,
    u8, u16, u32, u64, u128, usize,
    f32, f64,
    std::net::IpAddr, std::net::Ipv4Addr, std::net::Ipv6Addr, std::net::SocketAddr,
    std::io::Error,
    time::OffsetDateTime, time::Duration,
    crate::Category, crate::PrefixMode,
);

impl Loggable for fmt::Arguments<'_> {
    fn log_text(&self) -> Option<String> {
        Some(fmt::format(*self))
    }
}

impl Loggable for Cow<'_, str> {
    fn log_text(&self) -> Option<String> {
        Some(self.as_ref().to_owned())
    }
}

impl<T> Loggable for Option<T>
where
    T: Loggable,
{
    fn log_text(&self) -> Option<String> {
        self.as_ref().and_then(Loggable::log_text)
    }
}

impl<T> Loggable for &T
where
    T: Loggable + ?Sized,
{
    fn log_text(&self) -> Option<String> {
        (**self).log_text()
    }
}

impl<T> Loggable for &mut T
where
    T: Loggable + ?Sized,
{
    fn log_text(&self) -> Option<String> {
        (**self).log_text()
    }
}

impl<T> Loggable for Box<T>
where
    T: Loggable + ?Sized,
{
    fn log_text(&self) -> Option<String> {
        (**self).log_text()
    }
}

impl<T> Loggable for Rc<T>
where
    T: Loggable + ?Sized,
{
    fn log_text(&self) -> Option<String> {
        (**self).log_text()
    }
}

impl<T> Loggable for Arc<T>
where
    T: Loggable + ?Sized,
{
    fn log_text(&self) -> Option<String> {
        (**self).log_text()
    }
}

/// Item wrapper rendering through [`Display`](fmt::Display).
#[derive(Clone, Copy, Debug)]
pub struct Shown<T>(pub T);

impl<T> Loggable for Shown<T>
where
    T: fmt::Display,
{
    fn log_text(&self) -> Option<String> {
        Some(self.0.to_string())
    }
}

/// Item wrapper rendering through [`Debug`](fmt::Debug).
#[derive(Clone, Copy, Debug)]
pub struct Debugged<T>(pub T);

impl<T> Loggable for Debugged<T>
where
    T: fmt::Debug,
{
    fn log_text(&self) -> Option<String> {
        Some(format!("{:?}", self.0))
    }
}

/// Wraps a [`Display`](fmt::Display) value so it can be passed as an item.
///
/// ```
/// use std::path::Path;
/// use catlog::{display, Loggable};
///
/// let path = Path::new("/tmp/cache");
/// assert_eq!(display(path.display()).log_text().as_deref(), Some("/tmp/cache"));
/// ```
pub const fn display<T: fmt::Display>(value: T) -> Shown<T> {
    Shown(value)
}

/// Wraps a [`Debug`](fmt::Debug) value so it can be passed as an item.
pub const fn debug<T: fmt::Debug>(value: T) -> Debugged<T> {
    Debugged(value)
}

/// Renders `items`, drops the absent ones, and joins the rest with the
/// layout's separator.
///
/// The result is empty, not absent, when every item was dropped.
#[must_use]
pub fn render_statement(items: &[&dyn Loggable], layout: LineLayout<'_>) -> String {
    layout.join(items.iter().filter_map(|item| item.log_text()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_items_are_dropped_not_rendered() {
        let missing: Option<i32> = None;
        let statement = render_statement(&[&42, &missing, &"ok"], LineLayout::DEFAULT);
        assert_eq!(statement, "42 ok");
    }

    #[test]
    fn nested_options_flatten() {
        let present: Option<Option<&str>> = Some(Some("inner"));
        let hollow: Option<Option<&str>> = Some(None);
        assert_eq!(present.log_text().as_deref(), Some("inner"));
        assert_eq!(hollow.log_text(), None);
    }

    #[test]
    fn separator_applies_between_items() {
        let statement = render_statement(&[&1u8, &2.5f64, &'c', &true], LineLayout::new(", ", ""));
        assert_eq!(statement, "1, 2.5, c, true");
    }

    #[test]
    fn all_absent_items_give_empty_statement() {
        let missing: Option<String> = None;
        assert_eq!(render_statement(&[&missing], LineLayout::DEFAULT), "");
        assert_eq!(render_statement(&[], LineLayout::DEFAULT), "");
    }

    #[test]
    fn wrappers_use_display_and_debug() {
        let path = std::path::Path::new("/var/log");
        assert_eq!(display(path.display()).log_text().as_deref(), Some("/var/log"));
        assert_eq!(debug(vec![1, 2]).log_text().as_deref(), Some("[1, 2]"));
        assert_eq!(debug("quoted").log_text().as_deref(), Some("\"quoted\""));
    }

    #[test]
    fn smart_pointers_delegate() {
        let boxed: Box<str> = "boxed".into();
        let shared = Arc::new(String::from("shared"));
        let counted = Rc::new(7u16);
        let owned: Cow<'_, str> = Cow::Owned(String::from("cow"));
        assert_eq!(boxed.log_text().as_deref(), Some("boxed"));
        assert_eq!(shared.log_text().as_deref(), Some("shared"));
        assert_eq!(counted.log_text().as_deref(), Some("7"));
        assert_eq!(owned.log_text().as_deref(), Some("cow"));
    }

    #[test]
    fn flag_sets_render_their_names() {
        assert_eq!(crate::Category::NETWORK.log_text().as_deref(), Some("network"));
    }
}
