/// Separator and terminator used when assembling a log line.
///
/// The separator is placed between consecutive pieces of a line (the prefix
/// and every rendered item); the terminator is appended once after the last
/// piece. The default layout joins with a single space and ends the line with
/// `\n`.
///
/// # Examples
///
/// ```
/// use catlog_sink::LineLayout;
///
/// let layout = LineLayout::default();
/// assert_eq!(layout.join(["42", "ok"]), "42 ok");
/// assert_eq!(layout.render(["42", "ok"]), "42 ok\n");
///
/// let open = layout.with_terminator("");
/// assert_eq!(open.render(["42", "ok"]), "42 ok");
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub struct LineLayout<'a> {
    separator: &'a str,
    terminator: &'a str,
}

impl LineLayout<'static> {
    /// Single-space separator, newline terminator.
    pub const DEFAULT: Self = Self::new(" ", "\n");
}

impl<'a> LineLayout<'a> {
    /// Creates a layout from an explicit separator and terminator.
    #[must_use]
    pub const fn new(separator: &'a str, terminator: &'a str) -> Self {
        Self {
            separator,
            terminator,
        }
    }

    /// Returns the string placed between consecutive pieces.
    #[must_use]
    pub const fn separator(&self) -> &'a str {
        self.separator
    }

    /// Returns the string appended after the last piece.
    #[must_use]
    pub const fn terminator(&self) -> &'a str {
        self.terminator
    }

    /// Returns a copy of the layout with `separator` replacing the current one.
    #[must_use]
    pub const fn with_separator(self, separator: &'a str) -> Self {
        Self {
            separator,
            terminator: self.terminator,
        }
    }

    /// Returns a copy of the layout with `terminator` replacing the current one.
    #[must_use]
    pub const fn with_terminator(self, terminator: &'a str) -> Self {
        Self {
            separator: self.separator,
            terminator,
        }
    }

    /// Appends `parts` to `out`, separated by the layout's separator.
    pub fn join_into<I, S>(&self, out: &mut String, parts: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for (index, part) in parts.into_iter().enumerate() {
            if index > 0 {
                out.push_str(self.separator);
            }
            out.push_str(part.as_ref());
        }
    }

    /// Joins `parts` with the layout's separator into a fresh string.
    #[must_use]
    pub fn join<I, S>(&self, parts: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = String::new();
        self.join_into(&mut out, parts);
        out
    }

    /// Joins `parts` and appends the terminator, producing the full line.
    #[must_use]
    pub fn render<I, S>(&self, parts: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut out = self.join(parts);
        out.push_str(self.terminator);
        out
    }
}

impl Default for LineLayout<'static> {
    fn default() -> Self {
        Self::DEFAULT
    }
}
