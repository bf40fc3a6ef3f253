//! crates/catlog/src/tokens.rs
//! Comma-separated flag token lists shared by categories and prefix fields.

use std::fmt;

use bitflags::Flags;

use crate::error::{FlagKind, ParseFlagsError};

/// Parses a list such as `"general, network"` into a flag set.
///
/// Tokens are matched case-insensitively after trimming; empty tokens are
/// skipped. `all` selects every named flag and `none` contributes nothing.
pub(crate) fn parse_flag_list<B>(
    input: &str,
    kind: FlagKind,
    names: &[(&str, B)],
) -> Result<B, ParseFlagsError>
where
    B: Flags + Copy,
{
    let mut flags = B::empty();

    for token in input.split(',') {
        let token = token.trim();
        if token.is_empty() {
            continue;
        }

        let parsed = if token.eq_ignore_ascii_case("all") {
            B::all()
        } else if token.eq_ignore_ascii_case("none") {
            B::empty()
        } else {
            names
                .iter()
                .find(|(name, _)| token.eq_ignore_ascii_case(name))
                .map(|(_, flag)| *flag)
                .ok_or_else(|| ParseFlagsError::new(kind, token))?
        };

        flags = flags.union(parsed);
    }

    Ok(flags)
}

/// Writes the canonical token list for `flags`, or `none` when empty.
///
/// Aliases share a flag value with their canonical name; only the first name
/// listed for a flag is written.
pub(crate) fn write_flag_list<B>(
    f: &mut fmt::Formatter<'_>,
    flags: B,
    names: &[(&str, B)],
) -> fmt::Result
where
    B: Flags + Copy,
{
    let mut written = B::empty();
    let mut first = true;

    for (name, flag) in names {
        if !flags.contains(*flag) || written.contains(*flag) {
            continue;
        }
        if !first {
            f.write_str(",")?;
        }
        f.write_str(name)?;
        written = written.union(*flag);
        first = false;
    }

    if first {
        f.write_str("none")?;
    }

    Ok(())
}
