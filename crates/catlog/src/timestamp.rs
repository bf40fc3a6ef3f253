//! crates/catlog/src/timestamp.rs
//! Wall-clock formatting for the date prefix field.

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::OffsetDateTime;

/// `yyyy.MM.dd HH:mm`, 24-hour clock, no seconds, no offset.
pub(crate) const PREFIX_TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] = format_description!(
    "[year].[month padding:zero].[day padding:zero] [hour padding:zero repr:24]:[minute padding:zero]"
);

/// Current time in the local offset, or UTC when the offset is unavailable.
pub(crate) fn now() -> OffsetDateTime {
    OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc())
}

/// Formats `timestamp` for the date prefix field.
///
/// A formatting failure leaves the field out and is reported at debug level.
pub(crate) fn format_timestamp(timestamp: OffsetDateTime) -> Option<String> {
    match timestamp.format(PREFIX_TIMESTAMP_FORMAT) {
        Ok(formatted) => Some(formatted),
        Err(error) => {
            tracing::debug!(target: "catlog::prefix", %error, "failed to format prefix timestamp");
            None
        }
    }
}
