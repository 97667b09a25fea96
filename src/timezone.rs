//! Resolves the configured timezone name so "today" means the user's today.

use time::{OffsetDateTime, UtcOffset};
use time_tz::{Offset, TimeZone};

/// Get the current UTC offset for a canonical timezone name, e.g.
/// "Pacific/Auckland". Returns `None` if the name is not a known timezone.
pub fn get_local_offset(canonical_timezone: &str) -> Option<UtcOffset> {
    time_tz::timezones::get_by_name(canonical_timezone)
        .map(|tz| tz.get_offset_utc(&OffsetDateTime::now_utc()).to_utc())
}

#[cfg(test)]
mod get_local_offset_tests {
    use time::UtcOffset;

    use super::get_local_offset;

    #[test]
    fn resolves_known_timezone() {
        assert_eq!(get_local_offset("Etc/UTC"), Some(UtcOffset::UTC));
    }

    #[test]
    fn rejects_unknown_timezone() {
        assert_eq!(get_local_offset("Not/AZone"), None);
    }
}
