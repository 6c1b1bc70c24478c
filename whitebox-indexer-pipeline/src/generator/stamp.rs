//! Document timestamp convention.

use chrono::{Duration, Utc};

/// Current wall-clock hour in the fixed UTC+8 zone, minutes and seconds
/// zeroed. All documents emitted within one run of an hour share the stamp.
pub(crate) fn hour_stamp() -> String {
    (Utc::now() + Duration::hours(8))
        .format("%Y-%m-%dT%H:00:00+0800")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hour_stamp_shape() {
        let stamp = hour_stamp();

        assert_eq!(stamp.len(), "2026-08-30T10:00:00+0800".len());
        assert_eq!(&stamp[10..11], "T");
        assert!(stamp.ends_with(":00:00+0800"));
    }
}
