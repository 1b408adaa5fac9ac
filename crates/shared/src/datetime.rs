use time::{OffsetDateTime, format_description::well_known::Rfc3339};

/// Current time as a unix timestamp in seconds.
pub fn now_unix() -> i64 {
    OffsetDateTime::now_utc().unix_timestamp()
}

/// Render a stored unix timestamp as an RFC 3339 UTC string for the wire.
pub fn unix_to_rfc3339(ts: i64) -> Result<String, time::Error> {
    Ok(OffsetDateTime::from_unix_timestamp(ts)?.format(&Rfc3339)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_epoch_renders_utc() {
        assert_eq!(unix_to_rfc3339(0).unwrap(), "1970-01-01T00:00:00Z");
    }

    #[test]
    fn test_round_date() {
        assert_eq!(unix_to_rfc3339(1_700_000_000).unwrap(), "2023-11-14T22:13:20Z");
    }

    #[test]
    fn test_now_is_after_2020() {
        assert!(now_unix() > 1_577_836_800);
    }
}
