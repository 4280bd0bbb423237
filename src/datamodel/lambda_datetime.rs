pub type LambdaDateTime = hifitime::Epoch;

use hifitime::{UNIX_REF_EPOCH, Unit};

const NANOSECONDS_PER_SECOND: i128 = 1_000_000_000;

pub trait LambdaDateTimeExt {
    fn from_unix_seconds_and_nanos(seconds: i64, nanos: u32) -> Self;
    fn to_unix_seconds_and_nanos(&self) -> (i64, u32);
    fn to_unix_seconds_i64(&self) -> i64;
}

impl LambdaDateTimeExt for LambdaDateTime {
    fn from_unix_seconds_and_nanos(seconds: i64, nanos: u32) -> Self {
        Self::from_utc_duration(
            UNIX_REF_EPOCH.to_utc_duration()
                + seconds * Unit::Second
                + i64::from(nanos) * Unit::Nanosecond,
        )
    }

    fn to_unix_seconds_and_nanos(&self) -> (i64, u32) {
        // Both sides are taken on the UTC scale so leap seconds cancel out.
        let since_unix = self.to_utc_duration() - UNIX_REF_EPOCH.to_utc_duration();
        let total = since_unix.total_nanoseconds();
        let seconds = total.div_euclid(NANOSECONDS_PER_SECOND) as i64;
        let nanos = total.rem_euclid(NANOSECONDS_PER_SECOND) as u32;
        (seconds, nanos)
    }

    fn to_unix_seconds_i64(&self) -> i64 {
        self.to_unix_seconds_and_nanos().0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_send<T: Send>() {}

    #[test]
    fn test_send() {
        assert_send::<LambdaDateTime>();
    }

    #[test]
    fn test_seconds_and_nanos_roundtrip() {
        let test_cases: &[(i64, u32)] = &[
            (0, 0),
            (1704067200, 0),           // Jan 1, 2024 00:00:00 UTC
            (1704067200, 123_000_000), // With subsecond precision
            (1760832000, 999_999_999),
        ];

        for &(seconds, nanos) in test_cases {
            let epoch = LambdaDateTime::from_unix_seconds_and_nanos(seconds, nanos);
            assert_eq!(
                epoch.to_unix_seconds_and_nanos(),
                (seconds, nanos),
                "seconds and nanos should roundtrip for {}.{}",
                seconds,
                nanos
            );
        }
    }

    #[test]
    fn test_unix_seconds_matches_hifitime() {
        let epoch = LambdaDateTime::from_unix_seconds_and_nanos(1704067200, 500_000_000);
        assert_eq!(epoch.to_unix_seconds_i64(), 1704067200);
        assert_eq!(epoch.to_unix_seconds().floor() as i64, 1704067200);
    }

    #[test]
    fn test_ordering_follows_time() {
        let earlier = LambdaDateTime::from_unix_seconds_and_nanos(1704067200, 0);
        let later = earlier + 60 * Unit::Second;
        assert!(later > earlier);
        assert_eq!(later.to_unix_seconds_i64(), 1704067260);
    }
}
