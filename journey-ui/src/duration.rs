//! Human-readable duration formatting.
//!
//! Durations are rounded to the largest fitting unit: `abbrev` gives the
//! compact form ("5m", "2h"), `long` the spelled-out form ("5 minutes",
//! "1 hour", singular when the rounded value is one).

use chrono::Duration;

const SECOND_MS: i64 = 1000;
const MINUTE_MS: i64 = 60 * SECOND_MS;
const HOUR_MS: i64 = 60 * MINUTE_MS;
const DAY_MS: i64 = 24 * HOUR_MS;

/// Abbreviated form: "500ms", "45s", "5m", "2h", "3d".
pub fn abbrev(duration: Duration) -> String {
    let ms = duration.num_milliseconds();
    let magnitude = ms.abs();

    if magnitude >= DAY_MS {
        format!("{}d", round_div(ms, DAY_MS))
    } else if magnitude >= HOUR_MS {
        format!("{}h", round_div(ms, HOUR_MS))
    } else if magnitude >= MINUTE_MS {
        format!("{}m", round_div(ms, MINUTE_MS))
    } else if magnitude >= SECOND_MS {
        format!("{}s", round_div(ms, SECOND_MS))
    } else {
        format!("{ms}ms")
    }
}

/// Long form: "500 ms", "45 seconds", "5 minutes", "1 hour", "3 days".
pub fn long(duration: Duration) -> String {
    let ms = duration.num_milliseconds();
    let magnitude = ms.abs();

    if magnitude >= DAY_MS {
        plural(ms, DAY_MS, "day")
    } else if magnitude >= HOUR_MS {
        plural(ms, HOUR_MS, "hour")
    } else if magnitude >= MINUTE_MS {
        plural(ms, MINUTE_MS, "minute")
    } else if magnitude >= SECOND_MS {
        plural(ms, SECOND_MS, "second")
    } else {
        format!("{ms} ms")
    }
}

fn round_div(ms: i64, unit: i64) -> i64 {
    (ms as f64 / unit as f64).round() as i64
}

fn plural(ms: i64, unit: i64, name: &str) -> String {
    let count = round_div(ms, unit);
    if count.abs() == 1 {
        format!("{count} {name}")
    } else {
        format!("{count} {name}s")
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Whole-minute durations under an hour format exactly.
        #[test]
        fn whole_minutes_are_exact(minutes in 1i64..60) {
            prop_assert_eq!(abbrev(Duration::minutes(minutes)), format!("{minutes}m"));
        }

        /// The long form of a minute-scale duration always names minutes.
        #[test]
        fn minute_scale_names_minutes(seconds in 60i64..3570) {
            let text = long(Duration::seconds(seconds));
            prop_assert!(
                text.ends_with("minute") || text.ends_with("minutes"),
                "unexpected unit in {:?}", text
            );
        }

        /// Abbreviated output always ends in a unit suffix.
        #[test]
        fn abbrev_has_unit_suffix(ms in 0i64..10_000_000_000) {
            let text = abbrev(Duration::milliseconds(ms));
            prop_assert!(
                ['d', 'h', 'm', 's'].contains(&text.chars().last().unwrap()),
                "no unit suffix in {:?}", text
            );
        }
    }
}
