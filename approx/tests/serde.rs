#![cfg(feature = "serde")]

use approx::{Duration, DAY, HOUR, MILLISECOND};
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Retention {
    keep: Duration,
    check_every: Duration,
}

#[test]
fn serialize_with_days() {
    let retention = Retention {
        keep: DAY * 30,
        check_every: HOUR + MILLISECOND * 500,
    };
    let json = serde_json::to_string(&retention).unwrap();
    assert_eq!(json, r#"{"keep":"30d0h0m0s","check_every":"1h0m0.5s"}"#);
    assert_eq!(serde_json::from_str::<Retention>(&json).unwrap(), retention);
}

#[test]
fn deserialize_any_unit() {
    let retention: Retention =
        serde_json::from_str(r#"{"keep":"1y","check_every":"-1.5m"}"#).unwrap();
    assert_eq!(retention.keep, Duration::YEAR);
    assert_eq!(retention.check_every, -(Duration::SECOND * 90));
}

#[test]
fn deserialize_error_quotes_input() {
    let err = serde_json::from_str::<Retention>(r#"{"keep":"1q","check_every":"0"}"#)
        .unwrap_err()
        .to_string();
    assert!(err.contains(r#"time: unknown unit "q" in duration "1q""#), "{err}");
}
