//! Time utility functions

use chrono::{DateTime, Utc};

/// Current wall-clock time used for all record timestamps
pub fn now() -> DateTime<Utc> {
  Utc::now()
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_now_is_monotonic_enough() {
    let t1 = now();
    std::thread::sleep(std::time::Duration::from_millis(10));
    let t2 = now();
    assert!(t2 > t1);
  }

  #[test]
  fn test_now_round_trips_through_json() {
    let t = now();
    let encoded = serde_json::to_string(&t).unwrap();
    let decoded: DateTime<Utc> = serde_json::from_str(&encoded).unwrap();
    assert_eq!(t, decoded);
  }
}
