use chrono::{DateTime, Utc};

use crate::domain::auth::ports::Clock;

/// Wall-clock time for production wiring.
pub struct SystemClock;

impl Clock for SystemClock {
  fn now(&self) -> DateTime<Utc> {
    Utc::now()
  }
}
