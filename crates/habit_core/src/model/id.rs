//! Creation-time derived record ids and timestamps.

use chrono::{SecondsFormat, Utc};
use std::sync::atomic::{AtomicI64, Ordering};

static LAST_ISSUED_MS: AtomicI64 = AtomicI64::new(0);

/// Returns a new record id derived from the current Unix time in milliseconds.
///
/// Two calls within the same millisecond still get distinct ids: the value
/// is bumped past the last id issued by this process.
pub fn next_record_id() -> String {
    let now_ms = Utc::now().timestamp_millis();
    let mut last = LAST_ISSUED_MS.load(Ordering::Relaxed);
    loop {
        let candidate = now_ms.max(last + 1);
        match LAST_ISSUED_MS.compare_exchange_weak(
            last,
            candidate,
            Ordering::Relaxed,
            Ordering::Relaxed,
        ) {
            Ok(_) => return candidate.to_string(),
            Err(actual) => last = actual,
        }
    }
}

/// Current instant as an RFC 3339 UTC string, e.g. `2026-10-16T08:30:00.123Z`.
pub fn timestamp_now() -> String {
    Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
}
