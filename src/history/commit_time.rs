use chrono::DateTime;

use crate::store::CommitTime;

const NANOS_PER_SECOND: u32 = 1_000_000_000;

/// Human-readable UTC rendering of a store commit time, e.g.
/// `2018-10-25 08:30:00.12345 +0000 UTC`.
///
/// The fraction is trimmed of trailing zeros and left out entirely when
/// zero. Returns `None` for times chrono cannot represent.
pub fn render_commit_time(time: CommitTime) -> Option<String> {
    if time.nanos >= NANOS_PER_SECOND {
        return None;
    }
    let utc = DateTime::from_timestamp(time.seconds, time.nanos)?;

    let mut rendered = utc.format("%Y-%m-%d %H:%M:%S").to_string();
    if time.nanos > 0 {
        let fraction = format!("{:09}", time.nanos);
        rendered.push('.');
        rendered.push_str(fraction.trim_end_matches('0'));
    }
    rendered.push_str(" +0000 UTC");
    Some(rendered)
}
