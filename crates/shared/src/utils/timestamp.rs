use chrono::{NaiveDateTime, SubsecRound, Utc};

/// Current UTC time truncated to microseconds, the precision PostgreSQL
/// keeps for `TIMESTAMP`, so a saved record compares equal to what the
/// database returns.
pub fn current_timestamp() -> NaiveDateTime {
    Utc::now().naive_utc().trunc_subsecs(6)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Timelike;

    #[test]
    fn has_microsecond_precision() {
        let ts = current_timestamp();
        assert_eq!(ts.nanosecond() % 1_000, 0);
    }
}
