use anyhow::{anyhow, Result};
use chrono::{Local, NaiveTime, TimeZone};
use log::{error, info, warn};

use crate::models::{PrayerTimeSet, PrayerType, ScheduledNotification, PRAYER_CHANNEL_ID};
use crate::platform::NotificationScheduler;

/// Parse an upstream time-of-day value. The leading token is the `HH:MM`
/// time; anything after whitespace is a qualifier ("05:30 (EET)") and is
/// ignored.
pub fn parse_prayer_time(raw: &str) -> Result<NaiveTime> {
    let token = raw
        .split_whitespace()
        .next()
        .ok_or_else(|| anyhow!("empty time string"))?;
    NaiveTime::parse_from_str(token, "%H:%M")
        .map_err(|e| anyhow!("invalid time '{}': {}", raw, e))
}

/// Schedule one notification per prayer of the current day.
///
/// Walks the five prayers in fixed order; a missing or empty entry is
/// skipped silently, an unparseable one is skipped with a warning. Each
/// remaining time is combined with today's date in local time and submitted
/// on the prayer channel. Times already in the past are submitted anyway;
/// whether to fire late or drop is the notification service's call.
///
/// Returns the number of submissions.
pub fn schedule_notifications(
    times: &PrayerTimeSet,
    sink: &mut dyn NotificationScheduler,
) -> usize {
    let today = Local::now().date_naive();
    let mut submitted = 0;

    for prayer in PrayerType::all() {
        let Some(raw) = times.get(prayer) else {
            continue;
        };
        if raw.trim().is_empty() {
            continue;
        }

        let time = match parse_prayer_time(raw) {
            Ok(time) => time,
            Err(err) => {
                warn!("skipping {}: {}", prayer, err);
                continue;
            }
        };

        // earliest() picks the first wall-clock occurrence on DST folds; a
        // time skipped by a DST gap has no local representation at all.
        let Some(fire_at) = Local
            .from_local_datetime(&today.and_time(time))
            .earliest()
        else {
            warn!("skipping {}: {} does not exist locally today", prayer, time);
            continue;
        };

        let notification = ScheduledNotification {
            channel_id: PRAYER_CHANNEL_ID.to_string(),
            message: prayer.message(),
            fire_at,
            allow_while_idle: true,
        };
        match sink.schedule(notification) {
            Ok(()) => submitted += 1,
            Err(err) => error!("failed to schedule {}: {}", prayer, err),
        }
    }

    info!("scheduled {} prayer notifications for {}", submitted, today);
    submitted
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::testing::MemoryScheduler;

    fn set(pairs: &[(&str, &str)]) -> PrayerTimeSet {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    fn full_day() -> PrayerTimeSet {
        set(&[
            ("Fajr", "05:30"),
            ("Dhuhr", "12:45"),
            ("Asr", "16:10"),
            ("Maghrib", "19:05"),
            ("Isha", "20:30"),
        ])
    }

    #[test]
    fn parses_plain_time() {
        assert_eq!(
            parse_prayer_time("05:30").unwrap(),
            NaiveTime::from_hms_opt(5, 30, 0).unwrap()
        );
    }

    #[test]
    fn ignores_trailing_qualifier() {
        assert_eq!(
            parse_prayer_time("05:30 (EET)").unwrap(),
            NaiveTime::from_hms_opt(5, 30, 0).unwrap()
        );
    }

    #[test]
    fn rejects_garbage_times() {
        assert!(parse_prayer_time("").is_err());
        assert!(parse_prayer_time("soon").is_err());
        assert!(parse_prayer_time("25:00").is_err());
        assert!(parse_prayer_time("12:61").is_err());
    }

    #[test]
    fn full_set_yields_five_submissions_in_order() {
        let mut sink = MemoryScheduler::default();
        assert_eq!(schedule_notifications(&full_day(), &mut sink), 5);
        assert_eq!(sink.scheduled.len(), 5);

        let messages: Vec<&str> = sink.scheduled.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(
            messages,
            [
                "Fajr namazı vakti geldi!",
                "Dhuhr namazı vakti geldi!",
                "Asr namazı vakti geldi!",
                "Maghrib namazı vakti geldi!",
                "Isha namazı vakti geldi!",
            ]
        );
    }

    #[test]
    fn submissions_are_dated_today_on_the_prayer_channel() {
        let mut sink = MemoryScheduler::default();
        schedule_notifications(&full_day(), &mut sink);

        let today = Local::now().date_naive();
        for n in &sink.scheduled {
            assert_eq!(n.channel_id, PRAYER_CHANNEL_ID);
            assert_eq!(n.fire_at.date_naive(), today);
            assert!(n.allow_while_idle);
        }
        assert_eq!(
            sink.scheduled[0].fire_at.time(),
            NaiveTime::from_hms_opt(5, 30, 0).unwrap()
        );
        assert_eq!(
            sink.scheduled[4].fire_at.time(),
            NaiveTime::from_hms_opt(20, 30, 0).unwrap()
        );
    }

    #[test]
    fn single_entry_yields_single_submission() {
        let mut sink = MemoryScheduler::default();
        let times = set(&[("Fajr", "05:30")]);
        assert_eq!(schedule_notifications(&times, &mut sink), 1);
        assert_eq!(sink.scheduled[0].message, "Fajr namazı vakti geldi!");
    }

    #[test]
    fn missing_and_empty_entries_are_skipped_silently() {
        let mut sink = MemoryScheduler::default();
        let times = set(&[("Fajr", "05:30"), ("Dhuhr", ""), ("Asr", "  ")]);
        assert_eq!(schedule_notifications(&times, &mut sink), 1);
    }

    #[test]
    fn unparseable_entry_skips_only_itself() {
        let mut sink = MemoryScheduler::default();
        let times = set(&[("Fajr", "nonsense"), ("Isha", "20:30")]);
        assert_eq!(schedule_notifications(&times, &mut sink), 1);
        assert_eq!(sink.scheduled[0].message, "Isha namazı vakti geldi!");
    }

    #[test]
    fn past_times_are_still_submitted() {
        // 00:00 today is in the past for any run after midnight; the rule
        // must not filter it.
        let mut sink = MemoryScheduler::default();
        let times = set(&[("Fajr", "00:00")]);
        assert_eq!(schedule_notifications(&times, &mut sink), 1);
    }

    #[test]
    fn non_prayer_keys_are_never_scheduled() {
        let mut sink = MemoryScheduler::default();
        let times = set(&[("Sunrise", "07:01"), ("Midnight", "00:54")]);
        assert_eq!(schedule_notifications(&times, &mut sink), 0);
        assert!(sink.scheduled.is_empty());
    }

    #[test]
    fn empty_set_schedules_nothing() {
        let mut sink = MemoryScheduler::default();
        assert_eq!(schedule_notifications(&PrayerTimeSet::default(), &mut sink), 0);
    }
}
