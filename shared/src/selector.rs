use chrono::NaiveTime;
use log::debug;

use crate::models::draw_time::{minutes_of_day, DrawTime};

/// Picks the next draw still open today: the candidate whose time of day is
/// at or after `now` with the smallest offset.
///
/// Seconds are ignored on both sides, so a draw at exactly the current
/// minute still qualifies. Candidates whose time cannot be parsed are
/// skipped. Equal offsets keep the earliest entry in `draw_times`.
pub fn select_default_draw_time(now: NaiveTime, draw_times: &[DrawTime]) -> Option<&DrawTime> {
    let now_minutes = minutes_of_day(now);
    let mut best: Option<(&DrawTime, u32)> = None;

    for draw_time in draw_times {
        let Some(minutes) = draw_time.minutes_since_midnight() else {
            debug!("Skipping unparseable draw time {:?}", draw_time.time_of_day);
            continue;
        };
        if minutes < now_minutes {
            continue;
        }
        let offset = minutes - now_minutes;
        match best {
            Some((_, best_offset)) if offset >= best_offset => {}
            _ => best = Some((draw_time, offset)),
        }
    }

    best.map(|(draw_time, _)| draw_time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;
    use rstest::rstest;

    fn at(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn slots(times: &[&str]) -> Vec<DrawTime> {
        times
            .iter()
            .enumerate()
            .map(|(i, t)| DrawTime::new(format!("dt-{}", i), *t))
            .collect()
    }

    #[rstest]
    #[case(at(9, 0), &["10:00", "12:00", "15:00"], Some("10:00"))]
    #[case(at(11, 30), &["10:00", "12:00", "15:00"], Some("12:00"))]
    #[case(at(11, 30), &["15:00", "12:00", "10:00"], Some("12:00"))]
    #[case(at(16, 0), &["10:00", "12:00", "15:00"], None)]
    #[case(at(0, 0), &[], None)]
    fn test_selects_next_open_draw(
        #[case] now: NaiveTime,
        #[case] times: &[&str],
        #[case] expected: Option<&str>,
    ) {
        let list = slots(times);
        let picked = select_default_draw_time(now, &list).map(|d| d.time_of_day.as_str());
        assert_eq!(picked, expected);
    }

    #[test]
    fn test_draw_at_current_minute_is_still_open() {
        let list = slots(&["14:00", "14:30", "15:00"]);
        let now = NaiveTime::from_hms_opt(14, 30, 45).unwrap();
        assert_eq!(
            select_default_draw_time(now, &list).map(|d| d.time_of_day.as_str()),
            Some("14:30")
        );
    }

    #[test]
    fn test_tie_keeps_first_seen() {
        let list = vec![
            DrawTime::new("first", "13:00"),
            DrawTime::new("second", "13:00:00"),
        ];
        let picked = select_default_draw_time(at(12, 0), &list).unwrap();
        assert_eq!(picked.id.as_str(), "first");
    }

    #[test]
    fn test_malformed_entries_are_skipped() {
        let list = slots(&["soon", "", "25:61", "18:00"]);
        assert_eq!(
            select_default_draw_time(at(8, 0), &list).map(|d| d.id.as_str()),
            Some("dt-3")
        );
    }

    #[test]
    fn test_only_malformed_entries_yield_none() {
        let list = slots(&["later", "??"]);
        assert_eq!(select_default_draw_time(at(8, 0), &list), None);
    }

    proptest! {
        #[test]
        fn prop_result_is_minimal_non_negative_offset(
            now_min in 0u32..1440,
            times in proptest::collection::vec(0u32..1440, 0..12),
        ) {
            let list: Vec<DrawTime> = times
                .iter()
                .enumerate()
                .map(|(i, m)| DrawTime::new(format!("dt-{}", i), format!("{:02}:{:02}", m / 60, m % 60)))
                .collect();
            let now = NaiveTime::from_hms_opt(now_min / 60, now_min % 60, 0).unwrap();
            let expected = times.iter().filter(|m| **m >= now_min).map(|m| m - now_min).min();

            match select_default_draw_time(now, &list) {
                Some(picked) => {
                    let minutes = picked.minutes_since_midnight().unwrap();
                    prop_assert!(minutes >= now_min);
                    prop_assert_eq!(Some(minutes - now_min), expected);
                }
                None => prop_assert_eq!(expected, None),
            }
        }
    }
}
