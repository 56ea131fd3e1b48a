#[cfg(test)]
mod tests {
    use crate::logic::{get_time_slots, TimetableOptions};
    use crate::models::{BlockedEvent, TimeSlotsRequest, Timeslot, WorkHourRule};
    use crate::overlap::{is_blocked, overlaps, BlockedSchedule};
    use crate::schedule::ScheduleData;
    use proptest::prelude::*;

    const ZONES: [&str; 5] = [
        "UTC",
        "Asia/Seoul",
        "Europe/Zurich",
        "America/New_York",
        "Australia/Sydney",
    ];

    // Helper to build a full week with the same opening hours
    fn create_week(open_hour: i64, close_hour: i64) -> Vec<WorkHourRule> {
        (1..=7)
            .map(|weekday| WorkHourRule {
                weekday,
                open_interval: open_hour * 3600,
                close_interval: close_hour * 3600,
                is_day_off: false,
            })
            .collect()
    }

    // Helper to create non-empty blocked events around a base instant
    fn create_events(base: i64, shape: &[(i64, i64)]) -> Vec<BlockedEvent> {
        shape.iter()
            .map(|(offset, length)| BlockedEvent {
                begin_at: base + offset,
                end_at: base + offset + length.max(&1),
            })
            .collect()
    }

    fn event_strategy() -> impl Strategy<Value = Vec<(i64, i64)>> {
        prop::collection::vec((0..7 * 86_400i64, 1..6 * 3600i64), 0..12)
    }

    proptest! {
        // Output length and day modifiers follow the requested day count
        #[test]
        fn test_day_count_and_modifiers(
            days in 1..40u32,
            zone_idx in 0..ZONES.len(),
            month in 1..=12u32,
            day in 1..=28u32,
        ) {
            let schedule = ScheduleData::new(create_week(9, 17), &[]).unwrap();
            let request = TimeSlotsRequest {
                start_day_identifier: Some(format!("2024{month:02}{day:02}")),
                timezone_identifier: Some(ZONES[zone_idx].to_string()),
                service_duration: Some(3600),
                days: Some(days),
                ..TimeSlotsRequest::default()
            };

            let timetables = get_time_slots(&request, &schedule, &TimetableOptions::default()).unwrap();

            prop_assert_eq!(timetables.len(), days as usize);
            for (i, timetable) in timetables.iter().enumerate() {
                prop_assert_eq!(timetable.day_modifier, i as u32);
            }
            for pair in timetables.windows(2) {
                let gap = pair[1].start_of_day - pair[0].start_of_day;
                // 23h, 24h or 25h depending on DST
                prop_assert!((82_800..=90_000).contains(&gap), "gap {}", gap);
            }
        }

        // Every slot has the requested length, lies inside the window and is ordered
        #[test]
        fn test_slots_respect_duration_and_window(
            service_duration in 60..4 * 3600i64,
            interval in 60..3 * 3600i64,
            open_hour in 0..12i64,
            close_hour in 12..=24i64,
            zone_idx in 0..ZONES.len(),
        ) {
            let schedule = ScheduleData::new(create_week(open_hour, close_hour), &[]).unwrap();
            let request = TimeSlotsRequest {
                start_day_identifier: Some("20240325".to_string()),
                timezone_identifier: Some(ZONES[zone_idx].to_string()),
                service_duration: Some(service_duration),
                timeslot_interval: Some(interval),
                days: Some(14),
                ..TimeSlotsRequest::default()
            };

            let timetables = get_time_slots(&request, &schedule, &TimetableOptions::default()).unwrap();

            for timetable in &timetables {
                let open = timetable.start_of_day + open_hour * 3600;
                let close = timetable.start_of_day + close_hour * 3600;
                for slot in &timetable.timeslots {
                    prop_assert_eq!(slot.end_at - slot.begin_at, service_duration);
                    prop_assert!(slot.begin_at >= open);
                    prop_assert!(slot.end_at <= close);
                    prop_assert_eq!((slot.begin_at - open) % interval, 0);
                }
                for pair in timetable.timeslots.windows(2) {
                    prop_assert!(pair[0].begin_at <= pair[1].begin_at);
                }
            }
        }

        // No surviving slot intersects a blocked event
        #[test]
        fn test_slots_dont_overlap_blocked_events(
            service_duration in 900..3 * 3600i64,
            event_shape in event_strategy(),
        ) {
            let base = 1_704_067_200; // 2024-01-01 UTC
            let events = create_events(base, &event_shape);
            let schedule = ScheduleData::new(create_week(6, 22), &events).unwrap();
            let request = TimeSlotsRequest {
                start_day_identifier: Some("20240101".to_string()),
                timezone_identifier: Some("UTC".to_string()),
                service_duration: Some(service_duration),
                days: Some(7),
                ..TimeSlotsRequest::default()
            };

            let timetables = get_time_slots(&request, &schedule, &TimetableOptions::default()).unwrap();

            for slot in timetables.iter().flat_map(|t| t.timeslots.iter()) {
                for event in &events {
                    prop_assert!(!overlaps(slot, event), "{:?} overlaps {:?}", slot, event);
                }
            }
        }

        // Ignoring the schedule yields exactly the unfiltered candidates
        #[test]
        fn test_ignore_schedule_drops_nothing(
            service_duration in 900..3 * 3600i64,
            event_shape in event_strategy(),
        ) {
            let base = 1_704_067_200;
            let events = create_events(base, &event_shape);
            let blocked = ScheduleData::new(create_week(8, 18), &events).unwrap();
            let free = ScheduleData::new(create_week(8, 18), &[]).unwrap();
            let request = TimeSlotsRequest {
                start_day_identifier: Some("20240101".to_string()),
                timezone_identifier: Some("UTC".to_string()),
                service_duration: Some(service_duration),
                days: Some(7),
                is_ignore_schedule: true,
                ..TimeSlotsRequest::default()
            };
            let options = TimetableOptions::default();

            prop_assert_eq!(
                get_time_slots(&request, &blocked, &options).unwrap(),
                get_time_slots(&request, &free, &options).unwrap()
            );
        }

        // The merged binary-search filter agrees with the linear scan
        #[test]
        fn test_blocked_schedule_matches_linear_scan(
            event_shape in prop::collection::vec((0..10_000i64, 1..2_000i64), 0..20),
            begin in 0..12_000i64,
            length in 1..3_000i64,
        ) {
            let events = create_events(0, &event_shape);
            let schedule = BlockedSchedule::new(&events).unwrap();
            let slot = Timeslot { begin_at: begin, end_at: begin + length };

            prop_assert_eq!(
                schedule.is_blocked(&slot, false),
                is_blocked(&slot, &events, false)
            );
        }
    }
}
