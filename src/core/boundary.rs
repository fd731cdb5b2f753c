use crate::domain::model::{BoundarySample, TimeWindow, TimedEvent};
use std::collections::BTreeMap;

/// Half-width of the boxscore range query, in tenths of a second.
pub const WINDOW_RADIUS_TENTHS: i64 = 9;

/// Picks the second event of every period after the first.
///
/// The first event of a period is usually the period-start marker, whose
/// timestamp is not reliable for the range query. Periods with a single
/// event produce nothing. Output is ordered by period.
pub fn select_boundaries(events: &[TimedEvent]) -> Vec<BoundarySample> {
    let mut seen: BTreeMap<u32, (usize, Option<i64>)> = BTreeMap::new();

    for event in events.iter().filter(|e| e.period > 1) {
        let (count, sample) = seen.entry(event.period).or_insert((0, None));
        *count += 1;
        if *count == 2 {
            *sample = Some(event.elapsed);
        }
    }

    seen.into_iter()
        .filter_map(|(period, (_, sample))| sample.map(|elapsed| BoundarySample { period, elapsed }))
        .collect()
}

pub fn window_for(sample: &BoundarySample) -> TimeWindow {
    TimeWindow::around(sample.elapsed, WINDOW_RADIUS_TENTHS)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::clock::derive_elapsed;
    use crate::domain::model::PlayEvent;

    fn timed(rows: &[(u32, &str)]) -> Vec<TimedEvent> {
        derive_elapsed(
            rows.iter()
                .map(|(period, clock)| PlayEvent {
                    period: *period,
                    clock: clock.to_string(),
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn test_second_event_of_each_period() {
        let events = timed(&[
            (2, "11:00"),
            (2, "10:30"),
            (2, "9:00"),
            (3, "11:00"),
            (3, "10:00"),
            (3, "8:00"),
        ]);

        let samples = select_boundaries(&events);
        assert_eq!(
            samples,
            vec![
                BoundarySample { period: 2, elapsed: events[1].elapsed },
                BoundarySample { period: 3, elapsed: events[4].elapsed },
            ]
        );
        assert_eq!(samples[0].elapsed, 8100);
        assert_eq!(samples[1].elapsed, 15600);
    }

    #[test]
    fn test_first_period_never_sampled() {
        let events = timed(&[(1, "12:00"), (1, "11:40"), (1, "11:20"), (2, "12:00"), (2, "11:45")]);
        let samples = select_boundaries(&events);
        assert_eq!(samples.len(), 1);
        assert_eq!(samples[0].period, 2);
    }

    #[test]
    fn test_single_event_period_dropped() {
        let events = timed(&[(2, "12:00"), (3, "12:00"), (3, "11:50"), (4, "12:00")]);
        let periods: Vec<u32> = select_boundaries(&events).iter().map(|s| s.period).collect();
        assert_eq!(periods, vec![3]);
    }

    #[test]
    fn test_ascending_periods_even_when_interleaved() {
        let events = timed(&[(5, "5:00"), (3, "12:00"), (5, "4:40"), (3, "11:30")]);
        let periods: Vec<u32> = select_boundaries(&events).iter().map(|s| s.period).collect();
        assert_eq!(periods, vec![3, 5]);
    }

    #[test]
    fn test_selection_is_idempotent() {
        let events = timed(&[(2, "12:00"), (2, "11:52"), (3, "12:00"), (3, "11:48"), (6, "5:00"), (6, "4:51")]);
        assert_eq!(select_boundaries(&events), select_boundaries(&events));
    }

    #[test]
    fn test_window_bounds() {
        for elapsed in [0, 7285, 14520, 31800] {
            let window = window_for(&BoundarySample { period: 2, elapsed });
            assert_eq!(window.lower, elapsed - 9);
            assert_eq!(window.upper, elapsed + 9);
        }
    }
}
