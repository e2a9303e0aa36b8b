//! Itinerary date back-fill.

use chrono::NaiveDate;

use crate::types::plan::DayPlan;

/// Assign each day its calendar date and weekday from the trip start date.
///
/// Position in the sequence is authoritative: entry `i` becomes
/// `start_date + i` days, overwriting whatever `date` or `day_of_week` the
/// model emitted. The model-reported `day` number is left as generated.
pub fn assign_dates(days: &mut [DayPlan], start_date: NaiveDate) {
    for (i, day) in days.iter_mut().enumerate() {
        let date = start_date + chrono::Duration::days(i as i64);
        day.date = date.format("%Y-%m-%d").to_string();
        day.day_of_week = date.format("%A").to_string();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(date: &str, day_of_week: &str) -> DayPlan {
        DayPlan {
            date: date.to_string(),
            day_of_week: day_of_week.to_string(),
            ..DayPlan::default()
        }
    }

    #[test]
    fn test_assign_dates_overwrites_model_values() {
        // The model put every entry on the wrong day; position wins.
        let mut days = vec![
            day("1999-01-01", "Friday"),
            day("not a date", ""),
            day("", "Thursday"),
        ];
        let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();

        assign_dates(&mut days, start);

        assert_eq!(days[0].date, "2024-06-01");
        assert_eq!(days[0].day_of_week, "Saturday");
        assert_eq!(days[1].date, "2024-06-02");
        assert_eq!(days[1].day_of_week, "Sunday");
        assert_eq!(days[2].date, "2024-06-03");
        assert_eq!(days[2].day_of_week, "Monday");
    }

    #[test]
    fn test_assign_dates_crosses_month_boundary() {
        let mut days = vec![DayPlan::default(), DayPlan::default()];
        let start = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();

        assign_dates(&mut days, start);

        assert_eq!(days[0].date, "2024-02-29");
        assert_eq!(days[1].date, "2024-03-01");
    }

    #[test]
    fn test_assign_dates_empty_sequence() {
        let mut days: Vec<DayPlan> = Vec::new();
        assign_dates(&mut days, NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
        assert!(days.is_empty());
    }
}
