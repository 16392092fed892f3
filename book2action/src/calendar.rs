//! Calendar reminders for action steps.
//!
//! Template links work without any account. [`CalendarEvent`] carries the
//! same data for an authenticated calendar API.

use chrono::{Datelike, Days, NaiveDate, NaiveDateTime, NaiveTime, Weekday};
use serde::Serialize;

use crate::model::{ActionableStep, StepDetails};

const TEMPLATE_URL: &str = "https://calendar.google.com/calendar/render?action=TEMPLATE";
const START_HOUR: u32 = 9;
const END_HOUR: u32 = 10;

/// The next date strictly after `today` that falls on `day`.
///
/// Unknown day names yield `today`.
pub fn next_occurrence(day: &str, today: NaiveDate) -> NaiveDate {
    let Ok(target) = day.trim().parse::<Weekday>() else {
        return today;
    };

    let ahead = (target.num_days_from_monday() + 7 - today.weekday().num_days_from_monday()) % 7;
    let ahead = if ahead == 0 { 7 } else { ahead };
    today
        .checked_add_days(Days::new(u64::from(ahead)))
        .unwrap_or(today)
}

/// Event data for a calendar API.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarEvent {
    pub summary: String,
    pub description: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl CalendarEvent {
    /// One-hour morning slot on `date`.
    fn on(date: NaiveDate, summary: String, description: String) -> Self {
        Self {
            summary,
            description,
            start: date.and_time(at_hour(START_HOUR)),
            end: date.and_time(at_hour(END_HOUR)),
        }
    }

    /// Reminder for a plan step on the next `day` after `today`.
    pub fn for_step(step: &str, book_title: &str, day: &str, today: NaiveDate) -> Self {
        Self::on(
            next_occurrence(day, today),
            step.to_string(),
            step_description(book_title),
        )
    }

    /// Reminder for tomorrow carrying the step's chapter, takeaway and details.
    pub fn detailed(step: &ActionableStep, book_title: &str, today: NaiveDate) -> Self {
        Self::on(
            tomorrow(today),
            detailed_summary(&step.step),
            detailed_description(book_title, &step.chapter, &step.details),
        )
    }
}

/// Google Calendar template link for a plan step.
pub fn calendar_link(step: &str, book_title: &str, day: &str, today: NaiveDate) -> String {
    let date = compact_date(next_occurrence(day, today));
    format!(
        "{}&text={}&details={}&dates={}T{:02}0000/{}T{:02}0000&ctz=local",
        TEMPLATE_URL,
        urlencoding::encode(step),
        urlencoding::encode(&step_description(book_title)),
        date,
        START_HOUR,
        date,
        END_HOUR
    )
}

/// All-day template link for tomorrow with the full step details.
pub fn detailed_calendar_link(step: &ActionableStep, book_title: &str, today: NaiveDate) -> String {
    let date = compact_date(tomorrow(today));
    format!(
        "{}&text={}&details={}&dates={}/{}",
        TEMPLATE_URL,
        urlencoding::encode(&detailed_summary(&step.step)),
        urlencoding::encode(&detailed_description(
            book_title,
            &step.chapter,
            &step.details
        )),
        date,
        date
    )
}

fn step_description(book_title: &str) -> String {
    format!("Action step from \"{}\"", book_title)
}

fn detailed_summary(step: &str) -> String {
    format!("Book Action: {}", step)
}

fn detailed_description(book_title: &str, chapter: &str, details: &StepDetails) -> String {
    format!(
        "From book: {}\nChapter: {}\n\nKey takeaway: {}\n\nDetails:\n{}",
        book_title,
        chapter,
        details.key_takeaway,
        details.sentences.join("\n")
    )
}

fn tomorrow(today: NaiveDate) -> NaiveDate {
    today.succ_opt().unwrap_or(today)
}

fn compact_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

fn at_hour(hour: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, 0, 0).unwrap_or(NaiveTime::MIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::backfill;

    // A Wednesday
    fn wednesday() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 3).unwrap()
    }

    #[test]
    fn test_next_occurrence_is_strictly_after_today() {
        let today = wednesday();
        assert_eq!(next_occurrence("Thursday", today), NaiveDate::from_ymd_opt(2024, 1, 4).unwrap());
        assert_eq!(next_occurrence("Monday", today), NaiveDate::from_ymd_opt(2024, 1, 8).unwrap());
        assert_eq!(next_occurrence("Wednesday", today), NaiveDate::from_ymd_opt(2024, 1, 10).unwrap());
    }

    #[test]
    fn test_unknown_day_is_today() {
        assert_eq!(next_occurrence("Someday", wednesday()), wednesday());
        assert_eq!(next_occurrence("", wednesday()), wednesday());
    }

    #[test]
    fn test_calendar_link() {
        let link = calendar_link("Read 10 pages", "Deep Work", "Friday", wednesday());
        assert_eq!(
            link,
            "https://calendar.google.com/calendar/render?action=TEMPLATE\
             &text=Read%2010%20pages\
             &details=Action%20step%20from%20%22Deep%20Work%22\
             &dates=20240105T090000/20240105T100000&ctz=local"
        );
    }

    #[test]
    fn test_event_for_step() {
        let event = CalendarEvent::for_step("Read 10 pages", "Deep Work", "Friday", wednesday());
        assert_eq!(event.summary, "Read 10 pages");
        assert_eq!(event.description, "Action step from \"Deep Work\"");
        assert_eq!(event.start.to_string(), "2024-01-05 09:00:00");
        assert_eq!(event.end.to_string(), "2024-01-05 10:00:00");
    }

    #[test]
    fn test_detailed_event_is_tomorrow_with_details() {
        let step = ActionableStep {
            step: "Schedule deep work".to_string(),
            chapter: "Rule 1".to_string(),
            day: Some("Monday".to_string()),
            details: backfill::details_for("Schedule deep work", "Rule 1"),
        };

        let event = CalendarEvent::detailed(&step, "Deep Work", wednesday());
        assert_eq!(event.summary, "Book Action: Schedule deep work");
        assert!(event.description.starts_with("From book: Deep Work\nChapter: Rule 1\n\nKey takeaway: "));
        assert_eq!(event.start.date(), NaiveDate::from_ymd_opt(2024, 1, 4).unwrap());

        let link = detailed_calendar_link(&step, "Deep Work", wednesday());
        assert!(link.contains("&text=Book%20Action%3A%20Schedule%20deep%20work"));
        assert!(link.ends_with("&dates=20240104/20240104"));
    }
}
