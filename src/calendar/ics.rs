use crate::calendar::event::CalendarEvent;

const CALENDAR_HEADER: &str = "BEGIN:VCALENDAR\nVERSION:2.0\nPRODID:-//School Menu//EN\n";
const CALENDAR_FOOTER: &str = "END:VCALENDAR";

pub fn render_calendar(events: &[CalendarEvent]) -> String {
    let mut output = String::from(CALENDAR_HEADER);

    for event in events {
        output.push_str("BEGIN:VEVENT\n");
        output.push_str(&format!("SUMMARY:{}\n", event.summary));
        output.push_str(&format!("DTSTART;VALUE=DATE:{}\n", event.date));
        output.push_str(&format!("DTEND;VALUE=DATE:{}\n", event.date));
        output.push_str("END:VEVENT\n");
    }

    output.push_str(CALENDAR_FOOTER);
    output
}
