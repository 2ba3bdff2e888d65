//! Built-in fortnight used when no snapshot is given.

/// A busy family fortnight starting Monday 2025-01-06, viewed on Thursday.
pub const SAMPLE_SNAPSHOT: &str = r#"{
  "current_date": "2025-01-09",
  "current_day": "Thursday",
  "current_time": "20:48:00",
  "week_start": "2025-01-06",
  "events": [
    { "title": "House cleaning", "calendar": "home", "start": "2025-01-06T09:00:00+00:00", "end": "2025-01-06T12:00:00+00:00" },
    { "title": "School parent meeting", "calendar": "school", "start": "2025-01-07T15:30:00+00:00", "end": "2025-01-07T16:30:00+00:00" },
    { "title": "Book parent teacher meeting", "calendar": "family", "start": "2025-01-07", "end": "2025-01-07" },
    { "title": "Flu vaccine at school", "calendar": "school", "start": "2025-01-09", "end": "2025-01-09" },
    { "title": "Swimming lesson", "calendar": "family", "start": "2025-01-09T17:00:00+00:00", "end": "2025-01-09T17:45:00+00:00" },
    { "title": "Parent association meeting", "calendar": "school", "start": "2025-01-09T19:00:00+00:00", "end": "2025-01-09T20:30:00+00:00" },
    { "title": "Buy concert tickets", "calendar": "family", "start": "2025-01-09T10:00:00+00:00", "end": "2025-01-09T10:15:00+00:00" },
    { "title": "Reading and Phonics Meeting", "calendar": "school", "start": "2025-01-09T08:45:00+00:00", "end": "2025-01-09T09:30:00+00:00" },
    { "title": "Year 2 Meet the Teacher Session", "calendar": "school", "start": "2025-01-09T15:15:00+00:00", "end": "2025-01-09T16:00:00+00:00" },
    { "title": "Special Lunch Menu", "calendar": "school", "start": "2025-01-10", "end": "2025-01-10" },
    { "title": "Year 6 Trip Meeting", "calendar": "school", "start": "2025-01-10T18:00:00+00:00", "end": "2025-01-10T19:00:00+00:00" },
    { "title": "Harvest Festival Competition", "calendar": "school", "start": "2025-01-08", "end": "2025-01-14" },
    { "title": "Festival Performance", "calendar": "school", "start": "2025-01-13T14:00:00+00:00", "end": "2025-01-13T15:00:00+00:00" },
    { "title": "Grandparents visiting", "calendar": "family", "start": "2025-01-10", "end": "2025-01-12" },
    { "title": "Wear Red Day", "calendar": "school", "start": "2025-01-15", "end": "2025-01-15" },
    { "title": "School Disco", "calendar": "school", "start": "2025-01-16T17:30:00+00:00", "end": "2025-01-16T19:00:00+00:00" },
    { "title": "Coffee with Sam", "calendar": "work", "start": "2025-01-14T10:00:00+00:00", "end": "2025-01-14T10:30:00+00:00" },
    { "title": "Status Update", "calendar": "work", "start": "2025-01-14T11:00:00+00:00", "end": "2025-01-14T11:30:00+00:00" },
    { "title": "Client Presentation", "calendar": "work", "start": "2025-01-17T13:00:00+00:00", "end": "2025-01-17T15:00:00+00:00" },
    { "title": "Email catch-up", "calendar": "work", "start": "2025-01-17T16:00:00+00:00", "end": "2025-01-17T16:30:00+00:00" },
    { "title": "Ski week", "calendar": "family", "start": "2025-01-18", "end": "2025-01-24" },
    { "title": "Last year's recital", "calendar": "family", "start": "2024-12-20", "end": "2024-12-20" }
  ]
}"#;
