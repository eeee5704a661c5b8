//! Schedule calendar aggregation
//!
//! Pure, synchronous functions over an already fetched snapshot of
//! [`Schedule`](agenda_domain::Schedule)s:
//! - [`expander`]: an event's inclusive day span
//! - [`membership`]: whether an event is active on a selected day
//! - [`aggregator`]: marked-date set and the ordered day agenda
//! - [`duration`]: `"H jam M menit"` labels
//! - [`view`]: the calendar page view model
//!
//! Day boundaries are always cut in a single [`CalendarZone`].

pub mod aggregator;
pub mod duration;
pub mod expander;
pub mod ingest;
pub mod membership;
pub mod view;
pub mod window;
pub mod zone;

pub use aggregator::{agenda_for, marked_dates, marked_dates_in};
pub use duration::{format_event_duration, EventDuration};
pub use expander::{expand, schedule_span, DaySpan, Days};
pub use ingest::{normalize_rows, Ingested};
pub use membership::{is_active_on, schedule_is_active_on};
pub use view::{AgendaEntry, CalendarView};
pub use window::DateWindow;
pub use zone::CalendarZone;
