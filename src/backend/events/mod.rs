//! Hub events calendar

pub mod db;
pub mod handlers;

pub use db::Event;
pub use handlers::{create_event, delete_event, list_events, CreateEventRequest};
