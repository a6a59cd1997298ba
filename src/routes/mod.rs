//! Route definitions for the campus API

mod attendance;
mod auth;
mod chat;
mod grades;
mod library;
mod news;
mod timetable;

pub use attendance::attendance_routes;
pub use auth::auth_routes;
pub use chat::chat_routes;
pub use grades::grades_routes;
pub use library::library_routes;
pub use news::news_routes;
pub use timetable::timetable_routes;
