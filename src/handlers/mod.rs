//! HTTP handlers for the campus API
//!
//! One module per record collection. Register, login, news/events reads, and
//! library search are public; everything else goes through the authorization
//! guard.

pub mod attendance;
pub mod auth;
pub mod chat;
pub mod grades;
pub mod library;
pub mod news;
pub mod timetable;
