pub mod announcements;
pub mod attendance;
pub mod auth;
pub mod classes;
pub mod grades;
pub mod users;
