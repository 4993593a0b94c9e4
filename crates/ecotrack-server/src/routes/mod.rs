pub mod actions;
pub mod content;
pub mod index;
pub mod pollution;
pub mod users;
