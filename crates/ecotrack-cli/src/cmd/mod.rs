pub mod action;
pub mod content;
pub mod serve;
pub mod user;
