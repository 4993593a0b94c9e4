pub mod action;
pub mod airquality;
pub mod clock;
pub mod content;
pub mod error;
pub mod io;
pub mod paths;
pub mod tracker;
pub mod user;

pub use error::{EcoError, Result};
