pub mod daily;
pub mod date_window;
pub mod location;
pub mod monthly;
