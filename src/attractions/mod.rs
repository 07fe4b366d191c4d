pub mod client;
pub mod error;
pub mod map;
pub mod query;
pub mod response;
