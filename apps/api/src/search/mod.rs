pub mod aggregate;
pub mod cache;
pub mod country;
pub mod handlers;
pub mod providers;
