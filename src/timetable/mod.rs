pub mod urls;
pub mod views;
