pub mod app;
pub mod colors;
pub mod components;
pub mod events;
pub mod share;
pub mod store;
pub mod views;
