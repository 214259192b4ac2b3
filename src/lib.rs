pub mod collision;
pub mod compute;
pub mod config;
pub mod display;
pub mod entities;
pub mod error;
pub mod frame;
pub mod input;
pub mod platform;
pub mod scene;
