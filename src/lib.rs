pub mod app;
pub mod config;
pub mod data;
pub mod error;
pub mod explain;
pub mod loader;
pub mod model;
pub mod persistence;
pub mod proctor;
pub mod quiz;
pub mod routes;
pub mod runner;
pub mod shuffle;
pub mod storage;
pub mod task;
pub mod ui;
pub mod view_models;

pub use app::MockTestApp;
