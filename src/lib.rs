pub mod cli;
pub mod commands;
pub mod error;
pub mod models;
pub mod services;
