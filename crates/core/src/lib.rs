#![deny(rust_2018_idioms)]

pub mod commands;
pub mod config;
pub mod duration;
pub mod player;
pub mod server;
