mod config;
mod error;
pub mod model;
pub mod web;

pub mod _dev_utils;

pub use self::error::{Error, Result};
pub use config::{config, Config};
