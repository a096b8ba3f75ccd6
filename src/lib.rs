// Core infrastructure modules
pub mod core;

pub mod config;

#[cfg(test)]
mod test_utils;
