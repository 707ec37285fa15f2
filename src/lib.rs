pub mod cli;
pub mod config;
pub mod decoder;
pub mod error;
pub mod export;
pub mod loader;
pub mod logging;
pub mod normalizer;
pub mod render;
pub mod review;
pub mod storage;
