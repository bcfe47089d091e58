//! Profile lookup domain logic

pub mod merge;
pub mod ports;
pub mod progress;
pub mod service;
