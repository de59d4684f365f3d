pub mod config;
pub mod logging;

pub mod render;
pub mod storage;
pub mod throughput;
pub mod transfer;
pub mod transport;
pub mod units;
