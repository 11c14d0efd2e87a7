
mod calculate;
mod config;
mod logging;
mod scale;
