pub mod cache;
pub mod cli;
pub mod config;
pub mod logging;
pub mod outfile;
pub mod timeutil;
