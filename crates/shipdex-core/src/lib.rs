pub mod config;
pub mod logging;

pub mod artifact;
pub mod browser;
pub mod catalog;
pub mod databank;
pub mod http;
pub mod resolve;
pub mod wiki;
