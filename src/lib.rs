pub mod api;
pub mod cache;
pub mod config;
pub mod corpus;
pub mod error;
pub mod key;
pub mod optimizer;
pub mod puzzle;
pub mod ranking;
pub mod render;
pub mod scorer;
// cmd and reports are binary modules (declared in main.rs).
