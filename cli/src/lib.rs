//! Operator CLI for the cultural archive: schema setup, direct archive index
//! access and a terminal rendition of the content dashboard.

pub mod cli;
pub mod commands;
pub mod feed_client;
pub mod render;
