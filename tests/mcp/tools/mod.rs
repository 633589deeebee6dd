mod catalog;
mod config;
