mod config;
mod shared;
mod support;
