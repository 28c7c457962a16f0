pub mod config;
pub mod engine;
pub mod lang;
pub mod net;
pub mod text;
