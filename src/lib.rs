pub mod cli;
pub mod network;
pub mod user;
