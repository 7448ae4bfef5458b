mod pid;
pub mod setup;

pub use setup::{build_pingora_server, run};
