pub mod cli;
pub mod conf;
pub mod dashboard;
pub mod ingest;
pub mod logging;
pub mod server;
pub mod simulate;
pub mod stats;
