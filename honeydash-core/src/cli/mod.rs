pub mod conf;
pub mod simulate;
pub mod stats;
