//! Attack Simulation
//!
//! Writes synthetic brute-force traffic into a honeypot log so the dashboard
//! has something to show during a demo. The generated lines use the same
//! shape the honeypot itself emits, so they go through the normal ingestion
//! path unchanged.
//!
//! Each attempt produces one session:
//! connect, one login (success or failure), a handful of commands when the
//! login succeeded, and finally `session.closed` with the session duration.

mod constants;
mod generator;


pub use constants::*;
pub use generator::{SimulationOptions, SimulationReport, generate_events, simulate_to_file};
