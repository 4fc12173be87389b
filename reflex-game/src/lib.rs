pub mod aggregator;
pub mod board;
pub mod config;
pub mod controller;
pub mod generator;
pub mod orchestrator;
pub use aggregator::{RoundSummary, aggregate, signal_band};
pub use board::Board;
pub use config::GameConfig;
pub use controller::TrialController;
pub use generator::SymbolGenerator;
pub use orchestrator::Orchestrator;
