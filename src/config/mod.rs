//! Configuration module for the protection simulator.

// Can all be private now because we have a public re-export.
mod assets;
mod debug;
mod demo;
mod simulation;
mod types;

// Re-export commonly used items
pub use assets::{ASSETS, AssetConfig, CoinInfo};
pub use debug::DF;
pub use demo::DEMO;
pub use simulation::{SIMULATION, SimulationConfig};
pub use types::{ChartAsset, LookbackWindow, ProtectionThreshold};
