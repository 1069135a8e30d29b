// Analysis algorithms
pub mod drawdown_protection;

pub use drawdown_protection::{DrawdownProtectionSimulator, ProtectionRun, simulate};
