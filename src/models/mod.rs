mod annotated_point;
mod protection_summary;

pub use {annotated_point::AnnotatedPoint, protection_summary::ProtectionSummary};
