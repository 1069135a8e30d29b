// Domain types and value objects
mod price_point;

// Re-export commonly used types to the world
pub use price_point::PricePoint;
