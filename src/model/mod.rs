pub mod champion;
pub mod ids;
pub mod progress;
pub mod tag;
