pub mod client;
pub mod types;

pub use client::PredictionService;
pub use types::PredictionResult;
