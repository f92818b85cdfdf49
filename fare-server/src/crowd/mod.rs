//! Crowd-level prediction path.
//!
//! The trained classifier lives in a separate model service and is
//! treated as a black box. This module owns what happens before the
//! model: validating the request against the service area and time
//! formats, deriving the feature vector, and forwarding it.

mod client;
mod validate;

pub use client::{ClassifierClient, ClassifierConfig, ClassifierError, Prediction};
pub use validate::{GeoBounds, PredictionFeatures, PredictionRequest, RushHours};
