//! Color analysis of source image regions

/// Randomized average-color sampling
pub mod sampler;
