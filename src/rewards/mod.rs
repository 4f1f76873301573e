//! Reward resolution after a victory.

pub mod offer;

pub use offer::RewardOffer;
