// Small numeric helpers shared by the models and the analysis stages
pub mod maths_utils;

pub use maths_utils::{get_max, max_index, quantile};
