pub mod dataset;

pub use dataset::{Dataset, LabelColumn, Sample};
