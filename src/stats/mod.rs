pub mod describe;
pub mod kde;
pub mod roc;
pub mod ttest;
