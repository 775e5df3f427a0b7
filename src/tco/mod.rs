//! TCO/ROI 비교 계산 모듈 모음.

pub mod compare;
pub mod cost;
pub mod roi;

pub use compare::*;
pub use cost::*;
pub use roi::*;
