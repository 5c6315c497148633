//! Attendance tracking for a fixed roster of executives, with a blacklist
//! for members who miss three meetings in a row.

pub mod engine;
pub mod model;
pub mod storage;
pub mod ui;
