//! Database access layer

pub mod sales;
