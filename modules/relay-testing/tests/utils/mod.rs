#![allow(dead_code)]

pub mod relayer;
pub use constants::*;
