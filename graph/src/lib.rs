#![allow(dead_code)]

pub mod geometry;
pub mod interaction;
pub mod math;
pub mod model;
