#![allow(dead_code)]

pub mod secrets;
pub mod stage;
