#![allow(dead_code)]

pub mod architecture;
pub mod archive;
pub mod recording_binder;
