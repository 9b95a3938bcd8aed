#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod dynamic;
pub mod traits;
pub mod typed;
