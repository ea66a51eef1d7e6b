#![no_std]

pub mod infrastructure;
