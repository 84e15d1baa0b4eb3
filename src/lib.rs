#![allow(non_snake_case)]

pub mod client;
pub mod data;
pub mod model;
pub mod store;
