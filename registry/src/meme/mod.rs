pub mod lib;
pub mod lifecycle;
pub mod pricing;

mod buyer;
mod creator;
mod enumeration;
mod internal;
mod relay;
mod settlement;
