mod fold;
mod promise;
mod remote_data;
mod remote_error;

pub use fold::*;
pub use promise::*;
pub use remote_data::*;
pub use remote_error::*;

#[cfg(test)]
mod unit_tests;
