//! pass-predict test modules
pub mod toolkit;


#[cfg(feature = "tle")]
mod tle;
