mod backend;
mod client;
mod device;
mod error;
mod query;

pub use backend::Backend;
pub use client::Client;
pub use device::{Device, Scene};
pub use error::Error;
pub use query::{Query, Rgb, SwitchCommand};

pub type Result<T> = std::result::Result<T, Error>;
