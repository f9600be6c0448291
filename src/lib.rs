pub mod primitives;

pub mod views;

pub mod components;

pub mod theme;

pub mod profile;

mod utils;
pub use utils::ElementIdExt;

mod assets;
pub use assets::*;

mod init;
pub use init::*;
