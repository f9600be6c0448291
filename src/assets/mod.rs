mod icons;
pub use icons::*;
use cfg_if::cfg_if;

cfg_if!(
    if #[cfg(feature = "assets")] {
        mod embedded;
        pub use embedded::*;
    }
);
