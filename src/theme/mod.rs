//! Theme system providing colors, typography, and layout dimensions.
//!
//! A theme carries one variant per color mode (light and dark) with a
//! consistent set of semantic color tokens. Which variant styling
//! resolves through is decided by the [`ThemeController`].

mod schema;
pub use schema::*;

mod deserializers;

mod ext;
pub use ext::*;

mod kinds;
pub use kinds::*;

mod controller;
pub use controller::*;
