mod profile_card;
pub use profile_card::*;
