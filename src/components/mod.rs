mod avatar;
pub use avatar::*;

mod button;
pub use button::*;

mod icon;
pub use icon::*;

mod link_button;
pub use link_button::*;

mod skill_tag;
pub use skill_tag::*;

mod theme_toggle;
pub use theme_toggle::*;

mod tooltip;
pub use tooltip::*;
