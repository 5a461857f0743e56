//! Configuration sections: navigation links, search, theme, users.

mod header;
mod search;
mod theme;
mod users;

pub use header::{NavLink, SearchSlot};
pub use search::SearchConfig;
pub use theme::{ColorsConfig, HighlightConfig, is_valid_color};
pub use users::SiteUser;

pub(crate) use header::parse_header_links;
pub(crate) use users::parse_users;
