//! Configuration module

mod site;

pub use site::DateOrder;
pub use site::HighlightConfig;
pub use site::SiteConfig;
