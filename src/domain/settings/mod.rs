//! Settings module - Site-wide configuration singleton.

mod site_settings;

pub use site_settings::{EmailNotifications, SiteSettings, SocialLinks};
