pub mod header;
pub mod notification;

pub use header::Header;
pub use notification::{NotificationHost, NotificationService};
