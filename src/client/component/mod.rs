pub mod header;
pub mod layout;
pub mod markdown;
pub mod page;
pub mod protected_layout;

pub use header::Header;
pub use layout::Layout;
pub use markdown::Markdown;
pub use page::Page;
pub use protected_layout::{RequiresAdmin, RequiresLoggedIn, SuperAdminRouteGuard};
