pub mod footer;
pub mod navbar;
pub mod page;
pub mod spinner;
pub mod status;
pub mod toaster;

pub use footer::Footer;
pub use navbar::Navbar;
pub use page::Page;
pub use spinner::Spinner;
pub use status::{LoginPrompt, StatusMessage};
pub use toaster::ToastList;
