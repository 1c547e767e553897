pub mod account_drawer;
pub mod logo;

pub use account_drawer::AccountDrawer;
pub use logo::Logo;
