pub mod aggregate;
pub mod filter;
pub mod format;
pub mod lifecycle;
pub mod loader;
pub mod record;
