pub mod bot;
pub mod memory;
