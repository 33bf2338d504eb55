mod components;
mod layout;

pub use layout::render;
