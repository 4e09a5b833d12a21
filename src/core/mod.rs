pub mod scaffold;
pub mod steps;
pub mod templates;
