pub mod genes;
pub mod scaffold;
