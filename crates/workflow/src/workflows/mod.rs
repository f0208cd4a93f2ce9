pub mod catalog;
pub mod game;
pub mod settings;
pub mod stats;

#[cfg(test)]
mod test_support;
