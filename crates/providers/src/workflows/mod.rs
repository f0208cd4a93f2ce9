mod game;

pub use game::GameProvider;
