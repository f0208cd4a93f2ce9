mod autocomplete;

pub use autocomplete::autocomplete;
