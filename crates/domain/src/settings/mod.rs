mod max_attempts;

pub use max_attempts::MaxAttempts;
