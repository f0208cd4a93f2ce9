mod response;

pub use response::{
    EntityView, GuessReport, SessionSummary, SettingsResponse, StartGameResponse,
};
