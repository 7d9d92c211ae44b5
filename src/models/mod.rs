mod session;
mod settings;

pub use session::SessionSnapshot;
pub use settings::Settings;
