mod calendar;
mod gmail;
pub mod models;
pub mod token;

pub use calendar::GoogleCalendarClient;
pub use gmail::{from_matches, plain_text_body, GmailClient};
pub use token::FileTokenProvider;
