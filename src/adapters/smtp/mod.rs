//! Outbound mail delivery over SMTP.

mod recording;
mod transport;

pub use recording::RecordingMailTransport;
pub use transport::LettreMailTransport;
