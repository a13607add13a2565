pub mod email_sender;
pub mod notifier;

pub use email_sender::{EmailError, EmailSender};
pub use notifier::{AccountNotifier, NotificationError, RsvpEmailDetails, RsvpNotifier};
