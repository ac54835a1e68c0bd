//! Service layer for the bot's behaviour.
//!
//! Services sit between the Discord handlers and the configuration store. They hold
//! borrowed references to the store and to the platform capability they need, and are
//! created per command or event:
//!
//! - **PermissionGate**: allow-list check for privileged commands
//! - **PresenceController**: applies presence to the session and persists it
//! - **MembershipNotifier**: join and leave notifications

pub mod notifier;
pub mod permission;
pub mod presence;

pub use notifier::{MembershipNotifier, NotifyOutcome};
pub use permission::PermissionGate;
pub use presence::PresenceController;

#[cfg(test)]
mod test;
