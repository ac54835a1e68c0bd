//! Built-in gateway event listeners.
//!
//! - `ready` (once): restores the persisted presence and deploys guild commands
//! - `guildMemberAdd`: welcome notification with fallback
//! - `guildMemberRemove`: leave notification

pub mod member_add;
pub mod member_remove;
pub mod ready;

use std::sync::Arc;

use crate::bot::registry::EventListener;

/// All built-in event listeners, in registration order.
pub fn listeners() -> Vec<Arc<dyn EventListener>> {
    vec![
        Arc::new(ready::Ready),
        Arc::new(member_add::MemberAdd),
        Arc::new(member_remove::MemberRemove),
    ]
}
