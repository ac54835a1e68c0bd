//! In-memory platform used by unit tests.
//!
//! Records every outbound call and can be told to fail specific operations.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use serenity::async_trait;

use super::{CommandDeployer, MessageSink, OutboundMessage, Platform, PresenceSession};
use crate::error::platform::PlatformError;
use crate::model::{command::CommandDefinition, presence::Presence};

pub struct RecordingPlatform {
    pub bot_name: String,
    pub presences: Mutex<Vec<Presence>>,
    pub sent: Mutex<Vec<(u64, OutboundMessage)>>,
    pub attempts: Mutex<Vec<(u64, OutboundMessage)>>,
    pub deployed: Mutex<Vec<(u64, Vec<String>)>>,
    pub fail_presence: AtomicBool,
    pub fail_embeds: AtomicBool,
    pub fail_text: AtomicBool,
    pub fail_deploy: AtomicBool,
}

impl Default for RecordingPlatform {
    fn default() -> Self {
        Self {
            bot_name: "Vigil".to_string(),
            presences: Mutex::new(Vec::new()),
            sent: Mutex::new(Vec::new()),
            attempts: Mutex::new(Vec::new()),
            deployed: Mutex::new(Vec::new()),
            fail_presence: AtomicBool::new(false),
            fail_embeds: AtomicBool::new(false),
            fail_text: AtomicBool::new(false),
            fail_deploy: AtomicBool::new(false),
        }
    }
}

impl RecordingPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_presence(self) -> Self {
        self.fail_presence.store(true, Ordering::SeqCst);
        self
    }

    pub fn failing_embeds(self) -> Self {
        self.fail_embeds.store(true, Ordering::SeqCst);
        self
    }

    pub fn failing_text(self) -> Self {
        self.fail_text.store(true, Ordering::SeqCst);
        self
    }

    pub fn failing_deploy(self) -> Self {
        self.fail_deploy.store(true, Ordering::SeqCst);
        self
    }

    pub fn presences(&self) -> Vec<Presence> {
        self.presences.lock().unwrap().clone()
    }

    pub fn sent(&self) -> Vec<(u64, OutboundMessage)> {
        self.sent.lock().unwrap().clone()
    }

    /// Every send attempted, including the ones made to fail.
    pub fn attempts(&self) -> Vec<(u64, OutboundMessage)> {
        self.attempts.lock().unwrap().clone()
    }

    pub fn deployed(&self) -> Vec<(u64, Vec<String>)> {
        self.deployed.lock().unwrap().clone()
    }
}

#[async_trait]
impl PresenceSession for RecordingPlatform {
    async fn set_presence(&self, presence: &Presence) -> Result<(), PlatformError> {
        if self.fail_presence.load(Ordering::SeqCst) {
            return Err(PlatformError::InvalidActivityUrl(None));
        }
        self.presences.lock().unwrap().push(presence.clone());
        Ok(())
    }
}

#[async_trait]
impl MessageSink for RecordingPlatform {
    async fn send(&self, channel_id: u64, message: &OutboundMessage) -> Result<(), PlatformError> {
        self.attempts
            .lock()
            .unwrap()
            .push((channel_id, message.clone()));
        let fail = match message {
            OutboundMessage::Embed(_) => self.fail_embeds.load(Ordering::SeqCst),
            OutboundMessage::Text(_) => self.fail_text.load(Ordering::SeqCst),
        };
        if fail {
            return Err(PlatformError::MissingAccess(channel_id));
        }
        self.sent.lock().unwrap().push((channel_id, message.clone()));
        Ok(())
    }
}

#[async_trait]
impl CommandDeployer for RecordingPlatform {
    async fn deploy_commands(
        &self,
        guild_id: u64,
        commands: &[CommandDefinition],
    ) -> Result<usize, PlatformError> {
        if self.fail_deploy.load(Ordering::SeqCst) {
            return Err(PlatformError::UnknownChannel(guild_id));
        }
        let names = commands.iter().map(|c| c.name.clone()).collect();
        self.deployed.lock().unwrap().push((guild_id, names));
        Ok(commands.len())
    }
}

impl Platform for RecordingPlatform {
    fn bot_name(&self) -> String {
        self.bot_name.clone()
    }
}
