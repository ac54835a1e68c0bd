use url::Url;

use crate::bot::platform::PresenceSession;
use crate::data::ConfigStore;
use crate::error::{platform::PlatformError, presence::PresenceError, AppError};
use crate::model::{
    document::path,
    presence::{Activity, ActivityKind, BotStatus, Presence, StoredPresence},
};

/// Only Twitch streams are accepted for the Streaming activity.
pub const STREAMING_URL_PREFIX: &str = "https://www.twitch.tv/";

/// Validates an activity before it is applied.
///
/// Streaming activities must carry a URL that parses and points at Twitch. Any URL on a
/// non-streaming activity is dropped.
///
/// # Returns
/// - `Ok(Activity)` - The normalized activity
/// - `Err(PresenceError::InvalidActivityName)` - Empty name
/// - `Err(PresenceError::InvalidStreamingUrl)` - Streaming without a valid Twitch URL
pub fn validate_activity(mut activity: Activity) -> Result<Activity, PresenceError> {
    if activity.name.trim().is_empty() {
        return Err(PresenceError::InvalidActivityName);
    }

    if activity.kind != ActivityKind::Streaming {
        activity.url = None;
        return Ok(activity);
    }

    let valid = activity
        .url
        .as_deref()
        .is_some_and(|url| Url::parse(url).is_ok() && url.starts_with(STREAMING_URL_PREFIX));
    if !valid {
        return Err(PresenceError::InvalidStreamingUrl(activity.url));
    }

    Ok(activity)
}

/// Keeps the live session presence and the `bot_presence` section in step.
pub struct PresenceController<'a, S: PresenceSession + ?Sized> {
    store: &'a ConfigStore,
    session: &'a S,
}

impl<'a, S: PresenceSession + ?Sized> PresenceController<'a, S> {
    pub fn new(store: &'a ConfigStore, session: &'a S) -> Self {
        Self { store, session }
    }

    /// Applies a presence to the session and persists it.
    ///
    /// Validation happens before anything external. When persisting fails the previous
    /// presence is re-applied on a best-effort basis so the session matches the
    /// document again.
    ///
    /// # Arguments
    /// - `presence` - Presence to apply
    ///
    /// # Returns
    /// - `Ok(Presence)` - The presence as applied and persisted
    /// - `Err(AppError::PresenceErr)` - Invalid activity, or the session refused it
    /// - `Err(AppError::ConfigErr)` - Applied but not persisted; previous presence restored
    pub async fn apply_presence(&self, presence: Presence) -> Result<Presence, AppError> {
        let presence = Presence {
            status: presence.status,
            activity: presence.activity.map(validate_activity).transpose()?,
        };

        let previous = self.current().await;

        self.session
            .set_presence(&presence)
            .await
            .map_err(PresenceError::Apply)?;

        if let Err(e) = self
            .store
            .update_and_persist(path::BOT_PRESENCE, &presence)
            .await
        {
            tracing::error!("Failed to persist bot presence: {}", e);

            if let Err(restore_err) = self.session.set_presence(&previous).await {
                tracing::error!("Failed to restore previous presence: {}", restore_err);
            }

            return Err(e.into());
        }

        Ok(presence)
    }

    /// Changes the status, keeping the configured activity.
    pub async fn set_status(&self, status: BotStatus) -> Result<Presence, AppError> {
        let current = self.current().await;

        let activity = current
            .activity
            .and_then(|activity| match validate_activity(activity) {
                Ok(activity) => Some(activity),
                Err(e) => {
                    tracing::warn!("Dropping invalid stored activity: {}", e);
                    None
                }
            });

        self.apply_presence(Presence::new(status, activity)).await
    }

    /// Changes the activity, keeping the configured status.
    pub async fn set_activity(&self, activity: Activity) -> Result<Presence, AppError> {
        let current = self.current().await;

        self.apply_presence(Presence::new(current.status, Some(activity)))
            .await
    }

    /// Reads the persisted presence, tolerating unknown or incomplete values.
    ///
    /// Unknown statuses fall back to `online`; an unknown activity type or a missing
    /// name drops the activity. Streaming URLs only need to parse; the Twitch rule is
    /// not re-checked here.
    pub async fn current(&self) -> Presence {
        match self.store.section::<StoredPresence>(path::BOT_PRESENCE).await {
            Ok(Some(stored)) => resolve_stored(stored),
            Ok(None) => Presence::default(),
            Err(e) => {
                tracing::warn!("Ignoring malformed bot presence: {}", e);
                Presence::default()
            }
        }
    }

    /// Applies the persisted presence to the session. Never writes to the store.
    pub async fn restore_from_config(&self) -> Result<Presence, PlatformError> {
        let presence = self.current().await;

        self.session.set_presence(&presence).await?;

        match &presence.activity {
            Some(activity) => tracing::info!(
                "Restored presence: {} / {} {}",
                presence.status,
                activity.kind,
                activity.name
            ),
            None => tracing::info!("Restored presence: {}", presence.status),
        }

        Ok(presence)
    }
}

fn resolve_stored(stored: StoredPresence) -> Presence {
    let status = match stored.status.as_deref() {
        None => BotStatus::default(),
        Some(status) => status.parse().unwrap_or_else(|unknown| {
            tracing::warn!("Unknown stored status '{}', using online", unknown);
            BotStatus::default()
        }),
    };

    let activity = stored.activity.and_then(|activity| {
        let kind = match activity.kind.as_deref().map(str::parse::<ActivityKind>) {
            Some(Ok(kind)) => kind,
            Some(Err(unknown)) => {
                tracing::warn!("Unknown stored activity type '{}', ignoring activity", unknown);
                return None;
            }
            None => {
                tracing::warn!("Stored activity has no type, ignoring activity");
                return None;
            }
        };

        let Some(name) = activity.name.filter(|name| !name.is_empty()) else {
            tracing::warn!("Stored activity has no name, ignoring activity");
            return None;
        };

        // The session cannot stream without a URL it can parse
        if kind == ActivityKind::Streaming
            && !activity.url.as_deref().is_some_and(|url| Url::parse(url).is_ok())
        {
            tracing::warn!(
                "Stored streaming activity has no valid URL ({:?}), ignoring activity",
                activity.url
            );
            return None;
        }

        Some(Activity::new(kind, name, activity.url))
    });

    Presence::new(status, activity)
}
