//! The commute tracker: profile, suggested routes, history, and metrics.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tokio::sync::{broadcast, RwLock};

use crate::alerts::{alerts_for, CommuteAlert};
use crate::events::{EventBus, TrackerEvent};
use crate::identifiers::RouteIdentifier;
use crate::models::profile::UserProfile;
use crate::models::route::{Route, RouteQuery};
use crate::models::types::{CommuteMethod, EcoPreference, Result, TrackerError};
use crate::models::window::{CommuteWindow, TimeOfDay};
use crate::notify::{reminder_time, ReminderMessage, ReminderScheduler, REMINDER_ID};
use crate::provider::RouteProvider;
use crate::storage::{KeyValueStore, COMPLETED_ROUTES_KEY, SAVED_USER_KEY};

/// How many days back [`CommuteTracker::recent_window_completions`] looks.
const WINDOW_STATS_LOOKBACK_DAYS: i64 = 7;

#[derive(Clone, Debug, Default)]
struct TrackerState {
    profile: Option<UserProfile>,
    suggested: Vec<Route>,
    completed: Vec<Route>,
}

/// Owner of all commute-tracking state for the process lifetime.
///
/// All mutations go through this type. State lives behind a single `RwLock`:
/// the provider fetch is awaited without the lock (readers keep the
/// last-committed snapshot), batch replacement is one swap, and a completion
/// racing a newer batch loses cleanly because batch ids are minted fresh per
/// search. Collaborators (store, provider, scheduler) are injected so tests
/// can substitute fakes.
pub struct CommuteTracker {
    store: Arc<dyn KeyValueStore>,
    provider: Arc<dyn RouteProvider>,
    scheduler: Arc<dyn ReminderScheduler>,
    events: EventBus,
    state: RwLock<TrackerState>,
}

impl CommuteTracker {
    pub fn new(
        store: Arc<dyn KeyValueStore>,
        provider: Arc<dyn RouteProvider>,
        scheduler: Arc<dyn ReminderScheduler>,
    ) -> Self {
        Self {
            store,
            provider,
            scheduler,
            events: EventBus::new(64),
            state: RwLock::new(TrackerState::default()),
        }
    }

    // ========================================================================
    // Persistence
    // ========================================================================

    /// Restore profile and history from the store.
    ///
    /// Missing or undecodable records degrade to the empty defaults; the
    /// local cache is best-effort and never fails the caller. Totals are
    /// recomputed from the history afterwards, since the history, not the
    /// cached profile totals, is the source of truth.
    pub async fn load(&self) {
        let profile = self.load_record::<UserProfile>(SAVED_USER_KEY).await;
        let completed = self
            .load_record::<Vec<Route>>(COMPLETED_ROUTES_KEY)
            .await
            .unwrap_or_default();

        let mut totals = None;
        {
            let mut guard = self.state.write().await;
            let state = &mut *guard;
            state.profile = profile;
            state.completed = completed;
            state.suggested.clear();
            if let Some(profile) = state.profile.as_mut() {
                profile.recompute_from(&state.completed);
                totals = Some((
                    profile.total_green_kilometers,
                    profile.total_co2_saved_grams,
                ));
            }
        }

        if let Some((kilometers, grams)) = totals {
            self.events.publish(TrackerEvent::MetricsRecomputed {
                total_green_kilometers: kilometers,
                total_co2_saved_grams: grams,
            });
        }
    }

    async fn load_record<T: serde::de::DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.store.load(key).await {
            Ok(Some(bytes)) => match serde_json::from_slice(&bytes) {
                Ok(value) => Some(value),
                Err(e) => {
                    tracing::warn!(key, error = %e, "undecodable record; falling back to default");
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                tracing::warn!(key, error = %e, "store read failed; falling back to default");
                None
            }
        }
    }

    /// Write both records to the store. Failures are surfaced so the caller
    /// can retry or warn; the in-memory state keeps the committed progress.
    pub async fn save(&self) -> Result<()> {
        let (profile_bytes, completed_bytes) = {
            let state = self.state.read().await;
            let profile_bytes = state
                .profile
                .as_ref()
                .map(|profile| serde_json::to_vec(profile).map_err(encode_error))
                .transpose()?;
            let completed_bytes = serde_json::to_vec(&state.completed).map_err(encode_error)?;
            (profile_bytes, completed_bytes)
        };

        if let Some(bytes) = profile_bytes {
            self.store.save(SAVED_USER_KEY, &bytes).await?;
        }
        self.store.save(COMPLETED_ROUTES_KEY, &completed_bytes).await
    }

    // ========================================================================
    // Profile
    // ========================================================================

    /// Create a fresh profile with zeroed metrics, replacing any existing
    /// one. The name must be non-empty after trimming.
    pub async fn create_profile(
        &self,
        name: &str,
        preferred_method: CommuteMethod,
        eco_preferences: Vec<EcoPreference>,
    ) -> Result<UserProfile> {
        let name = name.trim();
        if name.is_empty() {
            return Err(TrackerError::Validation(
                "profile name must not be empty".into(),
            ));
        }

        let profile = UserProfile::new(name, preferred_method, eco_preferences);
        let replaced_window = {
            let mut state = self.state.write().await;
            let replaced_window = state
                .profile
                .as_ref()
                .is_some_and(|p| p.preferred_window.is_some());
            state.profile = Some(profile.clone());
            replaced_window
        };

        // The new profile has no window; drop the old profile's reminder.
        if replaced_window {
            self.scheduler.cancel_reminder(REMINDER_ID);
        }
        self.events.publish(TrackerEvent::ProfileCreated {
            profile_id: profile.id,
        });
        self.save().await?;
        Ok(profile)
    }

    /// Set or clear the preferred daily commute window. Start and end come
    /// together or not at all; the reminder follows the window.
    pub async fn set_preferred_window(
        &self,
        start: Option<TimeOfDay>,
        end: Option<TimeOfDay>,
    ) -> Result<()> {
        let window = match (start, end) {
            (Some(start), Some(end)) => Some(CommuteWindow::new(start, end)),
            (None, None) => None,
            _ => {
                return Err(TrackerError::Validation(
                    "preferred window needs both a start and an end time".into(),
                ))
            }
        };

        {
            let mut state = self.state.write().await;
            let profile = state
                .profile
                .as_mut()
                .ok_or_else(|| TrackerError::Validation("no active profile".into()))?;
            profile.preferred_window = window;
        }

        // At most one active reminder: always clear before rescheduling.
        self.scheduler.cancel_reminder(REMINDER_ID);
        if let Some(window) = &window {
            self.scheduler
                .schedule_daily_reminder(reminder_time(window), &ReminderMessage::commute_default());
        }
        self.events
            .publish(TrackerEvent::PreferredWindowChanged { window });
        self.save().await?;
        Ok(())
    }

    // ========================================================================
    // Routes
    // ========================================================================

    /// Ask the provider for route suggestions and replace the current batch.
    ///
    /// The fetch runs without the state lock, so readers keep the
    /// last-committed batch until the swap. On provider failure the previous
    /// batch stays untouched. An empty result is a successful search.
    pub async fn request_route_suggestions(&self, query: RouteQuery) -> Result<Vec<Route>> {
        query.validate()?;
        let preferred_method = {
            let state = self.state.read().await;
            state
                .profile
                .as_ref()
                .map(|p| p.preferred_method)
                .unwrap_or(CommuteMethod::Walking)
        };

        let routes = self.provider.fetch_routes(&query, preferred_method).await?;

        {
            let mut state = self.state.write().await;
            state.suggested = routes.clone();
        }
        tracing::debug!(count = routes.len(), "suggested batch replaced");
        self.events.publish(TrackerEvent::SuggestionsReplaced {
            count: routes.len(),
        });
        Ok(routes)
    }

    /// Mark a suggested route as completed.
    ///
    /// The append to history, removal from the batch, and metric update
    /// commit together under the write lock; no reader can observe a state
    /// where only some of them have applied. An id from a superseded batch
    /// fails with `RouteNotFound`, as does a second completion of the same
    /// route.
    pub async fn complete_route(&self, route_id: RouteIdentifier) -> Result<Route> {
        let completed = {
            let mut guard = self.state.write().await;
            let state = &mut *guard;
            let index = state
                .suggested
                .iter()
                .position(|r| r.id == route_id)
                .ok_or(TrackerError::RouteNotFound(route_id))?;

            let route = state.suggested.remove(index).into_completed(Utc::now());
            state.completed.push(route.clone());
            if let Some(profile) = state.profile.as_mut() {
                profile.apply_completion(&route);
            }
            route
        };

        tracing::info!(route_id = %completed.id, method = %completed.commute_method, "route completed");
        self.events.publish(TrackerEvent::RouteCompleted {
            route_id: completed.id,
            distance_km: completed.distance_km,
            co2_saved_grams: completed.co2_saved_grams,
        });
        self.save().await?;
        Ok(completed)
    }

    /// Evaluate a suggested route's weather and traffic against the alert
    /// rules. Read-only; alerts are also published as events.
    pub async fn check_alerts(&self, route_id: RouteIdentifier) -> Result<Vec<CommuteAlert>> {
        let alerts = {
            let state = self.state.read().await;
            let route = state
                .suggested
                .iter()
                .find(|r| r.id == route_id)
                .ok_or(TrackerError::RouteNotFound(route_id))?;
            alerts_for(route)
        };

        for alert in &alerts {
            self.events.publish(TrackerEvent::AlertRaised {
                route_id,
                alert: *alert,
            });
        }
        Ok(alerts)
    }

    // ========================================================================
    // Metrics
    // ========================================================================

    /// Recompute profile totals as the sums over the completed history.
    pub async fn recompute_metrics_from_history(&self) -> Result<()> {
        let mut totals = None;
        {
            let mut guard = self.state.write().await;
            let state = &mut *guard;
            if let Some(profile) = state.profile.as_mut() {
                profile.recompute_from(&state.completed);
                totals = Some((
                    profile.total_green_kilometers,
                    profile.total_co2_saved_grams,
                ));
            }
        }

        if let Some((kilometers, grams)) = totals {
            self.events.publish(TrackerEvent::MetricsRecomputed {
                total_green_kilometers: kilometers,
                total_co2_saved_grams: grams,
            });
            self.save().await?;
        }
        Ok(())
    }

    /// Whether `now` falls inside the preferred window (inclusive bounds).
    /// False when no window is set.
    pub async fn is_within_preferred_window(&self, now: DateTime<Utc>) -> bool {
        let state = self.state.read().await;
        state
            .profile
            .as_ref()
            .and_then(|p| p.preferred_window)
            .map(|window| window.contains(TimeOfDay::from_timestamp(&now)))
            .unwrap_or(false)
    }

    /// How many routes were completed inside the preferred window over the
    /// last seven days. Zero when no window is set.
    pub async fn recent_window_completions(&self, now: DateTime<Utc>) -> usize {
        let state = self.state.read().await;
        let Some(window) = state.profile.as_ref().and_then(|p| p.preferred_window) else {
            return 0;
        };
        let cutoff = now - Duration::days(WINDOW_STATS_LOOKBACK_DAYS);

        state
            .completed
            .iter()
            .filter_map(|route| route.completed_at)
            .filter(|at| *at >= cutoff && window.contains(TimeOfDay::from_timestamp(at)))
            .count()
    }

    // ========================================================================
    // Observation
    // ========================================================================

    pub async fn profile(&self) -> Option<UserProfile> {
        self.state.read().await.profile.clone()
    }

    pub async fn suggested_routes(&self) -> Vec<Route> {
        self.state.read().await.suggested.clone()
    }

    pub async fn completed_routes(&self) -> Vec<Route> {
        self.state.read().await.completed.clone()
    }

    /// Subscribe to state-change events. One event per committed mutation.
    pub fn subscribe(&self) -> broadcast::Receiver<TrackerEvent> {
        self.events.subscribe()
    }
}

fn encode_error(e: serde_json::Error) -> TrackerError {
    TrackerError::Persistence(format!("encoding record: {}", e))
}
