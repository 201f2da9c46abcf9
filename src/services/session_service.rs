use crate::models::booking::{BookingState, BookingView, CheckoutResponse, SeatToggleResponse, Upgrade};
use crate::models::bus::BusOffer;
use crate::models::search::SearchCriteria;
use crate::services::pricing_service;
use crate::services::seat_service::SeatLayout;
use crate::utils::error::{AppError, AppResult};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;
use uuid::Uuid;

pub const DEFAULT_SESSION_TTL: Duration = Duration::from_secs(30 * 60);

struct SessionEntry {
    state: BookingState,
    touched: Instant,
}

/// In-memory booking state, one entry per browsing session.
///
/// Every mutation runs under the write lock and answers with a fresh
/// `BookingView`, so callers never hold on to stale state. Entries idle for
/// longer than the TTL read as empty and are dropped on the next write.
pub struct SessionStore {
    sessions: RwLock<HashMap<Uuid, SessionEntry>>,
    layout: SeatLayout,
    tax_rate: Decimal,
    ttl: Duration,
}

impl SessionStore {
    pub fn new(layout: SeatLayout, tax_rate: Decimal) -> Self {
        SessionStore {
            sessions: RwLock::new(HashMap::new()),
            layout,
            tax_rate,
            ttl: DEFAULT_SESSION_TTL,
        }
    }

    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Number of live sessions held.
    pub async fn len(&self) -> usize {
        let sessions = self.sessions.read().await;
        sessions.values().filter(|entry| self.is_live(entry)).count()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    pub async fn view(&self, session_id: Uuid) -> BookingView {
        let sessions = self.sessions.read().await;
        match self.live_state(&sessions, session_id) {
            Some(state) => self.project(state),
            None => self.project(&BookingState::default()),
        }
    }

    pub async fn set_search(&self, session_id: Uuid, criteria: SearchCriteria) -> BookingView {
        tracing::info!(
            %session_id,
            origin = %criteria.origin,
            destination = %criteria.destination,
            date = %criteria.date,
            "search criteria stored"
        );
        self.update(session_id, |state| state.search = Some(criteria)).await
    }

    // Choosing another bus drops the seats picked on the previous one
    pub async fn select_bus(&self, session_id: Uuid, bus: BusOffer) -> BookingView {
        tracing::info!(%session_id, bus_id = %bus.id, "bus selected");
        self.update(session_id, |state| {
            let same_bus = state.selected_bus.as_ref().is_some_and(|b| b.id == bus.id);
            if !same_bus {
                state.selected_seats.clear();
            }
            state.selected_bus = Some(bus);
        })
        .await
    }

    pub async fn toggle_seat(&self, session_id: Uuid, seat_id: u32) -> AppResult<SeatToggleResponse> {
        let mut sessions = self.sessions.write().await;
        self.prune(&mut sessions);
        let entry = sessions
            .get_mut(&session_id)
            .filter(|entry| entry.state.selected_bus.is_some())
            .ok_or_else(|| AppError::Conflict("Select a bus before choosing seats".into()))?;
        entry.touched = Instant::now();
        let state = &mut entry.state;

        let outcome = self.layout.toggle(&mut state.selected_seats, seat_id);
        tracing::debug!(%session_id, seat_id, ?outcome, "seat toggled");

        Ok(SeatToggleResponse {
            seat_id,
            outcome,
            booking: self.project(state),
        })
    }

    pub async fn toggle_upgrade(&self, session_id: Uuid, upgrade: Upgrade) -> BookingView {
        self.update(session_id, |state| {
            let enabled = state.upgrades.toggle(upgrade);
            tracing::debug!(%session_id, %upgrade, enabled, "upgrade toggled");
        })
        .await
    }

    pub async fn reset(&self, session_id: Uuid) -> BookingView {
        self.sessions.write().await.remove(&session_id);
        self.project(&BookingState::default())
    }

    // The terminal "proceed" step; nothing is charged or persisted
    pub async fn checkout(&self, session_id: Uuid) -> AppResult<CheckoutResponse> {
        let sessions = self.sessions.read().await;
        let state = self
            .live_state(&sessions, session_id)
            .ok_or_else(|| AppError::Unprocessable("Please select a bus first".into()))?;
        let bus = state
            .selected_bus
            .as_ref()
            .ok_or_else(|| AppError::Unprocessable("Please select a bus first".into()))?;
        if state.selected_seats.is_empty() {
            return Err(AppError::Unprocessable("Please select at least one seat".into()));
        }

        let summary = pricing_service::calculate(
            bus.price,
            state.selected_seats.len() as u64,
            &state.upgrades,
            self.tax_rate,
        );
        tracing::info!(%session_id, bus_id = %bus.id, total = summary.total, "proceeding to payment");

        Ok(CheckoutResponse {
            status: "proceeding_to_payment".to_string(),
            bus_id: bus.id.clone(),
            seats: state.selected_seats.ids(),
            summary,
        })
    }

    async fn update<F>(&self, session_id: Uuid, apply: F) -> BookingView
    where
        F: FnOnce(&mut BookingState),
    {
        let mut sessions = self.sessions.write().await;
        self.prune(&mut sessions);
        let entry = sessions.entry(session_id).or_insert_with(|| SessionEntry {
            state: BookingState::default(),
            touched: Instant::now(),
        });
        entry.touched = Instant::now();
        apply(&mut entry.state);
        self.project(&entry.state)
    }

    fn is_live(&self, entry: &SessionEntry) -> bool {
        entry.touched.elapsed() < self.ttl
    }

    fn live_state<'a>(
        &self,
        sessions: &'a HashMap<Uuid, SessionEntry>,
        session_id: Uuid,
    ) -> Option<&'a BookingState> {
        sessions
            .get(&session_id)
            .filter(|entry| self.is_live(entry))
            .map(|entry| &entry.state)
    }

    fn prune(&self, sessions: &mut HashMap<Uuid, SessionEntry>) {
        let before = sessions.len();
        sessions.retain(|_, entry| self.is_live(entry));
        let expired = before - sessions.len();
        if expired > 0 {
            tracing::debug!(expired, "expired booking sessions dropped");
        }
    }

    fn project(&self, state: &BookingState) -> BookingView {
        let summary = state.selected_bus.as_ref().map(|bus| {
            pricing_service::calculate(
                bus.price,
                state.selected_seats.len() as u64,
                &state.upgrades,
                self.tax_rate,
            )
        });

        BookingView {
            search: state.search.clone(),
            selected_bus: state.selected_bus.clone(),
            seats: self.layout.render(&state.selected_seats),
            selected_seats: state.selected_seats.clone(),
            upgrades: state.upgrades,
            can_proceed: state.selected_bus.is_some() && !state.selected_seats.is_empty(),
            summary,
        }
    }
}
