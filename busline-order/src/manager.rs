use crate::models::{BookingConfirmation, SeatSession};
use busline_catalog::{SeatError, Summary, ToggleOutcome};
use busline_core::{SeatLayout, Trip};
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;
use std::collections::HashMap;

/// Idle sessions are dropped after this long without a toggle (15 minutes).
pub const DEFAULT_IDLE_SECONDS: i64 = 900;

/// Holds the open seat sessions and drives their lifecycle:
/// open → toggle* → confirm | close | idle expiry.
pub struct SessionManager {
    sessions: HashMap<Uuid, SeatSession>,
    idle_timeout: Duration,
}

impl SessionManager {
    pub fn new() -> Self {
        Self::with_idle_timeout(Duration::seconds(DEFAULT_IDLE_SECONDS))
    }

    pub fn with_idle_timeout(idle_timeout: Duration) -> Self {
        Self {
            sessions: HashMap::new(),
            idle_timeout,
        }
    }

    /// Start a fresh session with an empty selection.
    /// Abandoned sessions are swept first so the map cannot grow without bound.
    pub fn open(&mut self, trip: Trip, layout: &SeatLayout) -> SeatSession {
        self.cleanup_expired(Utc::now());

        let session = SeatSession::new(trip, layout);
        tracing::info!(session_id = %session.id, trip_id = session.trip.id, "Seat session opened");

        self.sessions.insert(session.id, session.clone());
        session
    }

    pub fn get(&self, session_id: &Uuid) -> Option<&SeatSession> {
        self.sessions.get(session_id)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }

    pub fn toggle(&mut self, session_id: &Uuid, seat_id: u32) -> Result<ToggleOutcome, SessionError> {
        let session = self.get_session_mut(session_id)?;

        match session.inventory.toggle(seat_id) {
            Ok(outcome) => {
                session.touch();
                Ok(outcome)
            }
            Err(err) => {
                tracing::debug!(session_id = %session_id, seat_id, "Seat toggle rejected: {}", err);
                Err(err.into())
            }
        }
    }

    pub fn summary(&self, session_id: &Uuid) -> Result<Summary, SessionError> {
        self.sessions
            .get(session_id)
            .map(SeatSession::summary)
            .ok_or(SessionError::NotFound(*session_id))
    }

    /// Terminal step. The session is dropped on success and kept on an empty pick
    /// so the viewer can keep choosing.
    pub fn confirm(&mut self, session_id: &Uuid) -> Result<BookingConfirmation, SessionError> {
        let session = self.get_session_mut(session_id)?;
        let totals = session.inventory.confirm()?;

        let confirmation = BookingConfirmation {
            booking_id: Uuid::new_v4(),
            trip_id: session.trip.id,
            seat_count: totals.seat_count,
            seat_ids: session.selection().ids().to_vec(),
            total_price: totals.total_price,
            currency: session.trip.currency.clone(),
            confirmed_at: Utc::now(),
        };

        self.sessions.remove(session_id);
        tracing::info!(
            session_id = %session_id,
            booking_id = %confirmation.booking_id,
            seats = confirmation.seat_count,
            total = confirmation.total_price,
            "Booking confirmed"
        );

        Ok(confirmation)
    }

    /// Viewer navigated away
    pub fn close(&mut self, session_id: &Uuid) -> Result<(), SessionError> {
        self.sessions
            .remove(session_id)
            .map(|_| tracing::debug!(session_id = %session_id, "Seat session closed"))
            .ok_or(SessionError::NotFound(*session_id))
    }

    /// Drop sessions idle for longer than the timeout. Returns how many went.
    pub fn cleanup_expired(&mut self, now: DateTime<Utc>) -> usize {
        let initial_count = self.sessions.len();
        let idle_timeout = self.idle_timeout;

        self.sessions.retain(|_, session| !session.is_idle(now, idle_timeout));

        let removed = initial_count - self.sessions.len();
        if removed > 0 {
            tracing::info!(removed, remaining = self.sessions.len(), "Expired idle seat sessions");
        }
        removed
    }

    fn get_session_mut(&mut self, session_id: &Uuid) -> Result<&mut SeatSession, SessionError> {
        self.sessions.get_mut(session_id)
            .ok_or(SessionError::NotFound(*session_id))
    }
}

impl Default for SessionManager {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Session not found: {0}")]
    NotFound(Uuid),

    #[error(transparent)]
    Seat(#[from] SeatError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use busline_catalog::UnavailableReason;

    fn reference_trip() -> (Trip, SeatLayout) {
        let trip = Trip {
            id: 4,
            company: "Sri Lanka Transport Board".to_string(),
            from: "Colombo".to_string(),
            to: "Kandy".to_string(),
            departure_time: "8:00 AM".to_string(),
            arrival_time: "11:30 AM".to_string(),
            price_per_seat: 450,
            currency: "LKR".to_string(),
            contact: "011-2581120".to_string(),
        };
        let layout = SeatLayout::new(40, vec![5, 12, 18, 23, 27, 31, 34], vec![8, 15, 22]);
        (trip, layout)
    }

    #[test]
    fn test_session_lifecycle() {
        let mut manager = SessionManager::new();
        let (trip, layout) = reference_trip();

        // Open
        let session = manager.open(trip, &layout);
        let session_id = session.id;
        assert!(session.selection().is_empty());
        assert_eq!(manager.len(), 1);

        // Pick two seats, one rejected attempt in between
        manager.toggle(&session_id, 1).unwrap();
        let err = manager.toggle(&session_id, 5).unwrap_err();
        assert!(matches!(err, SessionError::Seat(SeatError::Unavailable(UnavailableReason::Booked))));
        manager.toggle(&session_id, 2).unwrap();
        assert_eq!(manager.summary(&session_id).unwrap().total_price, 900);

        // Confirm
        let confirmation = manager.confirm(&session_id).unwrap();
        assert_eq!(confirmation.seat_count, 2);
        assert_eq!(confirmation.seat_ids, vec![1, 2]);
        assert_eq!(confirmation.total_price, 900);
        assert_eq!(confirmation.message("Rs."), "Successfully booked 2 seat(s)! Total: Rs. 900");

        // Terminal
        assert!(manager.get(&session_id).is_none());
        assert!(matches!(manager.toggle(&session_id, 3), Err(SessionError::NotFound(_))));
    }

    #[test]
    fn test_empty_confirm_keeps_session() {
        let mut manager = SessionManager::new();
        let (trip, layout) = reference_trip();
        let session_id = manager.open(trip, &layout).id;

        let err = manager.confirm(&session_id).unwrap_err();
        assert!(matches!(err, SessionError::Seat(SeatError::EmptySelection)));
        assert!(manager.get(&session_id).is_some());
    }

    #[test]
    fn test_sessions_are_independent() {
        let mut manager = SessionManager::new();
        let (trip, layout) = reference_trip();
        let first = manager.open(trip.clone(), &layout).id;
        let second = manager.open(trip, &layout).id;

        // Both viewers may grab the same seat: no cross-session locking
        assert_eq!(manager.toggle(&first, 10).unwrap(), ToggleOutcome::Selected);
        assert_eq!(manager.toggle(&second, 10).unwrap(), ToggleOutcome::Selected);
        assert!(manager.confirm(&first).is_ok());
        assert!(manager.confirm(&second).is_ok());
    }

    #[test]
    fn test_cleanup_expired_drops_idle_sessions() {
        let mut manager = SessionManager::with_idle_timeout(Duration::minutes(15));
        let (trip, layout) = reference_trip();

        let abandoned: Vec<Uuid> = (0..100)
            .map(|_| manager.open(trip.clone(), &layout).id)
            .collect();
        assert_eq!(manager.len(), 100);

        // Nothing is idle yet
        assert_eq!(manager.cleanup_expired(Utc::now()), 0);

        let later = Utc::now() + Duration::minutes(16);
        assert_eq!(manager.cleanup_expired(later), 100);
        assert!(manager.is_empty());
        assert!(matches!(manager.toggle(&abandoned[0], 1), Err(SessionError::NotFound(_))));
    }

    #[test]
    fn test_activity_keeps_session_alive() {
        let mut manager = SessionManager::with_idle_timeout(Duration::minutes(15));
        let (trip, layout) = reference_trip();
        let active = manager.open(trip.clone(), &layout).id;
        let idle = manager.open(trip, &layout).id;

        // Last activity twenty minutes ago
        manager.sessions.get_mut(&idle).unwrap().updated_at = Utc::now() - Duration::minutes(20);
        manager.toggle(&active, 1).unwrap();

        assert_eq!(manager.cleanup_expired(Utc::now()), 1);
        assert!(manager.get(&idle).is_none());
        assert_eq!(manager.get(&active).unwrap().selection().ids(), &[1]);
    }

    #[test]
    fn test_open_sweeps_abandoned_sessions() {
        let mut manager = SessionManager::with_idle_timeout(Duration::zero());
        let (trip, layout) = reference_trip();

        for _ in 0..10 {
            manager.open(trip.clone(), &layout);
        }
        // Each open sweeps everything before it under a zero timeout
        assert_eq!(manager.len(), 1);
    }

    #[test]
    fn test_close_unknown_session() {
        let mut manager = SessionManager::new();
        let (trip, layout) = reference_trip();
        let session_id = manager.open(trip, &layout).id;

        manager.close(&session_id).unwrap();
        assert!(manager.is_empty());
        assert!(matches!(manager.close(&session_id), Err(SessionError::NotFound(_))));
    }
}
