//! # Cadence Core Library
//!
//! Core business logic for Cadence, a rebooking assistant for barbers
//! and stylists. A client answers a short lifestyle quiz; this library
//! turns those answers into an ordered list of recommended booking
//! dates, each with a score and a fixed-template reason line.
//!
//! ## Architecture
//!
//! Recommendation is a five-stage pure pipeline. "Today" is an
//! argument at every stage, never read from the system clock, so
//! identical inputs always produce identical output and independent
//! calls need no coordination:
//!
//! - **Profile Normalizer**: validates raw quiz answers into a
//!   [`ClientProfile`]
//! - **Cadence Engine**: walks the growth-rate interval forward from
//!   the last visit, steering dates toward the preferred weekdays
//! - **Event Adjuster**: pulls candidates toward declared commitments
//!   with a freshness-dependent lead time
//! - **Scorer & Ranker**: classifies each date optimal/good/risky and
//!   orders the set
//! - **Slot Generator**: renders deterministic reason strings
//!
//! ## Key Components
//!
//! - [`Engine`]: the composed pipeline behind a single `generate` call
//! - [`AppointmentBook`]: in-memory approval flow for the stylist side
//! - [`strategist_commentary`]: fixed-template plan summary

pub mod booking;
pub mod cadence;
pub mod commentary;
pub mod engine;
pub mod error;
pub mod events;
pub mod profile;
pub mod scoring;
pub mod slots;

pub use booking::{overdue_by, Appointment, AppointmentBook, AppointmentStatus};
pub use cadence::{base_interval, generate_recurrence, RecurrenceCandidate, DEFAULT_HORIZON_DAYS};
pub use commentary::strategist_commentary;
pub use engine::{Engine, EngineConfig};
pub use error::{BookingError, EngineError, Result, ValidationError};
pub use events::{apply_events, lead_days, SlotDraft};
pub use profile::{
    ClientProfile, GrowthRate, HairType, RawProfile, UpcomingEvent, WeeklyRhythm,
};
pub use scoring::{score_and_rank, Score, ScoredSlot};
pub use slots::{reason_for, render, RecommendedSlot};
