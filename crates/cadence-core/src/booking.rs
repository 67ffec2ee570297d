//! In-memory appointment book.
//!
//! Stands in for a persistence layer: holds engine suggestions and
//! client booking requests, and lets the stylist confirm them. Nothing
//! here survives the process; storage ownership belongs to the caller.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::cadence::base_interval;
use crate::engine::EngineConfig;
use crate::error::BookingError;
use crate::profile::ClientProfile;
use crate::slots::RecommendedSlot;

/// Service booked when none is specified.
pub const DEFAULT_SERVICE: &str = "Haircut";

/// Where an appointment sits in the approval flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    /// Suggested by the engine, not yet acted on
    Recommended,
    /// Requested by the client, awaiting stylist approval
    Pending,
    /// Approved by the stylist
    Confirmed,
}

/// A booked or proposed visit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Uuid,
    pub client_name: String,
    pub date: NaiveDate,
    pub service: String,
    pub reason: String,
    pub status: AppointmentStatus,
}

/// All appointments for one stylist, kept in memory.
#[derive(Debug, Clone, Default)]
pub struct AppointmentBook {
    appointments: Vec<Appointment>,
}

impl AppointmentBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an engine recommendation awaiting the stylist's review.
    pub fn suggest(&mut self, client_name: &str, slot: &RecommendedSlot) -> &Appointment {
        self.push(client_name, slot, AppointmentStatus::Recommended)
    }

    /// Record a booking request made by the client.
    pub fn request(&mut self, client_name: &str, slot: &RecommendedSlot) -> &Appointment {
        self.push(client_name, slot, AppointmentStatus::Pending)
    }

    /// Stylist approval: a recommended or pending appointment becomes
    /// confirmed.
    pub fn approve(&mut self, id: Uuid) -> Result<&Appointment, BookingError> {
        let appointment = self
            .appointments
            .iter_mut()
            .find(|a| a.id == id)
            .ok_or(BookingError::UnknownAppointment(id))?;

        if appointment.status == AppointmentStatus::Confirmed {
            return Err(BookingError::AlreadyConfirmed(id));
        }

        appointment.status = AppointmentStatus::Confirmed;
        Ok(appointment)
    }

    /// Appointments on or after `today`, ordered ascending by date.
    pub fn upcoming(&self, today: NaiveDate) -> Vec<&Appointment> {
        let mut upcoming: Vec<&Appointment> = self
            .appointments
            .iter()
            .filter(|a| a.date >= today)
            .collect();
        upcoming.sort_by_key(|a| a.date);
        upcoming
    }

    /// All appointments for one client, in insertion order.
    pub fn for_client(&self, client_name: &str) -> Vec<&Appointment> {
        self.appointments
            .iter()
            .filter(|a| a.client_name == client_name)
            .collect()
    }

    /// Appointments still waiting on the stylist.
    pub fn pending_count(&self) -> usize {
        self.appointments
            .iter()
            .filter(|a| a.status != AppointmentStatus::Confirmed)
            .count()
    }

    fn push(
        &mut self,
        client_name: &str,
        slot: &RecommendedSlot,
        status: AppointmentStatus,
    ) -> &Appointment {
        self.appointments.push(Appointment {
            id: Uuid::new_v4(),
            client_name: client_name.to_string(),
            date: slot.date,
            service: DEFAULT_SERVICE.to_string(),
            reason: slot.reason.clone(),
            status,
        });
        &self.appointments[self.appointments.len() - 1]
    }
}

/// Days past the point where regrowth is clearly visible, if the
/// client is past it. Drives the stylist's overdue reminder.
pub fn overdue_by(profile: &ClientProfile, today: NaiveDate, config: &EngineConfig) -> Option<i64> {
    let interval = base_interval(profile.growth_rate);
    let limit = (interval as f64 * config.risky_max).ceil() as i64;
    let gap = profile.days_since_last_visit(today);
    (gap > limit).then(|| gap - limit)
}
