// ABOUTME: Immutable domain events emitted by meal record mutations
// ABOUTME: Event records, the DomainEvent union, and the handler seam for collaborators
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 MeatMetrics

//! # Domain Events
//!
//! Value records describing what happened to a meal record. They are
//! produced by [`crate::meal_records::MealRecord`] operations and handed to
//! collaborators (audit logging, summary cache invalidation) through
//! [`DomainEventHandler`].

use crate::api::wire_format;
use crate::meal_records::MealRecord;
use crate::models::{MealRecordId, UserId};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use std::fmt;
use tracing::info;
use uuid::Uuid;

/// Identity and timestamp shared by every event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct EventMetadata {
    /// Unique event identifier
    pub event_id: Uuid,
    /// When the event was emitted
    #[serde(serialize_with = "wire_format::utc_timestamp::serialize")]
    pub occurred_at: DateTime<Utc>,
}

impl EventMetadata {
    /// Fresh metadata stamped with the current time
    #[must_use]
    pub fn new() -> Self {
        Self {
            event_id: Uuid::new_v4(),
            occurred_at: Utc::now(),
        }
    }
}

impl Default for EventMetadata {
    fn default() -> Self {
        Self::new()
    }
}

/// A meal record was created
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealRecordCreated {
    /// Event identity
    #[serde(flatten)]
    pub metadata: EventMetadata,
    /// The new record
    pub meal_record: MealRecord,
}

/// A meal record was amended
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MealRecordUpdated {
    /// Event identity
    #[serde(flatten)]
    pub metadata: EventMetadata,
    /// The record after the amendment
    pub meal_record: MealRecord,
    /// Portion size before the amendment, for audit and undo
    pub previous_amount_g: f64,
}

/// A meal record was deleted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MealRecordDeleted {
    /// Event identity
    #[serde(flatten)]
    pub metadata: EventMetadata,
    /// Identifier of the deleted record
    pub meal_record_id: MealRecordId,
    /// Owner of the deleted record
    pub user_id: UserId,
    /// Calendar date whose summary is now stale
    pub recorded_date: NaiveDate,
}

/// Discriminant of a [`DomainEvent`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum EventType {
    /// See [`MealRecordCreated`]
    MealRecordCreated,
    /// See [`MealRecordUpdated`]
    MealRecordUpdated,
    /// See [`MealRecordDeleted`]
    MealRecordDeleted,
}

impl EventType {
    /// Literal name of the event type
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MealRecordCreated => "MealRecordCreated",
            Self::MealRecordUpdated => "MealRecordUpdated",
            Self::MealRecordDeleted => "MealRecordDeleted",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any domain event
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event_type")]
pub enum DomainEvent {
    /// See [`MealRecordCreated`]
    MealRecordCreated(MealRecordCreated),
    /// See [`MealRecordUpdated`]
    MealRecordUpdated(MealRecordUpdated),
    /// See [`MealRecordDeleted`]
    MealRecordDeleted(MealRecordDeleted),
}

impl DomainEvent {
    /// Event discriminant
    #[must_use]
    pub const fn event_type(&self) -> EventType {
        match self {
            Self::MealRecordCreated(_) => EventType::MealRecordCreated,
            Self::MealRecordUpdated(_) => EventType::MealRecordUpdated,
            Self::MealRecordDeleted(_) => EventType::MealRecordDeleted,
        }
    }

    /// Shared identity of the event
    #[must_use]
    pub const fn metadata(&self) -> &EventMetadata {
        match self {
            Self::MealRecordCreated(e) => &e.metadata,
            Self::MealRecordUpdated(e) => &e.metadata,
            Self::MealRecordDeleted(e) => &e.metadata,
        }
    }

    /// Unique event identifier
    #[must_use]
    pub fn event_id(&self) -> Uuid {
        self.metadata().event_id
    }

    /// When the event was emitted
    #[must_use]
    pub fn occurred_at(&self) -> DateTime<Utc> {
        self.metadata().occurred_at
    }

    /// Record the event concerns
    #[must_use]
    pub fn meal_record_id(&self) -> MealRecordId {
        match self {
            Self::MealRecordCreated(e) => e.meal_record.id,
            Self::MealRecordUpdated(e) => e.meal_record.id,
            Self::MealRecordDeleted(e) => e.meal_record_id,
        }
    }

    /// Owner of the record the event concerns
    #[must_use]
    pub fn user_id(&self) -> UserId {
        match self {
            Self::MealRecordCreated(e) => e.meal_record.user_id,
            Self::MealRecordUpdated(e) => e.meal_record.user_id,
            Self::MealRecordDeleted(e) => e.user_id,
        }
    }
}

impl From<MealRecordCreated> for DomainEvent {
    fn from(event: MealRecordCreated) -> Self {
        Self::MealRecordCreated(event)
    }
}

impl From<MealRecordUpdated> for DomainEvent {
    fn from(event: MealRecordUpdated) -> Self {
        Self::MealRecordUpdated(event)
    }
}

impl From<MealRecordDeleted> for DomainEvent {
    fn from(event: MealRecordDeleted) -> Self {
        Self::MealRecordDeleted(event)
    }
}

/// Consumer of domain events
pub trait DomainEventHandler {
    /// Handle one event
    fn handle(&self, event: &DomainEvent);
}

impl<F> DomainEventHandler for F
where
    F: Fn(&DomainEvent),
{
    fn handle(&self, event: &DomainEvent) {
        self(event);
    }
}

/// Handler that writes every event to the tracing subscriber
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingEventHandler;

impl DomainEventHandler for TracingEventHandler {
    fn handle(&self, event: &DomainEvent) {
        info!(
            event.id = %event.event_id(),
            event.kind = %event.event_type(),
            event.occurred_at = %event.occurred_at(),
            meal_record.id = %event.meal_record_id(),
            user.id = %event.user_id(),
            "Domain event"
        );
    }
}
