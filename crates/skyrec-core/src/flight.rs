//! Flight: the session context owning all aircraft
//!
//! A [`Flight`] replaces the notion of an ambient "current flight": every
//! collaborator that needs the active timeline set receives the flight
//! explicitly. Change notification is polling-based: every mutation bumps
//! [`Flight::revision`].

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::aircraft::Aircraft;
use crate::sample::Timestamp;

/// Descriptive flight metadata, serialized verbatim by the persistence
/// layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlightMetadata {
    /// Unique flight id.
    pub id: Uuid,
    /// Title, user-assigned.
    pub title: String,
    /// Free-form description.
    pub description: String,
    /// When the recording was created.
    pub creation_time: DateTime<Utc>,
}

impl Default for FlightMetadata {
    fn default() -> Self {
        Self {
            id: Uuid::new_v4(),
            title: String::new(),
            description: String::new(),
            creation_time: Utc::now(),
        }
    }
}

/// One flight: metadata plus one or more aircraft (formation flying), with
/// a designated user aircraft.
#[derive(Debug, Clone)]
pub struct Flight {
    metadata: FlightMetadata,
    aircraft: Vec<Aircraft>,
    user_aircraft_index: usize,
    revision: u64,
}

impl Flight {
    /// Creates a flight with a single empty aircraft.
    pub fn new(metadata: FlightMetadata) -> Self {
        Self {
            metadata,
            aircraft: vec![Aircraft::default()],
            user_aircraft_index: 0,
            revision: 0,
        }
    }

    /// The flight metadata.
    pub fn metadata(&self) -> &FlightMetadata {
        &self.metadata
    }

    /// Sets the title.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.metadata.title = title.into();
        self.revision += 1;
    }

    /// Sets the description.
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.metadata.description = description.into();
        self.revision += 1;
    }

    /// A counter bumped on every mutation; callers poll it to detect
    /// changes.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Records a mutation performed directly on an aircraft's timelines.
    pub fn touch(&mut self) {
        self.revision += 1;
    }

    /// The number of aircraft in this flight.
    pub fn aircraft_count(&self) -> usize {
        self.aircraft.len()
    }

    /// All aircraft, in order.
    pub fn aircraft(&self) -> &[Aircraft] {
        &self.aircraft
    }

    /// Mutable access to the aircraft at `index`.
    ///
    /// Call [`touch`](Self::touch) after mutating timeline data through
    /// this.
    pub fn aircraft_mut(&mut self, index: usize) -> Option<&mut Aircraft> {
        self.aircraft.get_mut(index)
    }

    /// The aircraft flown by the user.
    pub fn user_aircraft(&mut self) -> &mut Aircraft {
        &mut self.aircraft[self.user_aircraft_index]
    }

    /// The index of the user aircraft.
    pub fn user_aircraft_index(&self) -> usize {
        self.user_aircraft_index
    }

    /// Designates the user aircraft; out-of-range indices are ignored.
    pub fn set_user_aircraft_index(&mut self, index: usize) {
        if index < self.aircraft.len() {
            self.user_aircraft_index = index;
            self.revision += 1;
        }
    }

    /// Adds an aircraft (formation recording) and returns its index.
    pub fn add_aircraft(&mut self, aircraft: Aircraft) -> usize {
        self.aircraft.push(aircraft);
        self.revision += 1;
        tracing::debug!(count = self.aircraft.len(), "aircraft added to flight");
        self.aircraft.len() - 1
    }

    /// Removes the aircraft at `index`. A flight always keeps at least one
    /// aircraft; removing the last one is ignored and `false` is returned.
    pub fn remove_aircraft(&mut self, index: usize) -> bool {
        if self.aircraft.len() <= 1 || index >= self.aircraft.len() {
            return false;
        }
        self.aircraft.remove(index);
        if self.user_aircraft_index >= self.aircraft.len() {
            self.user_aircraft_index = self.aircraft.len() - 1;
        }
        self.revision += 1;
        true
    }

    /// The total duration [ms]: the maximum aircraft duration.
    pub fn total_duration(&self) -> Timestamp {
        self.aircraft
            .iter()
            .map(Aircraft::duration)
            .max()
            .unwrap_or(0)
    }

    /// Whether any aircraft has recorded data.
    pub fn has_recording(&self) -> bool {
        self.aircraft.iter().any(Aircraft::has_recording)
    }

    /// Resets the flight to a single empty aircraft with fresh metadata.
    pub fn clear(&mut self) {
        self.metadata = FlightMetadata::default();
        self.aircraft.clear();
        self.aircraft.push(Aircraft::default());
        self.user_aircraft_index = 0;
        self.revision += 1;
        tracing::debug!("flight cleared");
    }
}

impl Default for Flight {
    fn default() -> Self {
        Self::new(FlightMetadata::default())
    }
}
