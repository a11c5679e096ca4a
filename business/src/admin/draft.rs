//! In-memory editing buffer for a single table row.

use serde_json::{Map, Value};

use crate::models::{Ride, User};
use crate::schema::{FieldKind, TableKind, USER_FIELDS};

/// Snapshot of a row taken at edit start. The view renders these
/// buffers; confirming collects them into the update payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowDraft {
    pub table: TableKind,
    pub id: i64,
    /// One buffer per schema field, in schema order. Immutable fields
    /// keep their display text so the editing row still shows them.
    inputs: Vec<String>,
    /// Rides keep the fetched timestamp so the update sends it back
    /// byte-for-byte; the date/time buffers are display-only.
    horario: Option<String>,
    /// Set while the PUT for this draft is in flight.
    pub in_flight: bool,
}

impl RowDraft {
    pub fn for_user(user: &User) -> Self {
        let inputs = USER_FIELDS
            .iter()
            .map(|field| match field.key {
                // The display cell shows "N/A" for a missing phone; the
                // editor starts from the stored value instead.
                "telefone" => user.telefone.clone().unwrap_or_default(),
                _ => user.cell_text(field),
            })
            .collect();
        Self {
            table: TableKind::Users,
            id: user.id,
            inputs,
            horario: None,
            in_flight: false,
        }
    }

    pub fn for_ride(ride: &Ride) -> Self {
        let inputs = TableKind::Rides
            .fields()
            .iter()
            .map(|field| ride.cell_text(field))
            .collect();
        Self {
            table: TableKind::Rides,
            id: ride.id,
            inputs,
            horario: Some(ride.horario.clone()),
            in_flight: false,
        }
    }

    /// Buffer for the field at `index` in schema order.
    pub fn input(&self, index: usize) -> &str {
        self.inputs.get(index).map_or("", String::as_str)
    }

    pub fn input_mut(&mut self, index: usize) -> Option<&mut String> {
        self.inputs.get_mut(index)
    }

    /// Collects the buffers into the PUT body, walking the schema:
    /// immutable fields are skipped, numeric fields are parsed with
    /// out-of-range input coerced to the minimum, and rides re-attach
    /// the snapshot timestamp under `horario`.
    pub fn payload(&self) -> Map<String, Value> {
        let mut payload = Map::new();
        for (field, input) in self.table.fields().iter().zip(&self.inputs) {
            match field.kind {
                FieldKind::Immutable => {}
                FieldKind::Number { min } => {
                    let value = input
                        .trim()
                        .parse::<u32>()
                        .ok()
                        .filter(|v| *v >= min)
                        .unwrap_or(min);
                    payload.insert(field.key.to_owned(), Value::from(value));
                }
                FieldKind::Text | FieldKind::Choice(_) => {
                    payload.insert(field.key.to_owned(), Value::from(input.trim()));
                }
            }
        }
        if let Some(horario) = &self.horario {
            payload.insert("horario".to_owned(), Value::from(horario.clone()));
        }
        payload
    }
}
