//! Wire types for the admin endpoints.
//!
//! Field names match the backend's JSON exactly, so the structs double
//! as the serde contract. Display formatting helpers live here too;
//! their output never flows back into update payloads.

use serde::{Deserialize, Serialize};

use crate::schema::FieldSpec;

/// A registered user, as returned by `GET /usuarios`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct User {
    pub id: i64,
    pub nome: String,
    pub email: String,
    #[serde(default)]
    pub telefone: Option<String>,
    #[serde(default)]
    pub criado_em: Option<String>,
}

/// A published ride, as returned by `GET /caronas`.
///
/// `horario` is the single source of truth for the departure moment;
/// the date and time columns are derived from it for display only.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Ride {
    pub id: i64,
    pub motorista: String,
    pub local_partida: String,
    pub destino: String,
    #[serde(default)]
    pub horario: String,
    pub vagas_disponiveis: u32,
    pub status: RideStatus,
}

/// Ride status, exactly two values. The wire form is the capitalized
/// Portuguese word, which is also the display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RideStatus {
    Ativa,
    Inativa,
}

impl RideStatus {
    pub const OPTIONS: [Self; 2] = [Self::Ativa, Self::Inativa];

    pub fn label(self) -> &'static str {
        match self {
            Self::Ativa => "Ativa",
            Self::Inativa => "Inativa",
        }
    }
}

/// A user reduced to what the ride editor's driver dropdown needs.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Driver {
    pub id: i64,
    pub nome: String,
}

impl Driver {
    /// Option label in the dropdown; the stored value stays `nome`.
    pub fn option_label(&self) -> String {
        format!("{} | {}", self.id, self.nome)
    }
}

/// Formats an ISO-like timestamp as `DD/MM/YYYY`. Missing input renders
/// `"N/A"`; input without a date prefix is shown unchanged.
pub fn format_date(raw: Option<&str>) -> String {
    let Some(raw) = raw.filter(|s| !s.is_empty()) else {
        return "N/A".to_owned();
    };
    match split_iso_date(raw) {
        Some((year, month, day)) => format!("{day}/{month}/{year}"),
        None => raw.to_owned(),
    }
}

/// Splits a ride timestamp into its `DD/MM/YYYY` date and `HH:MM` time
/// display parts. Missing input renders `"N/A"` for both.
pub fn split_departure(horario: &str) -> (String, String) {
    if horario.is_empty() {
        return ("N/A".to_owned(), "N/A".to_owned());
    }
    let date = match split_iso_date(horario) {
        Some((year, month, day)) => format!("{day}/{month}/{year}"),
        None => horario.to_owned(),
    };
    let time = horario.get(11..16).unwrap_or("").to_owned();
    (date, time)
}

/// Pulls the `YYYY-MM-DD` prefix apart without touching time zones.
fn split_iso_date(raw: &str) -> Option<(&str, &str, &str)> {
    let date = raw.get(0..10)?;
    let mut parts = date.split('-');
    let year = parts.next()?;
    let month = parts.next()?;
    let day = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    Some((year, month, day))
}

impl User {
    /// Text shown in the display cell for `field`.
    pub fn cell_text(&self, field: &FieldSpec) -> String {
        match field.key {
            "id" => self.id.to_string(),
            "nome" => self.nome.clone(),
            "email" => self.email.clone(),
            "telefone" => self
                .telefone
                .clone()
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| "N/A".to_owned()),
            "criado_em" => format_date(self.criado_em.as_deref()),
            _ => String::new(),
        }
    }
}

impl Ride {
    /// Text shown in the display cell for `field`.
    pub fn cell_text(&self, field: &FieldSpec) -> String {
        match field.key {
            "id" => self.id.to_string(),
            "motorista" => self.motorista.clone(),
            "local_partida" => self.local_partida.clone(),
            "destino" => self.destino.clone(),
            "data" => split_departure(&self.horario).0,
            "hora" => split_departure(&self.horario).1,
            "vagas_disponiveis" => self.vagas_disponiveis.to_string(),
            "status" => self.status.label().to_owned(),
            _ => String::new(),
        }
    }
}
