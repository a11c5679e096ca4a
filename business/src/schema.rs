//! Declarative field schema for the two admin tables.
//!
//! Each table is described by an ordered list of [`FieldSpec`]s. Cell
//! rendering, the editor widget shown for a field, the update payload,
//! and column sorting all derive from this list instead of branching on
//! column indexes.

/// Which editor a field gets while its row is being edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Free text input.
    Text,
    /// Numeric input; values below `min` (or unparseable input) are
    /// coerced to `min` when the payload is collected.
    Number { min: u32 },
    /// Fixed-option dropdown.
    Choice(ChoiceSource),
    /// Rendered as plain text and never sent in update payloads.
    Immutable,
}

/// Where a `Choice` field takes its options from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChoiceSource {
    /// The two ride status values.
    RideStatus,
    /// The cached user list; the option label carries the id, the
    /// stored value is the bare name.
    Driver,
}

/// Comparator used when a column header is clicked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Number,
    /// `DD/MM/YYYY` display text, compared by (year, month, day).
    Date,
    Text,
}

/// One column of an admin table.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    /// Wire name, also the key in update payloads.
    pub key: &'static str,
    /// Column header label.
    pub label: &'static str,
    pub kind: FieldKind,
    /// `None` marks the column non-sortable.
    pub sort: Option<SortKey>,
}

/// Header label for the trailing actions column, which is not a field.
pub const ACTIONS_LABEL: &str = "Ações";

pub const USER_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: "id",
        label: "ID",
        kind: FieldKind::Immutable,
        sort: Some(SortKey::Number),
    },
    FieldSpec {
        key: "nome",
        label: "Nome",
        kind: FieldKind::Text,
        sort: Some(SortKey::Text),
    },
    FieldSpec {
        key: "email",
        label: "Email",
        kind: FieldKind::Text,
        sort: Some(SortKey::Text),
    },
    FieldSpec {
        key: "telefone",
        label: "Telefone",
        kind: FieldKind::Text,
        sort: None,
    },
    FieldSpec {
        key: "criado_em",
        label: "Data de Cadastro",
        kind: FieldKind::Immutable,
        sort: Some(SortKey::Date),
    },
];

pub const RIDE_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: "id",
        label: "ID",
        kind: FieldKind::Immutable,
        sort: Some(SortKey::Number),
    },
    FieldSpec {
        key: "motorista",
        label: "Motorista",
        kind: FieldKind::Choice(ChoiceSource::Driver),
        sort: Some(SortKey::Text),
    },
    FieldSpec {
        key: "local_partida",
        label: "Local de Partida",
        kind: FieldKind::Text,
        sort: Some(SortKey::Text),
    },
    FieldSpec {
        key: "destino",
        label: "Destino",
        kind: FieldKind::Text,
        sort: Some(SortKey::Text),
    },
    FieldSpec {
        key: "data",
        label: "Data",
        kind: FieldKind::Immutable,
        sort: Some(SortKey::Date),
    },
    FieldSpec {
        key: "hora",
        label: "Horário",
        kind: FieldKind::Immutable,
        sort: None,
    },
    FieldSpec {
        key: "vagas_disponiveis",
        label: "Vagas",
        kind: FieldKind::Number { min: 1 },
        sort: Some(SortKey::Number),
    },
    FieldSpec {
        key: "status",
        label: "Status",
        kind: FieldKind::Choice(ChoiceSource::RideStatus),
        sort: Some(SortKey::Text),
    },
];

/// The two tables the admin panel manages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TableKind {
    #[default]
    Users,
    Rides,
}

impl TableKind {
    pub fn fields(self) -> &'static [FieldSpec] {
        match self {
            Self::Users => USER_FIELDS,
            Self::Rides => RIDE_FIELDS,
        }
    }

    /// Path segment under the admin API base.
    pub fn endpoint(self) -> &'static str {
        match self {
            Self::Users => "usuarios",
            Self::Rides => "caronas",
        }
    }

    /// Noun used in user-facing messages.
    pub fn item_name(self) -> &'static str {
        match self {
            Self::Users => "usuário",
            Self::Rides => "carona",
        }
    }

    /// Section title shown in the navigation bar.
    pub fn title(self) -> &'static str {
        match self {
            Self::Users => "Usuários",
            Self::Rides => "Caronas",
        }
    }
}
