//! Client-side column sorting.
//!
//! Comparators are fixed per column by the field schema; text columns
//! compare case-insensitively.

use std::cmp::Ordering;

use crate::schema::SortKey;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDir {
    Asc,
    Desc,
}

/// The active sort of one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSort {
    pub column: usize,
    pub dir: SortDir,
}

/// Applies a header click: the active column toggles direction, any
/// other column starts ascending.
pub fn toggle(current: Option<ColumnSort>, column: usize) -> ColumnSort {
    match current {
        Some(active) if active.column == column && active.dir == SortDir::Asc => ColumnSort {
            column,
            dir: SortDir::Desc,
        },
        _ => ColumnSort {
            column,
            dir: SortDir::Asc,
        },
    }
}

/// Compares two cell texts under a column's sort key, ascending.
pub fn compare(key: SortKey, a: &str, b: &str) -> Ordering {
    match key {
        SortKey::Number => compare_numbers(a, b),
        SortKey::Date => compare_dates(a, b),
        SortKey::Text => compare_text(a, b),
    }
}

fn compare_numbers(a: &str, b: &str) -> Ordering {
    let parse = |s: &str| s.trim().parse::<f64>().ok();
    match (parse(a), parse(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        // Unparseable cells sort first.
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare_dates(a: &str, b: &str) -> Ordering {
    match (parse_display_date(a), parse_display_date(b)) {
        (Some(x), Some(y)) => x.cmp(&y),
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    }
}

fn compare_text(a: &str, b: &str) -> Ordering {
    a.trim().to_lowercase().cmp(&b.trim().to_lowercase())
}

/// Parses `DD/MM/YYYY` into a (year, month, day) triple.
fn parse_display_date(text: &str) -> Option<(u16, u8, u8)> {
    let mut parts = text.trim().split('/');
    let day: u8 = parts.next()?.parse().ok()?;
    let month: u8 = parts.next()?.parse().ok()?;
    let year: u16 = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some((year, month, day))
}
