//! Display-ready rows shared by the console output and the dashboard.
//!
//! Each view model serializes as the `--format json` payload and implements
//! [`ConsolePresentable`] for the plain text form.

use super::formatters::{format_date, format_number, format_percent};
use crate::i18n::t;
use crate::types::Language;
use atomscope_engine::{ChartSeries, Confidence, growth_for};
use atomscope_types::{
    Atom, AtomDetail, FilterSpec, Position, PositionEntity, SortKey, SortOrder, SyncMode,
    SyncReport, TripleTerm, TrendingPeriod, short_address, truncate_text,
};
use serde::Serialize;
use std::fmt::Write;

const LABEL_WIDTH: usize = 32;
const DESCRIPTION_MAX: usize = 150;

pub trait ConsolePresentable {
    fn render_console(&self, lang: Language) -> String;
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AtomRow {
    pub rank: usize,
    pub id: String,
    pub label: String,
    pub market_cap: f64,
    pub share_price: f64,
    pub positions: f64,
    pub created: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub growth: Option<f64>,
    pub confidence: Confidence,
}

impl AtomRow {
    /// `period` adds the growth column used by trending lists
    pub fn new(rank: usize, atom: &Atom, period: Option<TrendingPeriod>) -> Self {
        Self {
            rank,
            id: atom.id.to_string(),
            label: atom.label().to_string(),
            market_cap: atom.market_cap(),
            share_price: atom.share_price(),
            positions: atom.positions_count(),
            created: format_date(atom.created_at_millis()),
            growth: period.map(|p| growth_for(atom, p)),
            confidence: Confidence::from_signal(atom.market_cap()),
        }
    }

    pub fn rows(atoms: &[Atom], period: Option<TrendingPeriod>) -> Vec<Self> {
        atoms
            .iter()
            .enumerate()
            .map(|(i, atom)| Self::new(i + 1, atom, period))
            .collect()
    }
}

pub fn confidence_label(lang: Language, confidence: Confidence) -> &'static str {
    match confidence {
        Confidence::High => t(lang, "confidence.high"),
        Confidence::Medium => t(lang, "confidence.medium"),
        Confidence::Low => t(lang, "confidence.low"),
    }
}

pub fn sort_key_label(lang: Language, key: SortKey) -> &'static str {
    match key {
        SortKey::MarketCap => t(lang, "sort.market_cap"),
        SortKey::SharePrice => t(lang, "sort.share_price"),
        SortKey::PositionsCount => t(lang, "sort.positions_count"),
        SortKey::CreatedAt => t(lang, "sort.created_at"),
    }
}

pub fn sort_order_label(lang: Language, order: SortOrder) -> &'static str {
    match order {
        SortOrder::Asc => t(lang, "order.asc"),
        SortOrder::Desc => t(lang, "order.desc"),
    }
}

/// What an atom list shows
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum ListHeading {
    Top { sort_by: SortKey, order: SortOrder },
    Trending { period: TrendingPeriod },
    Search { query: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct AtomListViewModel {
    pub heading: ListHeading,
    pub fetched: usize,
    pub filters: FilterSpec,
    pub atoms: Vec<AtomRow>,
}

impl ConsolePresentable for AtomListViewModel {
    fn render_console(&self, lang: Language) -> String {
        let mut out = String::new();
        let title = match &self.heading {
            ListHeading::Top { sort_by, order } => format!(
                "{} ({}, {})",
                t(lang, "tab.top"),
                sort_key_label(lang, *sort_by),
                sort_order_label(lang, *order)
            ),
            ListHeading::Trending { period } => {
                format!("{} ({})", t(lang, "tab.trending"), period)
            }
            ListHeading::Search { query } => format!("{} \"{}\"", t(lang, "search.results"), query),
        };
        let _ = writeln!(out, "{}", title);

        let active: Vec<String> = self
            .filters
            .active_bounds()
            .map(|(bound, value)| format!("{}={}", bound, value))
            .collect();
        if !active.is_empty() {
            let _ = writeln!(out, "{}: {}", t(lang, "filter.active"), active.join(", "));
        }
        let _ = writeln!(out);

        if self.atoms.is_empty() {
            let key = match self.heading {
                ListHeading::Search { .. } => "empty.search",
                _ => "empty.atoms",
            };
            let _ = writeln!(out, "{}", t(lang, key));
            return out;
        }

        let with_growth = self.atoms.iter().any(|a| a.growth.is_some());
        let _ = write!(
            out,
            "{:<4} {:<width$} {:>12} {:>12} {:>10} {:<10}",
            t(lang, "col.rank"),
            t(lang, "col.atom"),
            t(lang, "col.market_cap"),
            t(lang, "col.share_price"),
            t(lang, "col.positions"),
            t(lang, "col.created"),
            width = LABEL_WIDTH
        );
        if with_growth {
            let _ = write!(out, " {:>9}", t(lang, "col.growth"));
        }
        let _ = writeln!(out);

        for row in &self.atoms {
            let _ = write!(
                out,
                "{:<4} {:<width$} {:>12} {:>12} {:>10} {:<10}",
                row.rank,
                truncate_text(&row.label, LABEL_WIDTH - 3),
                format_number(row.market_cap),
                format_number(row.share_price),
                format_number(row.positions),
                row.created,
                width = LABEL_WIDTH
            );
            if with_growth {
                let _ = write!(out, " {:>9}", format_percent(row.growth));
            }
            let _ = writeln!(out);
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PositionRow {
    pub kind: &'static str,
    pub label: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub term_id: Option<String>,
    pub shares: f64,
    pub share_price: f64,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pnl_percent: Option<f64>,
}

impl PositionRow {
    pub fn new(position: &Position) -> Self {
        let kind = match position.entity {
            PositionEntity::Atom(_) => "atom",
            PositionEntity::Triple(_) => "triple",
        };
        Self {
            kind,
            label: position.label(),
            term_id: position.atom_term_id().map(|id| id.to_string()),
            shares: position.shares(),
            share_price: atomscope_types::to_number(position.current_share_price.as_ref()),
            value: position.value(),
            pnl_percent: position.pnl_percent(),
        }
    }

    pub fn rows(positions: &[Position]) -> Vec<Self> {
        positions.iter().map(Self::new).collect()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct PositionListViewModel {
    pub address: String,
    pub positions: Vec<PositionRow>,
}

impl ConsolePresentable for PositionListViewModel {
    fn render_console(&self, lang: Language) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} {}\n",
            t(lang, "tab.positions"),
            short_address(&self.address)
        );

        if self.positions.is_empty() {
            let _ = writeln!(out, "{}", t(lang, "empty.positions"));
            return out;
        }

        let _ = writeln!(
            out,
            "{:<7} {:<width$} {:>12} {:>12} {:>12} {:>9}",
            t(lang, "col.kind"),
            t(lang, "col.atom"),
            t(lang, "col.shares"),
            t(lang, "col.share_price"),
            t(lang, "col.value"),
            t(lang, "col.pnl"),
            width = LABEL_WIDTH
        );
        for row in &self.positions {
            let kind = match row.kind {
                "triple" => t(lang, "kind.triple"),
                _ => t(lang, "kind.atom"),
            };
            let _ = writeln!(
                out,
                "{:<7} {:<width$} {:>12} {:>12} {:>12} {:>9}",
                kind,
                truncate_text(&row.label, LABEL_WIDTH - 3),
                format_number(row.shares),
                format_number(row.share_price),
                format_number(row.value),
                format_percent(row.pnl_percent),
                width = LABEL_WIDTH
            );
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TripleRow {
    pub subject: String,
    pub predicate: String,
    pub object: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistorySummary {
    pub period: TrendingPeriod,
    pub points: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_signal: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_signal: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_percent: Option<f64>,
}

impl HistorySummary {
    pub fn new(period: TrendingPeriod, series: &ChartSeries) -> Self {
        let first = series.signal.first().map(|(_, y)| *y);
        let last = series.signal.last().map(|(_, y)| *y);
        let change_percent = match (first, last) {
            (Some(first), Some(last)) if first != 0.0 => Some((last - first) / first * 100.0),
            _ => None,
        };
        Self {
            period,
            points: series.len(),
            first_signal: first,
            last_signal: last,
            change_percent,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct AtomDetailViewModel {
    pub atom: AtomRow,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub did: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atom_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub creator: Option<String>,
    pub total_shares: f64,
    pub triples: Vec<TripleRow>,
    pub history: HistorySummary,
}

impl AtomDetailViewModel {
    pub fn new(detail: &AtomDetail, period: TrendingPeriod, series: &ChartSeries) -> Self {
        let atom = &detail.atom;
        Self {
            atom: AtomRow::new(1, atom, None),
            did: atom.did.clone(),
            atom_type: atom.atom_type.clone(),
            description: atom
                .description
                .as_deref()
                .map(|d| truncate_text(d, DESCRIPTION_MAX)),
            creator: atom.creator_id.as_ref().map(|c| short_address(c.as_str())),
            total_shares: atom.total_shares(),
            triples: detail
                .triples
                .iter()
                .map(|triple| TripleRow {
                    subject: TripleTerm::display_label(triple.subject.as_ref()).to_string(),
                    predicate: TripleTerm::display_label(triple.predicate.as_ref()).to_string(),
                    object: TripleTerm::display_label(triple.object.as_ref()).to_string(),
                })
                .collect(),
            history: HistorySummary::new(period, series),
        }
    }
}

impl ConsolePresentable for AtomDetailViewModel {
    fn render_console(&self, lang: Language) -> String {
        let mut out = String::new();
        let atom = &self.atom;
        let _ = writeln!(out, "{} (#{})", atom.label, atom.id);
        if let Some(description) = &self.description
            && description != &atom.label
        {
            let _ = writeln!(out, "{}", description);
        }
        let _ = writeln!(out);

        let mut field = |key: &'static str, value: String| {
            let _ = writeln!(out, "  {:<20} {}", t(lang, key), value);
        };
        if let Some(did) = &self.did {
            field("detail.did", did.clone());
        }
        if let Some(kind) = &self.atom_type {
            field("detail.type", kind.clone());
        }
        if let Some(creator) = &self.creator {
            field("detail.creator", creator.clone());
        }
        field("col.market_cap", format_number(atom.market_cap));
        field("col.share_price", format_number(atom.share_price));
        field("col.positions", format_number(atom.positions));
        field("col.created", atom.created.clone());
        field(
            "detail.confidence",
            confidence_label(lang, atom.confidence).to_string(),
        );

        let history = &self.history;
        let _ = writeln!(out, "\n{} ({})", t(lang, "detail.history"), history.period);
        if history.points == 0 {
            let _ = writeln!(out, "  {}", t(lang, "empty.history"));
        } else {
            let _ = writeln!(
                out,
                "  {} {}: {} -> {} ({})",
                history.points,
                t(lang, "detail.points"),
                format_number(history.first_signal.unwrap_or(0.0)),
                format_number(history.last_signal.unwrap_or(0.0)),
                format_percent(history.change_percent)
            );
        }

        if !self.triples.is_empty() {
            let _ = writeln!(out, "\n{} ({})", t(lang, "detail.triples"), self.triples.len());
            for triple in &self.triples {
                let _ = writeln!(
                    out,
                    "  {} / {} / {}",
                    triple.subject, triple.predicate, triple.object
                );
            }
        }
        out
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SyncViewModel {
    pub mode: SyncMode,
    pub success: bool,
    pub touched: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub atoms_after: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_on_network: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub coverage_percent: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SyncViewModel {
    pub fn new(mode: SyncMode, report: &SyncReport) -> Self {
        Self {
            mode,
            success: report.success,
            touched: report.touched(),
            atoms_after: report.atoms.after,
            total_on_network: report.atoms.total_on_network,
            coverage_percent: report.atoms.coverage_percent,
            error: report.failure().map(str::to_string),
        }
    }

    /// One-line summary used by the console and the dashboard modal
    pub fn summary(&self, lang: Language) -> String {
        if let Some(error) = &self.error {
            return format!("{}: {}", t(lang, "sync.failure"), error);
        }
        let mut line = format!(
            "{}: {} {}",
            t(lang, "sync.success"),
            self.touched,
            t(lang, "sync.added")
        );
        if let Some(coverage) = self.coverage_percent {
            let _ = write!(line, " ({} {:.1}%)", t(lang, "sync.coverage"), coverage);
        }
        line
    }
}

impl ConsolePresentable for SyncViewModel {
    fn render_console(&self, lang: Language) -> String {
        let mut out = format!("{} ({})\n", t(lang, "sync.title"), self.mode);
        let _ = writeln!(out, "{}", self.summary(lang));
        if let (Some(after), Some(total)) = (self.atoms_after, self.total_on_network) {
            let _ = writeln!(out, "{} / {}", after, total);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use atomscope_types::RawNumber;

    fn atom(id: &str, label: &str, cap: f64) -> Atom {
        let mut atom = Atom::new(id);
        atom.description = Some(label.to_string());
        atom.market_cap = Some(RawNumber::from(cap));
        atom.share_price = Some(RawNumber::from(0.5));
        atom.created_at = Some("2024-03-01T10:00:00Z".to_string());
        atom
    }

    #[test]
    fn test_top_list_console() {
        let vm = AtomListViewModel {
            heading: ListHeading::Top {
                sort_by: SortKey::MarketCap,
                order: SortOrder::Desc,
            },
            fetched: 2,
            filters: FilterSpec::new(),
            atoms: AtomRow::rows(&[atom("1", "Ethereum", 1500.0), atom("2", "Rust", 150.0)], None),
        };

        let text = vm.render_console(Language::En);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Top (market cap, descending)");
        assert!(lines[2].starts_with("#    Atom"));
        assert!(lines[3].starts_with("1    Ethereum"));
        assert!(lines[3].contains("1.50K"));
        assert!(lines[4].starts_with("2    Rust"));
        assert!(lines[4].contains("150.00"));
        assert!(lines[4].ends_with("2024-03-01"));
    }

    #[test]
    fn test_empty_search_message() {
        let vm = AtomListViewModel {
            heading: ListHeading::Search {
                query: "zzz".to_string(),
            },
            fetched: 0,
            filters: FilterSpec::new(),
            atoms: Vec::new(),
        };
        let text = vm.render_console(Language::Fr);
        assert!(text.starts_with("Résultats pour \"zzz\""));
        assert!(text.contains("Aucun atom ne correspond"));
    }

    #[test]
    fn test_trending_rows_carry_growth() {
        let mut hot = atom("1", "Hot", 10.0);
        hot.trend.growth_24h_percent = Some(RawNumber::from(12.5));
        let rows = AtomRow::rows(&[hot], Some(TrendingPeriod::H24));
        assert_eq!(rows[0].growth, Some(12.5));
        assert_eq!(rows[0].confidence, Confidence::Low);
    }

    #[test]
    fn test_history_summary_change() {
        let series = atomscope_engine::chart_series(&[
            atomscope_types::HistoryPoint {
                timestamp: "2024-01-01T00:00:00Z".to_string(),
                signal_value: Some(RawNumber::from(100.0)),
                share_price: None,
            },
            atomscope_types::HistoryPoint {
                timestamp: "2024-01-02T00:00:00Z".to_string(),
                signal_value: Some(RawNumber::from(150.0)),
                share_price: None,
            },
        ]);
        let summary = HistorySummary::new(TrendingPeriod::D7, &series);
        assert_eq!(summary.points, 2);
        assert_eq!(summary.change_percent, Some(50.0));
    }

    #[test]
    fn test_sync_summary() {
        let report: SyncReport = serde_json::from_str(
            r#"{"success": true, "stats": {"added": 12}, "atoms": {"coverage_percent": 87.5}}"#,
        )
        .unwrap();
        let vm = SyncViewModel::new(SyncMode::New, &report);
        assert_eq!(
            vm.summary(Language::En),
            "Synchronization complete: 12 atoms synchronized (coverage 87.5%)"
        );

        let failed = SyncViewModel::new(SyncMode::Full, &SyncReport::default());
        assert_eq!(
            failed.summary(Language::Fr),
            "Erreur lors de la synchronisation: synchronization failed"
        );
    }
}
