use super::Ident;
use crate::numeric::{RawNumber, to_number};
use serde::{Deserialize, Serialize};

/// A wallet's stake in an atom or a triple.
///
/// `pnl_*` is the holder's personal profit/loss and takes display priority;
/// `growth_*` describes the underlying term, not the holder.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Position {
    #[serde(flatten)]
    pub entity: PositionEntity,
    #[serde(default)]
    pub shares: Option<RawNumber>,
    #[serde(default)]
    pub current_share_price: Option<RawNumber>,
    #[serde(default)]
    pub entry_price: Option<RawNumber>,
    #[serde(default)]
    pub value: Option<RawNumber>,
    #[serde(default)]
    pub total_cost: Option<RawNumber>,
    #[serde(default)]
    pub pnl_percent: Option<RawNumber>,
    #[serde(default)]
    pub pnl_amount: Option<RawNumber>,
    #[serde(default)]
    pub growth_24h_percent: Option<RawNumber>,
    #[serde(default)]
    pub growth_7d_percent: Option<RawNumber>,
}

/// Held entity, discriminated on the wire by `entity_type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "entity_type", rename_all = "lowercase")]
pub enum PositionEntity {
    Atom(AtomHolding),
    Triple(TripleHolding),
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AtomHolding {
    #[serde(default)]
    pub term_id: Option<Ident>,
    #[serde(default)]
    pub label: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    #[serde(default)]
    pub emoji: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct TermLabel {
    pub label: Option<String>,
    pub image: Option<String>,
}

/// Triple holding with its three terms grouped; flat `subject_label`,
/// `predicate_label`, ... on the wire.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "TripleHoldingWire", into = "TripleHoldingWire")]
pub struct TripleHolding {
    pub term_id: Option<Ident>,
    pub subject: TermLabel,
    pub predicate: TermLabel,
    pub object: TermLabel,
}

#[derive(Serialize, Deserialize)]
struct TripleHoldingWire {
    #[serde(default)]
    term_id: Option<Ident>,
    #[serde(default)]
    subject_label: Option<String>,
    #[serde(default)]
    subject_image: Option<String>,
    #[serde(default)]
    predicate_label: Option<String>,
    #[serde(default)]
    predicate_image: Option<String>,
    #[serde(default)]
    object_label: Option<String>,
    #[serde(default)]
    object_image: Option<String>,
}

impl From<TripleHoldingWire> for TripleHolding {
    fn from(wire: TripleHoldingWire) -> Self {
        Self {
            term_id: wire.term_id,
            subject: TermLabel {
                label: wire.subject_label,
                image: wire.subject_image,
            },
            predicate: TermLabel {
                label: wire.predicate_label,
                image: wire.predicate_image,
            },
            object: TermLabel {
                label: wire.object_label,
                image: wire.object_image,
            },
        }
    }
}

impl From<TripleHolding> for TripleHoldingWire {
    fn from(holding: TripleHolding) -> Self {
        Self {
            term_id: holding.term_id,
            subject_label: holding.subject.label,
            subject_image: holding.subject.image,
            predicate_label: holding.predicate.label,
            predicate_image: holding.predicate.image,
            object_label: holding.object.label,
            object_image: holding.object.image,
        }
    }
}

impl Position {
    pub fn shares(&self) -> f64 {
        to_number(self.shares.as_ref())
    }

    pub fn value(&self) -> f64 {
        to_number(self.value.as_ref())
    }

    /// Personal P&L percentage, if the backend could compute one
    pub fn pnl_percent(&self) -> Option<f64> {
        self.pnl_percent.as_ref().map(RawNumber::value)
    }

    /// Atom term id when this position links to an atom detail view
    pub fn atom_term_id(&self) -> Option<&Ident> {
        match &self.entity {
            PositionEntity::Atom(holding) => holding.term_id.as_ref(),
            PositionEntity::Triple(_) => None,
        }
    }

    pub fn is_triple(&self) -> bool {
        matches!(self.entity, PositionEntity::Triple(_))
    }

    /// One-line label: the atom label, or `subject predicate object`
    pub fn label(&self) -> String {
        match &self.entity {
            PositionEntity::Atom(holding) => holding
                .label
                .clone()
                .or_else(|| holding.description.clone())
                .unwrap_or_else(|| "N/A".to_string()),
            PositionEntity::Triple(triple) => [&triple.subject, &triple.predicate, &triple.object]
                .iter()
                .map(|term| term.label.as_deref().unwrap_or("N/A"))
                .collect::<Vec<_>>()
                .join(" "),
        }
    }
}
