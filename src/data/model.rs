use std::collections::BTreeSet;
use std::fmt;

/// Text stored for a missing cell in a text-coerced column.
pub const MISSING_TEXT: &str = "nan";

/// Category code for open competition (no quota reservation).
pub const OPEN_COMPETITION_CODE: &str = "AC";

// ---------------------------------------------------------------------------
// CellValue – a single raw cell, before coercion
// ---------------------------------------------------------------------------

/// A dynamically-typed cell as decoded from any supported file format.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Empty,
}

impl CellValue {
    /// Numeric coercion. Anything that is not a finite number becomes `None`.
    pub fn to_number(&self) -> Option<f64> {
        let v = match self {
            CellValue::Float(v) => *v,
            CellValue::Integer(i) => *i as f64,
            CellValue::Text(s) => s.trim().parse::<f64>().ok()?,
            CellValue::Bool(_) | CellValue::Empty => return None,
        };
        v.is_finite().then_some(v)
    }

    /// Text coercion. Never fails; empty cells become [`MISSING_TEXT`].
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) if v.is_nan() => write!(f, "{MISSING_TEXT}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Empty => write!(f, "{MISSING_TEXT}"),
        }
    }
}

// ---------------------------------------------------------------------------
// CompetitionCategory – the two selectable modes
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CompetitionCategory {
    #[default]
    OpenCompetition,
    Quota,
}

impl CompetitionCategory {
    pub const ALL: [CompetitionCategory; 2] =
        [CompetitionCategory::OpenCompetition, CompetitionCategory::Quota];

    /// Whether a row's raw category code belongs to this mode.
    pub fn admits(self, code: &str) -> bool {
        match self {
            CompetitionCategory::OpenCompetition => code == OPEN_COMPETITION_CODE,
            CompetitionCategory::Quota => code != OPEN_COMPETITION_CODE,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CompetitionCategory::OpenCompetition => "Open competition",
            CompetitionCategory::Quota => "Quota",
        }
    }
}

impl fmt::Display for CompetitionCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Offer – one row of the dataset
// ---------------------------------------------------------------------------

/// One admission slot: institution/campus, course and competition category.
#[derive(Debug, Clone, PartialEq)]
pub struct Offer {
    pub course_name: String,
    pub institution_code: String,
    /// Two-letter state code of the campus.
    pub campus_state: String,
    /// Raw category code; `"AC"` is open competition.
    pub competition_category: String,
    pub competition_modality_label: String,
    /// `None` when the source cell was missing or not numeric.
    pub cutoff_score: Option<f64>,
}

// ---------------------------------------------------------------------------
// OfferDataset – the complete loaded dataset
// ---------------------------------------------------------------------------

/// The full parsed dataset. Immutable once built; row order is file order.
#[derive(Debug, Clone, Default)]
pub struct OfferDataset {
    offers: Vec<Offer>,
    /// Distinct course names, ascending.
    courses: Vec<String>,
}

impl OfferDataset {
    /// Build the course index from the loaded offers.
    pub fn from_offers(offers: Vec<Offer>) -> Self {
        let courses: BTreeSet<&str> = offers.iter().map(|o| o.course_name.as_str()).collect();
        let courses = courses.into_iter().map(str::to_string).collect();
        OfferDataset { offers, courses }
    }

    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }

    /// Sorted distinct course names, for the course selector.
    pub fn courses(&self) -> &[String] {
        &self.courses
    }

    /// Number of offers whose cutoff is not available.
    pub fn missing_cutoffs(&self) -> usize {
        self.offers.iter().filter(|o| o.cutoff_score.is_none()).count()
    }

    pub fn len(&self) -> usize {
        self.offers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offers.is_empty()
    }
}
