//! Selection categories and per-photo category assignments.

use serde::{Deserialize, Serialize};

use crate::constants::limits;

/// One of the five outcomes a photo can be assigned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    /// Printed photo
    Impresion,
    /// Cover of the USB box
    CajaUsb,
    /// Cover of the photo box
    CajaFotos,
    /// Shared on social media
    RedesSociales,
    /// Discarded; exclusive with every other category
    Descartada,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Category; 5] = [
        Category::Impresion,
        Category::CajaUsb,
        Category::CajaFotos,
        Category::RedesSociales,
        Category::Descartada,
    ];

    /// Key used in persisted and exported JSON.
    pub fn key(&self) -> &'static str {
        match self {
            Category::Impresion => "impresion",
            Category::CajaUsb => "caja_usb",
            Category::CajaFotos => "caja_fotos",
            Category::RedesSociales => "redes_sociales",
            Category::Descartada => "descartada",
        }
    }

    /// Parse a persisted/exported key.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.key() == key)
    }

    /// Slug used by the filter buttons.
    pub fn slug(&self) -> &'static str {
        match self {
            Category::Impresion => "impresion",
            Category::CajaUsb => "caja-usb",
            Category::CajaFotos => "caja-fotos",
            Category::RedesSociales => "redes-sociales",
            Category::Descartada => "descartada",
        }
    }

    /// Short label for filter buttons.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Impresion => "Impresión",
            Category::CajaUsb => "Caja USB",
            Category::CajaFotos => "Caja Fotos",
            Category::RedesSociales => "Redes Sociales",
            Category::Descartada => "Descartadas",
        }
    }

    /// Badge text shown on gallery cards.
    pub fn badge(&self) -> &'static str {
        match self {
            Category::Impresion => "📸 Impresión",
            Category::CajaUsb => "💾 Caja USB",
            Category::CajaFotos => "📦 Caja Fotos",
            Category::RedesSociales => "📱 Redes Sociales",
            Category::Descartada => "❌ Descartada",
        }
    }

    /// Heading used in the text summary.
    pub fn summary_heading(&self) -> &'static str {
        match self {
            Category::Impresion => "📸 IMPRESIÓN",
            Category::CajaUsb => "💾 CAJA USB",
            Category::CajaFotos => "📦 CAJA DE FOTOS",
            Category::RedesSociales => "📱 REDES SOCIALES",
            Category::Descartada => "❌ DESCARTADAS",
        }
    }

    /// Recommended maximum number of photos, if the category is capped.
    ///
    /// Limits are advisory: exceeding one produces a warning, never a rejection.
    pub fn limit(&self) -> Option<usize> {
        match self {
            Category::Impresion => Some(limits::IMPRESION),
            Category::CajaUsb => Some(limits::CAJA_USB),
            Category::CajaFotos => Some(limits::CAJA_FOTOS),
            Category::RedesSociales | Category::Descartada => None,
        }
    }

    /// Warning shown when selecting this category would bring it to
    /// `future_count` photos. `None` while the count stays within the limit.
    pub fn limit_warning(&self, future_count: usize) -> Option<String> {
        let limit = self.limit()?;
        if future_count <= limit {
            return None;
        }
        let message = match self {
            Category::Impresion => format!(
                "⚠️ Nota: Has seleccionado {future_count} fotos para impresión (se recomiendan {limit})"
            ),
            Category::CajaUsb => format!(
                "⚠️ Nota: Has seleccionado {future_count} fotos para Caja USB (se recomienda {limit})"
            ),
            Category::CajaFotos => format!(
                "⚠️ Nota: Has seleccionado {future_count} fotos para Caja de Fotos (se recomienda {limit})"
            ),
            Category::RedesSociales | Category::Descartada => return None,
        };
        Some(message)
    }

    /// Category bound to the given 1-based position (digit hotkeys).
    pub fn from_position(position: usize) -> Option<Self> {
        position
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i))
            .copied()
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Category flags for a single photo.
///
/// `descartada` is mutually exclusive with every other flag; the remaining
/// four may be combined freely. An assignment with no flag set means the photo
/// is unclassified and is never stored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryAssignment {
    #[serde(default)]
    pub impresion: bool,
    #[serde(default)]
    pub caja_usb: bool,
    #[serde(default)]
    pub caja_fotos: bool,
    #[serde(default)]
    pub redes_sociales: bool,
    #[serde(default)]
    pub descartada: bool,
}

impl CategoryAssignment {
    /// Create an empty (unclassified) assignment.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an assignment with the given categories set.
    ///
    /// Categories are applied in order through [`Self::set`], so the
    /// exclusivity rule holds for the result.
    pub fn with(categories: &[Category]) -> Self {
        let mut assignment = Self::new();
        for &category in categories {
            assignment.set(category, true);
        }
        assignment
    }

    /// Whether the given flag is set.
    pub fn get(&self, category: Category) -> bool {
        match category {
            Category::Impresion => self.impresion,
            Category::CajaUsb => self.caja_usb,
            Category::CajaFotos => self.caja_fotos,
            Category::RedesSociales => self.redes_sociales,
            Category::Descartada => self.descartada,
        }
    }

    fn flag_mut(&mut self, category: Category) -> &mut bool {
        match category {
            Category::Impresion => &mut self.impresion,
            Category::CajaUsb => &mut self.caja_usb,
            Category::CajaFotos => &mut self.caja_fotos,
            Category::RedesSociales => &mut self.redes_sociales,
            Category::Descartada => &mut self.descartada,
        }
    }

    /// Set a flag, enforcing exclusivity with `descartada`.
    pub fn set(&mut self, category: Category, value: bool) {
        if value {
            if category == Category::Descartada {
                *self = Self::new();
            } else {
                self.descartada = false;
            }
        }
        *self.flag_mut(category) = value;
    }

    /// Flip a flag and return its new value.
    pub fn toggle(&mut self, category: Category) -> bool {
        let value = !self.get(category);
        self.set(category, value);
        value
    }

    /// True when no flag is set.
    pub fn is_empty(&self) -> bool {
        Category::ALL.iter().all(|&c| !self.get(c))
    }

    /// Categories whose flag is set, in display order.
    pub fn categories(&self) -> impl Iterator<Item = Category> + '_ {
        Category::ALL.into_iter().filter(|&c| self.get(c))
    }

    /// Number of flags set.
    pub fn count(&self) -> usize {
        self.categories().count()
    }

    /// Repair a record that violates the exclusivity rule.
    ///
    /// Only reachable through hand-edited persisted data; `descartada` wins.
    pub fn normalized(mut self) -> Self {
        if self.descartada && self.count() > 1 {
            self = Self::with(&[Category::Descartada]);
        }
        self
    }
}
