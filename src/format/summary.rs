//! Plain-text selection summary for the clipboard.

use crate::model::{Catalog, Category, display_number};
use crate::state::{SelectionStore, compute_stats};

const RULE: &str = "═══════════════════════════════════════";

/// Build the human-readable summary.
///
/// Lists totals, then the photo numbers of every non-empty category.
/// `generated_at` is printed verbatim on the last line.
pub fn build_text_summary(
    selections: &SelectionStore,
    catalog: &Catalog,
    title: &str,
    generated_at: &str,
) -> String {
    let stats = compute_stats(selections, catalog.len());

    let mut summary = format!("📸 {title}\n{RULE}\n\n");
    summary.push_str("📊 RESUMEN GENERAL:\n");
    summary.push_str(&format!("   Total de fotos: {}\n", catalog.len()));
    summary.push_str(&format!("   📸 Para impresión: {}\n", stats.impresion));
    summary.push_str(&format!("   💾 Para Caja USB: {}\n", stats.caja_usb));
    summary.push_str(&format!("   📦 Para Caja de Fotos: {}\n", stats.caja_fotos));
    summary.push_str(&format!("   📱 Para redes sociales: {}\n", stats.redes_sociales));
    summary.push_str(&format!("   ❌ Descartadas: {}\n", stats.descartada));
    summary.push_str(&format!("   ⭕ Sin clasificar: {}\n\n", stats.unclassified));

    for category in Category::ALL {
        let numbers: Vec<String> = selections
            .indices_with(category)
            .filter(|&index| catalog.contains(index))
            .map(|index| display_number(index).to_string())
            .collect();
        if numbers.is_empty() {
            continue;
        }

        summary.push_str(&format!("{}:\n", category.summary_heading()));
        summary.push_str(&format!("   Fotos: {}\n", numbers.join(", ")));
        summary.push_str(&format!("   Total: {}\n\n", numbers.len()));
    }

    summary.push_str(&format!("\n📅 Generado el: {generated_at}\n"));
    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CategoryAssignment;

    #[test]
    fn test_summary_lists_only_non_empty_categories() {
        let catalog = Catalog::numbered(10);
        let mut selections = SelectionStore::new();
        selections.commit(6, CategoryAssignment::with(&[Category::Impresion]));
        selections.commit(1, CategoryAssignment::with(&[Category::Impresion, Category::CajaFotos]));

        let summary = build_text_summary(&selections, &catalog, "SELECCIÓN", "20/10/2025");

        assert!(summary.starts_with("📸 SELECCIÓN\n"));
        assert!(summary.contains("   Total de fotos: 10\n"));
        assert!(summary.contains("   📸 Para impresión: 2\n"));
        assert!(summary.contains("   ⭕ Sin clasificar: 8\n"));
        assert!(summary.contains("📸 IMPRESIÓN:\n   Fotos: 2, 7\n   Total: 2\n"));
        assert!(summary.contains("📦 CAJA DE FOTOS:\n   Fotos: 2\n   Total: 1\n"));
        assert!(!summary.contains("CAJA USB:"));
        assert!(!summary.contains("DESCARTADAS:"));
        assert!(summary.ends_with("📅 Generado el: 20/10/2025\n"));
    }

    #[test]
    fn test_summary_with_no_selections() {
        let catalog = Catalog::numbered(3);
        let summary = build_text_summary(&SelectionStore::new(), &catalog, "T", "now");
        assert!(summary.contains("   ⭕ Sin clasificar: 3\n"));
        assert!(summary.contains("   📦 Para Caja de Fotos: 0\n"));
        assert!(!summary.contains("\n   Fotos: "));
        assert!(!summary.contains("\n   Total: "));
        assert!(!summary.contains("📸 IMPRESIÓN:\n"));
    }
}
