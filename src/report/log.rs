//! Human-readable packing summary, one log line per entry.

use crate::model::Cage;

/// Summary lines for a packing run.
///
/// Always lists the cage count and each cage's utilisation. With `verbose`,
/// every cage is followed by the placement of each of its products.
pub fn summary_lines(cages: &[Cage], verbose: bool) -> Vec<String> {
    let mut lines = vec![format!("{} cage(s) packed:", cages.len())];

    for cage in cages {
        lines.push(format!(
            "Cage {}: {:.3}% utilised",
            cage.id(),
            cage.percentage_used()
        ));
        if verbose {
            lines.extend(cage_detail_lines(cage));
        }
    }

    lines
}

/// Per-product placement lines for one cage.
pub fn cage_detail_lines(cage: &Cage) -> Vec<String> {
    let mut lines = vec![format!("== Cage {} details ====", cage.id())];

    for product in cage.placed_products() {
        let location = product
            .location()
            .map(|l| l.to_string())
            .unwrap_or_else(|| "-".to_string());
        lines.push(format!("Product {} placed at {}", product.id(), location));
        lines.push(format!(
            "p.width={} p.height={} p.length={}",
            product.width(),
            product.height(),
            product.length()
        ));
    }

    lines.push("=======================".to_string());
    lines
}
