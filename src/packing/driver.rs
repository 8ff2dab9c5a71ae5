//! Packing driver: spreads the product backlog over as many cages as needed.

use tracing::debug;

use crate::config::PackerConfig;
use crate::error::{PackError, Result};
use crate::model::{Cage, Product};
use crate::validation::unpackable_reason;

/// Pack products into cages.
///
/// While there are products left, a new cage is created and the whole
/// backlog is offered to it; whatever does not fit moves on to the next
/// cage. `products` should be sorted by descending volume.
///
/// Products that could never fit in an empty cage are rejected up front with
/// [`PackError::UnpackableProduct`], and a configured cage limit is enforced
/// with [`PackError::CageLimitExceeded`].
pub fn pack_products(products: Vec<Product>, config: &PackerConfig) -> Result<Vec<Cage>> {
    if let Some((product, reason)) = products
        .iter()
        .find_map(|p| unpackable_reason(p, &config.cage).map(|reason| (p, reason)))
    {
        return Err(PackError::UnpackableProduct {
            product_id: product.id(),
            reason,
        });
    }

    let mut cages: Vec<Cage> = Vec::new();
    let mut backlog = products;

    while !backlog.is_empty() {
        if let Some(limit) = config.max_cages {
            if cages.len() >= limit {
                return Err(PackError::CageLimitExceeded {
                    limit,
                    remaining: backlog.len(),
                });
            }
        }

        let mut cage = Cage::new(cages.len(), config.cage);
        backlog = cage.pack(backlog);

        // An empty cage means the backlog can never shrink.
        if cage.is_empty() {
            if let Some(product) = backlog.first() {
                return Err(PackError::UnpackableProduct {
                    product_id: product.id(),
                    reason: format!("no room in an empty {} cage", config.cage),
                });
            }
        }

        debug!(
            "Cage {}: placed {} product(s), {} left",
            cage.id(),
            cage.placed_products().len(),
            backlog.len()
        );
        cages.push(cage);
    }

    Ok(cages)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CageDimensions;

    fn small_config() -> PackerConfig {
        PackerConfig::new(CageDimensions::new(10, 10, 10))
    }

    fn placed_count(cages: &[Cage]) -> usize {
        cages.iter().map(|c| c.placed_products().len()).sum()
    }

    #[test]
    fn test_pack_empty_backlog() {
        let cages = pack_products(Vec::new(), &small_config()).expect("Should succeed");
        assert!(cages.is_empty());
    }

    #[test]
    fn test_pack_single_pass() {
        let products = (0..3).map(|i| Product::new(i, 1, 1, 1)).collect();

        let cages = pack_products(products, &small_config()).expect("Should succeed");

        assert_eq!(cages.len(), 1);
        assert_eq!(placed_count(&cages), 3);
    }

    #[test]
    fn test_pack_multiple_pass() {
        // Each cage fits four of these (two rows of two).
        let products = (0..9).map(|i| Product::new(i, 2, 4, 5)).collect();

        let cages = pack_products(products, &small_config()).expect("Should succeed");

        assert_eq!(cages.len(), 3);
        let counts: Vec<usize> = cages.iter().map(|c| c.placed_products().len()).collect();
        assert_eq!(counts, vec![4, 4, 1]);
        let ids: Vec<usize> = cages.iter().map(Cage::id).collect();
        assert_eq!(ids, vec![0, 1, 2]);
        assert!(cages.iter().all(|c| !c.is_empty()));
    }

    #[test]
    fn test_every_product_is_placed_once() {
        let products: Vec<Product> = (0..40)
            .map(|i| Product::new(i, 1 + (i as u32 % 4), 2 + (i as u32 % 3), 1 + (i as u32 % 5)))
            .collect();
        let count = products.len();

        let cages = pack_products(products, &small_config()).expect("Should succeed");

        assert_eq!(placed_count(&cages), count);
        let mut ids: Vec<u64> = cages
            .iter()
            .flat_map(|c| c.placed_products().iter().map(Product::id))
            .collect();
        ids.sort_unstable();
        assert_eq!(ids, (0..40).collect::<Vec<u64>>());
        assert!(cages
            .iter()
            .flat_map(|c| c.placed_products())
            .all(Product::is_placed));
    }

    #[test]
    fn test_oversized_product_is_rejected() {
        let products = vec![
            Product::new(1, 100, 100, 100),
            Product::new(2, 100, 697, 100),
        ];

        let result = pack_products(products, &PackerConfig::default());

        match result {
            Err(PackError::UnpackableProduct { product_id, .. }) => assert_eq!(product_id, 2),
            other => panic!("Expected UnpackableProduct error, got {:?}", other),
        }
    }

    #[test]
    fn test_cage_limit() {
        let products = (0..9).map(|i| Product::new(i, 2, 4, 5)).collect();
        let config = small_config().with_max_cages(2);

        let result = pack_products(products, &config);

        match result {
            Err(PackError::CageLimitExceeded { limit, remaining }) => {
                assert_eq!(limit, 2);
                assert_eq!(remaining, 1);
            }
            other => panic!("Expected CageLimitExceeded error, got {:?}", other),
        }
    }

    #[test]
    fn test_cage_limit_not_hit_when_exact() {
        let products = (0..8).map(|i| Product::new(i, 2, 4, 5)).collect();
        let config = small_config().with_max_cages(2);

        let cages = pack_products(products, &config).expect("Should succeed");
        assert_eq!(cages.len(), 2);
    }
}
