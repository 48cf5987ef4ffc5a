//! Product listing status.

define_label_enum!(
    /// Whether a product can currently be ordered.
    ProductStatus ("product status") {
        /// Listed with stock.
        Available => "Available",
        /// Listed but no stock left.
        OutOfStock => "Out of Stock",
        /// Withdrawn by the seller.
        Archived => "Archived",
    }
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_with_spaces() {
        assert_eq!(
            "out of stock".parse::<ProductStatus>().unwrap(),
            ProductStatus::OutOfStock
        );
        assert_eq!(ProductStatus::OutOfStock.to_string(), "Out of Stock");
    }
}
