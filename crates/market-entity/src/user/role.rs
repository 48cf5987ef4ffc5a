//! User role and account status.

define_label_enum!(
    /// Marketplace role of an account.
    UserRole ("user role") {
        /// Importer purchasing from stalls.
        Buyer => "Buyer",
        /// Exporter operating one or more stalls.
        Seller => "Seller",
        /// Marketplace administrator.
        Admin => "Admin",
    }
);

define_label_enum!(
    /// Account status.
    UserStatus ("user status") {
        /// Account can trade and log in.
        Active => "Active",
        /// Account is blocked by an administrator.
        Suspended => "Suspended",
    }
);
