//! Stall approval status.

define_label_enum!(
    /// Approval state of a stall.
    StallStatus ("stall status") {
        /// Approved and trading.
        Active => "Active",
        /// Waiting for administrator approval.
        Pending => "Pending",
        /// No longer trading.
        Closed => "Closed",
    }
);
