//! Complaint lifecycle status.

define_label_enum!(
    /// Where a complaint is in its handling lifecycle.
    ComplaintStatus ("complaint status") {
        /// Submitted and awaiting an administrator.
        Open => "Open",
        /// Picked up by an administrator.
        InProgress => "In Progress",
        /// Settled with the parties.
        Resolved => "Resolved",
        /// Closed without further action.
        Closed => "Closed",
    }
);
