//! Log entry classification.

define_label_enum!(
    /// Area of the marketplace that produced a log entry.
    LogModule ("log module") {
        Users => "Users",
        Products => "Products",
        Stalls => "Stalls",
        Complaints => "Complaints",
        Reviews => "Reviews",
        Auth => "Auth",
        System => "System",
    }
);

define_label_enum!(
    /// Severity of a log entry.
    LogLevel ("log level") {
        Info => "Info",
        Warning => "Warning",
        Error => "Error",
    }
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        assert_eq!("auth".parse::<LogModule>().unwrap(), LogModule::Auth);
        assert_eq!("WARNING".parse::<LogLevel>().unwrap(), LogLevel::Warning);
        assert!("Billing".parse::<LogModule>().is_err());
    }
}
