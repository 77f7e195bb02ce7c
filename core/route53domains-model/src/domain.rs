use crate::schema::Constraint;
use crate::typed_record;
use route53domains_types::{OperationStatus, OperationType, Price, Timestamp, Transferable};

/// Characters allowed in a name server host name.
pub const HOST_NAME_PATTERN: &str = r"[a-zA-Z0-9_\-.]*";

const DOMAIN_NAME: Constraint = Constraint::MaxLength(255);

typed_record! {
    /// A name server, with glue addresses when it lives inside the domain it serves.
    pub struct Nameserver = "Nameserver" {
        /// Fully qualified host name, e.g. `ns1.example.com`.
        scalar name: String = "Name" [Constraint::MaxLength(255), Constraint::Pattern(HOST_NAME_PATTERN)]
            => set_name, with_name;
        /// IPv4 or IPv6 addresses; one of each at most.
        list glue_ips: String = "GlueIps" [Constraint::MaxLength(45)]
            => set_glue_ips, with_glue_ips, append_glue_ips, with_appended_glue_ips;
    }
}

impl Nameserver {
    /// Shorthand for a name server without glue records.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` when the host name is too long or contains
    /// characters outside `[a-zA-Z0-9_\-.]`.
    pub fn named(name: impl Into<String>) -> route53domains_types::Result<Self> {
        Self::default().with_name(name)
    }
}

typed_record! {
    /// One entry of a domain listing.
    pub struct DomainSummary = "DomainSummary" {
        scalar domain_name: String = "DomainName" [DOMAIN_NAME] => set_domain_name, with_domain_name;
        scalar auto_renew: bool = "AutoRenew" [] => set_auto_renew, with_auto_renew;
        scalar transfer_lock: bool = "TransferLock" [] => set_transfer_lock, with_transfer_lock;
        scalar expiry: Timestamp = "Expiry" [] => set_expiry, with_expiry;
    }
}

typed_record! {
    pub struct DomainSuggestion = "DomainSuggestion" {
        scalar domain_name: String = "DomainName" [] => set_domain_name, with_domain_name;
        /// Raw availability token as returned by the suggestion service.
        scalar availability: String = "Availability" [] => set_availability, with_availability;
    }
}

typed_record! {
    /// Whether a domain can be transferred to Route 53.
    pub struct DomainTransferability = "DomainTransferability" {
        token transferable: Transferable = "Transferable" []
            => set_transferable, with_transferable, transferable_value, set_transferable_strict;
    }
}

typed_record! {
    /// One entry of an operation listing.
    pub struct OperationSummary = "OperationSummary" {
        scalar operation_id: String = "OperationId" [Constraint::MaxLength(255)]
            => set_operation_id, with_operation_id;
        token status: OperationStatus = "Status" [] => set_status, with_status, status_value, set_status_strict;
        token operation_type: OperationType = "Type" []
            => set_operation_type, with_operation_type, operation_type_value, set_operation_type_strict;
        scalar submitted_date: Timestamp = "SubmittedDate" [] => set_submitted_date, with_submitted_date;
    }
}

typed_record! {
    /// A key/value tag attached to a domain.
    pub struct Tag = "Tag" {
        scalar key: String = "Key" [] => set_key, with_key;
        scalar value: String = "Value" [] => set_value, with_value;
    }
}

impl Tag {
    /// Builds a tag from its key and value. Tags carry no constraints.
    #[must_use]
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: Some(key.into()),
            value: Some(value.into()),
        }
    }
}

typed_record! {
    /// One charge on the account's bill.
    pub struct BillingRecord = "BillingRecord" {
        scalar domain_name: String = "DomainName" [DOMAIN_NAME] => set_domain_name, with_domain_name;
        /// The operation that was billed.
        token operation: OperationType = "Operation" []
            => set_operation, with_operation, operation_value, set_operation_strict;
        scalar invoice_id: String = "InvoiceId" [] => set_invoice_id, with_invoice_id;
        scalar bill_date: Timestamp = "BillDate" [] => set_bill_date, with_bill_date;
        scalar price: Price = "Price" [] => set_price, with_price;
    }
}
