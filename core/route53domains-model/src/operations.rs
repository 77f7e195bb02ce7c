//! Request and result records, one pair per service operation.

use crate::contact::ContactDetail;
use crate::domain::{
    BillingRecord, DomainSuggestion, DomainSummary, DomainTransferability, Nameserver, OperationSummary, Tag,
};
use crate::schema::Constraint;
use crate::typed_record;
use route53domains_types::{DomainAvailability, OperationStatus, OperationType, ReachabilityStatus, Timestamp};

const DOMAIN_NAME: Constraint = Constraint::MaxLength(255);
const IDN_LANG_CODE: Constraint = Constraint::MaxLength(3);
const AUTH_CODE: Constraint = Constraint::MaxLength(1024);
const OPERATION_ID: Constraint = Constraint::MaxLength(255);
const PAGE_MARKER: Constraint = Constraint::MaxLength(4096);
const PAGE_SIZE: Constraint = Constraint::Range { min: 0, max: 100 };
const DURATION_IN_YEARS: Constraint = Constraint::Range { min: 1, max: 10 };
const EMAIL: Constraint = Constraint::MaxLength(254);
const PHONE: Constraint = Constraint::MaxLength(30);
const ACCOUNT_ID: Constraint = Constraint::Pattern(r"\d{12}");

// ── Availability and transferability ─────────────────────────────

typed_record! {
    pub struct CheckDomainAvailabilityRequest = "CheckDomainAvailabilityRequest" {
        scalar domain_name: String = "DomainName" [DOMAIN_NAME] => set_domain_name, with_domain_name;
        /// Reserved for internationalized domain names.
        scalar idn_lang_code: String = "IdnLangCode" [IDN_LANG_CODE] => set_idn_lang_code, with_idn_lang_code;
    }
}

typed_record! {
    pub struct CheckDomainAvailabilityResult = "CheckDomainAvailabilityResult" {
        token availability: DomainAvailability = "Availability" []
            => set_availability, with_availability, availability_value, set_availability_strict;
    }
}

typed_record! {
    pub struct CheckDomainTransferabilityRequest = "CheckDomainTransferabilityRequest" {
        scalar domain_name: String = "DomainName" [DOMAIN_NAME] => set_domain_name, with_domain_name;
        /// Authorization code issued by the current registrar.
        scalar auth_code: String = "AuthCode" [AUTH_CODE] => set_auth_code, with_auth_code;
    }
}

typed_record! {
    pub struct CheckDomainTransferabilityResult = "CheckDomainTransferabilityResult" {
        scalar transferability: DomainTransferability = "Transferability" []
            => set_transferability, with_transferability;
    }
}

// ── Contact reachability ─────────────────────────────────────────
//
// These two operations use camelCase member names on the wire.

typed_record! {
    pub struct GetContactReachabilityStatusRequest = "GetContactReachabilityStatusRequest" {
        scalar domain_name: String = "domainName" [DOMAIN_NAME] => set_domain_name, with_domain_name;
    }
}

typed_record! {
    pub struct GetContactReachabilityStatusResult = "GetContactReachabilityStatusResult" {
        scalar domain_name: String = "domainName" [DOMAIN_NAME] => set_domain_name, with_domain_name;
        token status: ReachabilityStatus = "status" [] => set_status, with_status, status_value, set_status_strict;
    }
}

typed_record! {
    pub struct ResendContactReachabilityEmailRequest = "ResendContactReachabilityEmailRequest" {
        scalar domain_name: String = "domainName" [DOMAIN_NAME] => set_domain_name, with_domain_name;
    }
}

typed_record! {
    pub struct ResendContactReachabilityEmailResult = "ResendContactReachabilityEmailResult" {
        scalar domain_name: String = "domainName" [DOMAIN_NAME] => set_domain_name, with_domain_name;
        scalar email_address: String = "emailAddress" [EMAIL] => set_email_address, with_email_address;
        scalar is_already_verified: bool = "isAlreadyVerified" []
            => set_is_already_verified, with_is_already_verified;
    }
}

// ── Domain detail ────────────────────────────────────────────────

typed_record! {
    pub struct GetDomainDetailRequest = "GetDomainDetailRequest" {
        scalar domain_name: String = "DomainName" [DOMAIN_NAME] => set_domain_name, with_domain_name;
    }
}

typed_record! {
    /// Everything the registrar knows about a registered domain.
    pub struct GetDomainDetailResult = "GetDomainDetailResult" {
        scalar domain_name: String = "DomainName" [DOMAIN_NAME] => set_domain_name, with_domain_name;
        list nameservers: Nameserver = "Nameservers" []
            => set_nameservers, with_nameservers, append_nameservers, with_appended_nameservers;
        scalar auto_renew: bool = "AutoRenew" [] => set_auto_renew, with_auto_renew;
        scalar admin_contact: ContactDetail = "AdminContact" [] => set_admin_contact, with_admin_contact;
        scalar registrant_contact: ContactDetail = "RegistrantContact" []
            => set_registrant_contact, with_registrant_contact;
        scalar tech_contact: ContactDetail = "TechContact" [] => set_tech_contact, with_tech_contact;
        /// Whether WHOIS queries return contact details for the admin contact.
        scalar admin_privacy: bool = "AdminPrivacy" [] => set_admin_privacy, with_admin_privacy;
        scalar registrant_privacy: bool = "RegistrantPrivacy" [] => set_registrant_privacy, with_registrant_privacy;
        scalar tech_privacy: bool = "TechPrivacy" [] => set_tech_privacy, with_tech_privacy;
        scalar registrar_name: String = "RegistrarName" [] => set_registrar_name, with_registrar_name;
        scalar who_is_server: String = "WhoIsServer" [] => set_who_is_server, with_who_is_server;
        scalar registrar_url: String = "RegistrarUrl" [] => set_registrar_url, with_registrar_url;
        scalar abuse_contact_email: String = "AbuseContactEmail" [EMAIL]
            => set_abuse_contact_email, with_abuse_contact_email;
        scalar abuse_contact_phone: String = "AbuseContactPhone" [PHONE]
            => set_abuse_contact_phone, with_abuse_contact_phone;
        scalar registry_domain_id: String = "RegistryDomainId" [] => set_registry_domain_id, with_registry_domain_id;
        scalar creation_date: Timestamp = "CreationDate" [] => set_creation_date, with_creation_date;
        scalar updated_date: Timestamp = "UpdatedDate" [] => set_updated_date, with_updated_date;
        scalar expiration_date: Timestamp = "ExpirationDate" [] => set_expiration_date, with_expiration_date;
        scalar reseller: String = "Reseller" [] => set_reseller, with_reseller;
        /// Reserved.
        scalar dns_sec: String = "DnsSec" [] => set_dns_sec, with_dns_sec;
        /// EPP status codes, e.g. `clientTransferProhibited`.
        list status_list: String = "StatusList" []
            => set_status_list, with_status_list, append_status_list, with_appended_status_list;
    }
}

// ── Suggestions ──────────────────────────────────────────────────

typed_record! {
    pub struct GetDomainSuggestionsRequest = "GetDomainSuggestionsRequest" {
        scalar domain_name: String = "DomainName" [DOMAIN_NAME] => set_domain_name, with_domain_name;
        scalar suggestion_count: i32 = "SuggestionCount" [Constraint::Range { min: 1, max: 100 }]
            => set_suggestion_count, with_suggestion_count;
        scalar only_available: bool = "OnlyAvailable" [] => set_only_available, with_only_available;
    }
}

typed_record! {
    pub struct GetDomainSuggestionsResult = "GetDomainSuggestionsResult" {
        list suggestions_list: DomainSuggestion = "SuggestionsList" []
            => set_suggestions_list, with_suggestions_list, append_suggestions_list, with_appended_suggestions_list;
    }
}

// ── Operations ───────────────────────────────────────────────────

typed_record! {
    pub struct GetOperationDetailRequest = "GetOperationDetailRequest" {
        scalar operation_id: String = "OperationId" [OPERATION_ID] => set_operation_id, with_operation_id;
    }
}

typed_record! {
    pub struct GetOperationDetailResult = "GetOperationDetailResult" {
        scalar operation_id: String = "OperationId" [OPERATION_ID] => set_operation_id, with_operation_id;
        token status: OperationStatus = "Status" [] => set_status, with_status, status_value, set_status_strict;
        /// Detailed failure reason when the status is `ERROR` or `FAILED`.
        scalar message: String = "Message" [] => set_message, with_message;
        scalar domain_name: String = "DomainName" [DOMAIN_NAME] => set_domain_name, with_domain_name;
        token operation_type: OperationType = "Type" []
            => set_operation_type, with_operation_type, operation_type_value, set_operation_type_strict;
        scalar submitted_date: Timestamp = "SubmittedDate" [] => set_submitted_date, with_submitted_date;
    }
}

typed_record! {
    pub struct ListOperationsRequest = "ListOperationsRequest" {
        /// Only operations submitted after this instant are listed.
        scalar submitted_since: Timestamp = "SubmittedSince" [] => set_submitted_since, with_submitted_since;
        scalar marker: String = "Marker" [PAGE_MARKER] => set_marker, with_marker;
        scalar max_items: i32 = "MaxItems" [PAGE_SIZE] => set_max_items, with_max_items;
    }
}

typed_record! {
    pub struct ListOperationsResult = "ListOperationsResult" {
        list operations: OperationSummary = "Operations" []
            => set_operations, with_operations, append_operations, with_appended_operations;
        scalar next_page_marker: String = "NextPageMarker" [PAGE_MARKER] => set_next_page_marker, with_next_page_marker;
    }
}

// ── Listing ──────────────────────────────────────────────────────

typed_record! {
    pub struct ListDomainsRequest = "ListDomainsRequest" {
        /// `NextPageMarker` from the previous page; unset for the first page.
        scalar marker: String = "Marker" [PAGE_MARKER] => set_marker, with_marker;
        scalar max_items: i32 = "MaxItems" [PAGE_SIZE] => set_max_items, with_max_items;
    }
}

typed_record! {
    pub struct ListDomainsResult = "ListDomainsResult" {
        list domains: DomainSummary = "Domains" [] => set_domains, with_domains, append_domains, with_appended_domains;
        scalar next_page_marker: String = "NextPageMarker" [PAGE_MARKER] => set_next_page_marker, with_next_page_marker;
    }
}

// ── Registration, renewal and transfer ───────────────────────────

typed_record! {
    pub struct RegisterDomainRequest = "RegisterDomainRequest" {
        scalar domain_name: String = "DomainName" [DOMAIN_NAME] => set_domain_name, with_domain_name;
        scalar idn_lang_code: String = "IdnLangCode" [IDN_LANG_CODE] => set_idn_lang_code, with_idn_lang_code;
        scalar duration_in_years: i32 = "DurationInYears" [DURATION_IN_YEARS]
            => set_duration_in_years, with_duration_in_years;
        scalar auto_renew: bool = "AutoRenew" [] => set_auto_renew, with_auto_renew;
        scalar admin_contact: ContactDetail = "AdminContact" [] => set_admin_contact, with_admin_contact;
        scalar registrant_contact: ContactDetail = "RegistrantContact" []
            => set_registrant_contact, with_registrant_contact;
        scalar tech_contact: ContactDetail = "TechContact" [] => set_tech_contact, with_tech_contact;
        scalar privacy_protect_admin_contact: bool = "PrivacyProtectAdminContact" []
            => set_privacy_protect_admin_contact, with_privacy_protect_admin_contact;
        scalar privacy_protect_registrant_contact: bool = "PrivacyProtectRegistrantContact" []
            => set_privacy_protect_registrant_contact, with_privacy_protect_registrant_contact;
        scalar privacy_protect_tech_contact: bool = "PrivacyProtectTechContact" []
            => set_privacy_protect_tech_contact, with_privacy_protect_tech_contact;
    }
}

typed_record! {
    pub struct RegisterDomainResult = "RegisterDomainResult" {
        scalar operation_id: String = "OperationId" [OPERATION_ID] => set_operation_id, with_operation_id;
    }
}

typed_record! {
    pub struct RenewDomainRequest = "RenewDomainRequest" {
        scalar domain_name: String = "DomainName" [DOMAIN_NAME] => set_domain_name, with_domain_name;
        scalar duration_in_years: i32 = "DurationInYears" [DURATION_IN_YEARS]
            => set_duration_in_years, with_duration_in_years;
        /// Guards against renewing twice: must match the current expiry year.
        scalar current_expiry_year: i32 = "CurrentExpiryYear" [] => set_current_expiry_year, with_current_expiry_year;
    }
}

typed_record! {
    pub struct RenewDomainResult = "RenewDomainResult" {
        scalar operation_id: String = "OperationId" [OPERATION_ID] => set_operation_id, with_operation_id;
    }
}

typed_record! {
    pub struct TransferDomainRequest = "TransferDomainRequest" {
        scalar domain_name: String = "DomainName" [DOMAIN_NAME] => set_domain_name, with_domain_name;
        scalar idn_lang_code: String = "IdnLangCode" [IDN_LANG_CODE] => set_idn_lang_code, with_idn_lang_code;
        scalar duration_in_years: i32 = "DurationInYears" [DURATION_IN_YEARS]
            => set_duration_in_years, with_duration_in_years;
        list nameservers: Nameserver = "Nameservers" []
            => set_nameservers, with_nameservers, append_nameservers, with_appended_nameservers;
        scalar auth_code: String = "AuthCode" [AUTH_CODE] => set_auth_code, with_auth_code;
        scalar auto_renew: bool = "AutoRenew" [] => set_auto_renew, with_auto_renew;
        scalar admin_contact: ContactDetail = "AdminContact" [] => set_admin_contact, with_admin_contact;
        scalar registrant_contact: ContactDetail = "RegistrantContact" []
            => set_registrant_contact, with_registrant_contact;
        scalar tech_contact: ContactDetail = "TechContact" [] => set_tech_contact, with_tech_contact;
        scalar privacy_protect_admin_contact: bool = "PrivacyProtectAdminContact" []
            => set_privacy_protect_admin_contact, with_privacy_protect_admin_contact;
        scalar privacy_protect_registrant_contact: bool = "PrivacyProtectRegistrantContact" []
            => set_privacy_protect_registrant_contact, with_privacy_protect_registrant_contact;
        scalar privacy_protect_tech_contact: bool = "PrivacyProtectTechContact" []
            => set_privacy_protect_tech_contact, with_privacy_protect_tech_contact;
    }
}

typed_record! {
    pub struct TransferDomainResult = "TransferDomainResult" {
        scalar operation_id: String = "OperationId" [OPERATION_ID] => set_operation_id, with_operation_id;
    }
}

typed_record! {
    pub struct RetrieveDomainAuthCodeRequest = "RetrieveDomainAuthCodeRequest" {
        scalar domain_name: String = "DomainName" [DOMAIN_NAME] => set_domain_name, with_domain_name;
    }
}

typed_record! {
    pub struct RetrieveDomainAuthCodeResult = "RetrieveDomainAuthCodeResult" {
        scalar auth_code: String = "AuthCode" [AUTH_CODE] => set_auth_code, with_auth_code;
    }
}

// ── Transfers between AWS accounts ───────────────────────────────

typed_record! {
    pub struct TransferDomainToAnotherAwsAccountRequest = "TransferDomainToAnotherAwsAccountRequest" {
        scalar domain_name: String = "DomainName" [DOMAIN_NAME] => set_domain_name, with_domain_name;
        /// Twelve-digit ID of the receiving account.
        scalar account_id: String = "AccountId" [ACCOUNT_ID] => set_account_id, with_account_id;
    }
}

typed_record! {
    pub struct TransferDomainToAnotherAwsAccountResult = "TransferDomainToAnotherAwsAccountResult" {
        scalar operation_id: String = "OperationId" [OPERATION_ID] => set_operation_id, with_operation_id;
        /// Hand this to the receiving account; it is needed to accept the transfer.
        scalar password: String = "Password" [] => set_password, with_password;
    }
}

typed_record! {
    pub struct AcceptDomainTransferFromAnotherAwsAccountRequest = "AcceptDomainTransferFromAnotherAwsAccountRequest" {
        scalar domain_name: String = "DomainName" [DOMAIN_NAME] => set_domain_name, with_domain_name;
        scalar password: String = "Password" [] => set_password, with_password;
    }
}

typed_record! {
    pub struct AcceptDomainTransferFromAnotherAwsAccountResult = "AcceptDomainTransferFromAnotherAwsAccountResult" {
        scalar operation_id: String = "OperationId" [OPERATION_ID] => set_operation_id, with_operation_id;
    }
}

typed_record! {
    pub struct RejectDomainTransferFromAnotherAwsAccountRequest = "RejectDomainTransferFromAnotherAwsAccountRequest" {
        scalar domain_name: String = "DomainName" [DOMAIN_NAME] => set_domain_name, with_domain_name;
    }
}

typed_record! {
    pub struct RejectDomainTransferFromAnotherAwsAccountResult = "RejectDomainTransferFromAnotherAwsAccountResult" {
        scalar operation_id: String = "OperationId" [OPERATION_ID] => set_operation_id, with_operation_id;
    }
}

typed_record! {
    pub struct CancelDomainTransferToAnotherAwsAccountRequest = "CancelDomainTransferToAnotherAwsAccountRequest" {
        scalar domain_name: String = "DomainName" [DOMAIN_NAME] => set_domain_name, with_domain_name;
    }
}

typed_record! {
    pub struct CancelDomainTransferToAnotherAwsAccountResult = "CancelDomainTransferToAnotherAwsAccountResult" {
        scalar operation_id: String = "OperationId" [OPERATION_ID] => set_operation_id, with_operation_id;
    }
}

// ── Contacts and name servers ────────────────────────────────────

typed_record! {
    pub struct UpdateDomainContactRequest = "UpdateDomainContactRequest" {
        scalar domain_name: String = "DomainName" [DOMAIN_NAME] => set_domain_name, with_domain_name;
        scalar admin_contact: ContactDetail = "AdminContact" [] => set_admin_contact, with_admin_contact;
        scalar registrant_contact: ContactDetail = "RegistrantContact" []
            => set_registrant_contact, with_registrant_contact;
        scalar tech_contact: ContactDetail = "TechContact" [] => set_tech_contact, with_tech_contact;
    }
}

typed_record! {
    pub struct UpdateDomainContactResult = "UpdateDomainContactResult" {
        scalar operation_id: String = "OperationId" [OPERATION_ID] => set_operation_id, with_operation_id;
    }
}

typed_record! {
    pub struct UpdateDomainContactPrivacyRequest = "UpdateDomainContactPrivacyRequest" {
        scalar domain_name: String = "DomainName" [DOMAIN_NAME] => set_domain_name, with_domain_name;
        scalar admin_privacy: bool = "AdminPrivacy" [] => set_admin_privacy, with_admin_privacy;
        scalar registrant_privacy: bool = "RegistrantPrivacy" [] => set_registrant_privacy, with_registrant_privacy;
        scalar tech_privacy: bool = "TechPrivacy" [] => set_tech_privacy, with_tech_privacy;
    }
}

typed_record! {
    pub struct UpdateDomainContactPrivacyResult = "UpdateDomainContactPrivacyResult" {
        scalar operation_id: String = "OperationId" [OPERATION_ID] => set_operation_id, with_operation_id;
    }
}

typed_record! {
    pub struct UpdateDomainNameserversRequest = "UpdateDomainNameserversRequest" {
        scalar domain_name: String = "DomainName" [DOMAIN_NAME] => set_domain_name, with_domain_name;
        /// Authorization key for `.fi` domains.
        scalar fi_auth_key: String = "FIAuthKey" [] => set_fi_auth_key, with_fi_auth_key;
        list nameservers: Nameserver = "Nameservers" []
            => set_nameservers, with_nameservers, append_nameservers, with_appended_nameservers;
    }
}

typed_record! {
    pub struct UpdateDomainNameserversResult = "UpdateDomainNameserversResult" {
        scalar operation_id: String = "OperationId" [OPERATION_ID] => set_operation_id, with_operation_id;
    }
}

// ── Auto-renew and transfer lock ─────────────────────────────────

typed_record! {
    pub struct EnableDomainAutoRenewRequest = "EnableDomainAutoRenewRequest" {
        scalar domain_name: String = "DomainName" [DOMAIN_NAME] => set_domain_name, with_domain_name;
    }
}

typed_record! {
    pub struct EnableDomainAutoRenewResult = "EnableDomainAutoRenewResult" {}
}

typed_record! {
    pub struct DisableDomainAutoRenewRequest = "DisableDomainAutoRenewRequest" {
        scalar domain_name: String = "DomainName" [DOMAIN_NAME] => set_domain_name, with_domain_name;
    }
}

typed_record! {
    pub struct DisableDomainAutoRenewResult = "DisableDomainAutoRenewResult" {}
}

typed_record! {
    pub struct EnableDomainTransferLockRequest = "EnableDomainTransferLockRequest" {
        scalar domain_name: String = "DomainName" [DOMAIN_NAME] => set_domain_name, with_domain_name;
    }
}

typed_record! {
    pub struct EnableDomainTransferLockResult = "EnableDomainTransferLockResult" {
        scalar operation_id: String = "OperationId" [OPERATION_ID] => set_operation_id, with_operation_id;
    }
}

typed_record! {
    pub struct DisableDomainTransferLockRequest = "DisableDomainTransferLockRequest" {
        scalar domain_name: String = "DomainName" [DOMAIN_NAME] => set_domain_name, with_domain_name;
    }
}

typed_record! {
    pub struct DisableDomainTransferLockResult = "DisableDomainTransferLockResult" {
        scalar operation_id: String = "OperationId" [OPERATION_ID] => set_operation_id, with_operation_id;
    }
}

// ── Billing ──────────────────────────────────────────────────────

typed_record! {
    pub struct ViewBillingRequest = "ViewBillingRequest" {
        /// Start of the billing period.
        scalar start: Timestamp = "Start" [] => set_start, with_start;
        scalar end: Timestamp = "End" [] => set_end, with_end;
        scalar marker: String = "Marker" [PAGE_MARKER] => set_marker, with_marker;
        scalar max_items: i32 = "MaxItems" [PAGE_SIZE] => set_max_items, with_max_items;
    }
}

typed_record! {
    pub struct ViewBillingResult = "ViewBillingResult" {
        scalar next_page_marker: String = "NextPageMarker" [PAGE_MARKER] => set_next_page_marker, with_next_page_marker;
        list billing_records: BillingRecord = "BillingRecords" []
            => set_billing_records, with_billing_records, append_billing_records, with_appended_billing_records;
    }
}

// ── Tags ─────────────────────────────────────────────────────────

typed_record! {
    pub struct ListTagsForDomainRequest = "ListTagsForDomainRequest" {
        scalar domain_name: String = "DomainName" [DOMAIN_NAME] => set_domain_name, with_domain_name;
    }
}

typed_record! {
    pub struct ListTagsForDomainResult = "ListTagsForDomainResult" {
        list tag_list: Tag = "TagList" [] => set_tag_list, with_tag_list, append_tag_list, with_appended_tag_list;
    }
}

typed_record! {
    pub struct UpdateTagsForDomainRequest = "UpdateTagsForDomainRequest" {
        scalar domain_name: String = "DomainName" [DOMAIN_NAME] => set_domain_name, with_domain_name;
        /// Tags to add, or to overwrite when the key already exists.
        list tags_to_update: Tag = "TagsToUpdate" []
            => set_tags_to_update, with_tags_to_update, append_tags_to_update, with_appended_tags_to_update;
    }
}

typed_record! {
    pub struct UpdateTagsForDomainResult = "UpdateTagsForDomainResult" {}
}

typed_record! {
    pub struct DeleteTagsForDomainRequest = "DeleteTagsForDomainRequest" {
        scalar domain_name: String = "DomainName" [DOMAIN_NAME] => set_domain_name, with_domain_name;
        list tags_to_delete: String = "TagsToDelete" []
            => set_tags_to_delete, with_tags_to_delete, append_tags_to_delete, with_appended_tags_to_delete;
    }
}

typed_record! {
    pub struct DeleteTagsForDomainResult = "DeleteTagsForDomainResult" {}
}
