//! Service enumerations other than country codes.

crate::string_enum! {
    /// Legal form of a domain contact.
    pub enum ContactType = "ContactType" {
        Person => "PERSON",
        Company => "COMPANY",
        Association => "ASSOCIATION",
        PublicBody => "PUBLIC_BODY",
        Reseller => "RESELLER",
    }
}

crate::string_enum! {
    /// Kind of asynchronous operation tracked by the service.
    pub enum OperationType = "OperationType" {
        RegisterDomain => "REGISTER_DOMAIN",
        DeleteDomain => "DELETE_DOMAIN",
        TransferInDomain => "TRANSFER_IN_DOMAIN",
        UpdateDomainContact => "UPDATE_DOMAIN_CONTACT",
        UpdateNameserver => "UPDATE_NAMESERVER",
        ChangePrivacyProtection => "CHANGE_PRIVACY_PROTECTION",
        DomainLock => "DOMAIN_LOCK",
        EnableAutorenew => "ENABLE_AUTORENEW",
        DisableAutorenew => "DISABLE_AUTORENEW",
        AddDnssec => "ADD_DNSSEC",
        RemoveDnssec => "REMOVE_DNSSEC",
        ExpireDomain => "EXPIRE_DOMAIN",
        TransferOutDomain => "TRANSFER_OUT_DOMAIN",
        ChangeDomainOwner => "CHANGE_DOMAIN_OWNER",
        RenewDomain => "RENEW_DOMAIN",
        PushDomain => "PUSH_DOMAIN",
        InternalTransferOutDomain => "INTERNAL_TRANSFER_OUT_DOMAIN",
        InternalTransferInDomain => "INTERNAL_TRANSFER_IN_DOMAIN",
    }
}

crate::string_enum! {
    /// Progress of an asynchronous operation.
    pub enum OperationStatus = "OperationStatus" {
        Submitted => "SUBMITTED",
        InProgress => "IN_PROGRESS",
        Error => "ERROR",
        Successful => "SUCCESSFUL",
        Failed => "FAILED",
    }
}

impl OperationStatus {
    /// Returns true once the operation can no longer change state.
    ///
    /// `ERROR` is not terminal: the service may still move it to
    /// `SUCCESSFUL` or `FAILED`.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Successful | Self::Failed)
    }
}

crate::string_enum! {
    /// Whether a domain name can be registered right now.
    pub enum DomainAvailability = "DomainAvailability" {
        Available => "AVAILABLE",
        AvailableReserved => "AVAILABLE_RESERVED",
        AvailablePreorder => "AVAILABLE_PREORDER",
        Unavailable => "UNAVAILABLE",
        UnavailablePremium => "UNAVAILABLE_PREMIUM",
        UnavailableRestricted => "UNAVAILABLE_RESTRICTED",
        Reserved => "RESERVED",
        DontKnow => "DONT_KNOW",
    }
}

impl DomainAvailability {
    /// Returns true for the states in which a registration may be submitted.
    #[must_use]
    pub fn is_available(&self) -> bool {
        matches!(
            self,
            Self::Available | Self::AvailableReserved | Self::AvailablePreorder
        )
    }
}

crate::string_enum! {
    /// Whether a domain can be transferred to Route 53.
    pub enum Transferable = "Transferable" {
        Transferable => "TRANSFERABLE",
        Untransferable => "UNTRANSFERABLE",
        DontKnow => "DONT_KNOW",
    }
}

crate::string_enum! {
    /// State of the registrant contact verification email.
    pub enum ReachabilityStatus = "ReachabilityStatus" {
        Pending => "PENDING",
        Done => "DONE",
        Expired => "EXPIRED",
    }
}

crate::string_enum! {
    /// Registry-specific contact parameter names.
    pub enum ExtraParamName = "ExtraParamName" {
        DunsNumber => "DUNS_NUMBER",
        BrandNumber => "BRAND_NUMBER",
        BirthDepartment => "BIRTH_DEPARTMENT",
        BirthDateInYyyyMmDd => "BIRTH_DATE_IN_YYYY_MM_DD",
        BirthCountry => "BIRTH_COUNTRY",
        BirthCity => "BIRTH_CITY",
        DocumentNumber => "DOCUMENT_NUMBER",
        AuIdNumber => "AU_ID_NUMBER",
        AuIdType => "AU_ID_TYPE",
        CaLegalType => "CA_LEGAL_TYPE",
        CaBusinessEntityType => "CA_BUSINESS_ENTITY_TYPE",
        CaLegalRepresentative => "CA_LEGAL_REPRESENTATIVE",
        CaLegalRepresentativeCapacity => "CA_LEGAL_REPRESENTATIVE_CAPACITY",
        EsIdentification => "ES_IDENTIFICATION",
        EsIdentificationType => "ES_IDENTIFICATION_TYPE",
        EsLegalForm => "ES_LEGAL_FORM",
        FiBusinessNumber => "FI_BUSINESS_NUMBER",
        FiIdNumber => "FI_ID_NUMBER",
        FiNationality => "FI_NATIONALITY",
        FiOrganizationType => "FI_ORGANIZATION_TYPE",
        ItNationality => "IT_NATIONALITY",
        ItPin => "IT_PIN",
        ItRegistrantEntityType => "IT_REGISTRANT_ENTITY_TYPE",
        RuPassportData => "RU_PASSPORT_DATA",
        SeIdNumber => "SE_ID_NUMBER",
        SgIdNumber => "SG_ID_NUMBER",
        VatNumber => "VAT_NUMBER",
        UkContactType => "UK_CONTACT_TYPE",
        UkCompanyNumber => "UK_COMPANY_NUMBER",
    }
}
