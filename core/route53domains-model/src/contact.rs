use crate::schema::Constraint;
use crate::typed_record;
use route53domains_types::{ContactType, CountryCode, ExtraParamName};

const NAME: Constraint = Constraint::MaxLength(255);
const PHONE: Constraint = Constraint::MaxLength(30);
const EMAIL: Constraint = Constraint::MaxLength(254);

typed_record! {
    /// Registrant, administrative or technical contact for a domain.
    pub struct ContactDetail = "ContactDetail" {
        scalar first_name: String = "FirstName" [NAME] => set_first_name, with_first_name;
        scalar last_name: String = "LastName" [NAME] => set_last_name, with_last_name;
        /// Whether the contact is a person or some kind of organization.
        token contact_type: ContactType = "ContactType" []
            => set_contact_type, with_contact_type, contact_type_value, set_contact_type_strict;
        /// Only meaningful when the contact type is not `PERSON`.
        scalar organization_name: String = "OrganizationName" [NAME]
            => set_organization_name, with_organization_name;
        scalar address_line1: String = "AddressLine1" [NAME] => set_address_line1, with_address_line1;
        scalar address_line2: String = "AddressLine2" [NAME] => set_address_line2, with_address_line2;
        scalar city: String = "City" [NAME] => set_city, with_city;
        scalar state: String = "State" [NAME] => set_state, with_state;
        token country_code: CountryCode = "CountryCode" []
            => set_country_code, with_country_code, country_code_value, set_country_code_strict;
        scalar zip_code: String = "ZipCode" [NAME] => set_zip_code, with_zip_code;
        /// Format `+[country dialing code].[number including any area code]`.
        scalar phone_number: String = "PhoneNumber" [PHONE] => set_phone_number, with_phone_number;
        scalar email: String = "Email" [EMAIL] => set_email, with_email;
        scalar fax: String = "Fax" [PHONE] => set_fax, with_fax;
        /// Registry-specific parameters required by some top-level domains.
        list extra_params: ExtraParam = "ExtraParams" []
            => set_extra_params, with_extra_params, append_extra_params, with_appended_extra_params;
    }
}

typed_record! {
    /// A name/value pair some registries require in addition to the standard contact fields.
    pub struct ExtraParam = "ExtraParam" {
        token name: ExtraParamName = "Name" [] => set_name, with_name, name_value, set_name_strict;
        scalar value: String = "Value" [Constraint::MaxLength(2048)] => set_value, with_value;
    }
}

impl ExtraParam {
    /// Builds a parameter from a registry name and its value.
    ///
    /// # Errors
    ///
    /// Returns `Error::Validation` when the value is longer than 2048 characters.
    pub fn new(name: ExtraParamName, value: impl Into<String>) -> route53domains_types::Result<Self> {
        Self::default().with_name(name)?.with_value(value)
    }
}
