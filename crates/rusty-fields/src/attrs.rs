// File: rusty-fields/src/attrs.rs
// Purpose: Enumerated HTML attribute values accepted by field components

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// `type` of an `<input>`
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InputType {
    #[default]
    Text,
    Email,
    Number,
    Tel,
    Search,
    Password,
    Url,
}

impl InputType {
    pub fn as_str(self) -> &'static str {
        self.into()
    }

    /// Whether the character counter can read this input's value.
    ///
    /// Number inputs hold numeric values, which have no character length.
    pub fn counts_characters(self) -> bool {
        !matches!(self, InputType::Number)
    }
}

/// `inputmode` hint for virtual keyboards
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum InputMode {
    None,
    #[default]
    Text,
    Decimal,
    Numeric,
    Tel,
    Search,
    Email,
    Url,
}

impl InputMode {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}

/// Standard `autocomplete` tokens
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    IntoStaticStr,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum AutoComplete {
    On,
    Name,
    HonorificPrefix,
    HonorificSuffix,
    GivenName,
    AdditionalName,
    FamilyName,
    Nickname,
    Email,
    Username,
    NewPassword,
    CurrentPassword,
    OneTimeCode,
    Organization,
    OrganizationTitle,
    StreetAddress,
    #[strum(to_string = "address-line1")]
    #[serde(rename = "address-line1")]
    AddressLine1,
    #[strum(to_string = "address-line2")]
    #[serde(rename = "address-line2")]
    AddressLine2,
    #[strum(to_string = "address-line3")]
    #[serde(rename = "address-line3")]
    AddressLine3,
    #[strum(to_string = "address-level1")]
    #[serde(rename = "address-level1")]
    AddressLevel1,
    #[strum(to_string = "address-level2")]
    #[serde(rename = "address-level2")]
    AddressLevel2,
    #[strum(to_string = "address-level3")]
    #[serde(rename = "address-level3")]
    AddressLevel3,
    #[strum(to_string = "address-level4")]
    #[serde(rename = "address-level4")]
    AddressLevel4,
    Country,
    CountryName,
    PostalCode,
    CcName,
    CcGivenName,
    CcAdditionalName,
    CcFamilyName,
    CcNumber,
    CcExp,
    CcExpMonth,
    CcExpYear,
    CcCsc,
    CcType,
    TransactionCurrency,
    TransactionAmount,
    Language,
    Bday,
    BdayDay,
    BdayMonth,
    BdayYear,
    Sex,
    Tel,
    TelCountryCode,
    TelNational,
    TelAreaCode,
    TelLocal,
    TelExtension,
    Impp,
    Url,
    Photo,
}

impl AutoComplete {
    pub fn as_str(self) -> &'static str {
        self.into()
    }
}
