//! Form input values: `autocomplete` tokens and `pattern` expressions

use super::attribute::AttributeConvertible;
use regex::Regex;
use std::borrow::Cow;

/// The value of an input element's `autocomplete` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Autocomplete(Cow<'static, str>);

macro_rules! autocomplete_tokens {
    ($($(#[$doc:meta])* $name:ident => $token:literal;)*) => {
        impl Autocomplete {
            $(
                $(#[$doc])*
                pub const $name: Self = Self(Cow::Borrowed($token));
            )*
        }
    };
}

autocomplete_tokens! {
    /// Autocomplete is enabled. The browser default.
    ON => "on";
    /// Autocomplete is disabled.
    OFF => "off";
    ADDRESS_LINE1 => "address-line1";
    ADDRESS_LINE2 => "address-line2";
    ADDRESS_LINE3 => "address-line3";
    /// The first administrative level of an address, e.g. the county.
    ADDRESS_LEVEL1 => "address-level1";
    /// The second administrative level of an address, e.g. the city.
    ADDRESS_LEVEL2 => "address-level2";
    ADDRESS_LEVEL3 => "address-level3";
    ADDRESS_LEVEL4 => "address-level4";
    STREET_ADDRESS => "street-address";
    /// A country code.
    COUNTRY => "country";
    COUNTRY_NAME => "country-name";
    POSTAL_CODE => "postal-code";
    /// A full name.
    NAME => "name";
    /// A middle name.
    ADDITIONAL_NAME => "additional-name";
    /// A last name.
    FAMILY_NAME => "family-name";
    /// A first name.
    GIVEN_NAME => "given-name";
    /// A title such as "Mr" or "Ms".
    HONORIFIC_PREFIX => "honorific-prefix";
    /// A suffix such as "Jr.".
    HONORIFIC_SUFFIX => "honorific-suffix";
    NICKNAME => "nickname";
    /// A job title.
    ORGANIZATION_TITLE => "organization-title";
    USERNAME => "username";
    NEW_PASSWORD => "new-password";
    CURRENT_PASSWORD => "current-password";
    BDAY => "bday";
    BDAY_DAY => "bday-day";
    BDAY_MONTH => "bday-month";
    BDAY_YEAR => "bday-year";
    SEX => "sex";
    /// A one-time verification code.
    ONE_TIME_CODE => "one-time-code";
    /// A company name.
    ORGANIZATION => "organization";
    CC_NAME => "cc-name";
    CC_GIVEN_NAME => "cc-given-name";
    CC_ADDITIONAL_NAME => "cc-additional-name";
    CC_FAMILY_NAME => "cc-family-name";
    CC_NUMBER => "cc-number";
    CC_EXP => "cc-exp";
    CC_EXP_MONTH => "cc-exp-month";
    CC_EXP_YEAR => "cc-exp-year";
    /// The card security code.
    CC_CSC => "cc-csc";
    CC_TYPE => "cc-type";
    TRANSACTION_CURRENCY => "transaction-currency";
    TRANSACTION_AMOUNT => "transaction-amount";
    /// The preferred language.
    LANGUAGE => "language";
    URL => "url";
    EMAIL => "email";
    PHOTO => "photo";
    /// A full phone number.
    TEL => "tel";
    TEL_COUNTRY_CODE => "tel-country-code";
    TEL_NATIONAL => "tel-national";
    TEL_AREA_CODE => "tel-area-code";
    TEL_LOCAL => "tel-local";
    TEL_LOCAL_PREFIX => "tel-local-prefix";
    TEL_LOCAL_SUFFIX => "tel-local-suffix";
    TEL_EXTENSION => "tel-extension";
    /// An instant messaging protocol endpoint URL.
    IMPP => "impp";
}

impl Autocomplete {
    pub fn new(value: impl Into<String>) -> Self {
        Self(Cow::Owned(value.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AttributeConvertible for Autocomplete {
    const ATTRIBUTE_NAME: &'static str = "autocomplete";

    fn value(&self) -> String {
        self.0.to_string()
    }
}

/// A regular expression for an input element's `pattern` attribute.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InputPattern(Cow<'static, str>);

impl InputPattern {
    /// Matches lowercase email addresses.
    pub const EMAIL: Self = Self(Cow::Borrowed(r"[a-z0-9._%+\-]+@[a-z0-9.\-]+\.[a-z]{2,}$"));

    pub fn new(pattern: impl Into<String>) -> Self {
        Self(Cow::Owned(pattern.into()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Compile the pattern the way browsers apply it: against the whole value.
    pub fn regex(&self) -> Result<Regex, regex::Error> {
        Regex::new(&format!("^(?:{})$", self.0))
    }

    pub fn is_match(&self, input: &str) -> Result<bool, regex::Error> {
        Ok(self.regex()?.is_match(input))
    }
}

impl AttributeConvertible for InputPattern {
    const ATTRIBUTE_NAME: &'static str = "pattern";

    fn value(&self) -> String {
        self.0.to_string()
    }
}
