//! Donor entity and related types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::validation::{
    validate_donor_age, validate_donor_name, validate_donor_phone, DonorValidationError,
};
use crate::domain::DomainError;

/// The closed set of admissible ABO/Rh blood group codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum BloodGroup {
    APositive,
    ANegative,
    BPositive,
    BNegative,
    AbPositive,
    AbNegative,
    OPositive,
    ONegative,
}

impl BloodGroup {
    /// All blood groups, in enumeration order
    pub const ALL: [BloodGroup; 8] = [
        Self::APositive,
        Self::ANegative,
        Self::BPositive,
        Self::BNegative,
        Self::AbPositive,
        Self::AbNegative,
        Self::OPositive,
        Self::ONegative,
    ];

    /// The wire code for this group ("A+", "O-", ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::APositive => "A+",
            Self::ANegative => "A-",
            Self::BPositive => "B+",
            Self::BNegative => "B-",
            Self::AbPositive => "AB+",
            Self::AbNegative => "AB-",
            Self::OPositive => "O+",
            Self::ONegative => "O-",
        }
    }
}

impl std::str::FromStr for BloodGroup {
    type Err = DonorValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A+" => Ok(Self::APositive),
            "A-" => Ok(Self::ANegative),
            "B+" => Ok(Self::BPositive),
            "B-" => Ok(Self::BNegative),
            "AB+" => Ok(Self::AbPositive),
            "AB-" => Ok(Self::AbNegative),
            "O+" => Ok(Self::OPositive),
            "O-" => Ok(Self::ONegative),
            other => Err(DonorValidationError::UnknownBloodGroup(other.to_string())),
        }
    }
}

impl TryFrom<String> for BloodGroup {
    type Error = DonorValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<BloodGroup> for String {
    fn from(group: BloodGroup) -> Self {
        group.as_str().to_string()
    }
}

impl std::fmt::Display for BloodGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Filter over the donor collection: a single group, or no filter at all
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BloodGroupFilter {
    /// The "all" sentinel - no filtering
    #[default]
    All,
    /// Only donors with the given group
    Group(BloodGroup),
}

impl std::str::FromStr for BloodGroupFilter {
    type Err = DonorValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || s == "all" {
            return Ok(Self::All);
        }

        s.parse().map(Self::Group)
    }
}

impl std::fmt::Display for BloodGroupFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Group(group) => write!(f, "{}", group),
        }
    }
}

/// Donor identifier - opaque string assigned by the store at creation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct DonorId(String);

impl DonorId {
    /// Create a new DonorId, rejecting empty values
    pub fn new(id: impl Into<String>) -> Result<Self, DomainError> {
        let id = id.into();

        if id.trim().is_empty() {
            return Err(DomainError::invalid_id("Donor ID cannot be empty"));
        }

        Ok(Self(id))
    }

    /// Get the inner string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for DonorId {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DonorId> for String {
    fn from(id: DonorId) -> Self {
        id.0
    }
}

impl std::fmt::Display for DonorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Fields for a donor registration - everything except the store-assigned
/// id and creation timestamp; the validating constructor is the only way
/// to build one
#[derive(Debug, Clone, PartialEq)]
pub struct NewDonor {
    name: String,
    age: u8,
    blood_group: BloodGroup,
    phone: String,
}

impl NewDonor {
    /// Create a validated registration; name and phone are trimmed
    pub fn new(
        name: impl Into<String>,
        age: u8,
        blood_group: BloodGroup,
        phone: impl Into<String>,
    ) -> Result<Self, DonorValidationError> {
        let name = name.into();
        let phone = phone.into();

        validate_donor_name(&name)?;
        validate_donor_age(age)?;
        validate_donor_phone(&phone)?;

        Ok(Self {
            name: name.trim().to_string(),
            age,
            blood_group,
            phone: phone.trim().to_string(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u8 {
        self.age
    }

    pub fn blood_group(&self) -> BloodGroup {
        self.blood_group
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }
}

/// Partial field set for an update; absent fields keep their stored value
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DonorUpdate {
    pub name: Option<String>,
    pub age: Option<u8>,
    pub blood_group: Option<BloodGroup>,
    pub phone: Option<String>,
}

impl DonorUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_age(mut self, age: u8) -> Self {
        self.age = Some(age);
        self
    }

    pub fn with_blood_group(mut self, blood_group: BloodGroup) -> Self {
        self.blood_group = Some(blood_group);
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    /// True when no field is being changed
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.age.is_none()
            && self.blood_group.is_none()
            && self.phone.is_none()
    }

    /// Validate and normalize the fields that are present
    pub fn validate(mut self) -> Result<Self, DonorValidationError> {
        if let Some(ref name) = self.name {
            validate_donor_name(name)?;
            self.name = Some(name.trim().to_string());
        }

        if let Some(age) = self.age {
            validate_donor_age(age)?;
        }

        if let Some(ref phone) = self.phone {
            validate_donor_phone(phone)?;
            self.phone = Some(phone.trim().to_string());
        }

        Ok(self)
    }
}

/// Donor entity
///
/// The id and creation timestamp are immutable after creation; every other
/// field is freely mutable via update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donor {
    /// Unique identifier assigned by the store
    id: DonorId,
    /// Full name
    name: String,
    /// Age in years, 18-65 at input time
    age: u8,
    /// ABO/Rh blood group
    blood_group: BloodGroup,
    /// Contact phone number
    phone: String,
    /// Creation timestamp assigned by the store
    created_at: DateTime<Utc>,
}

impl Donor {
    /// Assemble a donor from store-assigned identity plus registration fields
    pub fn new(id: DonorId, fields: NewDonor, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: fields.name,
            age: fields.age,
            blood_group: fields.blood_group,
            phone: fields.phone,
            created_at,
        }
    }

    /// Hydrate a donor from a stored row
    ///
    /// Fields are validated at input time only; stored rows are taken as-is.
    pub fn from_stored(
        id: DonorId,
        name: String,
        age: u8,
        blood_group: BloodGroup,
        phone: String,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            age,
            blood_group,
            phone,
            created_at,
        }
    }

    // Getters

    pub fn id(&self) -> &DonorId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn age(&self) -> u8 {
        self.age
    }

    pub fn blood_group(&self) -> BloodGroup {
        self.blood_group
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Apply a partial update, leaving absent fields untouched
    pub fn apply_update(&mut self, update: DonorUpdate) {
        if let Some(name) = update.name {
            self.name = name;
        }

        if let Some(age) = update.age {
            self.age = age;
        }

        if let Some(blood_group) = update.blood_group {
            self.blood_group = blood_group;
        }

        if let Some(phone) = update.phone {
            self.phone = phone;
        }
    }
}
