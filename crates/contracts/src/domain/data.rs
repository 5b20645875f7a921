//! Fixed field lists of the related records nested inside a dog record.
//! They feed the dog detail selection; the derived properties of the
//! registry read from the same fields.

/// Litter fields of the dog detail selection
pub const LITTER_FIELDS: &[&str] = &["id", "name", "fullName", "date", "initials"];

/// Kennel fields of the dog detail selection
pub const KENNEL_FIELDS: &[&str] = &["id", "name", "fullName", "link"];

/// Owner fields of the dog detail selection
pub const PERSON_FIELDS: &[&str] = &[
    "id",
    "name",
    "fullName",
    "street",
    "country",
    "postCode",
    "city",
    "phoneNumbers",
    "emails",
];
