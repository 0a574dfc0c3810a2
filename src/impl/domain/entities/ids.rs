#[derive(Debug, PartialEq, Eq, Hash, Clone, PartialOrd, Ord)]
pub struct PropertyId(pub(crate) String);

#[derive(Debug, PartialEq, Eq, Hash, Clone, PartialOrd, Ord)]
pub struct OwnerId(pub(crate) String);

#[derive(Debug, PartialEq, Eq, Hash, Clone, PartialOrd, Ord)]
pub struct UnitId(pub(crate) String);

#[derive(Debug, PartialEq, Eq, Hash, Clone, PartialOrd, Ord)]
pub struct UnitTypeId(pub(crate) String);

#[derive(Debug, PartialEq, Eq, Hash, Clone, PartialOrd, Ord)]
pub struct CategoryId(pub(crate) String);

// Shorthand constructors.

pub fn property_id(id: impl Into<String>) -> PropertyId {
    PropertyId(id.into())
}

pub fn owner_id(id: impl Into<String>) -> OwnerId {
    OwnerId(id.into())
}

pub fn unit_id(id: impl Into<String>) -> UnitId {
    UnitId(id.into())
}

pub fn unit_type_id(id: impl Into<String>) -> UnitTypeId {
    UnitTypeId(id.into())
}

pub fn category_id(id: impl Into<String>) -> CategoryId {
    CategoryId(id.into())
}

// Display for error messages and report headers.

macro_rules! impl_id_display {
    ($typ:ty) => {
        impl std::fmt::Display for $typ {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl $typ {
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }
    };
}

impl_id_display!(PropertyId);
impl_id_display!(OwnerId);
impl_id_display!(UnitId);
impl_id_display!(UnitTypeId);
impl_id_display!(CategoryId);
