//! Storage modes, property types and the capability matrix

use std::fmt;

/// Literal appended to the value set of optional storage modes
pub const NULL_LITERAL: &str = "NSNull.null";

/// How the collection under test is stored
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageMode {
    Unmanaged,
    OptionalUnmanaged,
    Managed,
    OptionalManaged,
}

impl StorageMode {
    /// All storage modes in table order
    pub const ALL: [StorageMode; 4] = [
        StorageMode::Unmanaged,
        StorageMode::OptionalUnmanaged,
        StorageMode::Managed,
        StorageMode::OptionalManaged,
    ];

    /// Name used as the object prefix in generated code
    pub fn name(self) -> &'static str {
        match self {
            StorageMode::Unmanaged => "unmanaged",
            StorageMode::OptionalUnmanaged => "optUnmanaged",
            StorageMode::Managed => "managed",
            StorageMode::OptionalManaged => "optManaged",
        }
    }

    pub fn is_optional(self) -> bool {
        matches!(
            self,
            StorageMode::OptionalUnmanaged | StorageMode::OptionalManaged
        )
    }

    pub fn is_managed(self) -> bool {
        matches!(self, StorageMode::Managed | StorageMode::OptionalManaged)
    }
}

impl fmt::Display for StorageMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Which aggregate operations are meaningful for a property type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Capabilities {
    pub min_max: bool,
    pub sum: bool,
    pub avg: bool,
}

impl Capabilities {
    pub const NONE: Capabilities = Capabilities {
        min_max: false,
        sum: false,
        avg: false,
    };

    pub const NUMERIC: Capabilities = Capabilities {
        min_max: true,
        sum: true,
        avg: true,
    };

    pub const MIN_MAX_ONLY: Capabilities = Capabilities {
        min_max: true,
        sum: false,
        avg: false,
    };
}

/// The element type of the collection under test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PropertyType {
    Bool,
    Int,
    Float,
    Double,
    String,
    Data,
    Date,
}

impl PropertyType {
    /// All property types in table order
    pub const ALL: [PropertyType; 7] = [
        PropertyType::Bool,
        PropertyType::Int,
        PropertyType::Float,
        PropertyType::Double,
        PropertyType::String,
        PropertyType::Data,
        PropertyType::Date,
    ];

    /// Declared type name, without optionality
    pub fn type_name(self) -> &'static str {
        match self {
            PropertyType::Bool => "bool",
            PropertyType::Int => "int",
            PropertyType::Float => "float",
            PropertyType::Double => "double",
            PropertyType::String => "string",
            PropertyType::Data => "data",
            PropertyType::Date => "date",
        }
    }

    /// Accessor name of the collection property on the test object
    pub fn property_name(self) -> &'static str {
        match self {
            PropertyType::Bool => "boolObj",
            PropertyType::Int => "intObj",
            PropertyType::Float => "floatObj",
            PropertyType::Double => "doubleObj",
            PropertyType::String => "stringObj",
            PropertyType::Data => "dataObj",
            PropertyType::Date => "dateObj",
        }
    }

    /// Two distinct representative literals, in ascending order
    pub fn literals(self) -> (&'static str, &'static str) {
        match self {
            PropertyType::Bool => ("@NO", "@YES"),
            PropertyType::Int => ("@2", "@3"),
            PropertyType::Float => ("@2.2f", "@3.3f"),
            PropertyType::Double => ("@2.2", "@3.3"),
            PropertyType::String => ("@\"a\"", "@\"b\""),
            PropertyType::Data => ("data(1)", "data(2)"),
            PropertyType::Date => ("date(1)", "date(2)"),
        }
    }

    pub fn capabilities(self) -> Capabilities {
        match self {
            PropertyType::Int | PropertyType::Float | PropertyType::Double => {
                Capabilities::NUMERIC
            }
            PropertyType::Date => Capabilities::MIN_MAX_ONLY,
            PropertyType::Bool | PropertyType::String | PropertyType::Data => Capabilities::NONE,
        }
    }
}

impl fmt::Display for PropertyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A value of the wrong type, used to probe type-mismatch errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Probe {
    /// Literal inserted into the collection
    pub value: &'static str,
    /// How the value appears in the expected error message
    pub description: &'static str,
    /// Runtime class name reported for the value
    pub runtime_type: &'static str,
}

impl Probe {
    pub const STRING: Probe = Probe {
        value: "@\"a\"",
        description: "a",
        runtime_type: "__NSCFConstantString",
    };

    pub const NUMBER: Probe = Probe {
        value: "@2",
        description: "2",
        runtime_type: "__NSCFNumber",
    };
}

impl Default for Probe {
    fn default() -> Self {
        Probe::STRING
    }
}
