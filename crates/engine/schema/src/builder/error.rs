#[derive(thiserror::Error, Debug, PartialEq, Eq)]
pub enum BuildError {
    #[error("Type '{0}' is defined more than once")]
    DuplicateType(String),
    #[error("Field '{name}' is defined more than once on '{parent}'")]
    DuplicateField { parent: String, name: String },
    #[error("'{0}' is not a valid type reference")]
    InvalidTypeReference(String),
    #[error("At {location}, unknown type named '{name}'")]
    UnknownType { location: String, name: String },
    #[error("At {location}, '{name}' is an input object and cannot be used as an output type")]
    NotAnOutputType { location: String, name: String },
    #[error("At {location}, '{name}' is not an input type, only scalars, enums and input objects are")]
    NotAnInputType { location: String, name: String },
    #[error("'{name}' must define at least one field")]
    NoFields { name: String },
    #[error("'{object}' cannot implement '{name}', it is not an interface")]
    NotAnInterface { object: String, name: String },
    #[error("'{object}' implements '{interface}' but does not define its field '{field}'")]
    MissingInterfaceField {
        object: String,
        interface: String,
        field: String,
    },
    #[error("Union '{union}' can only contain object types, '{name}' is not one")]
    InvalidUnionMember { union: String, name: String },
    #[error("The {operation} root type '{name}' must be an object type")]
    InvalidRootType { operation: &'static str, name: String },
}
