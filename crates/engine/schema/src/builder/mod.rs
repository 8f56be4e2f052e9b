mod error;
mod types;

use std::collections::HashMap;

use async_graphql_parser::types::{BaseType, Type as ParsedType};
use wrapping::Wrapping;

pub use error::*;
pub use types::*;

use crate::{
    DefinitionId, EnumDefinitionRecord, EnumValueRecord, FieldDefinitionId, FieldDefinitionRecord,
    InputObjectDefinitionRecord, InputValueDefinitionId, InputValueDefinitionRecord, InterfaceDefinitionId,
    InterfaceDefinitionRecord, ObjectDefinitionId, ObjectDefinitionRecord, RootOperationTypes, ScalarDefinitionRecord,
    ScalarType, Schema, TypeRecord, UnionDefinitionRecord,
};

/// Programmatic schema construction. Types reference each other by name, all references are
/// resolved and checked by [`SchemaBuilder::build`].
pub struct SchemaBuilder {
    query: String,
    mutation: Option<String>,
    subscription: Option<String>,
    types: Vec<TypeBuilder>,
}

impl SchemaBuilder {
    pub fn new(query: impl Into<String>) -> Self {
        SchemaBuilder {
            query: query.into(),
            mutation: None,
            subscription: None,
            types: Vec::new(),
        }
    }

    #[must_use]
    pub fn mutation(mut self, name: impl Into<String>) -> Self {
        self.mutation = Some(name.into());
        self
    }

    #[must_use]
    pub fn subscription(mut self, name: impl Into<String>) -> Self {
        self.subscription = Some(name.into());
        self
    }

    #[must_use]
    pub fn register(mut self, ty: impl Into<TypeBuilder>) -> Self {
        self.types.push(ty.into());
        self
    }

    pub fn build(self) -> Result<Schema, BuildError> {
        let SchemaBuilder {
            query,
            mutation,
            subscription,
            mut types,
        } = self;

        // Built-in scalars unless overridden
        for (name, _) in ScalarType::BUILT_INS {
            if !types.iter().any(|ty| ty.name() == name) {
                types.push(Scalar::new(name).into());
            }
        }

        let definitions_by_name = assign_ids(&types)?;
        let mut ctx = BuildContext {
            definitions_by_name: &definitions_by_name,
            schema_fields: Vec::new(),
            input_values: Vec::new(),
        };

        let mut objects = Vec::new();
        let mut interfaces = Vec::new();
        let mut unions = Vec::new();
        let mut scalars = Vec::new();
        let mut enums = Vec::new();
        let mut input_objects = Vec::new();

        for ty in types {
            match ty {
                TypeBuilder::Object(object) => {
                    let id = ObjectDefinitionId::from(objects.len());
                    let interface_ids = object
                        .implements
                        .iter()
                        .map(|name| match definitions_by_name.get(name.as_str()) {
                            Some(DefinitionId::Interface(id)) => Ok(*id),
                            _ => Err(BuildError::NotAnInterface {
                                object: object.name.clone(),
                                name: name.clone(),
                            }),
                        })
                        .collect::<Result<Vec<_>, _>>()?;
                    let field_ids = ctx.ingest_fields(&object.name, DefinitionId::Object(id), object.fields)?;
                    objects.push(ObjectDefinitionRecord {
                        name: object.name,
                        description: object.description,
                        interface_ids,
                        field_ids,
                        is_type_of: object.is_type_of,
                    });
                }
                TypeBuilder::Interface(interface) => {
                    let id = InterfaceDefinitionId::from(interfaces.len());
                    let field_ids =
                        ctx.ingest_fields(&interface.name, DefinitionId::Interface(id), interface.fields)?;
                    interfaces.push(InterfaceDefinitionRecord {
                        name: interface.name,
                        description: interface.description,
                        field_ids,
                        possible_type_ids: Vec::new(),
                        resolve_type: interface.resolve_type,
                    });
                }
                TypeBuilder::Union(union) => {
                    let mut possible_type_ids = union
                        .possible_types
                        .iter()
                        .map(|name| match definitions_by_name.get(name.as_str()) {
                            Some(DefinitionId::Object(id)) => Ok(*id),
                            _ => Err(BuildError::InvalidUnionMember {
                                union: union.name.clone(),
                                name: name.clone(),
                            }),
                        })
                        .collect::<Result<Vec<_>, _>>()?;
                    possible_type_ids.sort_unstable();
                    possible_type_ids.dedup();
                    unions.push(UnionDefinitionRecord {
                        name: union.name,
                        description: union.description,
                        possible_type_ids,
                        resolve_type: union.resolve_type,
                    });
                }
                TypeBuilder::Scalar(scalar) => scalars.push(ScalarDefinitionRecord {
                    ty: ScalarType::from_name(&scalar.name),
                    name: scalar.name,
                    description: scalar.description,
                    serialize: scalar.serialize,
                    parse_value: scalar.parse_value,
                }),
                TypeBuilder::Enum(r#enum) => enums.push(EnumDefinitionRecord {
                    name: r#enum.name,
                    description: r#enum.description,
                    values: r#enum
                        .values
                        .into_iter()
                        .map(|(name, deprecation_reason)| EnumValueRecord {
                            name,
                            description: None,
                            deprecation_reason,
                        })
                        .collect(),
                }),
                TypeBuilder::InputObject(input_object) => {
                    let input_field_ids = ctx.ingest_input_values(&input_object.name, input_object.fields)?;
                    input_objects.push(InputObjectDefinitionRecord {
                        name: input_object.name,
                        description: input_object.description,
                        input_field_ids,
                    });
                }
            }
        }

        for (index, object) in objects.iter().enumerate() {
            for interface_id in &object.interface_ids {
                interfaces[usize::from(*interface_id)]
                    .possible_type_ids
                    .push(ObjectDefinitionId::from(index));
            }
        }

        let BuildContext {
            schema_fields,
            input_values,
            ..
        } = ctx;

        let root_operation_types = RootOperationTypes {
            query_id: root_object(&definitions_by_name, "query", &query)?,
            mutation_id: mutation
                .map(|name| root_object(&definitions_by_name, "mutation", &name))
                .transpose()?,
            subscription_id: subscription
                .map(|name| root_object(&definitions_by_name, "subscription", &name))
                .transpose()?,
        };

        let schema = Schema {
            objects,
            interfaces,
            unions,
            scalars,
            enums,
            input_objects,
            fields: schema_fields,
            input_values,
            definitions_by_name,
            root_operation_types,
        };

        validate_interface_implementations(&schema)?;

        tracing::debug!(
            objects = schema.objects.len(),
            interfaces = schema.interfaces.len(),
            unions = schema.unions.len(),
            fields = schema.fields.len(),
            "Built schema"
        );

        Ok(schema)
    }
}

fn assign_ids(types: &[TypeBuilder]) -> Result<HashMap<String, DefinitionId>, BuildError> {
    let mut definitions_by_name = HashMap::with_capacity(types.len());
    let mut counters = [0usize; 6];

    for ty in types {
        let (counter, id) = match ty {
            TypeBuilder::Object(_) => (0, DefinitionId::Object(counters[0].into())),
            TypeBuilder::Interface(_) => (1, DefinitionId::Interface(counters[1].into())),
            TypeBuilder::Union(_) => (2, DefinitionId::Union(counters[2].into())),
            TypeBuilder::Scalar(_) => (3, DefinitionId::Scalar(counters[3].into())),
            TypeBuilder::Enum(_) => (4, DefinitionId::Enum(counters[4].into())),
            TypeBuilder::InputObject(_) => (5, DefinitionId::InputObject(counters[5].into())),
        };
        counters[counter] += 1;

        if definitions_by_name.insert(ty.name().to_string(), id).is_some() {
            return Err(BuildError::DuplicateType(ty.name().to_string()));
        }
    }

    Ok(definitions_by_name)
}

fn root_object(
    definitions_by_name: &HashMap<String, DefinitionId>,
    operation: &'static str,
    name: &str,
) -> Result<ObjectDefinitionId, BuildError> {
    match definitions_by_name.get(name) {
        Some(DefinitionId::Object(id)) => Ok(*id),
        _ => Err(BuildError::InvalidRootType {
            operation,
            name: name.to_string(),
        }),
    }
}

fn validate_interface_implementations(schema: &Schema) -> Result<(), BuildError> {
    for index in 0..schema.objects.len() {
        let object = schema.walk(ObjectDefinitionId::from(index));
        for interface in object.interfaces() {
            for field in interface.fields() {
                if object.find_field_by_name(field.name()).is_none() {
                    return Err(BuildError::MissingInterfaceField {
                        object: object.name().to_string(),
                        interface: interface.name().to_string(),
                        field: field.name().to_string(),
                    });
                }
            }
        }
    }
    Ok(())
}

struct BuildContext<'a> {
    definitions_by_name: &'a HashMap<String, DefinitionId>,
    schema_fields: Vec<FieldDefinitionRecord>,
    input_values: Vec<InputValueDefinitionRecord>,
}

impl BuildContext<'_> {
    fn ingest_fields(
        &mut self,
        parent: &str,
        parent_id: DefinitionId,
        fields: Vec<Field>,
    ) -> Result<Vec<FieldDefinitionId>, BuildError> {
        if fields.is_empty() {
            return Err(BuildError::NoFields {
                name: parent.to_string(),
            });
        }

        let mut ids = Vec::with_capacity(fields.len());
        for (i, field) in fields.iter().enumerate() {
            if fields[..i].iter().any(|other| other.name == field.name) {
                return Err(BuildError::DuplicateField {
                    parent: parent.to_string(),
                    name: field.name.clone(),
                });
            }
        }

        for field in fields {
            let location = format!("{parent}.{}", field.name);
            let ty_record = self.type_record(&location, &field.ty)?;
            if matches!(ty_record.definition_id, DefinitionId::InputObject(_)) {
                return Err(BuildError::NotAnOutputType {
                    location,
                    name: named_type(&field.ty).to_string(),
                });
            }
            let argument_ids = self.ingest_input_values(&location, field.arguments)?;

            let id = FieldDefinitionId::from(self.schema_fields.len());
            self.schema_fields.push(FieldDefinitionRecord {
                name: field.name,
                description: field.description,
                parent_id,
                ty_record,
                argument_ids,
                resolver: field.resolver,
                deprecation_reason: field.deprecation_reason,
            });
            ids.push(id);
        }

        Ok(ids)
    }

    fn ingest_input_values(
        &mut self,
        parent: &str,
        input_values: Vec<InputValue>,
    ) -> Result<Vec<InputValueDefinitionId>, BuildError> {
        let mut ids = Vec::with_capacity(input_values.len());
        for input_value in input_values {
            let location = format!("{parent}.{}", input_value.name);
            let ty_record = self.type_record(&location, &input_value.ty)?;
            if !matches!(
                ty_record.definition_id,
                DefinitionId::Scalar(_) | DefinitionId::Enum(_) | DefinitionId::InputObject(_)
            ) {
                return Err(BuildError::NotAnInputType {
                    location,
                    name: named_type(&input_value.ty).to_string(),
                });
            }

            let id = InputValueDefinitionId::from(self.input_values.len());
            self.input_values.push(InputValueDefinitionRecord {
                name: input_value.name,
                description: input_value.description,
                ty_record,
                default_value: input_value.default_value,
            });
            ids.push(id);
        }
        Ok(ids)
    }

    fn type_record(&self, location: &str, ty: &str) -> Result<TypeRecord, BuildError> {
        let parsed = ParsedType::new(ty).ok_or_else(|| BuildError::InvalidTypeReference(ty.to_string()))?;
        let (name, wrapping) = unwrap_parsed_type(&parsed);
        let definition_id = self
            .definitions_by_name
            .get(name)
            .copied()
            .ok_or_else(|| BuildError::UnknownType {
                location: location.to_string(),
                name: name.to_string(),
            })?;
        Ok(TypeRecord {
            definition_id,
            wrapping,
        })
    }
}

fn unwrap_parsed_type(ty: &ParsedType) -> (&str, Wrapping) {
    match &ty.base {
        BaseType::Named(name) => (name.as_str(), Wrapping::new(!ty.nullable)),
        BaseType::List(item) => {
            let (name, wrapping) = unwrap_parsed_type(item);
            let wrapping = if ty.nullable {
                wrapping.wrap_list()
            } else {
                wrapping.wrap_list_non_null()
            };
            (name, wrapping)
        }
    }
}

fn named_type(ty: &str) -> &str {
    ty.trim_matches(|c: char| c == '[' || c == ']' || c == '!' || c.is_whitespace())
}
