//! Dogs and cats behind a `Pet` interface and a `CatOrDog` union, with each way of resolving the
//! concrete type of an abstract value.

use std::any::Any;

use engine::schema::{
    Arguments, Field, FieldFuture, FieldResult, FieldValue, Interface, Object, ObjectValue, Schema, Union,
};

pub struct Dog {
    pub name: &'static str,
    pub barks: bool,
}

pub struct Cat {
    pub name: &'static str,
    pub meows: bool,
}

/// Neither a dog nor a cat, returned to check runtime type checks.
pub struct Human {
    pub name: &'static str,
}

impl ObjectValue for Dog {
    fn property(&self, name: &str, _args: &Arguments) -> Option<FieldResult> {
        match name {
            "name" => Some(Ok(FieldValue::value(self.name))),
            "barks" => Some(Ok(FieldValue::value(self.barks))),
            _ => None,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl ObjectValue for Cat {
    fn property(&self, name: &str, _args: &Arguments) -> Option<FieldResult> {
        match name {
            "name" => Some(Ok(FieldValue::value(self.name))),
            "meows" => Some(Ok(FieldValue::value(self.meows))),
            _ => None,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

impl ObjectValue for Human {
    fn property(&self, name: &str, _args: &Arguments) -> Option<FieldResult> {
        (name == "name").then(|| Ok(FieldValue::value(self.name)))
    }

    fn type_name(&self) -> Option<&str> {
        Some("Human")
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// How the concrete type of a pet is determined.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeResolution {
    /// Values are annotated with their type.
    Annotated,
    /// Each object type checks the value with `is_type_of`.
    IsTypeOf,
    /// The interface and the union resolve the type.
    ResolveType,
}

fn type_name(value: &FieldValue) -> Option<String> {
    if value.downcast_ref::<Dog>().is_some() {
        Some("Dog".to_string())
    } else if value.downcast_ref::<Cat>().is_some() {
        Some("Cat".to_string())
    } else if value.downcast_ref::<Human>().is_some() {
        Some("Human".to_string())
    } else {
        None
    }
}

pub fn pets(resolution: TypeResolution) -> FieldValue {
    let dog = FieldValue::object(Dog {
        name: "Odie",
        barks: true,
    });
    let cat = FieldValue::object(Cat {
        name: "Garfield",
        meows: false,
    });
    match resolution {
        TypeResolution::Annotated => FieldValue::list([dog.with_type("Dog"), cat.with_type("Cat")]),
        TypeResolution::IsTypeOf | TypeResolution::ResolveType => FieldValue::list([dog, cat]),
    }
}

pub fn schema(resolution: TypeResolution) -> Schema {
    schema_with_pets(resolution, move || pets(resolution))
}

/// Same schema with `pets` and `catOrDog` both returning `values()`.
pub fn schema_with_pets<F>(resolution: TypeResolution, values: F) -> Schema
where
    F: Fn() -> FieldValue + Clone + Send + Sync + 'static,
{
    let mut pet = Interface::new("Pet").field(Field::new("name", "String"));
    let mut cat_or_dog = Union::new("CatOrDog").possible_type("Dog").possible_type("Cat");
    let mut dog = Object::new("Dog")
        .implements("Pet")
        .field(Field::new("name", "String"))
        .field(Field::new("barks", "Boolean"));
    let mut cat = Object::new("Cat")
        .implements("Pet")
        .field(Field::new("name", "String"))
        .field(Field::new("meows", "Boolean"));

    match resolution {
        TypeResolution::Annotated => {}
        TypeResolution::IsTypeOf => {
            dog = dog.is_type_of(|value, _, _| value.downcast_ref::<Dog>().is_some());
            cat = cat.is_type_of(|value, _, _| value.downcast_ref::<Cat>().is_some());
        }
        TypeResolution::ResolveType => {
            pet = pet.resolve_type(|value, _, _| type_name(value));
            cat_or_dog = cat_or_dog.resolve_type(|value, _, _| type_name(value));
        }
    }

    let pets = values.clone();
    let query = Object::new("Query")
        .field(Field::new("pets", "[Pet]").resolve(move |_| FieldFuture::from_value(pets())))
        .field(Field::new("catOrDog", "[CatOrDog]").resolve(move |_| FieldFuture::from_value(values())));

    Schema::builder("Query")
        .register(query)
        .register(pet)
        .register(cat_or_dog)
        .register(dog)
        .register(cat)
        .register(Object::new("Human").field(Field::new("name", "String")))
        .build()
        .unwrap()
}
