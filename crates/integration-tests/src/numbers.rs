//! A shared number changed by mutations, either right away or after yielding to the runtime.

use std::{
    any::Any,
    sync::{Arc, Mutex},
};

use engine::schema::{
    Arguments, Field, FieldError, FieldFuture, FieldResult, FieldValue, InputValue, Object, ObjectValue,
    ResolverContext, Schema,
};

#[derive(Clone)]
pub struct Root {
    number: Arc<Mutex<i64>>,
}

impl Root {
    pub fn new(original_number: i64) -> Self {
        Root {
            number: Arc::new(Mutex::new(original_number)),
        }
    }

    pub fn the_number(&self) -> i64 {
        *self.number.lock().unwrap()
    }

    fn number_holder(&self) -> FieldValue {
        FieldValue::object(NumberHolder(self.number.clone()))
    }

    fn change_the_number(&self, new_number: i64) -> FieldValue {
        *self.number.lock().unwrap() = new_number;
        self.number_holder()
    }
}

impl ObjectValue for Root {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Reads the number when `theNumber` is resolved, not when the holder is returned.
struct NumberHolder(Arc<Mutex<i64>>);

impl ObjectValue for NumberHolder {
    fn property(&self, name: &str, _args: &Arguments) -> Option<FieldResult> {
        (name == "theNumber").then(|| Ok(FieldValue::value(*self.0.lock().unwrap())))
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

pub fn schema() -> Schema {
    let query = Object::new("Query").field(Field::new("numberHolder", "NumberHolder").resolve(|ctx| {
        FieldFuture::ready(root(&ctx).map(Root::number_holder))
    }));
    let mutation = mutation_fields(Object::new("Mutation")).field(
        Field::new("subField", "subFieldMutation").resolve(|ctx| FieldFuture::from_value(ctx.parent_value.clone())),
    );

    Schema::builder("Query")
        .mutation("Mutation")
        .register(query)
        .register(mutation)
        .register(mutation_fields(Object::new("subFieldMutation")))
        .register(Object::new("NumberHolder").field(Field::new("theNumber", "Int")))
        .build()
        .unwrap()
}

fn mutation_fields(object: Object) -> Object {
    let field = |name: &str| Field::new(name, "NumberHolder").argument(InputValue::new("newNumber", "Int"));

    object
        .field(field("immediatelyChangeTheNumber").resolve(immediately_change_the_number))
        .field(field("promiseToChangeTheNumber").resolve(promise_to_change_the_number))
        .field(field("failToChangeTheNumber").resolve(fail_to_change_the_number))
        .field(field("promiseAndFailToChangeTheNumber").resolve(promise_and_fail_to_change_the_number))
}

fn root<'a>(ctx: &ResolverContext<'a>) -> FieldResult<&'a Root> {
    ctx.parent::<Root>().ok_or_else(|| FieldError::new("Missing root value"))
}

fn change_the_number(ctx: &ResolverContext<'_>) -> FieldResult {
    let new_number = ctx.args.i64("newNumber").unwrap_or_default();
    Ok(root(ctx)?.change_the_number(new_number))
}

fn immediately_change_the_number(ctx: ResolverContext<'_>) -> FieldFuture<'_> {
    FieldFuture::ready(change_the_number(&ctx))
}

fn promise_to_change_the_number(ctx: ResolverContext<'_>) -> FieldFuture<'_> {
    FieldFuture::new(async move {
        tokio::task::yield_now().await;
        change_the_number(&ctx)
    })
}

fn fail_to_change_the_number(_ctx: ResolverContext<'_>) -> FieldFuture<'_> {
    FieldFuture::err(FieldError::new("Cannot change the number"))
}

fn promise_and_fail_to_change_the_number(_ctx: ResolverContext<'_>) -> FieldFuture<'_> {
    FieldFuture::new(async move {
        tokio::task::yield_now().await;
        FieldResult::<FieldValue>::Err(FieldError::new("Cannot change the number"))
    })
}
