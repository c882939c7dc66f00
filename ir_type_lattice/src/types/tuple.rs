//! Tuple types, plain and named.

use super::error::TypeError;
use super::invariants::check_no_any;
use super::ir_type::TypeRef;

/// Field-name schema of a named tuple.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TupleSchema {
    name: Option<String>,
    field_names: Vec<String>,
}

impl TupleSchema {
    /// Qualified name, when the named tuple was declared with one.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn field_names(&self) -> &[String] {
        &self.field_names
    }
}

/// An ordered sequence of element types, optionally carrying a schema.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TupleType {
    elements: Vec<TypeRef>,
    schema: Option<TupleSchema>,
}

impl TupleType {
    pub fn new(elements: Vec<TypeRef>) -> Self {
        Self {
            elements,
            schema: None,
        }
    }

    /// Build a named tuple from `(field name, field type)` pairs.
    ///
    /// Rejects fields whose type contains `Any` and repeated field names.
    pub fn named(
        name: Option<String>,
        fields: Vec<(String, TypeRef)>,
    ) -> Result<Self, TypeError> {
        let container = name.clone().unwrap_or_else(|| "NamedTuple".to_string());
        let mut field_names = Vec::with_capacity(fields.len());
        let mut elements = Vec::with_capacity(fields.len());
        for (field, ty) in fields {
            check_no_any(&container, "attribute", &field, &ty)?;
            if field_names.contains(&field) {
                return Err(TypeError::duplicate_member(container, field));
            }
            field_names.push(field);
            elements.push(ty);
        }
        Ok(Self {
            elements,
            schema: Some(TupleSchema { name, field_names }),
        })
    }

    pub fn elements(&self) -> &[TypeRef] {
        &self.elements
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn schema(&self) -> Option<&TupleSchema> {
        self.schema.as_ref()
    }

    pub fn is_named(&self) -> bool {
        self.schema.is_some()
    }

    pub fn name(&self) -> Option<&str> {
        self.schema.as_ref().and_then(TupleSchema::name)
    }

    pub fn field_names(&self) -> Option<&[String]> {
        self.schema.as_ref().map(TupleSchema::field_names)
    }

    /// Type of the field called `field`, for named tuples.
    pub fn field(&self, field: &str) -> Option<&TypeRef> {
        let index = self.field_names()?.iter().position(|f| f == field)?;
        self.elements.get(index)
    }

    /// Same schema, new elements. Callers keep the arity unchanged.
    ///
    /// Named tuples run the same `Any` check as [`TupleType::named`].
    pub(crate) fn with_elements(&self, elements: Vec<TypeRef>) -> Result<Self, TypeError> {
        debug_assert_eq!(elements.len(), self.elements.len());
        if let Some(schema) = &self.schema {
            let container = schema.name().unwrap_or("NamedTuple");
            for (field, ty) in schema.field_names.iter().zip(elements.iter()) {
                check_no_any(container, "attribute", field, ty)?;
            }
        }
        Ok(Self {
            elements,
            schema: self.schema.clone(),
        })
    }
}
