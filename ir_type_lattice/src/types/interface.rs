//! Structural interface types and the method signatures they declare.
//!
//! An interface is built in two phases: an [`InterfaceBuilder`] collects
//! method signatures, then [`InterfaceBuilder::finish`] validates them and
//! publishes an immutable shared [`TypeRef`]. There is no way to add a method
//! to a published interface.

use std::fmt::Write as _;
use std::sync::Arc;

use super::error::TypeError;
use super::invariants::check_no_any;
use super::ir_type::{Type, TypeRef};

/// A named, typed parameter of a method signature.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Argument {
    name: String,
    ty: TypeRef,
}

impl Argument {
    pub fn new(name: impl Into<String>, ty: TypeRef) -> Self {
        Self {
            name: name.into(),
            ty,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn ty(&self) -> &TypeRef {
        &self.ty
    }
}

/// A method signature. The receiver is implicit and not listed in `arguments`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionSchema {
    name: String,
    arguments: Vec<Argument>,
    returns: Vec<TypeRef>,
}

impl FunctionSchema {
    pub fn new(name: impl Into<String>, arguments: Vec<Argument>, returns: Vec<TypeRef>) -> Self {
        Self {
            name: name.into(),
            arguments,
            returns,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn arguments(&self) -> &[Argument] {
        &self.arguments
    }

    pub fn returns(&self) -> &[TypeRef] {
        &self.returns
    }

    /// Standard method subtyping: arguments contravariant, returns covariant.
    ///
    /// Argument counts and names must match positionally; return counts must match.
    pub fn is_subtype_of(&self, other: &FunctionSchema, mut why_not: Option<&mut String>) -> bool {
        if self.arguments.len() != other.arguments.len() {
            if let Some(sink) = why_not.as_deref_mut() {
                let _ = writeln!(
                    sink,
                    "Method '{}' takes {} argument(s) but {} are expected.",
                    self.name,
                    self.arguments.len(),
                    other.arguments.len()
                );
            }
            return false;
        }
        for (mine, theirs) in self.arguments.iter().zip(other.arguments.iter()) {
            if mine.name != theirs.name {
                if let Some(sink) = why_not.as_deref_mut() {
                    let _ = writeln!(
                        sink,
                        "Argument '{}' of method '{}' is named '{}' in the expected signature.",
                        mine.name, self.name, theirs.name
                    );
                }
                return false;
            }
            if !theirs.ty.is_subtype_of_ext(&mine.ty, why_not.as_deref_mut()) {
                return false;
            }
        }
        if self.returns.len() != other.returns.len() {
            return false;
        }
        self.returns
            .iter()
            .zip(other.returns.iter())
            .all(|(mine, theirs)| mine.is_subtype_of_ext(theirs, why_not.as_deref_mut()))
    }
}

impl std::fmt::Display for FunctionSchema {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}(", self.name)?;
        for (i, arg) in self.arguments.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{} : {}", arg.name, arg.ty.annotation_str())?;
        }
        f.write_str(") -> ")?;
        match self.returns.as_slice() {
            [single] => write!(f, "{}", single.annotation_str()),
            returns => {
                let names: Vec<String> = returns.iter().map(|r| r.annotation_str()).collect();
                write!(f, "({})", names.join(", "))
            }
        }
    }
}

/// A published interface: a qualified name and its method signatures.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct InterfaceType {
    name: String,
    methods: Vec<FunctionSchema>,
}

impl InterfaceType {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn methods(&self) -> &[FunctionSchema] {
        &self.methods
    }

    pub fn method(&self, name: &str) -> Option<&FunctionSchema> {
        self.methods.iter().find(|m| m.name == name)
    }
}

/// Mutable definition phase of an interface.
#[derive(Debug, Clone)]
pub struct InterfaceBuilder {
    name: String,
    methods: Vec<FunctionSchema>,
}

impl InterfaceBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            methods: Vec::new(),
        }
    }

    pub fn add_method(&mut self, schema: FunctionSchema) -> &mut Self {
        self.methods.push(schema);
        self
    }

    pub fn method(mut self, schema: FunctionSchema) -> Self {
        self.methods.push(schema);
        self
    }

    /// Validate every method and publish the interface.
    pub fn finish(self) -> Result<TypeRef, TypeError> {
        for (i, schema) in self.methods.iter().enumerate() {
            if self.methods[..i].iter().any(|m| m.name == schema.name) {
                return Err(TypeError::duplicate_member(&self.name, &schema.name));
            }
            for arg in &schema.arguments {
                let member = format!("{}.{}", schema.name, arg.name);
                check_no_any(&self.name, "method argument", &member, &arg.ty)?;
            }
            for ret in &schema.returns {
                check_no_any(&self.name, "method return", &schema.name, ret)?;
            }
        }
        Ok(Arc::new(Type::Interface(InterfaceType {
            name: self.name,
            methods: self.methods,
        })))
    }
}
