//! Textual forms of a type.
//!
//! `Display` gives the short form used in IR dumps (`Float(2, 3)`, `int[]`,
//! `int?`). [`Type::annotation_str`] gives the fully spelled-out form used
//! in diagnostics (`List[Int]`, `Optional[Tensor]`).

use std::fmt;

use super::Type;
use crate::types::tensor::TensorType;

impl Type {
    /// Annotation-style rendering, used in every error message.
    pub fn annotation_str(&self) -> String {
        match self {
            Type::Any
            | Type::None
            | Type::Number
            | Type::Int
            | Type::Float
            | Type::Bool
            | Type::String
            | Type::Device
            | Type::Generator
            | Type::Capsule => self.kind().name().to_string(),
            Type::Tensor(_) => "Tensor".to_string(),
            Type::List(elem) => format!("List[{}]", elem.annotation_str()),
            Type::Optional(elem) => format!("Optional[{}]", elem.annotation_str()),
            Type::Future(elem) => format!("Future[{}]", elem.annotation_str()),
            Type::Dict(key, value) => {
                format!("Dict[{}, {}]", key.annotation_str(), value.annotation_str())
            }
            Type::Tuple(tuple) => match tuple.name() {
                Some(name) => name.to_string(),
                None => {
                    let names: Vec<String> =
                        tuple.elements().iter().map(|t| t.annotation_str()).collect();
                    format!("Tuple[{}]", names.join(", "))
                }
            },
            Type::Function(function) => function.name().to_string(),
            Type::Interface(interface) => interface.name().to_string(),
            Type::Var(name) => name.clone(),
        }
    }

    /// Short name of a leaf type in the display form.
    fn short_name(&self) -> &'static str {
        match self {
            Type::Any => "Any",
            Type::None => "None",
            Type::Number => "Scalar",
            Type::Int => "int",
            Type::Float => "float",
            Type::Bool => "bool",
            Type::String => "str",
            Type::Device => "Device",
            Type::Generator => "Generator",
            Type::Capsule => "Capsule",
            _ => "",
        }
    }
}

fn fmt_tensor(tensor: &TensorType, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match tensor.scalar_type() {
        Some(scalar) => {
            write!(f, "{}", scalar)?;
            if tensor.sizes().rank().is_none() {
                f.write_str("Tensor")?;
            }
        }
        None => f.write_str("Tensor")?,
    }
    if tensor.sizes().rank().is_some() {
        write!(f, "{}", tensor.sizes())?;
    }
    if tensor.undefined() == Some(true) {
        f.write_str("[Undefined]")?;
    }
    Ok(())
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Tensor(tensor) => fmt_tensor(tensor, f),
            Type::List(elem) => write!(f, "{}[]", elem),
            Type::Optional(elem) => write!(f, "{}?", elem),
            Type::Future(elem) => write!(f, "Future[{}]", elem),
            Type::Dict(key, value) => write!(f, "Dict({}, {})", key, value),
            Type::Tuple(tuple) => {
                let field_names = tuple.field_names();
                if field_names.is_some() {
                    f.write_str("NamedTuple")?;
                }
                f.write_str("(")?;
                for (i, elem) in tuple.elements().iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    if let Some(field) = field_names.and_then(|names| names.get(i)) {
                        write!(f, "{} : ", field)?;
                    }
                    write!(f, "{}", elem)?;
                }
                f.write_str(")")
            }
            Type::Function(_) => f.write_str("Function"),
            Type::Interface(interface) => f.write_str(interface.name()),
            Type::Var(name) => f.write_str(name),
            _ => f.write_str(self.short_name()),
        }
    }
}
