//! Type kinds and the opaque tensor facts (element kind, device).

use serde::{Deserialize, Serialize};

/// Tag identifying which variant a [`Type`](super::Type) node is.
///
/// The enumeration is closed; every per-variant rule in the lattice is an
/// exhaustive match over it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Kind {
    Any,
    None,
    Number,
    Int,
    Float,
    Bool,
    String,
    Device,
    Generator,
    Capsule,
    Tensor,
    List,
    Optional,
    Tuple,
    Dict,
    Future,
    Function,
    Interface,
    Var,
}

impl Kind {
    /// Every kind, in declaration order.
    pub const ALL: [Kind; 19] = [
        Kind::Any,
        Kind::None,
        Kind::Number,
        Kind::Int,
        Kind::Float,
        Kind::Bool,
        Kind::String,
        Kind::Device,
        Kind::Generator,
        Kind::Capsule,
        Kind::Tensor,
        Kind::List,
        Kind::Optional,
        Kind::Tuple,
        Kind::Dict,
        Kind::Future,
        Kind::Function,
        Kind::Interface,
        Kind::Var,
    ];

    /// Stateless kinds: one shared instance per process.
    pub fn is_primitive(self) -> bool {
        matches!(
            self,
            Kind::Any
                | Kind::None
                | Kind::Number
                | Kind::Int
                | Kind::Float
                | Kind::Bool
                | Kind::String
                | Kind::Device
                | Kind::Generator
                | Kind::Capsule
        )
    }

    /// Kinds that structurally own other types.
    pub fn is_container(self) -> bool {
        matches!(
            self,
            Kind::List | Kind::Optional | Kind::Tuple | Kind::Dict | Kind::Future
        )
    }

    pub fn name(self) -> &'static str {
        match self {
            Kind::Any => "Any",
            Kind::None => "None",
            Kind::Number => "Number",
            Kind::Int => "Int",
            Kind::Float => "Float",
            Kind::Bool => "Bool",
            Kind::String => "String",
            Kind::Device => "Device",
            Kind::Generator => "Generator",
            Kind::Capsule => "Capsule",
            Kind::Tensor => "Tensor",
            Kind::List => "List",
            Kind::Optional => "Optional",
            Kind::Tuple => "Tuple",
            Kind::Dict => "Dict",
            Kind::Future => "Future",
            Kind::Function => "Function",
            Kind::Interface => "Interface",
            Kind::Var => "Var",
        }
    }
}

impl std::fmt::Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Canonical tensor element kinds.
///
/// Opaque to the lattice: only compared for equality during merges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarType {
    Byte,
    Char,
    Short,
    Int,
    Long,
    Half,
    Float,
    Double,
    ComplexHalf,
    ComplexFloat,
    ComplexDouble,
    Bool,
    QInt8,
    QUInt8,
    QInt32,
    BFloat16,
}

impl ScalarType {
    pub fn name(self) -> &'static str {
        match self {
            ScalarType::Byte => "Byte",
            ScalarType::Char => "Char",
            ScalarType::Short => "Short",
            ScalarType::Int => "Int",
            ScalarType::Long => "Long",
            ScalarType::Half => "Half",
            ScalarType::Float => "Float",
            ScalarType::Double => "Double",
            ScalarType::ComplexHalf => "ComplexHalf",
            ScalarType::ComplexFloat => "ComplexFloat",
            ScalarType::ComplexDouble => "ComplexDouble",
            ScalarType::Bool => "Bool",
            ScalarType::QInt8 => "QInt8",
            ScalarType::QUInt8 => "QUInt8",
            ScalarType::QInt32 => "QInt32",
            ScalarType::BFloat16 => "BFloat16",
        }
    }

    pub fn is_floating_point(self) -> bool {
        matches!(
            self,
            ScalarType::Half | ScalarType::Float | ScalarType::Double | ScalarType::BFloat16
        )
    }

    pub fn is_complex(self) -> bool {
        matches!(
            self,
            ScalarType::ComplexHalf | ScalarType::ComplexFloat | ScalarType::ComplexDouble
        )
    }

    pub fn is_quantized(self) -> bool {
        matches!(
            self,
            ScalarType::QInt8 | ScalarType::QUInt8 | ScalarType::QInt32
        )
    }
}

impl std::fmt::Display for ScalarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Backend family a tensor lives on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeviceKind {
    Cpu,
    Cuda,
    Mkldnn,
    Opengl,
    Opencl,
    Ideep,
    Hip,
    Fpga,
    Msnpu,
    Xla,
}

impl DeviceKind {
    pub fn name(self) -> &'static str {
        match self {
            DeviceKind::Cpu => "cpu",
            DeviceKind::Cuda => "cuda",
            DeviceKind::Mkldnn => "mkldnn",
            DeviceKind::Opengl => "opengl",
            DeviceKind::Opencl => "opencl",
            DeviceKind::Ideep => "ideep",
            DeviceKind::Hip => "hip",
            DeviceKind::Fpga => "fpga",
            DeviceKind::Msnpu => "msnpu",
            DeviceKind::Xla => "xla",
        }
    }
}

/// A concrete device: backend family plus an optional ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Device {
    pub kind: DeviceKind,
    #[serde(default)]
    pub index: Option<u16>,
}

impl Device {
    pub fn new(kind: DeviceKind, index: Option<u16>) -> Self {
        Self { kind, index }
    }

    pub fn cpu() -> Self {
        Self::new(DeviceKind::Cpu, None)
    }

    pub fn cuda(index: u16) -> Self {
        Self::new(DeviceKind::Cuda, Some(index))
    }
}

impl std::fmt::Display for Device {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.index {
            Some(index) => write!(f, "{}:{}", self.kind.name(), index),
            None => f.write_str(self.kind.name()),
        }
    }
}
