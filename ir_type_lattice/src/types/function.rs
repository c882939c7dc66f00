/// A first-class function value, identified by its qualified name.
///
/// The lattice never looks inside a function; two function types are equal
/// exactly when their names are.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionType {
    name: String,
}

impl FunctionType {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
