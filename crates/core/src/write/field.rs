use crate::write::resource::ResourceId;

/// Storage kind of a declared field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    String,
    LongText,
    Int,
    Bool,
    Date,
    Float,
    Uuid,
    /// Foreign key to another declared resource.
    Reference(ResourceId),
    /// Dependent records of another resource, written after the parent
    /// per the resource's write order.
    Subresource(ResourceId),
}

/// Maps one logical field name to its physical column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    pub name: &'static str,
    pub column: &'static str,
    pub kind: FieldKind,
    pub required: bool,
}

impl FieldDefinition {
    pub fn new(name: &'static str, column: &'static str, kind: FieldKind) -> Self {
        Self {
            name,
            column,
            kind,
            required: false,
        }
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }
}
