use serde::Serialize;

/// One builder-visible field of the target struct.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    name: String,
    type_signature: String,
}

impl FieldDescriptor {
    pub fn new(name: impl Into<String>, type_signature: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_signature: type_signature.into(),
        }
    }

    /// The exported field name as declared in the struct.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The field type as Go source text, e.g. `map[string][]*User`.
    pub fn type_signature(&self) -> &str {
        &self.type_signature
    }
}

/// Everything needed to render the builder for one `(file, target)` request.
///
/// Field order is declaration order and determines setter order in the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerationUnit {
    module_name: String,
    target_name: String,
    fields: Vec<FieldDescriptor>,
}

impl GenerationUnit {
    pub fn new(
        module_name: impl Into<String>,
        target_name: impl Into<String>,
        fields: Vec<FieldDescriptor>,
    ) -> Self {
        Self {
            module_name: module_name.into(),
            target_name: target_name.into(),
            fields,
        }
    }

    /// Package clause of the source file.
    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    pub fn target_name(&self) -> &str {
        &self.target_name
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
