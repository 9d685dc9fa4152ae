//! Schema model types.
//!
//! This module contains the structured representation of a data-model
//! description after scanning and building. These types are constructed once
//! per run and are never mutated by the diagram exporter.
//!
//! # Pipeline Position
//!
//! ```text
//! Source Text
//!     ↓ scanner
//! Blocks
//!     ↓ builder
//! Schema (these types) - models and enums keyed by name
//!     ↓ infer
//! Relationships
//!     ↓ export
//! erDiagram text
//! ```

use indexmap::IndexMap;

/// Suffix marking a list-typed field, e.g. `Post[]`.
pub const ARRAY_MARKER: &str = "[]";

/// Suffix marking a nullable field, e.g. `String?`.
pub const OPTIONAL_MARKER: &str = "?";

/// A single field declared inside a model block.
///
/// # Examples
///
/// ```
/// use schemaviz_core::schema::Field;
///
/// let field = Field::new("posts", "Post[]", "posts Post[]");
/// assert_eq!(field.base_type(), "Post");
/// assert!(field.is_array());
/// assert!(!field.is_optional());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    name: String,
    raw_type: String,
    base_type: String,
    is_array: bool,
    is_optional: bool,
    attributes: String,
}

impl Field {
    /// Creates a field from its name, raw type token and the full source line.
    ///
    /// The multiplicity flags and the base type are derived from `raw_type`.
    /// The `attributes` line is kept verbatim and is not interpreted.
    pub fn new(
        name: impl Into<String>,
        raw_type: impl Into<String>,
        attributes: impl Into<String>,
    ) -> Self {
        let raw_type = raw_type.into();
        let is_array = raw_type.ends_with(ARRAY_MARKER);
        let is_optional = raw_type.ends_with(OPTIONAL_MARKER);

        let mut base_type = raw_type.as_str();
        while let Some(stripped) = base_type
            .strip_suffix(ARRAY_MARKER)
            .or_else(|| base_type.strip_suffix(OPTIONAL_MARKER))
        {
            base_type = stripped;
        }
        let base_type = base_type.to_string();

        Self {
            name: name.into(),
            raw_type,
            base_type,
            is_array,
            is_optional,
            attributes: attributes.into(),
        }
    }

    /// Returns the field name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the type token exactly as declared, markers included.
    pub fn raw_type(&self) -> &str {
        &self.raw_type
    }

    /// Returns the type with array and optional markers removed.
    pub fn base_type(&self) -> &str {
        &self.base_type
    }

    /// Returns `true` if the field holds a list of values.
    pub fn is_array(&self) -> bool {
        self.is_array
    }

    /// Returns `true` if the field is nullable.
    pub fn is_optional(&self) -> bool {
        self.is_optional
    }

    /// Returns the full source line the field was declared on.
    pub fn attributes(&self) -> &str {
        &self.attributes
    }
}

/// A `model` declaration with its fields in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Model {
    name: String,
    fields: Vec<Field>,
}

impl Model {
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn fields(&self) -> &[Field] {
        &self.fields
    }

    /// Returns the first field whose base type is `type_name`.
    ///
    /// Declaration order decides which field wins when several point at the
    /// same type.
    pub fn first_field_of_type(&self, type_name: &str) -> Option<&Field> {
        self.fields
            .iter()
            .find(|field| field.base_type() == type_name)
    }
}

/// An `enum` declaration with its value literals in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Enum {
    name: String,
    values: Vec<String>,
}

impl Enum {
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }
}

/// All models and enums of a schema, keyed by name in first-declaration order.
///
/// Inserting a name that already exists replaces the stored definition but
/// keeps its original position.
///
/// # Examples
///
/// ```
/// use schemaviz_core::schema::{Enum, Field, Model, Schema};
///
/// let mut schema = Schema::new();
/// schema.insert_model(Model::new("User", vec![Field::new("role", "Role", "role Role")]));
/// schema.insert_enum(Enum::new("Role", vec!["ADMIN".to_string()]));
///
/// assert!(schema.is_model("User"));
/// assert!(!schema.is_model("Role"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    models: IndexMap<String, Model>,
    enums: IndexMap<String, Enum>,
}

impl Schema {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a model, replacing any earlier model with the same name.
    pub fn insert_model(&mut self, model: Model) {
        self.models.insert(model.name().to_string(), model);
    }

    /// Adds an enum, replacing any earlier enum with the same name.
    pub fn insert_enum(&mut self, enumeration: Enum) {
        self.enums
            .insert(enumeration.name().to_string(), enumeration);
    }

    /// Iterates over models in first-declaration order.
    pub fn models(&self) -> impl Iterator<Item = &Model> {
        self.models.values()
    }

    /// Iterates over enums in first-declaration order.
    pub fn enums(&self) -> impl Iterator<Item = &Enum> {
        self.enums.values()
    }

    pub fn model(&self, name: &str) -> Option<&Model> {
        self.models.get(name)
    }

    pub fn enumeration(&self, name: &str) -> Option<&Enum> {
        self.enums.get(name)
    }

    /// Returns `true` if `type_name` names a declared model.
    ///
    /// Enum names are deliberately not matched; enum-typed fields are scalars.
    pub fn is_model(&self, type_name: &str) -> bool {
        self.models.contains_key(type_name)
    }

    pub fn model_count(&self) -> usize {
        self.models.len()
    }

    pub fn enum_count(&self) -> usize {
        self.enums.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty() && self.enums.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_scalar() {
        let field = Field::new("id", "Int", "id Int @id @default(autoincrement())");

        assert_eq!(field.name(), "id");
        assert_eq!(field.raw_type(), "Int");
        assert_eq!(field.base_type(), "Int");
        assert!(!field.is_array());
        assert!(!field.is_optional());
        assert_eq!(field.attributes(), "id Int @id @default(autoincrement())");
    }

    #[test]
    fn test_field_array() {
        let field = Field::new("posts", "Post[]", "posts Post[]");

        assert_eq!(field.base_type(), "Post");
        assert!(field.is_array());
        assert!(!field.is_optional());
    }

    #[test]
    fn test_field_optional() {
        let field = Field::new("bio", "String?", "bio String?");

        assert_eq!(field.base_type(), "String");
        assert!(!field.is_array());
        assert!(field.is_optional());
    }

    #[test]
    fn test_field_marker_only_stripped_at_end() {
        let field = Field::new("weird", "Foo[]Bar", "weird Foo[]Bar");

        assert_eq!(field.base_type(), "Foo[]Bar");
        assert!(!field.is_array());
    }

    #[test]
    fn test_field_optional_before_array_marker() {
        let field = Field::new("items", "Item?[]", "items Item?[]");

        assert_eq!(field.base_type(), "Item");
        assert!(field.is_array());
        assert!(!field.is_optional());
    }

    #[test]
    fn test_field_array_before_optional_marker() {
        let field = Field::new("posts", "Post[]?", "posts Post[]?");

        assert_eq!(field.base_type(), "Post");
        assert!(!field.is_array());
        assert!(field.is_optional());
    }

    #[test]
    fn test_first_field_of_type_prefers_declaration_order() {
        let model = Model::new(
            "Post",
            vec![
                Field::new("author", "User", "author User"),
                Field::new("editor", "User?", "editor User?"),
            ],
        );

        let field = model.first_field_of_type("User").expect("field exists");
        assert_eq!(field.name(), "author");
        assert!(model.first_field_of_type("Tag").is_none());
    }

    #[test]
    fn test_schema_preserves_insertion_order() {
        let mut schema = Schema::new();
        schema.insert_model(Model::new("Zebra", Vec::new()));
        schema.insert_model(Model::new("Apple", Vec::new()));
        schema.insert_model(Model::new("Mango", Vec::new()));

        let names: Vec<_> = schema.models().map(Model::name).collect();
        assert_eq!(names, vec!["Zebra", "Apple", "Mango"]);
    }

    #[test]
    fn test_schema_redeclaration_keeps_first_position() {
        let mut schema = Schema::new();
        schema.insert_model(Model::new("A", Vec::new()));
        schema.insert_model(Model::new("B", Vec::new()));
        schema.insert_model(Model::new("A", vec![Field::new("id", "Int", "id Int")]));

        let names: Vec<_> = schema.models().map(Model::name).collect();
        assert_eq!(names, vec!["A", "B"]);
        assert_eq!(schema.model("A").map(|m| m.fields().len()), Some(1));
    }

    #[test]
    fn test_schema_enum_is_not_model() {
        let mut schema = Schema::new();
        schema.insert_enum(Enum::new("Role", vec!["USER".to_string()]));

        assert!(!schema.is_model("Role"));
        assert!(schema.enumeration("Role").is_some());
        assert_eq!(schema.enum_count(), 1);
        assert!(!schema.is_empty());
    }
}
