//! Relationship inference between models.
//!
//! A relationship is found by pairing a model-typed field with its inverse
//! field on the related model, then classifying the pair by both sides'
//! array flags. Each unordered pair is emitted once:
//!
//! | field is list | inverse is list | emitted |
//! |---|---|---|
//! | yes | no  | one-to-many from the list side, always |
//! | no  | yes | nothing, the list side emits it |
//! | yes | yes | many-to-many, only from the lexicographically smaller model |
//! | no  | no  | one-to-one, only from the lexicographically smaller model |
//!
//! Only the first inverse field (in declaration order) is considered, so a
//! model with several relations to the same target resolves just one of them.

use log::{debug, trace};

use schemaviz_core::{
    relationship::{Cardinality, Relationship},
    schema::{Field, Schema},
};

/// Classify a field and its inverse into a relationship, if this side emits one.
fn classify(model: &str, field: &Field, related: &str, inverse: &Field) -> Option<Relationship> {
    let cardinality = match (field.is_array(), inverse.is_array()) {
        (true, false) => Cardinality::OneToMany,
        (false, true) => return None,
        (true, true) if model < related => Cardinality::ManyToMany,
        (false, false) if model < related => Cardinality::OneToOne,
        _ => return None,
    };

    Some(Relationship::new(model, related, cardinality, field.name()))
}

/// Infer all relationships of a schema in discovery order.
///
/// Models are visited in declaration order and fields in declaration order
/// within each model. A model-typed field whose target has no field pointing
/// back is dropped.
///
/// # Examples
///
/// ```
/// use schemaviz::infer_relationships;
/// use schemaviz_core::relationship::Cardinality;
///
/// let schema = schemaviz::parse(
///     "model Author {\n  books Book[]\n}\nmodel Book {\n  author Author\n}\n",
/// );
/// let relationships = infer_relationships(&schema);
///
/// assert_eq!(relationships.len(), 1);
/// assert_eq!(relationships[0].cardinality(), Cardinality::OneToMany);
/// assert_eq!(relationships[0].left(), "Author");
/// ```
pub fn infer_relationships(schema: &Schema) -> Vec<Relationship> {
    let mut relationships = Vec::new();

    for model in schema.models() {
        for field in model.fields() {
            let Some(related) = schema.model(field.base_type()) else {
                continue;
            };

            let Some(inverse) = related.first_field_of_type(model.name()) else {
                debug!(
                    model = model.name(),
                    field = field.name(),
                    target = related.name();
                    "No inverse field, relation dropped"
                );
                continue;
            };

            match classify(model.name(), field, related.name(), inverse) {
                Some(relationship) => {
                    trace!(
                        left = relationship.left(),
                        right = relationship.right(),
                        cardinality:? = relationship.cardinality();
                        "Relationship inferred"
                    );
                    relationships.push(relationship);
                }
                None => trace!(
                    model = model.name(),
                    field = field.name();
                    "Relationship emitted from the other side"
                ),
            }
        }
    }

    relationships
}
