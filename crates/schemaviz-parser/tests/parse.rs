use proptest::prelude::*;

use schemaviz_core::schema::Field;
use schemaviz_parser::parse;

#[test]
fn test_empty_source() {
    let schema = parse("");

    assert!(schema.is_empty());
}

#[test]
fn test_blog_schema() {
    let source = r#"
        generator client {
          provider = "prisma-client-js"
        }

        datasource db {
          provider = "postgresql"
          url      = env("DATABASE_URL")
        }

        // Users of the platform
        model User {
          id        Int      @id @default(autoincrement())
          email     String   @unique
          name      String?
          role      Role     @default(USER)
          posts     Post[]
          profile   Profile?
        }

        model Profile {
          id     Int    @id @default(autoincrement())
          bio    String
          user   User   @relation(fields: [userId], references: [id])
          userId Int    @unique
        }

        model Post {
          id       Int    @id @default(autoincrement())
          title    String
          author   User   @relation(fields: [authorId], references: [id])
          authorId Int
          tags     Tag[]
        }

        model Tag {
          id    Int    @id
          posts Post[]
        }

        enum Role {
          USER
          ADMIN
        }
    "#;

    let schema = parse(source);

    let models: Vec<_> = schema.models().map(|m| m.name()).collect();
    assert_eq!(models, vec!["User", "Profile", "Post", "Tag"]);

    let enums: Vec<_> = schema.enums().map(|e| e.name()).collect();
    assert_eq!(enums, vec!["Role"]);

    let user = schema.model("User").expect("User model");
    let fields: Vec<_> = user.fields().iter().map(Field::name).collect();
    assert_eq!(
        fields,
        vec!["id", "email", "name", "role", "posts", "profile"]
    );

    let profile_field = &user.fields()[5];
    assert_eq!(profile_field.raw_type(), "Profile?");
    assert_eq!(profile_field.base_type(), "Profile");
    assert!(profile_field.is_optional());
    assert!(!profile_field.is_array());
}

#[test]
fn test_composite_key_directive_skipped() {
    let source = r#"
        model PostTag {
          postId Int
          tagId  Int
          @@id([postId, tagId])
          @@index([tagId])
        }
    "#;

    let schema = parse(source);
    let post_tag = schema.model("PostTag").expect("PostTag model");

    assert_eq!(post_tag.fields().len(), 2);
}

#[test]
fn test_parse_is_deterministic() {
    let source = "model A {\n  id Int\n  b B[]\n}\nmodel B {\n  a A\n}\n";

    assert_eq!(parse(source), parse(source));
}

/// Strategy producing a model or enum declaration name.
fn decl_name() -> impl Strategy<Value = String> {
    "[A-Z][a-z]{0,6}"
}

proptest! {
    #[test]
    fn block_count_matches_declarations(
        models in prop::collection::hash_set(decl_name(), 0..8),
        enums in prop::collection::hash_set("E[A-Z][a-z]{0,6}", 0..5),
    ) {
        let mut source = String::new();
        for name in &models {
            source.push_str(&format!("model {name} {{\n  id Int @id\n}}\n\n"));
        }
        for name in &enums {
            source.push_str(&format!("enum {name} {{\n  ONE\n  TWO\n}}\n"));
        }

        let schema = parse(&source);

        prop_assert_eq!(schema.model_count(), models.len());
        prop_assert_eq!(schema.enum_count(), enums.len());
    }

    #[test]
    fn fields_keep_declaration_order(
        names in prop::collection::vec("[a-z][a-zA-Z]{0,8}", 1..12),
    ) {
        let mut source = String::from("model Thing {\n");
        for name in &names {
            source.push_str(&format!("  {name} String\n"));
        }
        source.push_str("}\n");

        let schema = parse(&source);
        let thing = schema.model("Thing").expect("Thing model");
        let parsed: Vec<_> = thing.fields().iter().map(|f| f.name().to_string()).collect();

        prop_assert_eq!(parsed, names);
    }
}
