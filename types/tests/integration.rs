//! Integration tests for warden-types.
//!
//! These tests exercise the registry, the `Describe` bridge and the
//! display-name cache together.

use bumpalo::Bump;
use pretty_assertions::assert_eq;
use std::sync::Arc;
use warden_types::{Describe, DisplayNames, TypeDesc, TypeRegistry, format_type};

#[allow(dead_code)]
struct Outer;

#[allow(dead_code)]
struct Inner<T>(T);

impl<'a> Describe<'a> for Outer {
    fn describe(registry: &'a TypeRegistry<'a>) -> &'a TypeDesc<'a> {
        registry.named("", "Outer")
    }
}

impl<'a, T: Describe<'a>> Describe<'a> for Inner<T> {
    fn describe(registry: &'a TypeRegistry<'a>) -> &'a TypeDesc<'a> {
        let definition = registry.nested(Outer::describe(registry), "Inner`1");
        registry.construct(definition, &[T::describe(registry)])
    }
}

#[allow(dead_code)]
struct Pair<A, B>(A, B);

impl<'a, A: Describe<'a>, B: Describe<'a>> Describe<'a> for Pair<A, B> {
    fn describe(registry: &'a TypeRegistry<'a>) -> &'a TypeDesc<'a> {
        let definition = registry.named("", "Pair`2");
        registry.construct(definition, &[A::describe(registry), B::describe(registry)])
    }
}

#[test]
fn test_primitive_aliases() {
    let arena = Bump::new();
    let registry = TypeRegistry::new(&arena);
    let names = DisplayNames::new();

    assert_eq!(&*names.type_string(registry.of::<i32>()), "int");
    assert_eq!(&*names.type_string(registry.of::<bool>()), "bool");
    assert_eq!(&*names.type_string(registry.of::<u8>()), "byte");
    assert_eq!(&*names.type_string(registry.of::<i8>()), "sbyte");
    assert_eq!(&*names.type_string(registry.of::<u64>()), "ulong");
    assert_eq!(&*names.type_string(registry.of::<f32>()), "float");
    assert_eq!(&*names.type_string(registry.of::<f64>()), "double");
    assert_eq!(&*names.type_string(registry.of::<String>()), "string");
    assert_eq!(&*names.type_string(registry.decimal()), "decimal");
    assert_eq!(&*names.type_string(registry.object()), "object");
}

#[test]
fn test_arrays() {
    let arena = Bump::new();
    let registry = TypeRegistry::new(&arena);
    let names = DisplayNames::new();

    assert_eq!(&*names.type_string(registry.of::<Vec<i32>>()), "int[]");
    assert_eq!(
        &*names.type_string(registry.array_of_rank(registry.int(), 2)),
        "int[,]"
    );
    assert_eq!(
        &*names.type_string(registry.of::<[Vec<u16>; 3]>()),
        "ushort[][]"
    );
}

#[test]
fn test_nullable_tuple_and_generics() {
    let arena = Bump::new();
    let registry = TypeRegistry::new(&arena);
    let names = DisplayNames::new();

    assert_eq!(&*names.type_string(registry.of::<Option<i32>>()), "int?");
    assert_eq!(
        &*names.type_string(registry.of::<(i32, String)>()),
        "(int, string)"
    );
    assert_eq!(
        &*names.type_string(registry.of::<Pair<i32, String>>()),
        "Pair<int, string>"
    );
    assert_eq!(
        &*names.type_string(registry.of::<Inner<String>>()),
        "Outer.Inner<string>"
    );
    assert_eq!(
        &*names.type_string(registry.of::<Pair<Option<(bool, char)>, Vec<Inner<i64>>>>()),
        "Pair<(bool, char)?, Outer.Inner<long>[]>"
    );
}

#[test]
fn test_indirection() {
    let arena = Bump::new();
    let registry = TypeRegistry::new(&arena);
    let names = DisplayNames::new();

    assert_eq!(&*names.type_string(registry.of::<&i32>()), "int&");
    assert_eq!(&*names.type_string(registry.of::<*const *const f64>()), "double**");
    assert_eq!(
        &*names.type_string(registry.of::<&Pair<i32, i32>>()),
        "Pair<int, int>&"
    );
}

#[test]
fn test_namespaces() {
    let arena = Bump::new();
    let registry = TypeRegistry::new(&arena);
    let names = DisplayNames::new();

    let guid = registry.named("System", "Guid");
    let list = registry.named("System.Collections.Generic", "List`1");
    let ty = registry.construct(list, &[registry.nullable(guid)]);
    assert_eq!(
        &*names.type_string(ty),
        "System.Collections.Generic.List<System.Guid?>"
    );
}

#[test]
fn test_cached_names_match_fresh_formatting() {
    let arena = Bump::new();
    let registry = TypeRegistry::new(&arena);
    let names = DisplayNames::new();

    let types = [
        registry.of::<Pair<Vec<i32>, Option<u8>>>(),
        registry.of::<(i8, i16, i32, i64, u8, u16, u32, u64)>(),
        registry.of::<*mut Inner<bool>>(),
    ];
    for ty in types {
        let cached = names.type_string(ty);
        assert_eq!(&*cached, format_type(ty));
        assert!(Arc::ptr_eq(&cached, &names.type_string(ty)));
    }
    assert_eq!(names.computed(), types.len());
}
