use super::registry::TypeRegistry;
use super::{NamedType, TypeDesc};
use bumpalo::Bump;

#[test]
fn test_interning_primitives() {
    let bump = Bump::new();
    let registry = TypeRegistry::new(&bump);

    let int_type = registry.int();
    let string_type = registry.string();

    assert!(core::ptr::eq(int_type, registry.int()));
    assert!(core::ptr::eq(string_type, registry.string()));
    assert!(!core::ptr::eq(int_type, string_type));
}

#[test]
fn test_interning_array() {
    let bump = Bump::new();
    let registry = TypeRegistry::new(&bump);

    let int_type = registry.int();
    let int_array = registry.array(int_type);
    assert!(core::ptr::eq(int_array, registry.array(int_type)));
    assert!(core::ptr::eq(int_array, registry.array_of_rank(int_type, 1)));
    assert!(!core::ptr::eq(int_array, registry.array_of_rank(int_type, 2)));

    // Rank 0 is normalized to 1.
    assert!(core::ptr::eq(int_array, registry.array_of_rank(int_type, 0)));
}

#[test]
fn test_interning_tuple() {
    let bump = Bump::new();
    let registry = TypeRegistry::new(&bump);

    let elems = vec![registry.int(), registry.string()];
    let tuple = registry.tuple(&elems);
    let same = registry.tuple(&[registry.int(), registry.string()]);
    assert!(core::ptr::eq(tuple, same));

    let swapped = registry.tuple(&[registry.string(), registry.int()]);
    assert!(!core::ptr::eq(tuple, swapped));
}

#[test]
fn test_long_tuples_are_folded() {
    let bump = Bump::new();
    let registry = TypeRegistry::new(&bump);

    let ints = [registry.int(); 10];
    let TypeDesc::Tuple(elems) = *registry.tuple(&ints) else {
        panic!("Expected Tuple type");
    };
    assert_eq!(elems.len(), 8);
    assert!(core::ptr::eq(elems[7], registry.tuple(&ints[..3])));
}

#[test]
fn test_named_splits_arity_suffix() {
    let bump = Bump::new();
    let registry = TypeRegistry::new(&bump);

    let dict = registry.named("System.Collections.Generic", "Dictionary`2");
    let TypeDesc::Named(named) = *dict else {
        panic!("Expected Named type");
    };
    assert_eq!(named.name, "Dictionary");
    assert_eq!(named.arity, 2);
    assert!(dict.is_generic_definition());

    // Malformed suffixes are kept as part of the name.
    let odd = registry.named("", "Odd`x");
    assert!(matches!(*odd, TypeDesc::Named(NamedType { name: "Odd`x", arity: 0, .. })));
}

#[test]
fn test_oversized_arity_suffix_is_part_of_the_name() {
    let bump = Bump::new();
    let registry = TypeRegistry::new(&bump);

    let huge = registry.named("", "Foo`100000000");
    assert!(matches!(*huge, TypeDesc::Named(NamedType { name: "Foo`100000000", arity: 0, .. })));
    assert!(!huge.is_generic_definition());
    assert_eq!(crate::format_type(huge), "Foo`100000000");

    let widest = registry.named("", "Wide`65535");
    assert!(matches!(*widest, TypeDesc::Named(NamedType { name: "Wide", arity: 65535, .. })));
}

#[test]
fn test_overflowing_arity_suffix_cannot_break_construct() {
    let bump = Bump::new();
    let registry = TypeRegistry::new(&bump);

    let outer = registry.named("", "Outer`18446744073709551615");
    let inner = registry.nested(outer, "Inner`1");
    let ty = registry.construct(inner, &[registry.int()]);
    assert_eq!(crate::format_type(ty), "Outer`18446744073709551615.Inner<int>");
}

#[test]
fn test_interning_named() {
    let bump = Bump::new();
    let registry = TypeRegistry::new(&bump);

    let a = registry.named("App", "Widget");
    let b = registry.named("App", "Widget");
    let c = registry.named("Other", "Widget");
    assert!(core::ptr::eq(a, b));
    assert!(!core::ptr::eq(a, c));

    let list = registry.named("App", "List`1");
    let ints = registry.construct(list, &[registry.int()]);
    assert!(core::ptr::eq(ints, registry.construct(list, &[registry.int()])));
    assert!(!core::ptr::eq(ints, list));
    assert!(!ints.is_generic_definition());
}

#[test]
fn test_nested_inherits_namespace() {
    let bump = Bump::new();
    let registry = TypeRegistry::new(&bump);

    let outer = registry.named("App", "Outer`1");
    let inner = registry.nested(outer, "Inner");
    let TypeDesc::Named(named) = *inner else {
        panic!("Expected Named type");
    };
    assert_eq!(named.namespace, "App");
    assert!(core::ptr::eq(named.declaring.unwrap(), outer));
    assert_eq!(named.total_arity(), 1);
}

#[test]
#[should_panic(expected = "expects 2 type argument(s), got 1")]
fn test_construct_checks_total_arity() {
    let bump = Bump::new();
    let registry = TypeRegistry::new(&bump);

    let outer = registry.named("App", "Outer`1");
    let inner = registry.nested(outer, "Inner`1");
    registry.construct(inner, &[registry.int()]);
}

#[test]
#[should_panic(expected = "cannot apply type arguments to non-named type int")]
fn test_construct_rejects_non_named() {
    let bump = Bump::new();
    let registry = TypeRegistry::new(&bump);

    registry.construct(registry.int(), &[registry.int()]);
}

#[test]
fn test_len_counts_distinct_descriptors() {
    let bump = Bump::new();
    let registry = TypeRegistry::new(&bump);
    assert!(registry.is_empty());

    registry.int();
    registry.int();
    registry.array(registry.int());
    assert_eq!(registry.len(), 2);
}
