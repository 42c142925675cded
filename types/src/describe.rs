//! Bridge from Rust types to type descriptors.

use crate::{TypeDesc, TypeRegistry};

/// Types that can describe themselves to a [`TypeRegistry`].
///
/// Implemented for the Rust counterparts of the primitive keyword types and
/// for the common structural wrappers. User types implement it by declaring
/// themselves through the registry:
///
/// ```
/// use bumpalo::Bump;
/// use warden_types::{Describe, DisplayNames, TypeDesc, TypeRegistry};
///
/// struct Point;
///
/// impl<'a> Describe<'a> for Point {
///     fn describe(registry: &'a TypeRegistry<'a>) -> &'a TypeDesc<'a> {
///         registry.named("Geometry", "Point")
///     }
/// }
///
/// let arena = Bump::new();
/// let registry = TypeRegistry::new(&arena);
/// let names = DisplayNames::new();
/// assert_eq!(&*names.type_string(registry.of::<Vec<Point>>()), "Geometry.Point[]");
/// ```
pub trait Describe<'a> {
    fn describe(registry: &'a TypeRegistry<'a>) -> &'a TypeDesc<'a>;
}

macro_rules! describe_primitive {
    ($($ty:ty => $ctor:ident),* $(,)?) => {
        $(
            impl<'a> Describe<'a> for $ty {
                fn describe(registry: &'a TypeRegistry<'a>) -> &'a TypeDesc<'a> {
                    registry.$ctor()
                }
            }
        )*
    };
}

describe_primitive! {
    bool => bool,
    u8 => byte,
    i8 => sbyte,
    i16 => short,
    u16 => ushort,
    char => char,
    i32 => int,
    u32 => uint,
    f32 => float,
    i64 => long,
    u64 => ulong,
    f64 => double,
    str => string,
    String => string,
    () => void,
}

impl<'a, T: Describe<'a>> Describe<'a> for Option<T> {
    fn describe(registry: &'a TypeRegistry<'a>) -> &'a TypeDesc<'a> {
        registry.nullable(T::describe(registry))
    }
}

impl<'a, T: Describe<'a>> Describe<'a> for [T] {
    fn describe(registry: &'a TypeRegistry<'a>) -> &'a TypeDesc<'a> {
        registry.array(T::describe(registry))
    }
}

impl<'a, T: Describe<'a>, const N: usize> Describe<'a> for [T; N] {
    fn describe(registry: &'a TypeRegistry<'a>) -> &'a TypeDesc<'a> {
        registry.array(T::describe(registry))
    }
}

impl<'a, T: Describe<'a>> Describe<'a> for Vec<T> {
    fn describe(registry: &'a TypeRegistry<'a>) -> &'a TypeDesc<'a> {
        registry.array(T::describe(registry))
    }
}

impl<'a, T: Describe<'a> + ?Sized> Describe<'a> for &T {
    fn describe(registry: &'a TypeRegistry<'a>) -> &'a TypeDesc<'a> {
        registry.by_ref(T::describe(registry))
    }
}

impl<'a, T: Describe<'a> + ?Sized> Describe<'a> for *const T {
    fn describe(registry: &'a TypeRegistry<'a>) -> &'a TypeDesc<'a> {
        registry.pointer(T::describe(registry))
    }
}

impl<'a, T: Describe<'a> + ?Sized> Describe<'a> for *mut T {
    fn describe(registry: &'a TypeRegistry<'a>) -> &'a TypeDesc<'a> {
        registry.pointer(T::describe(registry))
    }
}

macro_rules! describe_tuple {
    ($($name:ident),+) => {
        impl<'a, $($name: Describe<'a>),+> Describe<'a> for ($($name,)+) {
            fn describe(registry: &'a TypeRegistry<'a>) -> &'a TypeDesc<'a> {
                registry.tuple(&[$($name::describe(registry)),+])
            }
        }
    };
}

describe_tuple!(A);
describe_tuple!(A, B);
describe_tuple!(A, B, C);
describe_tuple!(A, B, C, D);
describe_tuple!(A, B, C, D, E);
describe_tuple!(A, B, C, D, E, F);
describe_tuple!(A, B, C, D, E, F, G);
describe_tuple!(A, B, C, D, E, F, G, H);
