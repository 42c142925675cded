use crate::{
    Describe,
    desc::{NamedType, Primitive, TypeDesc},
};
use bumpalo::Bump;
use core::cell::{Ref, RefCell};
use core::hash::{Hash, Hasher};
use core::ptr;
use hashbrown::{DefaultHashBuilder, HashMap};

/// Largest tuple arity stored flat. Longer tuples nest the remaining
/// elements in a trailing tuple, like the runtime's `ValueTuple` does.
pub const MAX_TUPLE_ARITY: usize = 8;

/// Arena-backed factory that interns type descriptors.
///
/// Structurally equal descriptors are returned as the same reference, so
/// descriptor identity (its address) can be used as a cache key.
///
/// The registry itself is single-threaded, but the descriptors it hands out
/// are plain immutable data and can be shared freely across threads.
pub struct TypeRegistry<'a> {
    // Arena holding all descriptors from this registry.
    arena: &'a Bump,
    interned_strs: RefCell<HashMap<&'a str, &'a str, DefaultHashBuilder, &'a Bump>>,
    interned: RefCell<HashMap<Shallow<'a>, &'a TypeDesc<'a>, DefaultHashBuilder, &'a Bump>>,
}

impl<'a> TypeRegistry<'a> {
    pub fn new(arena: &'a Bump) -> &'a Self {
        arena.alloc(Self {
            arena,
            interned_strs: RefCell::new(HashMap::new_in(arena)),
            interned: RefCell::new(HashMap::new_in(arena)),
        })
    }

    fn intern_str(&self, s: &str) -> &'a str {
        if let Some(&interned_str) = self.interned_strs.borrow().get(s) {
            return interned_str;
        }
        let arena_str = self.arena.alloc_str(s);
        self.interned_strs.borrow_mut().insert(arena_str, arena_str);
        arena_str
    }

    fn intern_map(
        &self,
    ) -> Ref<'_, HashMap<Shallow<'a>, &'a TypeDesc<'a>, DefaultHashBuilder, &'a Bump>> {
        self.interned.borrow()
    }

    fn intern(&self, desc: TypeDesc<'a>) -> &'a TypeDesc<'a> {
        if let Some(&interned) = self.intern_map().get(&Shallow(desc)) {
            return interned;
        }
        let arena_desc = self.arena.alloc(desc);
        self.interned
            .borrow_mut()
            .insert(Shallow(desc), arena_desc);
        tracing::trace!(desc = ?arena_desc, "interned type descriptor");
        arena_desc
    }

    fn alloc_types(&self, types: &[&'a TypeDesc<'a>]) -> &'a [&'a TypeDesc<'a>] {
        if types.is_empty() {
            return &[];
        }
        self.arena.alloc_slice_copy(types)
    }

    /// Number of distinct descriptors interned so far.
    pub fn len(&self) -> usize {
        self.interned.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Describe a Rust type.
    pub fn of<T: Describe<'a> + ?Sized>(&'a self) -> &'a TypeDesc<'a> {
        T::describe(self)
    }

    // Factory methods for primitives.
    pub fn primitive(&self, primitive: Primitive) -> &'a TypeDesc<'a> {
        self.intern(TypeDesc::Primitive(primitive))
    }
    pub fn bool(&self) -> &'a TypeDesc<'a> {
        self.primitive(Primitive::Bool)
    }
    pub fn byte(&self) -> &'a TypeDesc<'a> {
        self.primitive(Primitive::Byte)
    }
    pub fn sbyte(&self) -> &'a TypeDesc<'a> {
        self.primitive(Primitive::SByte)
    }
    pub fn short(&self) -> &'a TypeDesc<'a> {
        self.primitive(Primitive::Short)
    }
    pub fn ushort(&self) -> &'a TypeDesc<'a> {
        self.primitive(Primitive::UShort)
    }
    pub fn char(&self) -> &'a TypeDesc<'a> {
        self.primitive(Primitive::Char)
    }
    pub fn int(&self) -> &'a TypeDesc<'a> {
        self.primitive(Primitive::Int)
    }
    pub fn uint(&self) -> &'a TypeDesc<'a> {
        self.primitive(Primitive::UInt)
    }
    pub fn float(&self) -> &'a TypeDesc<'a> {
        self.primitive(Primitive::Float)
    }
    pub fn long(&self) -> &'a TypeDesc<'a> {
        self.primitive(Primitive::Long)
    }
    pub fn ulong(&self) -> &'a TypeDesc<'a> {
        self.primitive(Primitive::ULong)
    }
    pub fn double(&self) -> &'a TypeDesc<'a> {
        self.primitive(Primitive::Double)
    }
    pub fn decimal(&self) -> &'a TypeDesc<'a> {
        self.primitive(Primitive::Decimal)
    }
    pub fn object(&self) -> &'a TypeDesc<'a> {
        self.primitive(Primitive::Object)
    }
    pub fn string(&self) -> &'a TypeDesc<'a> {
        self.primitive(Primitive::String)
    }
    pub fn void(&self) -> &'a TypeDesc<'a> {
        self.primitive(Primitive::Void)
    }

    pub fn array(&self, elem: &'a TypeDesc<'a>) -> &'a TypeDesc<'a> {
        self.array_of_rank(elem, 1)
    }

    /// Multi-dimensional array. A rank of 0 is treated as 1.
    pub fn array_of_rank(&self, elem: &'a TypeDesc<'a>, rank: u8) -> &'a TypeDesc<'a> {
        self.intern(TypeDesc::Array {
            elem,
            rank: rank.max(1),
        })
    }

    pub fn nullable(&self, inner: &'a TypeDesc<'a>) -> &'a TypeDesc<'a> {
        self.intern(TypeDesc::Nullable(inner))
    }

    pub fn by_ref(&self, inner: &'a TypeDesc<'a>) -> &'a TypeDesc<'a> {
        self.intern(TypeDesc::ByRef(inner))
    }

    pub fn pointer(&self, inner: &'a TypeDesc<'a>) -> &'a TypeDesc<'a> {
        self.intern(TypeDesc::Pointer(inner))
    }

    /// Tuple type. More than [`MAX_TUPLE_ARITY`] elements are folded into a
    /// nested rest tuple in the last position.
    pub fn tuple(&self, elems: &[&'a TypeDesc<'a>]) -> &'a TypeDesc<'a> {
        if elems.len() > MAX_TUPLE_ARITY {
            let (head, tail) = elems.split_at(MAX_TUPLE_ARITY - 1);
            let mut folded = head.to_vec();
            folded.push(self.tuple(tail));
            return self.intern(TypeDesc::Tuple(self.alloc_types(&folded)));
        }
        self.intern(TypeDesc::Tuple(self.alloc_types(elems)))
    }

    /// Declare a top-level type.
    ///
    /// The name may carry an arity suffix (``"Dictionary`2"``), which is
    /// split off and recorded as the number of generic parameters.
    pub fn named(&self, namespace: &str, name: &str) -> &'a TypeDesc<'a> {
        let (name, arity) = split_arity(name);
        self.intern(TypeDesc::Named(NamedType {
            namespace: self.intern_str(namespace),
            name: self.intern_str(name),
            arity,
            declaring: None,
            args: &[],
        }))
    }

    /// Declare a type nested inside `declaring`, which should itself be a
    /// definition (not constructed). Arity suffixes are handled as in
    /// [`named`](Self::named).
    pub fn nested(&self, declaring: &'a TypeDesc<'a>, name: &str) -> &'a TypeDesc<'a> {
        let (name, arity) = split_arity(name);
        let namespace = match declaring {
            TypeDesc::Named(outer) => outer.namespace,
            _ => "",
        };
        self.intern(TypeDesc::Named(NamedType {
            namespace,
            name: self.intern_str(name),
            arity,
            declaring: Some(declaring),
            args: &[],
        }))
    }

    /// Construct a generic definition with the flat list of type arguments for
    /// its whole nesting chain, outermost level first.
    ///
    /// # Panics
    ///
    /// Panics if `definition` is not a named type, or if the number of
    /// arguments differs from the total arity of the nesting chain.
    pub fn construct(
        &self,
        definition: &'a TypeDesc<'a>,
        args: &[&'a TypeDesc<'a>],
    ) -> &'a TypeDesc<'a> {
        let TypeDesc::Named(named) = definition else {
            panic!("cannot apply type arguments to non-named type {definition}");
        };
        let expected = named.total_arity();
        assert_eq!(
            args.len(),
            expected,
            "type `{}` expects {} type argument(s), got {}",
            named.name,
            expected,
            args.len()
        );
        self.intern(TypeDesc::Named(NamedType {
            args: self.alloc_types(args),
            ..*named
        }))
    }
}

/// Split a trailing arity suffix off a declared name: ``"Pair`2"`` becomes
/// `("Pair", 2)`. Names without a well-formed suffix have arity 0, and so do
/// suffixes that do not fit in a `u16`.
fn split_arity(name: &str) -> (&str, usize) {
    match name.rsplit_once('`') {
        Some((base, suffix)) => match suffix.parse::<u16>() {
            Ok(arity) => (base, usize::from(arity)),
            Err(_) => (name, 0),
        },
        None => (name, 0),
    }
}

/// Interning key that compares child descriptors by address.
///
/// Children are already interned, so address equality is structural
/// equality one level down.
#[derive(Clone, Copy)]
struct Shallow<'a>(TypeDesc<'a>);

fn hash_types<H: Hasher>(types: &[&TypeDesc<'_>], state: &mut H) {
    state.write_usize(types.len());
    for &ty in types {
        ptr::hash(ty, state);
    }
}

fn same_types(a: &[&TypeDesc<'_>], b: &[&TypeDesc<'_>]) -> bool {
    a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| ptr::eq(x, y))
}

impl Hash for Shallow<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        core::mem::discriminant(&self.0).hash(state);
        match self.0 {
            TypeDesc::Primitive(primitive) => primitive.hash(state),
            TypeDesc::Array { elem, rank } => {
                ptr::hash(elem, state);
                rank.hash(state);
            }
            TypeDesc::Nullable(inner) | TypeDesc::ByRef(inner) | TypeDesc::Pointer(inner) => {
                ptr::hash(inner, state)
            }
            TypeDesc::Tuple(elems) => hash_types(elems, state),
            TypeDesc::Named(named) => {
                named.namespace.hash(state);
                named.name.hash(state);
                named.arity.hash(state);
                named
                    .declaring
                    .map(|d| d as *const TypeDesc<'_>)
                    .hash(state);
                hash_types(named.args, state);
            }
        }
    }
}

impl PartialEq for Shallow<'_> {
    fn eq(&self, other: &Self) -> bool {
        match (self.0, other.0) {
            (TypeDesc::Primitive(a), TypeDesc::Primitive(b)) => a == b,
            (
                TypeDesc::Array { elem: a, rank: ra },
                TypeDesc::Array { elem: b, rank: rb },
            ) => ptr::eq(a, b) && ra == rb,
            (TypeDesc::Nullable(a), TypeDesc::Nullable(b))
            | (TypeDesc::ByRef(a), TypeDesc::ByRef(b))
            | (TypeDesc::Pointer(a), TypeDesc::Pointer(b)) => ptr::eq(a, b),
            (TypeDesc::Tuple(a), TypeDesc::Tuple(b)) => same_types(a, b),
            (TypeDesc::Named(a), TypeDesc::Named(b)) => {
                a.namespace == b.namespace
                    && a.name == b.name
                    && a.arity == b.arity
                    && match (a.declaring, b.declaring) {
                        (Some(x), Some(y)) => ptr::eq(x, y),
                        (None, None) => true,
                        _ => false,
                    }
                    && same_types(a.args, b.args)
            }
            _ => false,
        }
    }
}

impl Eq for Shallow<'_> {}
