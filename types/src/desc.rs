//! Type descriptors.
//!
//! A [`TypeDesc`] is an immutable description of a type's shape: its name,
//! generic arguments, element type, enclosing type and array rank. Descriptors
//! are normally obtained from a [`TypeRegistry`](crate::TypeRegistry), which
//! interns them so that structurally equal descriptors share one address.

/// Built-in types that are displayed with their keyword spelling.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Primitive {
    Bool,
    /// Unsigned 8-bit integer.
    Byte,
    /// Signed 8-bit integer.
    SByte,
    Short,
    UShort,
    Char,
    Int,
    UInt,
    /// Single-precision float.
    Float,
    Long,
    ULong,
    Double,
    Decimal,
    Object,
    String,
    Void,
}

impl Primitive {
    pub const ALL: [Primitive; 16] = [
        Primitive::Bool,
        Primitive::Byte,
        Primitive::SByte,
        Primitive::Short,
        Primitive::UShort,
        Primitive::Char,
        Primitive::Int,
        Primitive::UInt,
        Primitive::Float,
        Primitive::Long,
        Primitive::ULong,
        Primitive::Double,
        Primitive::Decimal,
        Primitive::Object,
        Primitive::String,
        Primitive::Void,
    ];

    /// The short keyword used when displaying this type.
    pub fn keyword(self) -> &'static str {
        match self {
            Primitive::Bool => "bool",
            Primitive::Byte => "byte",
            Primitive::SByte => "sbyte",
            Primitive::Short => "short",
            Primitive::UShort => "ushort",
            Primitive::Char => "char",
            Primitive::Int => "int",
            Primitive::UInt => "uint",
            Primitive::Float => "float",
            Primitive::Long => "long",
            Primitive::ULong => "ulong",
            Primitive::Double => "double",
            Primitive::Decimal => "decimal",
            Primitive::Object => "object",
            Primitive::String => "string",
            Primitive::Void => "void",
        }
    }
}

/// Logical structure of a type.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TypeDesc<'a> {
    /// Keyword types (`int`, `string`, ...).
    Primitive(Primitive),

    /// Array with `rank` dimensions (always at least 1).
    Array { elem: &'a TypeDesc<'a>, rank: u8 },

    /// Nullable wrapper over a value type, displayed as `T?`.
    Nullable(&'a TypeDesc<'a>),

    /// Tuple with its element types in order.
    Tuple(&'a [&'a TypeDesc<'a>]),

    /// Managed reference to `T`, displayed as `T&`.
    ByRef(&'a TypeDesc<'a>),

    /// Unmanaged pointer to `T`, displayed as `T*`.
    Pointer(&'a TypeDesc<'a>),

    /// User-declared type, possibly generic and/or nested.
    Named(NamedType<'a>),
}

/// A declared type.
///
/// For nested generic types, `args` holds the type arguments of the whole
/// construction in declaration order, outermost level first. Each level owns
/// `arity` of them: the innermost level takes the trailing slice, its
/// declaring type the slice just before it, and so on. Generic definitions
/// (types that have not been constructed) carry no arguments at all.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct NamedType<'a> {
    /// Namespace or module path. Only meaningful for top-level types.
    pub namespace: &'a str,

    /// Declared name, without any arity suffix.
    pub name: &'a str,

    /// Number of generic parameters declared by this level.
    pub arity: usize,

    /// Enclosing type for nested types.
    pub declaring: Option<&'a TypeDesc<'a>>,

    /// Flat list of type arguments for the full construction.
    pub args: &'a [&'a TypeDesc<'a>],
}

impl<'a> NamedType<'a> {
    /// Sum of the arities of this level and all enclosing levels.
    pub fn total_arity(&self) -> usize {
        let mut total = self.arity;
        let mut current = self.declaring;
        while let Some(TypeDesc::Named(named)) = current {
            total = total
                .checked_add(named.arity)
                .expect("total arity of nesting chain overflows usize");
            current = named.declaring;
        }
        total
    }
}

impl<'a> TypeDesc<'a> {
    /// Flat generic arguments of a constructed named type, empty otherwise.
    pub fn type_args(&self) -> &'a [&'a TypeDesc<'a>] {
        match self {
            TypeDesc::Named(named) => named.args,
            _ => &[],
        }
    }

    /// Element type of arrays, nullable wrappers, references and pointers.
    pub fn element(&self) -> Option<&'a TypeDesc<'a>> {
        match *self {
            TypeDesc::Array { elem, .. } => Some(elem),
            TypeDesc::Nullable(inner) | TypeDesc::ByRef(inner) | TypeDesc::Pointer(inner) => {
                Some(inner)
            }
            _ => None,
        }
    }

    /// Enclosing type of a nested named type.
    pub fn declaring(&self) -> Option<&'a TypeDesc<'a>> {
        match self {
            TypeDesc::Named(named) => named.declaring,
            _ => None,
        }
    }

    /// Array rank, or `None` for non-array types.
    pub fn rank(&self) -> Option<u8> {
        match self {
            TypeDesc::Array { rank, .. } => Some(*rank),
            _ => None,
        }
    }

    pub fn is_nested(&self) -> bool {
        self.declaring().is_some()
    }

    /// Check if this is a generic named type that still lacks its arguments.
    pub fn is_generic_definition(&self) -> bool {
        match self {
            TypeDesc::Named(named) => named.args.is_empty() && named.total_arity() > 0,
            _ => false,
        }
    }
}
