//! Human-readable type names.
//!
//! Rendering rules, in priority order:
//!
//! - references and pointers print their target followed by `&` or one `*`
//!   per level of indirection (`int**`);
//! - primitives print their keyword (`int`, `string`, ...);
//! - arrays print `T[]`, with `rank - 1` commas for multi-dimensional arrays
//!   (`int[,]`);
//! - nullable wrappers print `T?`;
//! - tuples print `(T1, T2)`;
//! - named types print `Namespace.Name`, generic ones `Name<T1, T2>`, and
//!   nested ones `Outer.Inner` with the generic arguments of each level.
//!
//! For cached, thread-safe lookups use [`DisplayNames`](crate::DisplayNames).

use crate::desc::{NamedType, TypeDesc};
use core::fmt::{self, Write};

/// Format a type as a human-readable string, without caching.
pub fn format_type(ty: &TypeDesc<'_>) -> String {
    let mut buf = String::new();
    format_type_into(ty, &mut buf);
    buf
}

/// Format a type into an existing string buffer.
pub fn format_type_into(ty: &TypeDesc<'_>, buf: &mut String) {
    format_level(ty, 0, ty.type_args(), buf);
}

/// Format one level of a type.
///
/// `args` is the flat argument list of the outermost constructed type being
/// printed and `offset` counts how many trailing arguments were already
/// consumed by nested levels below this one.
fn format_level<'a>(
    ty: &TypeDesc<'a>,
    offset: usize,
    args: &[&'a TypeDesc<'a>],
    buf: &mut String,
) {
    match *ty {
        TypeDesc::ByRef(inner) => {
            format_type_into(inner, buf);
            buf.push('&');
        }
        TypeDesc::Pointer(_) => {
            let mut depth = 0;
            let mut current = ty;
            while let TypeDesc::Pointer(inner) = *current {
                depth += 1;
                current = inner;
            }
            format_type_into(current, buf);
            buf.extend(core::iter::repeat_n('*', depth));
        }
        TypeDesc::Primitive(primitive) => buf.push_str(primitive.keyword()),
        TypeDesc::Array { elem, rank } => {
            format_type_into(elem, buf);
            buf.push('[');
            buf.extend(core::iter::repeat_n(',', usize::from(rank.max(1)) - 1));
            buf.push(']');
        }
        TypeDesc::Nullable(inner) => {
            format_type_into(inner, buf);
            buf.push('?');
        }
        TypeDesc::Tuple(elems) => {
            buf.push('(');
            format_list(elems, buf);
            buf.push(')');
        }
        TypeDesc::Named(ref named) => format_named(named, offset, args, buf),
    }
}

fn format_named<'a>(
    named: &NamedType<'a>,
    offset: usize,
    args: &[&'a TypeDesc<'a>],
    buf: &mut String,
) {
    // This level owns the `arity` arguments just before those already taken
    // by nested levels.
    let own = if named.arity == 0 || args.is_empty() {
        None
    } else {
        let end = args.len().checked_sub(offset);
        let start = end.and_then(|end| end.checked_sub(named.arity));
        let (Some(start), Some(end)) = (start, end) else {
            panic!(
                "type arguments of `{}` exhausted: {} supplied, {} used by nested types, {} declared",
                named.name,
                args.len(),
                offset,
                named.arity
            );
        };
        Some(&args[start..end])
    };

    match named.declaring {
        Some(declaring) => {
            let consumed = offset
                .checked_add(named.arity)
                .expect("total arity of nesting chain overflows usize");
            format_level(declaring, consumed, args, buf);
            buf.push('.');
        }
        None if !named.namespace.is_empty() => {
            buf.push_str(named.namespace);
            buf.push('.');
        }
        None => {}
    }

    buf.push_str(named.name);
    match own {
        Some(own) => {
            buf.push('<');
            format_list(own, buf);
            buf.push('>');
        }
        // Generic definitions have no arguments yet: print placeholder
        // parameters, `Name<T>` or `Name<T1, T2>`.
        None if named.arity == 1 => buf.push_str("<T>"),
        None if named.arity > 1 => {
            buf.push('<');
            for i in 1..=named.arity {
                if i > 1 {
                    buf.push_str(", ");
                }
                let _ = write!(buf, "T{i}");
            }
            buf.push('>');
        }
        None => {}
    }
}

fn format_list(types: &[&TypeDesc<'_>], buf: &mut String) {
    for (i, ty) in types.iter().enumerate() {
        if i > 0 {
            buf.push_str(", ");
        }
        format_type_into(ty, buf);
    }
}

impl fmt::Display for TypeDesc<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&format_type(self))
    }
}
