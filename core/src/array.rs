//! Helpers for rectangular and jagged arrays.

use core::fmt::{Display, Write};

use crate::error::GuardError;

/// Returns an iterator over the `column`-th element of every row.
///
/// Rows shorter than `column + 1` yield `None`. The column must be below the
/// length of the longest row, otherwise an out-of-range error named
/// `"column"` is returned (always the case when there are no rows).
///
/// ```
/// use warden_core::array::get_column;
///
/// let rows = vec![vec![1, 2, 3], vec![4], vec![5, 6]];
/// let column: Vec<_> = get_column(&rows, 1).unwrap().collect();
/// assert_eq!(column, [Some(&2), None, Some(&6)]);
/// assert!(get_column(&rows, 3).is_err());
/// ```
pub fn get_column<'r, T, R>(
    rows: &'r [R],
    column: usize,
) -> Result<impl Iterator<Item = Option<&'r T>> + 'r, GuardError>
where
    T: 'r,
    R: AsRef<[T]>,
{
    let width = rows.iter().map(|row| row.as_ref().len()).max().unwrap_or(0);
    if column >= width {
        return Err(GuardError::out_of_range(
            "column",
            format!("Parameter \"column\" must be less than {width}, was {column}"),
        ));
    }
    Ok(rows.iter().map(move |row| row.as_ref().get(column)))
}

/// Renders a flat array as `[1,\t2,\t3]`.
pub fn to_array_string<T: Display>(items: &[T]) -> String {
    let mut out = String::new();
    write_row(&mut out, items);
    out
}

/// Renders an array of rows, one row per line:
///
/// ```
/// use warden_core::array::to_jagged_string;
///
/// let rows = [vec![1, 2], vec![3]];
/// assert_eq!(to_jagged_string(&rows), "[[1,\t2],\n [3]]");
/// ```
pub fn to_jagged_string<T, R>(rows: &[R]) -> String
where
    T: Display,
    R: AsRef<[T]>,
{
    let mut out = String::from("[");
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            out.push_str(",\n ");
        }
        write_row(&mut out, row.as_ref());
    }
    out.push(']');
    out
}

fn write_row<T: Display>(out: &mut String, items: &[T]) {
    out.push('[');
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(",\t");
        }
        let _ = write!(out, "{item}");
    }
    out.push(']');
}
