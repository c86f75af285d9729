use serde::Serialize;

/// Resolves an offset/limit window against a list of `len` items.
///
/// Returns the half-open index range to keep, or `None` when the window is
/// empty. Negative offsets start at zero and negative limits select nothing.
fn window(len: usize, offset: i64, limit: i64) -> Option<(usize, usize)> {
    let start = usize::try_from(offset.max(0)).unwrap_or(usize::MAX);
    if start >= len {
        return None;
    }

    let limit = usize::try_from(limit).ok()?;
    let end = start.saturating_add(limit).min(len);

    if end > start { Some((start, end)) } else { None }
}

/// Returns the `[offset, offset + limit)` slice of `items`, clamped to bounds.
pub fn paginate<T>(items: Vec<T>, offset: i64, limit: i64) -> Vec<T> {
    match window(items.len(), offset, limit) {
        Some((start, end)) => items.into_iter().skip(start).take(end - start).collect(),
        None => Vec::new(),
    }
}

/// A single page of results wrapped the way the envelope expects it.
#[derive(Debug, Serialize)]
pub struct Page<T> {
    pub data: Vec<T>,
}

impl<T> Page<T> {
    pub fn new(items: Vec<T>, offset: i64, limit: i64) -> Self {
        Self {
            data: paginate(items, offset, limit),
        }
    }
}
