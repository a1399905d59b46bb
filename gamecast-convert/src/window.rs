/// Walk `items` in overlapping windows of `size`, advancing by `step`.
///
/// Windows start at every multiple of `step` below `items.len()`; the
/// trailing windows are shorter when fewer than `size` items remain.
/// Callers must pass a non-zero `step` (checked by [`Converter::new`]).
///
/// [`Converter::new`]: crate::Converter::new
pub fn sliding_windows<T>(items: &[T], size: usize, step: usize) -> impl Iterator<Item = &[T]> {
    debug_assert!(step > 0, "window step must be non-zero");
    (0..items.len())
        .step_by(step.max(1))
        .map(move |start| &items[start..start.saturating_add(size).min(items.len())])
}
