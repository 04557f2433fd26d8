/// Display colors for dependencies, assigned in discovery order.
///
/// The palette is fixed at eight entries and reused cyclically: the ninth
/// dependency gets the first color again. Repetition past eight dependencies
/// is expected.
pub const PALETTE: [&str; 8] = [
    "#e6194b", "#3cb44b", "#4363d8", "#f58231", "#911eb4", "#42d4f4", "#f032e6", "#9a6324",
];

/// Color for the dependency discovered at `index` (zero-based).
pub fn color_for(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}
