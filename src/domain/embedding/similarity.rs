/// Cosine similarity between two vectors of equal length.
///
/// Returns 0.0 when either vector has zero magnitude. Callers are expected to
/// have checked dimensionality already; mismatched lengths also yield 0.0.
///
/// Sums are accumulated in f64 so squaring large f32 components cannot overflow.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() || a.is_empty() {
        return 0.0;
    }

    let mut dot_product = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;

    for (&x, &y) in a.iter().zip(b.iter()) {
        let (x, y) = (f64::from(x), f64::from(y));
        dot_product += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot_product / (norm_a.sqrt() * norm_b.sqrt())) as f32
}
