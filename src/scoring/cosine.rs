// Cosine similarity over zero-padded vectors.
//
// Word vectors differ in length whenever the two words have a different
// number of phonemes (or the tables a different feature count). The shorter
// vector is treated as if right-padded with zeros:
//
//   cos = (a · b) / (|a| * |b|)
//
// Padding adds nothing to the dot product or to either norm, so it is
// applied implicitly by zipping over the common prefix.

/// Cosine similarity of two vectors, zero-padding the shorter one.
///
/// Returns NaN when either vector has zero magnitude (including empty
/// vectors): the similarity is undefined there and callers treat it the same
/// way as a skipped pair.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
    let dot: f64 = a.iter().zip(b.iter()).map(|(x, y)| x * y).sum();
    let mag_a: f64 = a.iter().map(|x| x * x).sum::<f64>().sqrt();
    let mag_b: f64 = b.iter().map(|x| x * x).sum::<f64>().sqrt();

    let denom = mag_a * mag_b;
    if denom == 0.0 {
        return f64::NAN;
    }
    // Rounding can push identical vectors a hair past 1.0
    (dot / denom).clamp(-1.0, 1.0)
}

/// Right-pad `v` with zeros up to `len`. Vectors already at least that long
/// are returned unchanged.
pub fn zero_pad(mut v: Vec<f64>, len: usize) -> Vec<f64> {
    if v.len() < len {
        v.resize(len, 0.0);
    }
    v
}
