/// Alias to a scalar floating type.
///
/// NOTE: utilities, alpha values and probabilities are kept in `f64`, objective values are integral.
pub type Float = f64;
