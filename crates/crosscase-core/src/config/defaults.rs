/// Frequency filtering is off unless a caller opts in.
pub const DEFAULT_PERCENTAGE_THRESHOLD: u32 = 0;
