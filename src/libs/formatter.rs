//! Display formatting helpers for terminal output.

/// Formats whole rupees with Indian digit grouping, e.g. `₹12,34,567`.
///
/// The last three digits form one group and the rest pair off, which is the
/// en-IN convention rather than the western three-by-three grouping.
pub fn format_inr(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    let digits = amount.unsigned_abs().to_string();

    if digits.len() <= 3 {
        return format!("{}₹{}", sign, digits);
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{}₹{},{}", sign, groups.join(","), tail)
}
