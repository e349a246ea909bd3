/// Builds the analyst prompt sent to the summarizer for a pair of query
/// revisions.
pub fn build_prompt(original: &str, updated: &str) -> String {
    format!(
        "You are a Microsoft Sentinel security analyst reviewing changes to a KQL analytic rule. \
Analyze the differences between the original and updated queries and provide a clear, concise summary.

ORIGINAL QUERY:
{original}

UPDATED QUERY:
{updated}

Provide a summary that includes:
1. A brief overview of what changed
2. The security impact or purpose of the changes
3. Any potential issues or improvements

Keep the response professional and focused on operational impact for an MSSP team."
    )
}
