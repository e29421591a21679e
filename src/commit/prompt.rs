//! Prompt construction for AI-generated commit messages.

use super::Hint;

/// Literal fence placed on the lines before and after the diff.
pub const DIFF_FENCE: &str = r"\\\ diff";

const HINT_SLOT: &str = "{hint}";
const DIFF_SLOT: &str = "{diff}";

/// Instruction template. `{hint}` and `{diff}` are the only substitution points.
pub const PROMPT_TEMPLATE: &str = r#"You are an AI assistant specialized in generating concise, single-line Conventional Commit messages from git diffs.
Your **sole task** is to produce a commit message.
The **primary and strongly preferred output** is a single line adhering to this exact format:
<emoji> <type>(<scope>): <short description>
e.g., 🐛 fix(parser): Correct off-by-one error in tokenization

**Body and Footer (AVOID unless absolutely CRITICAL):**
*   Only include a body or footer if the changes are exceptionally complex AND a single subject line is **demonstrably insufficient** to convey a **vital aspect** (e.g., a significant BREAKING CHANGE that cannot be summarized or hinted at, or an essential issue link).
*   **Your default behavior must be to summarize everything into the single subject line.**
*   If unavoidable, separate the body/footer with blank lines as per the specification.

Available types and their emojis (choose one for the subject line):
- feat: ✨ (A new feature)
- fix: 🐛 (A bug fix)
- docs: 📚 (Documentation only changes)
- style: 💎 (Changes that do not affect the meaning of the code)
- refactor: ♻️ (Code change that neither fixes a bug nor adds a feature)
- perf: ⚡️ (Code change that improves performance)
- test: ✅ (Adding or correcting tests)
- build: 📦 (Changes to build system or external dependencies)
- ci: ⚙️ (Changes to CI configuration)
- chore: 🧹 (Other changes not modifying src or test files)
- revert: ⏪ (Reverts a previous commit)

Guidelines for the **single subject line**:
1.  **Summarize the Core Change**: Identify the primary purpose/goal of the entire diff.
2.  **Imperative Mood**: Start with a verb (e.g., 'Add', 'Fix', 'Update', 'Refactor').
3.  **Conciseness**: Aim for 50-72 characters. Be brief but informative.
4.  **No Period**: Do not end the subject line with a period.
5.  **Scope (Optional)**: If applicable, a noun describing the affected area (e.g., 'api', 'ui', 'auth').
6.  **Emoji & Type**: Select the most fitting type and its emoji.
7.  **Focus**: Prioritize the overall *intent* and *impact*, not granular file-by-file details. Distill the essence of the changes.{hint}
Here is the git diff of the changes:
\\\ diff
{diff}
\\\ diff
Based ONLY on the diff provided, generate the commit message.
**Your response should be ONLY the commit message itself, with NO additional text, explanation, or markdown formatting surrounding it.**
**Strive for a single line. Every time.**"#;

/// Build the LLM prompt for generating a commit message.
///
/// The diff is inserted verbatim between the two [`DIFF_FENCE`] lines. A hint,
/// when given, becomes one extra instruction paragraph ahead of the diff.
pub fn build_commit_prompt(hint: &Hint, diff: &str) -> String {
    let hint_block = hint
        .as_deref()
        .map(format_hint_block)
        .unwrap_or_default();

    fill_template(PROMPT_TEMPLATE, &hint_block, diff)
}

fn format_hint_block(hint: &str) -> String {
    format!(
        "\nUser-provided hint/context for this commit: {hint}\n\
         Please take this hint into account when generating the commit message.\n"
    )
}

/// Substitute both slots in one left-to-right pass.
///
/// Substituted text is never rescanned, so a diff containing `{hint}` stays
/// as written.
fn fill_template(template: &str, hint: &str, diff: &str) -> String {
    let mut out = String::with_capacity(template.len() + hint.len() + diff.len());
    let mut rest = template;

    while let Some(idx) = rest.find('{') {
        out.push_str(&rest[..idx]);
        let tail = &rest[idx..];

        if let Some(after) = tail.strip_prefix(HINT_SLOT) {
            out.push_str(hint);
            rest = after;
        } else if let Some(after) = tail.strip_prefix(DIFF_SLOT) {
            out.push_str(diff);
            rest = after;
        } else {
            out.push('{');
            rest = &tail[1..];
        }
    }

    out.push_str(rest);
    out
}
