// Author: Eshan Roy
// SPDX-License-Identifier: MIT

//! Default configuration values.

use super::schema::GczConfig;

/// Get the default configuration.
pub fn default_config() -> GczConfig {
    GczConfig::default()
}

/// Generate an example configuration file.
pub fn example_config() -> &'static str {
    r#"# gcz configuration

[commit]
# "conventional_commits" or "customize"
convention = "conventional_commits"
signoff = false
retry_after_failure = false
extra_args = []

[conventional]
max_subject_length = 72
types = [
    { value = "fix", description = "A bug fix. Correlates with PATCH in SemVer" },
    { value = "feat", description = "A new feature. Correlates with MINOR in SemVer" },
    { value = "docs", description = "Documentation only changes" },
    { value = "style", description = "Changes that do not affect the meaning of the code" },
    { value = "refactor", description = "A code change that neither fixes a bug nor adds a feature" },
    { value = "perf", description = "A code change that improves performance" },
    { value = "test", description = "Adding missing or correcting existing tests" },
    { value = "build", description = "Changes that affect the build system or external dependencies" },
    { value = "ci", description = "Changes to CI configuration files and scripts" },
]

# Used when commit.convention = "customize"
[customize]
message_template = "{{change_type}}:{{#if show_message}} {{message}}{{/if}}"

[[customize.questions]]
type = "list"
name = "change_type"
message = "Select the type of change you are committing"
choices = [
    { value = "feature", name = "feature: A new feature." },
    { value = "bug fix", name = "bug fix: A bug fix." },
]

[[customize.questions]]
type = "input"
name = "message"
message = "Body."

[[customize.questions]]
type = "confirm"
name = "show_message"
message = "Do you want to add body message in commit?"
default = true

[ui]
color = true
"#
}
