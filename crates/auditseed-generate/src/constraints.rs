use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_regex::Regex as RandRegex;
use regex::Regex;

use auditseed_core::ColumnSpec;

use crate::errors::AugmentError;

const DEFAULT_MAX_REPEAT: u32 = 32;

/// Outcome of enforcing validation rules on one generated cell.
#[derive(Debug, Clone, PartialEq)]
pub enum CellOutcome {
    Value(String),
    Reject,
}

/// Column spec with its pattern machinery compiled once per run.
///
/// The sampler draws fresh strings from the pattern; the verifier re-checks
/// the final value with `^(?:pattern)$` after truncation/padding.
pub struct CompiledColumn {
    pub spec: ColumnSpec,
    sampler: Option<RandRegex>,
    verifier: Option<Regex>,
}

impl CompiledColumn {
    pub fn compile(spec: &ColumnSpec) -> Result<CompiledColumn, AugmentError> {
        let (sampler, verifier) = match spec.validate_rules.pattern.as_deref() {
            Some(pattern) => {
                // the sampler rejects anchors; the verifier reapplies them
                let sampler = RandRegex::compile(strip_anchors(pattern), DEFAULT_MAX_REPEAT)
                    .map_err(|err| {
                        AugmentError::InvalidPattern(format!(
                            "{}: {err}",
                            spec.database_column
                        ))
                    })?;
                let verifier = Regex::new(&format!("^(?:{pattern})$")).map_err(|err| {
                    AugmentError::InvalidPattern(format!("{}: {err}", spec.database_column))
                })?;
                (Some(sampler), Some(verifier))
            }
            None => (None, None),
        };

        Ok(CompiledColumn {
            spec: spec.clone(),
            sampler,
            verifier,
        })
    }

    /// Apply the validation rules to a raw generated value, in order:
    /// pattern regeneration, truncation, padding, pattern re-check,
    /// required check. Each stage consumes the previous stage's output.
    pub fn enforce(&self, raw: String, rng: &mut ChaCha8Rng) -> CellOutcome {
        let rules = &self.spec.validate_rules;
        let mut value = raw;

        // pattern takes precedence over type-based generation
        if let Some(sampler) = &self.sampler {
            value = rng.sample(sampler);
        }

        if let Some(max_length) = rules.max_length {
            let max_length = max_length as usize;
            if value.chars().count() > max_length {
                value = value.chars().take(max_length).collect();
            }
        }

        if let Some(min_length) = rules.min_length {
            let min_length = min_length as usize;
            let mut length = value.chars().count();
            while length < min_length {
                value.push('X');
                length += 1;
            }
        }

        // truncation/padding can break the pattern; a broken value resets
        // to empty rather than surviving partially valid
        if let Some(verifier) = &self.verifier {
            if !verifier.is_match(&value) {
                value.clear();
            }
        }

        if rules.required && value.is_empty() {
            return CellOutcome::Reject;
        }

        CellOutcome::Value(value)
    }
}

fn strip_anchors(pattern: &str) -> &str {
    let pattern = pattern.strip_prefix('^').unwrap_or(pattern);
    if pattern.ends_with('$') && !pattern.ends_with("\\$") {
        &pattern[..pattern.len() - 1]
    } else {
        pattern
    }
}
