//! Single-pass grouping of classified elements into header/content runs.

use serde::{Deserialize, Serialize};

use crate::model::{ClassifiedElement, Role};

/// What to do with content that appears before the first header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PreamblePolicy {
    /// Collect it into a leading section without a header
    #[default]
    Collect,
    /// Discard it
    Drop,
    /// Treat the first non-blank element as a header (e.g. the name on a CV)
    PromoteFirst,
}

/// One header followed by its content, or the headerless preamble.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Run {
    /// The header element; `None` only for the preamble run
    pub header: Option<ClassifiedElement>,
    /// Content elements in reading order
    pub content: Vec<ClassifiedElement>,
}

impl Run {
    fn preamble() -> Self {
        Self {
            header: None,
            content: Vec::new(),
        }
    }

    fn headed(header: ClassifiedElement) -> Self {
        Self {
            header: Some(header),
            content: Vec::new(),
        }
    }

    /// Check if this is the headerless leading run.
    pub fn is_preamble(&self) -> bool {
        self.header.is_none()
    }

    /// Order index of the header, if any.
    pub fn header_index(&self) -> Option<usize> {
        self.header.as_ref().map(ClassifiedElement::order_index)
    }
}

/// Partitions a classified stream into runs.
#[derive(Debug, Clone, Copy, Default)]
pub struct SectionGrouper {
    policy: PreamblePolicy,
}

impl SectionGrouper {
    /// Create a grouper with the given preamble policy.
    pub fn new(policy: PreamblePolicy) -> Self {
        Self { policy }
    }

    /// The preamble policy in effect.
    pub fn policy(&self) -> PreamblePolicy {
        self.policy
    }

    /// Group elements (already in reading order) into runs.
    ///
    /// A header always opens a new run, even if the previous run has no
    /// content, so consecutive headers yield empty sections.
    pub fn group(&self, classified: Vec<ClassifiedElement>) -> Vec<Run> {
        let mut runs = Vec::new();
        let mut current = Run::preamble();
        let mut promote = self.policy == PreamblePolicy::PromoteFirst;

        for mut item in classified {
            // blank text is never a header, so promotion waits for real text
            if promote && !item.text().is_empty() {
                item.role = Role::Header;
                promote = false;
            }

            match item.role {
                Role::Header => {
                    let finished = std::mem::replace(&mut current, Run::headed(item));
                    self.close(finished, &mut runs);
                }
                Role::Content => current.content.push(item),
            }
        }

        self.close(current, &mut runs);
        runs
    }

    fn close(&self, run: Run, runs: &mut Vec<Run>) {
        if !run.is_preamble() {
            runs.push(run);
            return;
        }

        if run.content.is_empty() {
            return;
        }

        match self.policy {
            PreamblePolicy::Collect => runs.push(run),
            PreamblePolicy::Drop | PreamblePolicy::PromoteFirst => {
                log::debug!("Dropping {} preamble elements", run.content.len());
            }
        }
    }
}
