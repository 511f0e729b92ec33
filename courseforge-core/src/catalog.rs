//! The module catalog: five lookup tables keyed by module number.
//!
//! The built-in catalog carries the reference curriculum (30 modules, six
//! tracks of five). A catalog can also be loaded from a YAML file with the
//! same table structure, which lets workshops maintain their own module
//! lists without rebuilding the tool.

use std::collections::btree_map::Entry;
use std::collections::{BTreeMap, BTreeSet};
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::error::{CatalogError, DescriptorTable};
use crate::types::ModuleDescriptor;

/// Reference curriculum compiled into the binary:
/// (number, track, title, description, difficulty, duration minutes).
const MODULES: &[(u8, &str, &str, &str, &str, u32)] = &[
    (
        1,
        "fundamentals",
        "Getting Started with AI Pair Programming",
        "Set up your AI assistant, learn the core interaction loop, and ship your first assisted change.",
        "foundation",
        90,
    ),
    (
        2,
        "fundamentals",
        "Effective Prompting for Developers",
        "Write prompts that produce usable code on the first pass by giving the assistant the right context.",
        "foundation",
        120,
    ),
    (
        3,
        "fundamentals",
        "AI-Assisted Refactoring Basics",
        "Use the assistant to restructure code safely with small, reviewable, behavior-preserving steps.",
        "foundation",
        120,
    ),
    (
        4,
        "fundamentals",
        "Test Generation Fundamentals",
        "Generate meaningful unit tests with AI and learn to spot the assertions that prove nothing.",
        "application",
        120,
    ),
    (
        5,
        "fundamentals",
        "Documentation and Code Explanation",
        "Turn the assistant into a documentation partner for READMEs, doc comments, and onboarding notes.",
        "application",
        90,
    ),
    (
        6,
        "intermediate",
        "API Development with AI",
        "Design and build a production-quality REST API with an AI pair programmer, from endpoint sketches to integration tests.",
        "application",
        150,
    ),
    (
        7,
        "intermediate",
        "Database Design and Migrations",
        "Model schemas, write migrations, and review query plans with AI assistance.",
        "application",
        150,
    ),
    (
        8,
        "intermediate",
        "Frontend Component Workflows",
        "Build accessible UI components faster by pairing the assistant with your design system.",
        "application",
        120,
    ),
    (
        9,
        "intermediate",
        "AI-Assisted Code Review",
        "Run AI review passes before human review and calibrate which findings to trust.",
        "application",
        120,
    ),
    (
        10,
        "intermediate",
        "Legacy Code Modernization",
        "Characterize, test, and incrementally modernize a legacy codebase with AI support.",
        "mastery",
        180,
    ),
    (
        11,
        "advanced",
        "Architecture Decisions with AI",
        "Use the assistant as a sparring partner for design documents, trade-off tables, and ADRs.",
        "mastery",
        180,
    ),
    (
        12,
        "advanced",
        "Performance Profiling and Optimization",
        "Profile real workloads, interpret flame graphs with AI help, and validate optimizations with benchmarks.",
        "application",
        150,
    ),
    (
        13,
        "advanced",
        "Security Review Workflows",
        "Drive threat modeling and dependency audits with AI while keeping a human in the approval loop.",
        "mastery",
        180,
    ),
    (
        14,
        "advanced",
        "Multi-Service Debugging",
        "Trace failures across service boundaries using AI to correlate logs, traces, and recent changes.",
        "application",
        150,
    ),
    (
        15,
        "advanced",
        "Advanced Testing Strategies",
        "Layer property-based, contract, and end-to-end tests with AI-generated cases that earn their runtime.",
        "mastery",
        180,
    ),
    (
        16,
        "enterprise",
        "Team Onboarding Playbooks",
        "Build repeatable AI-assisted onboarding paths that get new engineers productive in days.",
        "application",
        120,
    ),
    (
        17,
        "enterprise",
        "Governance and Compliance Guardrails",
        "Define usage policies, audit trails, and review gates for AI-assisted changes in regulated teams.",
        "mastery",
        180,
    ),
    (
        18,
        "enterprise",
        "CI/CD Integration Patterns",
        "Wire AI checks into pipelines so generated code meets the same bar as hand-written code.",
        "application",
        150,
    ),
    (
        19,
        "enterprise",
        "Knowledge Base Curation",
        "Curate the internal context that makes assistants accurate: docs, conventions, and examples.",
        "application",
        120,
    ),
    (
        20,
        "enterprise",
        "Measuring Developer Productivity",
        "Pick metrics that survive Goodhart's law and measure what AI assistance actually changes.",
        "mastery",
        150,
    ),
    (
        21,
        "ai-agents",
        "Introduction to Agentic Workflows",
        "Understand when to move from single-shot assistance to autonomous multi-step agents.",
        "foundation",
        120,
    ),
    (
        22,
        "ai-agents",
        "Building MCP Servers",
        "Implement a Model Context Protocol server that exposes your team's tools to agents.",
        "application",
        180,
    ),
    (
        23,
        "ai-agents",
        "Agent Orchestration Patterns",
        "Coordinate planner, worker, and reviewer agents without losing determinism or auditability.",
        "mastery",
        180,
    ),
    (
        24,
        "ai-agents",
        "Saga Patterns for Agent Pipelines",
        "Apply compensating-transaction patterns so multi-step agent work can fail safely.",
        "mastery",
        180,
    ),
    (
        25,
        "ai-agents",
        "Evaluating Agent Output",
        "Build evaluation harnesses that catch agent regressions before your users do.",
        "application",
        150,
    ),
    (
        26,
        "mastery",
        "End-to-End Feature Delivery",
        "Deliver a complete feature with AI assistance at every stage, from ticket to production.",
        "mastery",
        240,
    ),
    (
        27,
        "mastery",
        "Prompt Engineering Deep Dive",
        "Dissect what actually moves model output quality and build a personal prompt library.",
        "mastery",
        180,
    ),
    (
        28,
        "mastery",
        "Custom Tooling and Extensions",
        "Extend your AI environment with custom commands, hooks, and project-specific skills.",
        "mastery",
        210,
    ),
    (
        29,
        "mastery",
        "Capstone Project Workshop",
        "Plan and execute a capstone project that exercises every track of the curriculum.",
        "mastery",
        240,
    ),
    (
        30,
        "mastery",
        "Certification and Next Steps",
        "Review the full curriculum, complete the certification checklist, and plan what to learn next.",
        "application",
        120,
    ),
];

/// The five descriptor lookup tables, keyed by module number.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Catalog {
    /// Module number → track value.
    #[serde(default)]
    pub tracks: BTreeMap<u8, String>,

    /// Module number → title.
    #[serde(default)]
    pub titles: BTreeMap<u8, String>,

    /// Module number → one-sentence description.
    #[serde(default)]
    pub descriptions: BTreeMap<u8, String>,

    /// Module number → difficulty value.
    #[serde(default)]
    pub difficulties: BTreeMap<u8, String>,

    /// Module number → estimated duration in minutes.
    #[serde(default)]
    pub durations: BTreeMap<u8, u32>,
}

impl Catalog {
    /// The built-in reference curriculum.
    #[must_use]
    pub fn builtin() -> Self {
        let mut catalog = Self::default();
        for &(number, track, title, description, difficulty, duration) in MODULES {
            catalog.tracks.insert(number, track.to_string());
            catalog.titles.insert(number, title.to_string());
            catalog.descriptions.insert(number, description.to_string());
            catalog.difficulties.insert(number, difficulty.to_string());
            catalog.durations.insert(number, duration);
        }
        catalog
    }

    /// Parses a catalog from YAML.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Yaml` if the content is not a valid catalog
    /// document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, CatalogError> {
        let catalog: Self = serde_yaml::from_str(yaml)?;
        Ok(catalog)
    }

    /// Loads a catalog from a YAML file.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Io` if the file cannot be read and
    /// `CatalogError::Yaml` if it cannot be parsed.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&content)
    }

    /// Resolves the full descriptor for one module.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::MissingDescriptor` naming the first table
    /// that lacks an entry for `module`.
    pub fn descriptor(&self, module: u8) -> Result<ModuleDescriptor, CatalogError> {
        let missing = |table| CatalogError::MissingDescriptor { module, table };

        let track = self
            .tracks
            .get(&module)
            .ok_or_else(|| missing(DescriptorTable::Track))?;
        let title = self
            .titles
            .get(&module)
            .ok_or_else(|| missing(DescriptorTable::Title))?;
        let description = self
            .descriptions
            .get(&module)
            .ok_or_else(|| missing(DescriptorTable::Description))?;
        let difficulty = self
            .difficulties
            .get(&module)
            .ok_or_else(|| missing(DescriptorTable::Difficulty))?;
        let duration_minutes = *self
            .durations
            .get(&module)
            .ok_or_else(|| missing(DescriptorTable::Duration))?;

        Ok(ModuleDescriptor {
            number: module,
            track: track.clone(),
            title: title.clone(),
            description: description.clone(),
            difficulty: difficulty.clone(),
            duration_minutes,
        })
    }

    /// All module numbers present in any of the five tables, ascending.
    #[must_use]
    pub fn module_numbers(&self) -> Vec<u8> {
        let mut numbers: BTreeSet<u8> = BTreeSet::new();
        numbers.extend(self.tracks.keys());
        numbers.extend(self.titles.keys());
        numbers.extend(self.descriptions.keys());
        numbers.extend(self.difficulties.keys());
        numbers.extend(self.durations.keys());
        numbers.into_iter().collect()
    }

    /// Checks every module in `numbers` for completeness across the five
    /// tables and for track-block convention violations.
    #[must_use]
    pub fn validate(&self, numbers: &[u8]) -> CatalogValidation {
        let mut validation = CatalogValidation::default();

        for &module in numbers {
            for (table, present) in [
                (DescriptorTable::Track, self.tracks.contains_key(&module)),
                (DescriptorTable::Title, self.titles.contains_key(&module)),
                (
                    DescriptorTable::Description,
                    self.descriptions.contains_key(&module),
                ),
                (
                    DescriptorTable::Difficulty,
                    self.difficulties.contains_key(&module),
                ),
                (
                    DescriptorTable::Duration,
                    self.durations.contains_key(&module),
                ),
            ] {
                if !present {
                    validation.missing.push(MissingEntry { module, table });
                }
            }
        }

        validation.track_warnings = self.track_block_warnings(numbers);
        validation
    }

    /// Track assignment is contiguous in blocks of five by convention.
    /// Modules whose track differs from the first module of their block
    /// get a warning.
    fn track_block_warnings(&self, numbers: &[u8]) -> Vec<TrackWarning> {
        let mut warnings = Vec::new();
        let mut block_track: BTreeMap<u8, &String> = BTreeMap::new();

        for &module in numbers {
            let Some(track) = self.tracks.get(&module) else {
                continue;
            };
            let block = module.saturating_sub(1) / 5;
            match block_track.entry(block) {
                Entry::Vacant(slot) => {
                    slot.insert(track);
                }
                Entry::Occupied(slot) => {
                    let expected = *slot.get();
                    if expected != track {
                        warnings.push(TrackWarning {
                            module,
                            track: track.clone(),
                            expected: expected.clone(),
                        });
                    }
                }
            }
        }

        warnings
    }
}

/// A missing entry in one of the five tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingEntry {
    /// Module number with the missing entry.
    pub module: u8,
    /// Table the entry is missing from.
    pub table: DescriptorTable,
}

/// A module whose track breaks the blocks-of-five convention.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackWarning {
    /// Module number with the unexpected track.
    pub module: u8,
    /// Track the module actually has.
    pub track: String,
    /// Track the rest of its block uses.
    pub expected: String,
}

/// Result of catalog validation.
#[derive(Debug, Default)]
pub struct CatalogValidation {
    /// Entries absent from one of the five tables.
    pub missing: Vec<MissingEntry>,
    /// Track-block convention violations.
    pub track_warnings: Vec<TrackWarning>,
}

impl CatalogValidation {
    /// Returns `true` if there are no issues at all.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.missing.is_empty() && self.track_warnings.is_empty()
    }

    /// Returns `true` if there are errors (missing entries).
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.missing.is_empty()
    }
}
