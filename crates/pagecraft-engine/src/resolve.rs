//! # Zone Resolution
//!
//! Turns a [`Document`] into a tree: every block's declared zones are looked up in
//! the flat zone map by `<blockId>:<zoneName>` and resolved recursively, depth
//! first, in the order the registry declares them.
//!
//! Problems are recovered locally and reported, never raised:
//!
//! - an unknown block type makes that block (and its subtree) unresolvable
//! - a block that is already on the active path is a cycle and is cut off
//! - a block id seen earlier in the pass is a duplicate and is cut off
//! - a block nested deeper than the resolver's depth limit is cut off
//! - props that do not fit the block's fields are reported, the block still resolves
//! - zone map entries nothing consumed are dangling
//!
//! A pass is a pure function of the document and the registry, so re-running it on
//! every edit is safe. In [`ValidationMode::Strict`] any report rejects the result.

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::document::{BlockId, BlockInstance, Document, ZoneKey};
use crate::registry::Registry;
use crate::schema::validate_props;
use crate::value::{Props, merge_props};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidationMode {
    /// Skip and report broken parts of the document.
    #[default]
    Lenient,
    /// Reject the document if anything would be skipped.
    Strict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ReportKind {
    UnknownType,
    Cycle,
    DanglingZone,
    DuplicateId,
    InvalidProp,
    TooDeep,
}

impl fmt::Display for ReportKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::UnknownType => "unknown-type",
            Self::Cycle => "cycle",
            Self::DanglingZone => "dangling-zone",
            Self::DuplicateId => "duplicate-id",
            Self::InvalidProp => "invalid-prop",
            Self::TooDeep => "too-deep",
        })
    }
}

/// Something the resolver skipped.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolveReport {
    pub kind: ReportKind,
    pub block_id: BlockId,
    pub type_name: Option<String>,
    /// Set for dangling zones.
    pub zone: Option<ZoneKey>,
    /// Set for invalid props.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl fmt::Display for ResolveReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: block {}", self.kind, self.block_id)?;
        if let Some(type_name) = &self.type_name {
            write!(f, " ({type_name})")?;
        }
        if let Some(zone) = &self.zone {
            write!(f, " zone {zone}")?;
        }
        if let Some(detail) = &self.detail {
            write!(f, ": {detail}")?;
        }
        Ok(())
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ResolveError {
    #[error("Document rejected: {} problem(s){}", .0.len(), first_problem(.0))]
    Rejected(Vec<ResolveReport>),
}

fn first_problem(reports: &[ResolveReport]) -> String {
    reports
        .first()
        .map(|report| format!(", first: {report}"))
        .unwrap_or_default()
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedZone {
    pub name: String,
    pub children: Vec<ResolvedBlock>,
}

/// A block with merged props and its zones filled in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedNode {
    pub id: BlockId,
    pub type_name: String,
    pub props: Props,
    /// One entry per declared zone, in declaration order.
    pub zones: Vec<ResolvedZone>,
}

impl ResolvedNode {
    pub fn zone(&self, name: &str) -> Option<&[ResolvedBlock]> {
        self.zones
            .iter()
            .find(|zone| zone.name == name)
            .map(|zone| zone.children.as_slice())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum ResolvedBlock {
    Node(ResolvedNode),
    /// Kept in place so sibling order stays visible; renders as nothing.
    Unresolvable {
        id: BlockId,
        type_name: String,
        reason: ReportKind,
    },
}

impl ResolvedBlock {
    pub fn id(&self) -> &BlockId {
        match self {
            Self::Node(node) => &node.id,
            Self::Unresolvable { id, .. } => id,
        }
    }

    pub fn as_node(&self) -> Option<&ResolvedNode> {
        match self {
            Self::Node(node) => Some(node),
            Self::Unresolvable { .. } => None,
        }
    }
}

/// Resolved top-level content with the root's merged props.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedPage {
    pub root_props: Props,
    pub blocks: Vec<ResolvedBlock>,
    pub reports: Vec<ResolveReport>,
}

/// Result of resolving an arbitrary block sequence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedContent {
    pub blocks: Vec<ResolvedBlock>,
    pub reports: Vec<ResolveReport>,
}

/// Nesting depth at which a branch is cut off.
pub const DEFAULT_MAX_DEPTH: usize = 128;

pub struct Resolver<'r> {
    registry: &'r Registry,
    mode: ValidationMode,
    max_depth: usize,
}

impl<'r> Resolver<'r> {
    pub fn new(registry: &'r Registry) -> Self {
        Self {
            registry,
            mode: ValidationMode::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }

    pub fn with_mode(mut self, mode: ValidationMode) -> Self {
        self.mode = mode;
        self
    }

    /// Blocks nested more than `max_depth` zones deep are reported as
    /// [`ReportKind::TooDeep`] and skipped with their subtree. This also bounds
    /// the depth of the tree handed to the renderer.
    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn mode(&self) -> ValidationMode {
        self.mode
    }

    /// Resolve the document's top-level content and report unused zone entries.
    pub fn resolve(&self, document: &Document) -> Result<ResolvedPage, ResolveError> {
        let mut pass = Pass::new(self.registry, document, self.max_depth);
        let blocks = pass.resolve_sequence(&document.content);
        pass.report_dangling_zones();

        log::debug!(
            "resolved {} top-level blocks with {} report(s)",
            blocks.len(),
            pass.reports.len()
        );

        let reports = self.check(pass.reports)?;
        Ok(ResolvedPage {
            root_props: merge_props(&self.registry.root().default_props, &document.root.props),
            blocks,
            reports,
        })
    }

    /// Resolve `content` against `document`'s zone map.
    ///
    /// Only the given sequence is walked, so zones outside it are not reported as
    /// dangling.
    pub fn resolve_content(
        &self,
        document: &Document,
        content: &[BlockInstance],
    ) -> Result<ResolvedContent, ResolveError> {
        let mut pass = Pass::new(self.registry, document, self.max_depth);
        let blocks = pass.resolve_sequence(content);
        let reports = self.check(pass.reports)?;
        Ok(ResolvedContent { blocks, reports })
    }

    fn check(&self, reports: Vec<ResolveReport>) -> Result<Vec<ResolveReport>, ResolveError> {
        if self.mode == ValidationMode::Strict && !reports.is_empty() {
            return Err(ResolveError::Rejected(reports));
        }
        Ok(reports)
    }
}

/// State of one resolution run.
struct Pass<'a> {
    registry: &'a Registry,
    document: &'a Document,
    max_depth: usize,
    /// Ids of blocks whose zones are currently being resolved.
    on_path: HashSet<&'a str>,
    seen: HashSet<&'a str>,
    consumed: HashSet<&'a ZoneKey>,
    /// Owners whose zones are skipped along with them.
    skipped_owners: HashSet<&'a str>,
    reports: Vec<ResolveReport>,
}

impl<'a> Pass<'a> {
    fn new(registry: &'a Registry, document: &'a Document, max_depth: usize) -> Self {
        Self {
            registry,
            document,
            max_depth,
            on_path: HashSet::new(),
            seen: HashSet::new(),
            consumed: HashSet::new(),
            skipped_owners: HashSet::new(),
            reports: Vec::new(),
        }
    }

    fn resolve_sequence(&mut self, blocks: &'a [BlockInstance]) -> Vec<ResolvedBlock> {
        blocks.iter().map(|block| self.resolve_block(block)).collect()
    }

    fn resolve_block(&mut self, block: &'a BlockInstance) -> ResolvedBlock {
        let id = block.id.as_str();

        if self.on_path.contains(id) {
            return self.skip(block, ReportKind::Cycle);
        }
        if !self.seen.insert(id) {
            return self.skip(block, ReportKind::DuplicateId);
        }
        if self.on_path.len() >= self.max_depth {
            self.skipped_owners.insert(id);
            return self.skip(block, ReportKind::TooDeep);
        }
        let Some(descriptor) = self.registry.lookup(&block.block_type) else {
            self.skipped_owners.insert(id);
            return self.skip(block, ReportKind::UnknownType);
        };

        for violation in validate_props(&descriptor.fields, &block.props) {
            self.report(ResolveReport {
                kind: ReportKind::InvalidProp,
                block_id: block.id.clone(),
                type_name: Some(block.block_type.clone()),
                zone: None,
                detail: Some(violation.to_string()),
            });
        }

        self.on_path.insert(id);
        let mut zones = Vec::with_capacity(descriptor.zones.len());
        for name in &descriptor.zones {
            let key = ZoneKey::new(&block.id, name);
            let children = match self.document.zones.get_key_value(&key) {
                Some((key, sequence)) => {
                    self.consumed.insert(key);
                    self.resolve_sequence(sequence)
                }
                None => Vec::new(),
            };
            zones.push(ResolvedZone {
                name: name.clone(),
                children,
            });
        }
        self.on_path.remove(id);

        ResolvedBlock::Node(ResolvedNode {
            id: block.id.clone(),
            type_name: block.block_type.clone(),
            props: merge_props(&descriptor.default_props, &block.props),
            zones,
        })
    }

    fn skip(&mut self, block: &BlockInstance, kind: ReportKind) -> ResolvedBlock {
        self.report(ResolveReport {
            kind,
            block_id: block.id.clone(),
            type_name: Some(block.block_type.clone()),
            zone: None,
            detail: None,
        });
        ResolvedBlock::Unresolvable {
            id: block.id.clone(),
            type_name: block.block_type.clone(),
            reason: kind,
        }
    }

    /// Report zone entries that were never consumed.
    ///
    /// Entries owned by a skipped block, or nested anywhere below one, were
    /// skipped together with their owner and are not reported again.
    fn report_dangling_zones(&mut self) {
        let document = self.document;
        let unconsumed: Vec<&'a ZoneKey> = document
            .zones
            .keys()
            .filter(|key| !self.consumed.contains(key))
            .collect();

        let mut by_owner: HashMap<&'a str, Vec<&'a ZoneKey>> = HashMap::new();
        for &key in &unconsumed {
            if let Some(owner) = key.owner() {
                by_owner.entry(owner).or_default().push(key);
            }
        }

        let mut excused = self.skipped_owners.clone();
        let mut pending: Vec<&'a str> = excused.iter().copied().collect();
        while let Some(owner) = pending.pop() {
            for &key in by_owner.get(owner).into_iter().flatten() {
                for block in &document.zones[key] {
                    if excused.insert(block.id.as_str()) {
                        pending.push(block.id.as_str());
                    }
                }
            }
        }

        for key in unconsumed {
            let owner = key.owner();
            if owner.is_some_and(|owner| excused.contains(owner)) {
                continue;
            }
            let owner_id = owner.unwrap_or(key.as_str());
            let type_name = document
                .find_block(owner_id)
                .map(|block| block.block_type.clone());
            self.report(ResolveReport {
                kind: ReportKind::DanglingZone,
                block_id: BlockId::new(owner_id),
                type_name,
                zone: Some(key.clone()),
                detail: None,
            });
        }
    }

    fn report(&mut self, report: ResolveReport) {
        log::warn!("{report}");
        self.reports.push(report);
    }
}
