//! Universe compilation.
//!
//! Runs the whole pass over a declared universe:
//!
//! 1. Reject duplicate domain tags.
//! 2. Synthesize every domain, in declaration order.
//! 3. Resolve every transform request against a [`DomainIndex`].
//! 4. Reject cyclic transform chains.
//! 5. Diff every requested pair, optionally in parallel.
//!
//! The pass is fail-fast: the first error in declaration order aborts it and
//! no partial universe is returned. Parallel and sequential runs produce the
//! same universe.

use pig_diagnostic::{CompileError, DomainRole};
use pig_ir::{DomainDecl, Transform, TransformRequest, TypeDomain, TypeUniverse, UniverseDecl};
use pig_synth::synthesize_domain;
use rayon::prelude::*;
use rustc_hash::{FxHashMap, FxHashSet};

use crate::{check_acyclic, diff};

/// Options for a compilation pass.
#[derive(Clone, Debug)]
pub struct CompileOptions {
    /// Diff independent transform requests on a thread pool.
    pub parallel: bool,
    /// Worker thread count; `None` lets rayon decide.
    pub threads: Option<usize>,
}

impl Default for CompileOptions {
    fn default() -> Self {
        Self {
            parallel: true,
            threads: None,
        }
    }
}

impl CompileOptions {
    /// Options for a single-threaded pass.
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            threads: None,
        }
    }
}

/// Immutable lookup of synthesized domains by tag.
///
/// Passed explicitly to whatever needs to resolve domain tags, so diffing
/// stays reentrant and testable in isolation.
#[derive(Clone, Debug)]
pub struct DomainIndex<'a> {
    by_tag: FxHashMap<&'a str, &'a TypeDomain>,
}

impl<'a> DomainIndex<'a> {
    /// Index `domains` by tag. The first domain with a given tag wins;
    /// [`compile_universe`] rejects duplicate tags before indexing.
    pub fn new(domains: &'a [TypeDomain]) -> Self {
        let mut by_tag = FxHashMap::default();
        for domain in domains {
            by_tag.entry(domain.tag.as_str()).or_insert(domain);
        }
        Self { by_tag }
    }

    pub fn get(&self, tag: &str) -> Option<&'a TypeDomain> {
        self.by_tag.get(tag).copied()
    }

    /// Look up both domains of a transform request.
    pub fn resolve(
        &self,
        request: &TransformRequest,
    ) -> Result<(&'a TypeDomain, &'a TypeDomain), CompileError> {
        let lookup = |tag: &str, role| {
            self.get(tag).ok_or_else(|| CompileError::UnknownDomain {
                tag: tag.to_owned(),
                role,
            })
        };
        Ok((
            lookup(request.source.as_str(), DomainRole::Source)?,
            lookup(request.destination.as_str(), DomainRole::Destination)?,
        ))
    }

    /// Diff the domains named by `request`.
    pub fn diff(&self, request: &TransformRequest) -> Result<Transform, CompileError> {
        let (source, destination) = self.resolve(request)?;
        diff(source, destination)
    }
}

/// Compile a declared universe into its synthesized model.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(domains = decl.domains.len(), transforms = decl.transforms.len())
)]
pub fn compile_universe(
    decl: &UniverseDecl,
    options: &CompileOptions,
) -> Result<TypeUniverse, CompileError> {
    check_unique_domains(&decl.domains)?;

    let domains = decl
        .domains
        .iter()
        .map(synthesize_domain)
        .collect::<Result<Vec<_>, _>>()?;
    tracing::debug!("domain synthesis complete");

    let index = DomainIndex::new(&domains);
    let pairs = decl
        .transforms
        .iter()
        .map(|request| index.resolve(request))
        .collect::<Result<Vec<_>, _>>()?;
    check_acyclic(&decl.transforms)?;

    let transforms = diff_all(&pairs, options)?;
    tracing::debug!("transform diffing complete");

    Ok(TypeUniverse {
        domains,
        transforms,
    })
}

fn check_unique_domains(domains: &[DomainDecl]) -> Result<(), CompileError> {
    let mut seen = FxHashSet::default();
    for domain in domains {
        if !seen.insert(domain.tag.as_str()) {
            return Err(CompileError::DuplicateDomain {
                tag: domain.tag.clone(),
            });
        }
    }
    Ok(())
}

/// Diff every pair, keeping request order. The first failing request in
/// that order determines the error.
fn diff_all(
    pairs: &[(&TypeDomain, &TypeDomain)],
    options: &CompileOptions,
) -> Result<Vec<Transform>, CompileError> {
    if !options.parallel || pairs.len() < 2 {
        return pairs.iter().map(|(src, dst)| diff(src, dst)).collect();
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(threads) = options.threads {
        builder = builder.num_threads(threads);
    }

    // Scoped pool: torn down before returning, and free to borrow `pairs`.
    let results = builder
        .build_scoped(rayon::ThreadBuilder::run, |pool| {
            pool.install(|| {
                pairs
                    .par_iter()
                    .map(|(src, dst)| diff(src, dst))
                    .collect::<Vec<_>>()
            })
        })
        .unwrap_or_else(|e| {
            tracing::warn!("failed to create thread pool ({e}), diffing sequentially");
            pairs.iter().map(|(src, dst)| diff(src, dst)).collect()
        });

    results.into_iter().collect()
}
