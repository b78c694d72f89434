use std::collections::btree_map::Entry;
use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::capability::{Extractor, ImplementationLookup};
use crate::config::GeneratorConfig;
use crate::error::{Error, Result};
use crate::synth::{LanguageFeatures, LanguageVersion, Synthesizer};

use super::discovery::{CandidateDeclaration, Discovery};
use super::output::{file_name_hint, Diagnostic, GeneratedSource, GeneratorOutput, TextEncoding};

/// Result of running one candidate through the pipeline.
#[derive(Debug)]
enum Outcome {
    Skipped,
    Generated {
        type_name: String,
        source_path: PathBuf,
        source: GeneratedSource,
    },
    Failed(Diagnostic),
}

/// Discovery, extraction and synthesis for one compilation pass.
#[derive(Debug, Clone)]
pub struct Generator {
    config: GeneratorConfig,
    discovery: Discovery,
    extractor: Extractor,
    synthesizer: Synthesizer,
}

impl Default for Generator {
    fn default() -> Self {
        Self::from_valid_config(GeneratorConfig::default())
    }
}

impl Generator {
    /// Build a generator after validating `config`.
    pub fn new(config: GeneratorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_valid_config(config))
    }

    fn from_valid_config(config: GeneratorConfig) -> Self {
        let templates = config.templates();
        Self {
            discovery: Discovery::new(&templates),
            extractor: Extractor::new(&config),
            synthesizer: Synthesizer::new(&config),
            config,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    pub fn discovery(&self) -> &Discovery {
        &self.discovery
    }

    pub fn extractor(&self) -> &Extractor {
        &self.extractor
    }

    pub fn synthesizer(&self) -> &Synthesizer {
        &self.synthesizer
    }

    /// The marker attribute and capability interface definitions, added
    /// once before any candidate is processed.
    pub fn post_initialization_sources(&self) -> Vec<GeneratedSource> {
        let templates = self.synthesizer.templates();
        vec![
            GeneratedSource::new(
                templates.marker_attribute_hint(),
                templates.marker_attribute_source(),
                TextEncoding::Utf8,
            ),
            GeneratedSource::new(
                templates.capability_interface_hint(),
                templates.capability_interface_source(),
                TextEncoding::Utf8,
            ),
        ]
    }

    /// Produce the source for a single declaration.
    ///
    /// `Ok(None)` when the declaration lacks the resolved marker attribute or
    /// the type is unsupported.
    pub fn generate<L>(
        &self,
        candidate: &CandidateDeclaration,
        features: LanguageFeatures,
        lookup: &L,
    ) -> Result<Option<GeneratedSource>>
    where
        L: ImplementationLookup + ?Sized,
    {
        let descriptor = &candidate.descriptor;
        if !self.discovery.is_marked(descriptor) {
            tracing::trace!(type_name = descriptor.full_name(), "marker attribute did not resolve");
            return Ok(None);
        }
        let Some(model) = self.extractor.extract(descriptor, lookup) else {
            return Ok(None);
        };
        let text = self.synthesizer.render(&model, features)?;
        let hint = file_name_hint(&candidate.source_path, descriptor.class_name(), &self.config.file_suffix);
        Ok(Some(GeneratedSource::new(hint, text, candidate.encoding)))
    }

    /// Run every discovered declaration, one after another.
    pub fn execute<L>(
        &self,
        declarations: &[CandidateDeclaration],
        version: LanguageVersion,
        lookup: &L,
    ) -> GeneratorOutput
    where
        L: ImplementationLookup + ?Sized,
    {
        let features = LanguageFeatures::for_version(version);
        let outcomes = self
            .discovery
            .discover(declarations)
            .into_iter()
            .map(|candidate| self.process(candidate, features, lookup))
            .collect();
        self.collect(outcomes)
    }

    /// Same output as [`execute`](Self::execute), with candidates processed
    /// on the rayon pool.
    #[cfg(feature = "parallel")]
    pub fn execute_parallel<L>(
        &self,
        declarations: &[CandidateDeclaration],
        version: LanguageVersion,
        lookup: &L,
    ) -> GeneratorOutput
    where
        L: ImplementationLookup + Sync + ?Sized,
    {
        use rayon::prelude::*;

        let features = LanguageFeatures::for_version(version);
        let outcomes = self
            .discovery
            .discover(declarations)
            .into_par_iter()
            .map(|candidate| self.process(candidate, features, lookup))
            .collect();
        self.collect(outcomes)
    }

    fn process<L>(&self, candidate: &CandidateDeclaration, features: LanguageFeatures, lookup: &L) -> Outcome
    where
        L: ImplementationLookup + ?Sized,
    {
        match self.generate(candidate, features, lookup) {
            Ok(Some(source)) => Outcome::Generated {
                type_name: candidate.descriptor.full_name().to_owned(),
                source_path: candidate.source_path.clone(),
                source,
            },
            Ok(None) => Outcome::Skipped,
            Err(error) => Outcome::Failed(Diagnostic {
                type_name: candidate.descriptor.full_name().to_owned(),
                source_path: candidate.source_path.clone(),
                error,
            }),
        }
    }

    /// Keep candidate order; the first source per hint name wins.
    ///
    /// A later source for the same type is a re-processed duplicate and is
    /// dropped quietly. A later source for a different type is reported.
    fn collect(&self, outcomes: Vec<Outcome>) -> GeneratorOutput {
        let mut owners: BTreeMap<String, String> = BTreeMap::new();
        let mut output = GeneratorOutput::default();
        for outcome in outcomes {
            match outcome {
                Outcome::Skipped => {}
                Outcome::Generated {
                    type_name,
                    source_path,
                    source,
                } => match owners.entry(source.hint_name().to_owned()) {
                    Entry::Vacant(slot) => {
                        tracing::debug!(hint = source.hint_name(), digest = source.digest(), "generated source");
                        slot.insert(type_name);
                        output.sources.push(source);
                    }
                    Entry::Occupied(owner) if *owner.get() == type_name => {
                        tracing::debug!(hint = source.hint_name(), type_name = type_name.as_str(), "dropping duplicate source");
                    }
                    Entry::Occupied(owner) => {
                        let diagnostic = Diagnostic {
                            error: Error::DuplicateHintName {
                                hint: owner.key().clone(),
                                first: owner.get().clone(),
                                second: type_name.clone(),
                            },
                            type_name,
                            source_path,
                        };
                        tracing::warn!(%diagnostic, "generated file name collision");
                        output.diagnostics.push(diagnostic);
                    }
                },
                Outcome::Failed(diagnostic) => {
                    tracing::warn!(%diagnostic, "capability source generation failed");
                    output.diagnostics.push(diagnostic);
                }
            }
        }
        output
    }
}
